//! Line-oriented text format for saved games.
//!
//! ```text
//! x00        turn symbol (x, o or -) then one control digit per side
//! --------   eight rows of eight cells, top row first
//! ---ox---
//! ...
//! ```
//!
//! Every line, the last included, ends with `\n`.

use crate::board::{Board, HEIGHT, WIDTH};
use crate::coordinate::Coordinate;
use crate::game::Game;
use crate::types::{Disk, PlayerControl, symbol_of};
use tracing::{instrument, warn};

/// Reasons a saved game cannot be read.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    /// Fewer than the header plus eight rows.
    #[display("expected 9 lines, found {}", _0)]
    TooFewLines(#[error(not(source))] usize),

    /// The header is not a turn symbol followed by two control digits.
    #[display("malformed header line {:?}", _0)]
    MalformedHeader(#[error(not(source))] String),

    /// A row does not hold exactly eight cells.
    #[display("row {} has {} cells, expected 8", row, width)]
    BadRowWidth {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found.
        width: usize,
    },

    /// More rows than the board has.
    #[display("expected 8 rows, found {}", _0)]
    BadRowCount(#[error(not(source))] usize),
}

/// Renders a game in the save format.
#[instrument(skip(game))]
pub fn encode(game: &Game) -> String {
    let mut output = String::with_capacity((WIDTH + 1) * (HEIGHT + 1));

    output.push(symbol_of(game.turn()));
    for side in Disk::SIDES {
        output.push(game.player_control(side).digit());
    }
    output.push('\n');

    output.push_str(&game.board().to_string());
    output
}

/// Parses a game from the save format.
///
/// Empty lines are skipped. Body characters other than `x` and `o` are
/// read as empty cells.
///
/// # Errors
///
/// Returns [`ParseError`] when the line count, the header or a row
/// width is wrong.
#[instrument(skip(input), fields(len = input.len()))]
pub fn decode(input: &str) -> Result<Game, ParseError> {
    let lines: Vec<&str> = input.split('\n').filter(|line| !line.is_empty()).collect();

    let Some((header, rows)) = lines.split_first() else {
        return Err(ParseError::TooFewLines(0));
    };
    if rows.len() < HEIGHT {
        return Err(ParseError::TooFewLines(lines.len()));
    }
    if rows.len() > HEIGHT {
        return Err(ParseError::BadRowCount(rows.len()));
    }

    let (turn, player_controls) = decode_header(header)?;

    let mut board = Board::new();
    for (y, row) in rows.iter().enumerate() {
        let width = row.chars().count();
        if width != WIDTH {
            return Err(ParseError::BadRowWidth { row: y, width });
        }
        for (x, symbol) in row.chars().enumerate() {
            if !matches!(symbol, 'x' | 'o' | '-') {
                warn!(x, y, %symbol, "Unknown cell symbol, reading as empty");
            }
            board.set_disk(Disk::from_symbol(symbol), Coordinate::new(x, y));
        }
    }

    Ok(Game::from_parts(turn, player_controls, board))
}

fn decode_header(header: &str) -> Result<(Option<Disk>, [PlayerControl; 2]), ParseError> {
    let malformed = || ParseError::MalformedHeader(header.to_string());

    let symbols: Vec<char> = header.chars().collect();
    let [turn, dark, light] = symbols.as_slice() else {
        return Err(malformed());
    };

    let turn = match turn {
        '-' => None,
        other => Some(Disk::from_symbol(*other).ok_or_else(malformed)?),
    };
    let dark = PlayerControl::from_digit(*dark).ok_or_else(malformed)?;
    let light = PlayerControl::from_digit(*light).ok_or_else(malformed)?;

    Ok((turn, [dark, light]))
}
