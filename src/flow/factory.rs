//! Picks the state that fits a game.

use super::finished::GameFinished;
use super::pass_accept::PassAcceptWaiting;
use super::scripted_input::ScriptedInputWaiting;
use super::state::TurnState;
use super::user_input::UserInputWaiting;
use strictly_reversi_rules::{Game, PlayerControl};
use tracing::{debug, instrument, warn};

/// Selects the state for `game` after a completed action.
///
/// Terminal games finish, a due pass waits for acknowledgement, otherwise
/// the mover's control decides between user and scripted input.
#[instrument(skip(game), fields(turn = ?game.turn()))]
pub fn make_state(game: Game) -> TurnState {
    select(game, true)
}

/// Like [`make_state`], for a game that was only loaded and redrawn.
///
/// Acknowledging a pass reached this way does not save.
#[instrument(skip(game), fields(turn = ?game.turn()))]
pub fn make_restored_state(game: Game) -> TurnState {
    select(game, false)
}

fn select(mut game: Game, persist_pass: bool) -> TurnState {
    if game.is_stalled() {
        warn!("Neither side can move but a turn is set, finishing the game");
        game.set_turn(None);
    }

    let state: TurnState = if game.status().is_over() {
        GameFinished::new(game).into()
    } else if game.needs_pass() {
        PassAcceptWaiting::new(game, persist_pass).into()
    } else {
        match game.control_to_move() {
            Some(PlayerControl::Manual) => UserInputWaiting::new(game).into(),
            Some(PlayerControl::Scripted) => ScriptedInputWaiting::new(game).into(),
            None => GameFinished::new(game).into(),
        }
    };

    debug!(state = %state.kind(), "State selected");
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::StateKind;
    use strictly_reversi_rules::{Board, Coordinate, Disk};

    fn with_turn(turn: Option<Disk>, board: Board) -> Game {
        Game::from_parts(turn, [PlayerControl::Manual, PlayerControl::Scripted], board)
    }

    #[test]
    fn test_manual_mover_waits_for_user() {
        assert_eq!(make_state(Game::new()).kind(), StateKind::UserInputWaiting);
    }

    #[test]
    fn test_scripted_mover_waits_for_script() {
        let game = with_turn(Some(Disk::Light), Game::new().board().clone());
        assert_eq!(make_state(game).kind(), StateKind::ScriptedInputWaiting);
    }

    #[test]
    fn test_stuck_mover_must_pass() {
        // Light at (0,0) has no move; Dark can play (2,0).
        let mut board = Board::new();
        board.set_disk(Some(Disk::Dark), Coordinate::new(0, 0));
        board.set_disk(Some(Disk::Light), Coordinate::new(1, 0));
        let game = with_turn(Some(Disk::Light), board);
        assert_eq!(make_state(game).kind(), StateKind::PassAcceptWaiting);
    }

    #[test]
    fn test_finished_game_finishes() {
        let game = with_turn(None, Board::new());
        assert_eq!(make_state(game).kind(), StateKind::GameFinished);
    }

    #[test]
    fn test_stalled_game_is_normalized() {
        let mut board = Board::new();
        board.set_disk(Some(Disk::Dark), Coordinate::new(0, 0));
        let state = make_restored_state(with_turn(Some(Disk::Dark), board));
        assert_eq!(state.kind(), StateKind::GameFinished);
        assert_eq!(state.game().turn(), None);
    }
}
