//! Keyboard mapping.

use crossterm::event::KeyCode;
use strictly_reversi::{Coordinate, Disk, HEIGHT, WIDTH};

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move the cursor.
    MoveCursor(KeyCode),
    /// Place a disk at the cursor.
    Place,
    /// Acknowledge the pass alert.
    AcceptPass,
    /// Ask for a reset confirmation.
    RequestReset,
    /// Reset confirmed.
    ConfirmReset,
    /// Reset declined.
    CancelReset,
    /// Toggle Manual/Scripted for a side.
    ToggleControl(Disk),
    /// Cut the running animation short.
    SkipAnimation,
    /// Leave the program.
    Quit,
}

/// Moves the cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Coordinate, key: KeyCode) -> Coordinate {
    let Coordinate { x, y } = cursor;
    match key {
        KeyCode::Left => Coordinate::new(x.saturating_sub(1), y),
        KeyCode::Right => Coordinate::new((x + 1).min(WIDTH - 1), y),
        KeyCode::Up => Coordinate::new(x, y.saturating_sub(1)),
        KeyCode::Down => Coordinate::new(x, (y + 1).min(HEIGHT - 1)),
        _ => cursor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves() {
        let at = Coordinate::new(3, 3);
        assert_eq!(move_cursor(at, KeyCode::Left), Coordinate::new(2, 3));
        assert_eq!(move_cursor(at, KeyCode::Down), Coordinate::new(3, 4));
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Coordinate::new(0, 0), KeyCode::Up), Coordinate::new(0, 0));
        assert_eq!(move_cursor(Coordinate::new(7, 7), KeyCode::Right), Coordinate::new(7, 7));
    }
}
