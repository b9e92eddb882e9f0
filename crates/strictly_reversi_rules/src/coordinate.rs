//! Board coordinates and scan directions.

use serde::{Deserialize, Serialize};

/// A cell address, 0-based, `x` is the column and `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl Coordinate {
    /// Creates a coordinate.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Steps one cell in `direction`, or `None` when that would go below zero.
    ///
    /// The upper edge is not checked here; the board decides what is in range.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The eight compass directions, declared in flip-scan order.
///
/// Flip results are concatenated in this order, and the redraw queue
/// depends on it, so the declaration order must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Direction {
    /// Toward (x - 1, y - 1).
    UpperLeft,
    /// Toward (x, y - 1).
    Up,
    /// Toward (x + 1, y - 1).
    UpperRight,
    /// Toward (x + 1, y).
    Right,
    /// Toward (x + 1, y + 1).
    LowerRight,
    /// Toward (x, y + 1).
    Down,
    /// Toward (x - 1, y + 1).
    LowerLeft,
    /// Toward (x - 1, y).
    Left,
}

impl Direction {
    /// `(dx, dy)` for one step in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::UpperLeft => (-1, -1),
            Direction::Up => (0, -1),
            Direction::UpperRight => (1, -1),
            Direction::Right => (1, 0),
            Direction::LowerRight => (1, 1),
            Direction::Down => (0, 1),
            Direction::LowerLeft => (-1, 1),
            Direction::Left => (-1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_step_stops_at_zero() {
        assert_eq!(Coordinate::new(0, 3).step(Direction::Left), None);
        assert_eq!(Coordinate::new(3, 0).step(Direction::UpperRight), None);
        assert_eq!(
            Coordinate::new(3, 3).step(Direction::LowerLeft),
            Some(Coordinate::new(2, 4))
        );
    }

    #[test]
    fn test_directions_go_clockwise_from_upper_left() {
        let deltas: Vec<_> = Direction::iter().map(Direction::delta).collect();
        assert_eq!(
            deltas,
            vec![(-1, -1), (0, -1), (1, -1), (1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0)]
        );
    }
}
