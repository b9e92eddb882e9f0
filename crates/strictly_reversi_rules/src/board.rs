//! The 8x8 Reversi board and its placement rules.

use crate::coordinate::{Coordinate, Direction};
use crate::types::{Cell, Disk, symbol_of};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Number of columns.
pub const WIDTH: usize = 8;
/// Number of rows.
pub const HEIGHT: usize = 8;

/// Fixed 8x8 grid of cells, addressed by (x, y).
///
/// Pure data: the board knows nothing about turns or players.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Rows top to bottom, each holding cells left to right.
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `at` lies on the board.
    pub fn contains(&self, at: Coordinate) -> bool {
        at.x < WIDTH && at.y < HEIGHT
    }

    /// Every coordinate, row-major (y outer, x inner).
    pub fn coordinates() -> impl Iterator<Item = Coordinate> {
        (0..HEIGHT).flat_map(|y| (0..WIDTH).map(move |x| Coordinate::new(x, y)))
    }

    /// Overwrites the cell at `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at` is outside the board.
    pub fn set_disk(&mut self, disk: Option<Disk>, at: Coordinate) {
        assert!(
            self.contains(at),
            "{at} is outside the board (x: 0..{WIDTH}, y: 0..{HEIGHT})"
        );
        self.cells[at.y][at.x] = Cell { disk };
    }

    /// Returns the disk at `at`, or `None` when empty or off the board.
    pub fn disk_at(&self, at: Coordinate) -> Option<Disk> {
        self.cell_at(at).and_then(|cell| cell.disk)
    }

    fn cell_at(&self, at: Coordinate) -> Option<&Cell> {
        self.cells.get(at.y)?.get(at.x)
    }

    /// Number of disks of the given color.
    pub fn count_disks(&self, of: Disk) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.disk == Some(of))
            .count()
    }

    /// Disk counts indexed by [`Disk::index`].
    pub fn disk_counts(&self) -> [usize; 2] {
        Disk::SIDES.map(|side| self.count_disks(side))
    }

    /// The side holding more disks, or `None` on a tie.
    pub fn side_with_more_disks(&self) -> Option<Disk> {
        let [dark, light] = self.disk_counts();
        match dark.cmp(&light) {
            std::cmp::Ordering::Greater => Some(Disk::Dark),
            std::cmp::Ordering::Less => Some(Disk::Light),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Coordinates that would be flipped by placing `disk` at `at`.
    ///
    /// Directions are scanned upper-left, up, upper-right, right,
    /// lower-right, down, lower-left, left; within a direction the
    /// coordinates run from nearest to farthest. Empty when the target
    /// is occupied or off the board.
    pub fn flipped_coordinates(&self, placing: Disk, at: Coordinate) -> Vec<Coordinate> {
        let mut flipped = Vec::new();

        if !self.contains(at) || self.disk_at(at).is_some() {
            return flipped;
        }

        for direction in Direction::iter() {
            let mut line = Vec::new();
            let mut cursor = at;

            while let Some(next) = cursor.step(direction).filter(|c| self.contains(*c)) {
                match self.disk_at(next) {
                    Some(disk) if disk == placing => {
                        flipped.append(&mut line);
                        break;
                    }
                    Some(_) => line.push(next),
                    None => break,
                }
                cursor = next;
            }
        }

        flipped
    }

    /// Returns true if placing `disk` at `at` flips at least one disk.
    pub fn can_place(&self, disk: Disk, at: Coordinate) -> bool {
        !self.flipped_coordinates(disk, at).is_empty()
    }

    /// Legal placements for `disk`, row-major (y outer, x inner).
    #[instrument(skip(self))]
    pub fn valid_moves(&self, disk: Disk) -> Vec<Coordinate> {
        Self::coordinates()
            .filter(|at| self.can_place(disk, *at))
            .collect()
    }

    /// Returns true if `disk` has any legal placement.
    pub fn can_place_any_disks(&self, by: Disk) -> bool {
        Self::coordinates().any(|at| self.can_place(by, at))
    }
}

impl std::fmt::Display for Board {
    /// Eight lines of `x`, `o` and `-`, top row first.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|cell| symbol_of(cell.disk)).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from_rows(rows: [&str; 8]) -> Board {
        let mut board = Board::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, symbol) in row.chars().enumerate() {
                board.set_disk(Disk::from_symbol(symbol), Coordinate::new(x, y));
            }
        }
        board
    }

    #[test]
    fn test_set_disk_at_first_and_last_cells() {
        let mut board = Board::new();
        board.set_disk(Some(Disk::Light), Coordinate::new(0, 0));
        board.set_disk(Some(Disk::Dark), Coordinate::new(7, 7));

        assert_eq!(board.disk_at(Coordinate::new(0, 0)), Some(Disk::Light));
        assert_eq!(board.disk_at(Coordinate::new(7, 7)), Some(Disk::Dark));
        assert_eq!(board.disk_counts(), [1, 1]);
    }

    #[test]
    #[should_panic(expected = "outside the board")]
    fn test_set_disk_out_of_range_panics() {
        Board::new().set_disk(Some(Disk::Dark), Coordinate::new(8, 0));
    }

    #[test]
    fn test_disk_at_out_of_range_is_none() {
        assert_eq!(Board::new().disk_at(Coordinate::new(0, 8)), None);
    }

    #[test]
    fn test_side_with_more_disks() {
        let mut board = Board::new();
        assert_eq!(board.side_with_more_disks(), None);
        board.set_disk(Some(Disk::Dark), Coordinate::new(0, 0));
        assert_eq!(board.side_with_more_disks(), Some(Disk::Dark));
        board.set_disk(Some(Disk::Light), Coordinate::new(1, 0));
        board.set_disk(Some(Disk::Light), Coordinate::new(2, 0));
        assert_eq!(board.side_with_more_disks(), Some(Disk::Light));
    }

    #[test]
    fn test_each_direction_around_a_surrounded_disk() {
        // Dark at (2,2) ringed by Light; placing Dark on the outer ring
        // flips exactly the one Light disk between.
        let board = board_from_rows([
            "--------", "-ooo----", "-oxo----", "-ooo----", "--------", "--------", "--------",
            "--------",
        ]);

        let cases = [
            ((4, 4), (3, 3)),
            ((2, 4), (2, 3)),
            ((0, 4), (1, 3)),
            ((0, 2), (1, 2)),
            ((0, 0), (1, 1)),
            ((2, 0), (2, 1)),
            ((4, 0), (3, 1)),
            ((4, 2), (3, 2)),
        ];
        for (target, flipped) in cases {
            assert_eq!(
                board.flipped_coordinates(Disk::Dark, target.into()),
                vec![Coordinate::from(flipped)],
                "placing at {target:?}"
            );
        }
    }

    #[test]
    fn test_out_of_range_target_flips_nothing() {
        let board = board_from_rows([
            "ox------", "--------", "--------", "--------", "--------", "--------", "--------",
            "--------",
        ]);
        assert!(board.flipped_coordinates(Disk::Dark, Coordinate::new(8, 0)).is_empty());
    }

    #[test]
    fn test_display_matches_save_symbols() {
        let mut board = Board::new();
        board.set_disk(Some(Disk::Dark), Coordinate::new(0, 0));
        board.set_disk(Some(Disk::Light), Coordinate::new(7, 0));
        let text = board.to_string();
        assert_eq!(text.lines().next(), Some("x------o"));
        assert_eq!(text.lines().count(), 8);
    }
}
