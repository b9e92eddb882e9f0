//! Game state: a board plus whose turn it is and who controls each side.

use crate::board::Board;
use crate::coordinate::Coordinate;
use crate::types::{Disk, GameStatus, PlayerControl};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A placement was attempted where it flips nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{disk} cannot be placed at {coordinate}")]
pub struct DiskPlacementError {
    /// The disk that was being placed.
    pub disk: Disk,
    /// Where it was being placed.
    pub coordinate: Coordinate,
}

/// Complete game state.
///
/// `turn` is `None` once neither side can move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    turn: Option<Disk>,
    player_controls: [PlayerControl; 2],
    board: Board,
}

impl Game {
    /// Creates a new game: the standard opening, Dark to move, both sides Manual.
    #[instrument]
    pub fn new() -> Self {
        let mut board = Board::new();
        board.set_disk(Some(Disk::Light), Coordinate::new(3, 3));
        board.set_disk(Some(Disk::Dark), Coordinate::new(4, 3));
        board.set_disk(Some(Disk::Dark), Coordinate::new(3, 4));
        board.set_disk(Some(Disk::Light), Coordinate::new(4, 4));

        Self {
            turn: Some(Disk::Dark),
            player_controls: [PlayerControl::Manual; 2],
            board,
        }
    }

    /// Assembles a game from its parts without checking consistency.
    pub fn from_parts(
        turn: Option<Disk>,
        player_controls: [PlayerControl; 2],
        board: Board,
    ) -> Self {
        Self {
            turn,
            player_controls,
            board,
        }
    }

    /// Side to move, `None` once the game is over.
    pub fn turn(&self) -> Option<Disk> {
        self.turn
    }

    /// Sets the side to move.
    pub fn set_turn(&mut self, turn: Option<Disk>) {
        self.turn = turn;
    }

    /// Controls for both sides, indexed by [`Disk::index`].
    pub fn player_controls(&self) -> [PlayerControl; 2] {
        self.player_controls
    }

    /// Control mode of one side.
    pub fn player_control(&self, side: Disk) -> PlayerControl {
        self.player_controls[side.index()]
    }

    /// Changes the control mode of one side.
    pub fn set_player_control(&mut self, side: Disk, control: PlayerControl) {
        self.player_controls[side.index()] = control;
    }

    /// Control of the side to move, if any.
    pub fn control_to_move(&self) -> Option<PlayerControl> {
        self.turn.map(|side| self.player_control(side))
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access to the board.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Derived game status.
    pub fn status(&self) -> GameStatus {
        match self.turn {
            Some(side) => GameStatus::Move(side),
            None => match self.board.side_with_more_disks() {
                Some(winner) => GameStatus::Won(winner),
                None => GameStatus::Draw,
            },
        }
    }

    /// Returns true when the side to move has no placement but the opponent does.
    pub fn needs_pass(&self) -> bool {
        match self.turn {
            Some(side) => {
                !self.board.can_place_any_disks(side)
                    && self.board.can_place_any_disks(side.flipped())
            }
            None => false,
        }
    }

    /// Returns true when a turn is set but neither side can move.
    ///
    /// Only reachable from a hand-edited or stale save; play always
    /// clears the turn in this situation.
    pub fn is_stalled(&self) -> bool {
        match self.turn {
            Some(side) => {
                !self.board.can_place_any_disks(side)
                    && !self.board.can_place_any_disks(side.flipped())
            }
            None => false,
        }
    }

    /// Places `disk` at `at` and flips the enclosed disks.
    ///
    /// Returns the flipped coordinates in scan order. Does not touch `turn`.
    ///
    /// # Errors
    ///
    /// Returns [`DiskPlacementError`] when the placement flips nothing.
    #[instrument(skip(self))]
    pub fn place_disk(
        &mut self,
        disk: Disk,
        at: Coordinate,
    ) -> Result<Vec<Coordinate>, DiskPlacementError> {
        let flipped = self.board.flipped_coordinates(disk, at);
        if flipped.is_empty() {
            return Err(DiskPlacementError { disk, coordinate: at });
        }

        self.board.set_disk(Some(disk), at);
        for coordinate in &flipped {
            self.board.set_disk(Some(disk), *coordinate);
        }

        debug!(flipped = flipped.len(), "Disk placed");
        Ok(flipped)
    }

    /// Hands the turn to the opponent after a completed move.
    ///
    /// When neither side can move the turn becomes `None`. When only the
    /// opponent is stuck the turn still moves to them; [`Game::needs_pass`]
    /// reports that a pass is due.
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub fn update_turn_after_move(&mut self) {
        let Some(side) = self.turn else {
            return;
        };

        let next = side.flipped();
        if !self.board.can_place_any_disks(next) && !self.board.can_place_any_disks(side) {
            debug!("Neither side can move, game over");
            self.turn = None;
        } else {
            self.turn = Some(next);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_opening() {
        let game = Game::new();
        assert_eq!(game.turn(), Some(Disk::Dark));
        assert_eq!(game.player_controls(), [PlayerControl::Manual; 2]);
        assert_eq!(game.board().disk_counts(), [2, 2]);
        assert_eq!(game.board().disk_at(Coordinate::new(3, 3)), Some(Disk::Light));
        assert_eq!(game.board().disk_at(Coordinate::new(4, 3)), Some(Disk::Dark));
    }

    #[test]
    fn test_place_disk_rejects_non_flipping_target() {
        let mut game = Game::new();
        let err = game.place_disk(Disk::Dark, Coordinate::new(0, 0)).unwrap_err();
        assert_eq!(err.coordinate, Coordinate::new(0, 0));
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_place_disk_flips_and_keeps_turn() {
        let mut game = Game::new();
        let flipped = game.place_disk(Disk::Dark, Coordinate::new(3, 2)).unwrap();
        assert_eq!(flipped, vec![Coordinate::new(3, 3)]);
        assert_eq!(game.board().disk_counts(), [4, 1]);
        assert_eq!(game.turn(), Some(Disk::Dark));
    }

    #[test]
    fn test_turn_moves_to_opponent() {
        let mut game = Game::new();
        game.place_disk(Disk::Dark, Coordinate::new(3, 2)).unwrap();
        game.update_turn_after_move();
        assert_eq!(game.status(), GameStatus::Move(Disk::Light));
        assert!(!game.needs_pass());
    }

    #[test]
    fn test_finished_game_ignores_turn_update() {
        let mut game = Game::from_parts(None, [PlayerControl::Manual; 2], Board::new());
        game.update_turn_after_move();
        assert_eq!(game.turn(), None);
        assert_eq!(game.status(), GameStatus::Draw);
    }
}
