//! Outbound notifications from the turn state machine to a presentation layer.

use serde::{Deserialize, Serialize};
use strictly_reversi_rules::{Board, Coordinate, Disk, Game};
use tokio::sync::mpsc;
use tracing::{debug, trace};

/// One unit of board-redraw work.
///
/// `disk: None` clears the cell (used when redrawing the whole board).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct DiskPlacement {
    /// Disk to show, or `None` for an empty cell.
    pub disk: Option<Disk>,
    /// Cell to redraw.
    pub coordinate: Coordinate,
    /// Whether the presentation should animate this cell.
    pub animated: bool,
}

impl DiskPlacement {
    /// Non-animated placements covering every cell of `board`, row-major.
    pub fn whole_board(board: &Board) -> Vec<Self> {
        Board::coordinates()
            .map(|at| Self::new(board.disk_at(at), at, false))
            .collect()
    }

    /// Animated placements for a move: the placed cell, then each flip in order.
    pub fn for_move(disk: Disk, placed: Coordinate, flipped: &[Coordinate]) -> Vec<Self> {
        std::iter::once(placed)
            .chain(flipped.iter().copied())
            .map(|at| Self::new(Some(disk), at, true))
            .collect()
    }
}

/// Messages sent from the turn state machine to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// A complete game snapshot to display.
    GameUpdated(Game),
    /// Redraw one cell, then report back with `finish_one_cell_update`.
    DiskPlaced(DiskPlacement),
    /// Which sides are "thinking", indexed by [`Disk::index`].
    Thinking([bool; 2]),
    /// The side to move must pass; acknowledge with `accept_pass`.
    PassAlert,
    /// The scripted mover picked a cell; feed it back with `input_by_scripted`.
    MoveDecided(Coordinate),
}

/// Fire-and-forget sender for [`Notification`]s.
///
/// A closed receiver is not an error: the presentation may already be gone.
#[derive(Debug, Clone)]
pub struct StateOutput {
    tx: mpsc::UnboundedSender<Notification>,
}

impl StateOutput {
    /// Wraps a sender.
    pub fn new(tx: mpsc::UnboundedSender<Notification>) -> Self {
        Self { tx }
    }

    /// Creates an output and the receiver the presentation reads from.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    /// Publishes a game snapshot.
    pub fn publish_game(&self, game: &Game) {
        self.send(Notification::GameUpdated(game.clone()));
    }

    /// Asks the presentation to redraw one cell.
    pub fn place_disk(&self, placement: DiskPlacement) {
        self.send(Notification::DiskPlaced(placement));
    }

    /// Publishes the per-side thinking indicator.
    pub fn thinking(&self, sides: [bool; 2]) {
        self.send(Notification::Thinking(sides));
    }

    /// Clears the thinking indicator for both sides.
    pub fn clear_thinking(&self) {
        self.thinking([false; 2]);
    }

    /// Raises the pass alert.
    pub fn pass_alert(&self) {
        self.send(Notification::PassAlert);
    }

    /// Reports the scripted mover's decision.
    pub fn move_decided(&self, coordinate: Coordinate) {
        self.send(Notification::MoveDecided(coordinate));
    }

    fn send(&self, notification: Notification) {
        trace!(?notification, "Sending notification");
        if self.tx.send(notification).is_err() {
            debug!("Notification receiver closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_placements_start_with_placed_cell() {
        let placed = Coordinate::new(3, 0);
        let flipped = [Coordinate::new(2, 0), Coordinate::new(1, 0)];
        let placements = DiskPlacement::for_move(Disk::Light, placed, &flipped);

        let cells: Vec<_> = placements.iter().map(|p| p.coordinate).collect();
        assert_eq!(cells, vec![placed, flipped[0], flipped[1]]);
        assert!(placements.iter().all(|p| p.animated && p.disk == Some(Disk::Light)));
    }

    #[test]
    fn test_whole_board_covers_every_cell() {
        let game = Game::new();
        let placements = DiskPlacement::whole_board(game.board());

        assert_eq!(placements.len(), 64);
        assert_eq!(placements[0].coordinate, Coordinate::new(0, 0));
        assert_eq!(placements[1].coordinate, Coordinate::new(1, 0));
        assert!(placements.iter().all(|p| !p.animated));
        assert_eq!(placements.iter().filter(|p| p.disk.is_some()).count(), 4);
    }

    #[test]
    fn test_closed_receiver_is_ignored() {
        let (output, rx) = StateOutput::channel();
        drop(rx);
        output.pass_alert();
    }
}
