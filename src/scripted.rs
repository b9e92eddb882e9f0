//! Move choice for scripted sides.

use rand::seq::SliceRandom;
use strictly_reversi_rules::{Board, Coordinate, Disk};
use tracing::{debug, instrument};

/// Picks a legal move for `side` uniformly at random.
///
/// Returns `None` when `side` has nowhere to place.
#[instrument(skip(board))]
pub fn pick_move(board: &Board, side: Disk) -> Option<Coordinate> {
    let moves = board.valid_moves(side);
    let choice = moves.choose(&mut rand::thread_rng()).copied();
    debug!(candidates = moves.len(), ?choice, "Scripted move picked");
    choice
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_reversi_rules::Game;

    #[test]
    fn test_pick_is_always_legal() {
        let game = Game::new();
        for _ in 0..32 {
            let at = pick_move(game.board(), Disk::Dark).unwrap();
            assert!(game.board().can_place(Disk::Dark, at));
        }
    }

    #[test]
    fn test_no_moves_yields_none() {
        assert_eq!(pick_move(&Board::new(), Disk::Light), None);
    }
}
