//! Pure Reversi rules: board, legal moves, flips, turn hand-off and the
//! text save format.
//!
//! Nothing in this crate performs I/O or knows about scheduling; the turn
//! state machine in `strictly_reversi` builds on these types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod coordinate;
mod game;
mod types;

pub mod codec;

pub use board::{Board, HEIGHT, WIDTH};
pub use codec::ParseError;
pub use coordinate::{Coordinate, Direction};
pub use game::{DiskPlacementError, Game};
pub use types::{Cell, Disk, GameStatus, PlayerControl, symbol_of};
