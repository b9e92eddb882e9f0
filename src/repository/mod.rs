//! Persistence port for the single save slot.

mod error;
mod file;
mod memory;

pub use error::RepositoryError;
pub use file::FileGameRepository;
pub use memory::MemoryGameRepository;

use strictly_reversi_rules::Game;

/// Loads and saves the one persisted game.
///
/// A failed load is the normal first-run path; callers fall back to a new game.
pub trait GameRepository: Send {
    /// Reads the saved game.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] when nothing is saved or the data is malformed.
    fn load(&self) -> Result<Game, RepositoryError>;

    /// Overwrites the saved game.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError`] when the write fails.
    fn save(&self, game: &Game) -> Result<(), RepositoryError>;
}
