//! Save slot backed by a text file.

use super::{GameRepository, RepositoryError};
use std::path::{Path, PathBuf};
use strictly_reversi_rules::{Game, codec};
use tracing::{debug, info, instrument};

/// Repository storing the game in the 9-line text format at a fixed path.
#[derive(Debug, Clone)]
pub struct FileGameRepository {
    path: PathBuf,
}

impl FileGameRepository {
    /// Creates a repository for the given save path.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        info!("Creating FileGameRepository");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The save path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GameRepository for FileGameRepository {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Game, RepositoryError> {
        debug!("Loading game");
        let input = std::fs::read_to_string(&self.path).map_err(|e| {
            RepositoryError::new(format!(
                "Failed to read '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        let game = codec::decode(&input)?;
        info!(turn = ?game.turn(), "Game loaded");
        Ok(game)
    }

    #[instrument(skip(self, game), fields(path = %self.path.display()))]
    fn save(&self, game: &Game) -> Result<(), RepositoryError> {
        let output = codec::encode(game);

        // Write beside the target and rename so a crash never leaves half a file.
        let staging = self.path.with_extension("tmp");
        std::fs::write(&staging, output).map_err(|e| {
            RepositoryError::new(format!(
                "Failed to write '{}': {}",
                staging.display(),
                e
            ))
        })?;
        std::fs::rename(&staging, &self.path).map_err(|e| {
            RepositoryError::new(format!(
                "Failed to replace '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(turn = ?game.turn(), "Game saved");
        Ok(())
    }
}
