//! In-memory save slot.

use super::{GameRepository, RepositoryError};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use strictly_reversi_rules::{Game, codec};
use tracing::{debug, instrument};

/// Repository keeping the encoded game in memory.
///
/// Clones share the slot, so a test can keep a handle while the flow owns
/// another. Stores the encoded text, so saves and loads go through the
/// same codec as the file repository.
#[derive(Debug, Clone, Default)]
pub struct MemoryGameRepository {
    slot: Arc<Mutex<Option<String>>>,
    saves: Arc<AtomicUsize>,
    fail_saves: Arc<AtomicBool>,
}

impl MemoryGameRepository {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-filled with raw save text.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        let repository = Self::default();
        *repository.lock() = Some(contents.into());
        repository
    }

    /// Raw text currently in the slot.
    pub fn contents(&self) -> Option<String> {
        self.lock().clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// Makes every following save fail (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    fn lock(&self) -> MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl GameRepository for MemoryGameRepository {
    #[instrument(skip(self))]
    fn load(&self) -> Result<Game, RepositoryError> {
        let contents = self
            .lock()
            .clone()
            .ok_or_else(|| RepositoryError::new("No saved game"))?;
        Ok(codec::decode(&contents)?)
    }

    #[instrument(skip(self, game))]
    fn save(&self, game: &Game) -> Result<(), RepositoryError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(RepositoryError::new("Save slot is read-only"));
        }
        *self.lock() = Some(codec::encode(game));
        let count = self.saves.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(count, "Game saved to memory");
        Ok(())
    }
}
