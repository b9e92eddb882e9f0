//! Persistence error types.

use derive_more::{Display, Error};
use strictly_reversi_rules::ParseError;
use tracing::instrument;

/// Persistence error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Repository error: {} at {}:{}", message, file, line)]
pub struct RepositoryError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RepositoryError {
    /// Creates a new repository error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<ParseError> for RepositoryError {
    #[track_caller]
    fn from(err: ParseError) -> Self {
        Self::new(format!("Malformed save data: {}", err))
    }
}
