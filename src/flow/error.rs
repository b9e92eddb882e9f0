//! Turn-flow error types.

use super::state::{Action, StateKind};
use crate::repository::RepositoryError;
use derive_more::{Display, Error, From};
use strictly_reversi_rules::DiskPlacementError;

/// Errors returned by [`GameFlow`](super::GameFlow) events.
#[derive(Debug, Clone, Display, Error, From)]
pub enum FlowError {
    /// The current state does not handle this event.
    #[display("{} is not valid while {}", action, state)]
    InvalidAction {
        /// State that received the event.
        state: StateKind,
        /// Event that was delivered.
        action: Action,
    },

    /// The move flips nothing.
    #[from]
    #[display("You cannot place there: {}", _0)]
    DiskPlacement(DiskPlacementError),

    /// The new state was installed but could not be saved.
    #[from]
    #[display("Failed to save game: {}", _0)]
    Save(RepositoryError),
}

impl FlowError {
    /// Creates an invalid-action error.
    pub fn invalid(state: StateKind, action: Action) -> Self {
        Self::InvalidAction { state, action }
    }

    /// Returns true for an event delivered to the wrong state.
    pub fn is_invalid_action(&self) -> bool {
        matches!(self, Self::InvalidAction { .. })
    }
}
