//! Strictly Reversi library - a Reversi turn engine with save-slot persistence.
//!
//! The rules live in [`strictly_reversi_rules`]; this crate adds the turn
//! state machine that sits between a presentation layer and those rules.
//!
//! # Architecture
//!
//! - **Flow**: [`GameFlow`] owns the current [`TurnState`] and forwards events to it
//! - **Dispatch**: deferred work goes through a [`Dispatcher`], guarded by a [`CancellationToken`]
//! - **Output**: states talk to the presentation through [`StateOutput`] notifications
//! - **Repository**: the single save slot behind [`GameRepository`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use strictly_reversi::{
//!     FlowContext, GameFlow, MemoryGameRepository, Notification, StateKind, StateOutput,
//!     SynchronousDispatcher,
//! };
//!
//! let (output, mut notifications) = StateOutput::channel();
//! let context = FlowContext::new(Arc::new(SynchronousDispatcher), output, Duration::ZERO);
//! let mut flow = GameFlow::launch(MemoryGameRepository::new(), context);
//!
//! // Acknowledge every redrawn cell of the initial board.
//! while let Ok(notification) = notifications.try_recv() {
//!     if let Notification::DiskPlaced(_) = notification {
//!         flow.finish_one_cell_update(true).unwrap();
//!     }
//! }
//! assert_eq!(flow.kind(), StateKind::UserInputWaiting);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod dispatch;
mod flow;
mod output;
mod repository;
mod scripted;

// Crate-level exports - Configuration
pub use config::{ConfigError, ReversiConfig};

// Crate-level exports - Scheduling
pub use dispatch::{
    CancellationToken, Dispatcher, ManualDispatcher, QueueDispatcher, SynchronousDispatcher, Work,
};

// Crate-level exports - Turn state machine
pub use flow::{
    Action, FlowContext, FlowError, GameFinished, GameFlow, PassAcceptWaiting,
    ScriptedInputWaiting, StateKind, Transition, TurnState, UpdatingView, UserInputWaiting,
    ViewUpdate, make_restored_state, make_state,
};

// Crate-level exports - Notifications
pub use output::{DiskPlacement, Notification, StateOutput};

// Crate-level exports - Persistence
pub use repository::{FileGameRepository, GameRepository, MemoryGameRepository, RepositoryError};

// Crate-level exports - Scripted mover
pub use scripted::pick_move;

// Crate-level exports - Rules
pub use strictly_reversi_rules::{
    Board, Coordinate, Disk, DiskPlacementError, Game, GameStatus, HEIGHT, PlayerControl, WIDTH,
    codec,
};
