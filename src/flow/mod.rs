//! Turn state machine: who acts next, and when the game is saved.
//!
//! [`GameFlow`] owns the current [`TurnState`]. States never call back
//! into the controller; they return a [`Transition`] and talk to the
//! presentation through [`StateOutput`](crate::StateOutput).

mod context;
mod controller;
mod error;
mod factory;
mod finished;
mod pass_accept;
mod scripted_input;
mod state;
mod updating_view;
mod user_input;

pub use context::FlowContext;
pub use controller::GameFlow;
pub use error::FlowError;
pub use factory::{make_restored_state, make_state};
pub use finished::GameFinished;
pub use pass_accept::PassAcceptWaiting;
pub use scripted_input::ScriptedInputWaiting;
pub use state::{Action, StateKind, Transition, TurnState};
pub use updating_view::{UpdatingView, ViewUpdate};
pub use user_input::UserInputWaiting;
