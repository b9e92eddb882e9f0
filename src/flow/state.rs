//! The five turn states as one closed enum.
//!
//! Every state answers every event: handled events return a
//! [`Transition`], the rest return [`FlowError::InvalidAction`].

use super::context::FlowContext;
use super::error::FlowError;
use super::finished::GameFinished;
use super::pass_accept::PassAcceptWaiting;
use super::scripted_input::ScriptedInputWaiting;
use super::updating_view::UpdatingView;
use super::user_input::UserInputWaiting;
use serde::{Deserialize, Serialize};
use strictly_reversi_rules::{Coordinate, Disk, Game, PlayerControl};

/// Which state the flow is in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum StateKind {
    /// Waiting for the user to pick a cell.
    UserInputWaiting,
    /// Waiting for the scripted side's delayed move.
    ScriptedInputWaiting,
    /// Waiting for the pass to be acknowledged.
    PassAcceptWaiting,
    /// Replaying disk placements to the presentation.
    UpdatingView,
    /// No further moves.
    GameFinished,
}

/// Events a state can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    /// A cell chosen by the user.
    InputByUser,
    /// A cell chosen by the scripted mover.
    InputByScripted,
    /// Acknowledgement of a pass.
    AcceptPass,
    /// A side's control mode changed.
    ChangeControl,
    /// Start over.
    Reset,
    /// The presentation finished drawing a cell.
    FinishOneCellUpdate,
}

/// Outcome of a handled event.
#[derive(Debug)]
#[must_use]
pub struct Transition {
    next: Option<TurnState>,
    persist: bool,
}

impl Transition {
    /// Keep the current state.
    pub fn stay() -> Self {
        Self {
            next: None,
            persist: false,
        }
    }

    /// Move to `next` and run its entry behaviour.
    pub fn to(next: impl Into<TurnState>) -> Self {
        Self {
            next: Some(next.into()),
            persist: false,
        }
    }

    /// Also save the resulting game.
    pub fn persisted(mut self) -> Self {
        self.persist = true;
        self
    }

    /// Sets whether the resulting game is saved.
    pub fn persist_if(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    /// The state to enter, if any.
    pub fn next(&self) -> Option<&TurnState> {
        self.next.as_ref()
    }

    /// Whether the resulting game is saved.
    pub fn persist(&self) -> bool {
        self.persist
    }

    pub(crate) fn into_parts(self) -> (Option<TurnState>, bool) {
        (self.next, self.persist)
    }
}

/// The current turn state, owning its game snapshot.
#[derive(Debug, derive_more::From)]
pub enum TurnState {
    /// See [`UserInputWaiting`].
    UserInputWaiting(UserInputWaiting),
    /// See [`ScriptedInputWaiting`].
    ScriptedInputWaiting(ScriptedInputWaiting),
    /// See [`PassAcceptWaiting`].
    PassAcceptWaiting(PassAcceptWaiting),
    /// See [`UpdatingView`].
    UpdatingView(UpdatingView),
    /// See [`GameFinished`].
    GameFinished(GameFinished),
}

impl TurnState {
    /// Which state this is.
    pub fn kind(&self) -> StateKind {
        match self {
            Self::UserInputWaiting(_) => StateKind::UserInputWaiting,
            Self::ScriptedInputWaiting(_) => StateKind::ScriptedInputWaiting,
            Self::PassAcceptWaiting(_) => StateKind::PassAcceptWaiting,
            Self::UpdatingView(_) => StateKind::UpdatingView,
            Self::GameFinished(_) => StateKind::GameFinished,
        }
    }

    /// The game this state holds.
    pub fn game(&self) -> &Game {
        match self {
            Self::UserInputWaiting(s) => s.game(),
            Self::ScriptedInputWaiting(s) => s.game(),
            Self::PassAcceptWaiting(s) => s.game(),
            Self::UpdatingView(s) => s.game(),
            Self::GameFinished(s) => s.game(),
        }
    }

    /// Runs the entry behaviour.
    pub(crate) fn start(&mut self, ctx: &FlowContext) {
        match self {
            Self::UserInputWaiting(s) => s.start(ctx),
            Self::ScriptedInputWaiting(s) => s.start(ctx),
            Self::PassAcceptWaiting(s) => s.start(ctx),
            Self::UpdatingView(s) => s.start(ctx),
            Self::GameFinished(s) => s.start(ctx),
        }
    }

    pub(crate) fn input_by_user(
        &mut self,
        ctx: &FlowContext,
        at: Coordinate,
    ) -> Result<Transition, FlowError> {
        match self {
            Self::UserInputWaiting(s) => s.input_by_user(ctx, at),
            other => Err(other.invalid(Action::InputByUser)),
        }
    }

    pub(crate) fn input_by_scripted(
        &mut self,
        ctx: &FlowContext,
        at: Coordinate,
    ) -> Result<Transition, FlowError> {
        match self {
            Self::ScriptedInputWaiting(s) => s.input_by_scripted(ctx, at),
            other => Err(other.invalid(Action::InputByScripted)),
        }
    }

    pub(crate) fn accept_pass(&mut self) -> Result<Transition, FlowError> {
        match self {
            Self::PassAcceptWaiting(s) => Ok(s.accept_pass()),
            other => Err(other.invalid(Action::AcceptPass)),
        }
    }

    pub(crate) fn change_control(
        &mut self,
        ctx: &FlowContext,
        side: Disk,
        control: PlayerControl,
    ) -> Result<Transition, FlowError> {
        match self {
            Self::UserInputWaiting(s) => Ok(s.change_control(side, control)),
            Self::ScriptedInputWaiting(s) => Ok(s.change_control(ctx, side, control)),
            Self::UpdatingView(s) => Ok(s.change_control(side, control)),
            Self::GameFinished(s) => Ok(s.change_control(side, control)),
            other => Err(other.invalid(Action::ChangeControl)),
        }
    }

    pub(crate) fn reset(&mut self, ctx: &FlowContext) -> Result<Transition, FlowError> {
        match self {
            Self::UserInputWaiting(_) | Self::GameFinished(_) => {
                Ok(Transition::to(UpdatingView::for_new_game()))
            }
            Self::ScriptedInputWaiting(s) => Ok(s.reset(ctx)),
            Self::UpdatingView(s) => Ok(s.reset()),
            other => Err(other.invalid(Action::Reset)),
        }
    }

    pub(crate) fn finish_one_cell_update(
        &mut self,
        ctx: &FlowContext,
        finished: bool,
    ) -> Result<Transition, FlowError> {
        match self {
            Self::UpdatingView(s) => Ok(s.finish_one_cell_update(ctx, finished)),
            other => Err(other.invalid(Action::FinishOneCellUpdate)),
        }
    }

    fn invalid(&self, action: Action) -> FlowError {
        FlowError::invalid(self.kind(), action)
    }
}
