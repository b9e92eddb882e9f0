//! Owner of the current turn state.

use super::context::FlowContext;
use super::error::FlowError;
use super::state::{StateKind, Transition, TurnState};
use super::updating_view::UpdatingView;
use crate::repository::GameRepository;
use strictly_reversi_rules::{Coordinate, Disk, Game, PlayerControl};
use tracing::{debug, info, instrument, warn};

/// Drives the turn state machine for one save slot.
///
/// Events are forwarded to the current state. When a state hands back a
/// new one, the controller installs it, runs its entry behaviour and then
/// saves if asked to. A failed save is reported after the new state is
/// in place; the in-memory game is never rolled back.
#[derive(Debug)]
pub struct GameFlow<R> {
    state: TurnState,
    context: FlowContext,
    repository: R,
}

impl<R: GameRepository> GameFlow<R> {
    /// Loads the saved game and starts redrawing it.
    ///
    /// A missing or unreadable save starts a new game, which is saved
    /// once so the slot is populated. Finishing the initial redraw does
    /// not save again.
    #[instrument(skip_all)]
    pub fn launch(repository: R, context: FlowContext) -> Self {
        let game = match repository.load() {
            Ok(game) => {
                info!(turn = ?game.turn(), "Restored saved game");
                game
            }
            Err(e) => {
                info!(error = %e, "No usable save, starting a new game");
                let game = Game::new();
                if let Err(e) = repository.save(&game) {
                    warn!(error = %e, "Failed to write initial save");
                }
                game
            }
        };

        let mut state = TurnState::from(UpdatingView::restore(game));
        state.start(&context);

        Self {
            state,
            context,
            repository,
        }
    }

    /// The current state.
    pub fn state(&self) -> &TurnState {
        &self.state
    }

    /// Shortcut for the current state's kind.
    pub fn kind(&self) -> StateKind {
        self.state.kind()
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        self.state.game()
    }

    /// The repository backing this flow.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// The user picked a cell.
    ///
    /// # Errors
    ///
    /// [`FlowError::DiskPlacement`] when the cell flips nothing,
    /// [`FlowError::InvalidAction`] when no user move is expected.
    #[instrument(skip(self), fields(state = %self.state.kind()))]
    pub fn input_by_user(&mut self, at: Coordinate) -> Result<(), FlowError> {
        let transition = self.state.input_by_user(&self.context, at)?;
        self.apply(transition)
    }

    /// The scripted mover's decision arrived.
    ///
    /// # Errors
    ///
    /// [`FlowError::InvalidAction`] when no scripted move is expected.
    #[instrument(skip(self), fields(state = %self.state.kind()))]
    pub fn input_by_scripted(&mut self, at: Coordinate) -> Result<(), FlowError> {
        let transition = self.state.input_by_scripted(&self.context, at)?;
        self.apply(transition)
    }

    /// The pass alert was acknowledged.
    ///
    /// # Errors
    ///
    /// [`FlowError::InvalidAction`] when no pass is pending,
    /// [`FlowError::Save`] when saving the result fails.
    #[instrument(skip(self), fields(state = %self.state.kind()))]
    pub fn accept_pass(&mut self) -> Result<(), FlowError> {
        let transition = self.state.accept_pass()?;
        self.apply(transition)
    }

    /// Changes how `side` is controlled.
    ///
    /// # Errors
    ///
    /// [`FlowError::InvalidAction`] while a pass is pending,
    /// [`FlowError::Save`] when saving the change fails.
    #[instrument(skip(self), fields(state = %self.state.kind()))]
    pub fn change_control(&mut self, side: Disk, control: PlayerControl) -> Result<(), FlowError> {
        let transition = self.state.change_control(&self.context, side, control)?;
        self.apply(transition)
    }

    /// Abandons the current game and starts a new one.
    ///
    /// # Errors
    ///
    /// [`FlowError::InvalidAction`] while a pass is pending.
    #[instrument(skip(self), fields(state = %self.state.kind()))]
    pub fn reset(&mut self) -> Result<(), FlowError> {
        let transition = self.state.reset(&self.context)?;
        self.apply(transition)
    }

    /// The presentation finished drawing one cell.
    ///
    /// `finished` is false when the drawing was cut short; the remaining
    /// cells are then sent without animation.
    ///
    /// # Errors
    ///
    /// [`FlowError::InvalidAction`] outside a redraw,
    /// [`FlowError::Save`] when the completed move cannot be saved.
    #[instrument(skip(self), fields(state = %self.state.kind()))]
    pub fn finish_one_cell_update(&mut self, finished: bool) -> Result<(), FlowError> {
        let transition = self.state.finish_one_cell_update(&self.context, finished)?;
        self.apply(transition)
    }

    fn apply(&mut self, transition: Transition) -> Result<(), FlowError> {
        let (next, persist) = transition.into_parts();

        if let Some(next) = next {
            debug!(from = %self.state.kind(), to = %next.kind(), "Transition");
            self.state = next;
            self.state.start(&self.context);
        }

        if persist {
            self.repository.save(self.state.game())?;
            debug!(state = %self.state.kind(), "Game saved");
        }
        Ok(())
    }
}
