//! Waiting for the user to pick a cell.

use super::context::FlowContext;
use super::error::FlowError;
use super::scripted_input::ScriptedInputWaiting;
use super::state::{Action, StateKind, Transition};
use super::updating_view::UpdatingView;
use strictly_reversi_rules::{Coordinate, Disk, Game, PlayerControl};
use tracing::{debug, instrument};

/// The side to move is Manual and may place a disk.
#[derive(Debug, Clone)]
pub struct UserInputWaiting {
    game: Game,
}

impl UserInputWaiting {
    /// Wraps a game whose mover is Manual.
    pub fn new(game: Game) -> Self {
        Self { game }
    }

    /// The game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    pub(crate) fn start(&mut self, ctx: &FlowContext) {
        ctx.output().publish_game(&self.game);
        ctx.output().clear_thinking();
    }

    #[instrument(skip(self, _ctx))]
    pub(crate) fn input_by_user(
        &mut self,
        _ctx: &FlowContext,
        at: Coordinate,
    ) -> Result<Transition, FlowError> {
        let side = self
            .game
            .turn()
            .ok_or_else(|| FlowError::invalid(StateKind::UserInputWaiting, Action::InputByUser))?;

        let mut next = self.game.clone();
        let flipped = next.place_disk(side, at)?;
        debug!(?side, x = at.x, y = at.y, flipped = flipped.len(), "User move accepted");

        Ok(Transition::to(UpdatingView::for_move(next, side, at, &flipped)))
    }

    pub(crate) fn change_control(&mut self, side: Disk, control: PlayerControl) -> Transition {
        self.game.set_player_control(side, control);

        if control == PlayerControl::Scripted && self.game.turn() == Some(side) {
            debug!(?side, "Mover handed to script");
            Transition::to(ScriptedInputWaiting::new(self.game.clone())).persisted()
        } else {
            Transition::stay().persisted()
        }
    }
}
