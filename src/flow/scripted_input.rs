//! Waiting for a scripted side's delayed move.

use super::context::FlowContext;
use super::error::FlowError;
use super::state::{Action, StateKind, Transition};
use super::updating_view::UpdatingView;
use super::user_input::UserInputWaiting;
use crate::dispatch::CancellationToken;
use crate::scripted;
use strictly_reversi_rules::{Coordinate, Disk, Game, PlayerControl};
use tracing::{debug, instrument, warn};

/// The side to move is Scripted; its move fires after the thinking delay.
///
/// The pending move is guarded by `token`. Leaving this state through a
/// reset or a hand-back to the user cancels it.
#[derive(Debug, Clone)]
pub struct ScriptedInputWaiting {
    game: Game,
    token: CancellationToken,
}

impl ScriptedInputWaiting {
    /// Wraps a game whose mover is Scripted.
    pub fn new(game: Game) -> Self {
        Self {
            game,
            token: CancellationToken::new(),
        }
    }

    /// The game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[instrument(skip(self, ctx), fields(turn = ?self.game.turn()))]
    pub(crate) fn start(&mut self, ctx: &FlowContext) {
        let output = ctx.output();
        output.publish_game(&self.game);

        let Some(side) = self.game.turn() else {
            return;
        };
        let Some(at) = scripted::pick_move(self.game.board(), side) else {
            warn!(?side, "Scripted side has no move");
            return;
        };

        let mut thinking = [false; 2];
        thinking[side.index()] = true;
        output.thinking(thinking);

        let token = self.token.clone();
        let output = output.clone();
        ctx.dispatcher().dispatch_after(
            *ctx.thinking_delay(),
            Box::new(move || {
                if token.is_cancelled() {
                    debug!("Scripted move cancelled");
                    return;
                }
                output.clear_thinking();
                output.move_decided(at);
            }),
        );
    }

    #[instrument(skip(self, ctx))]
    pub(crate) fn input_by_scripted(
        &mut self,
        ctx: &FlowContext,
        at: Coordinate,
    ) -> Result<Transition, FlowError> {
        let side = self.game.turn().ok_or_else(|| {
            FlowError::invalid(StateKind::ScriptedInputWaiting, Action::InputByScripted)
        })?;

        let mut next = self.game.clone();
        let flipped = next.place_disk(side, at)?;

        // A move fed in directly supersedes the pending one.
        self.token.cancel();
        ctx.output().clear_thinking();
        debug!(?side, x = at.x, y = at.y, flipped = flipped.len(), "Scripted move applied");

        Ok(Transition::to(UpdatingView::for_move(next, side, at, &flipped)))
    }

    pub(crate) fn change_control(
        &mut self,
        ctx: &FlowContext,
        side: Disk,
        control: PlayerControl,
    ) -> Transition {
        self.game.set_player_control(side, control);

        if control == PlayerControl::Manual && self.game.turn() == Some(side) {
            debug!(?side, "Mover handed back to user");
            self.token.cancel();
            ctx.output().clear_thinking();
            Transition::to(UserInputWaiting::new(self.game.clone())).persisted()
        } else {
            Transition::stay().persisted()
        }
    }

    pub(crate) fn reset(&mut self, ctx: &FlowContext) -> Transition {
        self.token.cancel();
        ctx.output().clear_thinking();
        Transition::to(UpdatingView::for_new_game())
    }
}
