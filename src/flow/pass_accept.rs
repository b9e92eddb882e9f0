//! Waiting for a pass to be acknowledged.

use super::context::FlowContext;
use super::factory::make_state;
use super::state::Transition;
use strictly_reversi_rules::Game;
use tracing::{debug, instrument};

/// The side to move has no legal placement but the opponent does.
#[derive(Debug, Clone)]
pub struct PassAcceptWaiting {
    game: Game,
    persist_on_accept: bool,
}

impl PassAcceptWaiting {
    /// Wraps a game that needs a pass.
    ///
    /// `persist_on_accept` is false when the pass was found by loading
    /// alone, so acknowledging it does not rewrite the save.
    pub fn new(game: Game, persist_on_accept: bool) -> Self {
        Self {
            game,
            persist_on_accept,
        }
    }

    /// The game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Whether acknowledging the pass saves.
    pub fn persist_on_accept(&self) -> bool {
        self.persist_on_accept
    }

    pub(crate) fn start(&mut self, ctx: &FlowContext) {
        ctx.output().publish_game(&self.game);
        ctx.output().pass_alert();
    }

    #[instrument(skip(self), fields(turn = ?self.game.turn()))]
    pub(crate) fn accept_pass(&mut self) -> Transition {
        let mut next = self.game.clone();
        next.set_turn(next.turn().map(|side| side.flipped()));
        debug!(turn = ?next.turn(), "Pass accepted");

        Transition::to(make_state(next)).persist_if(self.persist_on_accept)
    }
}
