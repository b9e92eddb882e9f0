//! The game is over.

use super::context::FlowContext;
use super::state::Transition;
use strictly_reversi_rules::{Disk, Game, PlayerControl};

/// Neither side can move. Only control changes and reset are accepted.
#[derive(Debug, Clone)]
pub struct GameFinished {
    game: Game,
}

impl GameFinished {
    /// Wraps a finished game.
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

    pub(crate) fn change_control(&mut self, side: Disk, control: PlayerControl) -> Transition {
        self.game.set_player_control(side, control);
        Transition::stay().persisted()
    }
}
