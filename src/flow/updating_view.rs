//! Replays disk placements to the presentation one cell at a time.
//!
//! Each placement goes through the dispatcher and the presentation
//! answers with `finish_one_cell_update` before the next one is sent.
//! The queue is drained step by step, never recursively, so a reset can
//! cut in between any two cells.

use super::context::FlowContext;
use super::factory::{make_restored_state, make_state};
use super::state::Transition;
use crate::dispatch::CancellationToken;
use crate::output::DiskPlacement;
use std::collections::VecDeque;
use strictly_reversi_rules::{Coordinate, Disk, Game, PlayerControl};
use tracing::{debug, instrument, trace};

/// What the redraw pass is for, which decides how it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ViewUpdate {
    /// Showing a move; completion hands the turn over and saves.
    Move,
    /// Showing a fresh game; completion saves without touching the turn.
    Reset,
    /// Showing a loaded game; completion neither touches the turn nor saves.
    Restore,
}

/// Redrawing cells before the next waiting state.
#[derive(Debug, Clone)]
pub struct UpdatingView {
    game: Game,
    queue: VecDeque<DiskPlacement>,
    update: ViewUpdate,
    controls_changed: bool,
    token: CancellationToken,
}

impl UpdatingView {
    fn new(game: Game, queue: impl IntoIterator<Item = DiskPlacement>, update: ViewUpdate) -> Self {
        Self {
            game,
            queue: queue.into_iter().collect(),
            update,
            controls_changed: false,
            token: CancellationToken::new(),
        }
    }

    /// Animates a move: the placed cell, then every flip.
    ///
    /// `game` already has the move applied.
    pub fn for_move(game: Game, side: Disk, placed: Coordinate, flipped: &[Coordinate]) -> Self {
        let queue = DiskPlacement::for_move(side, placed, flipped);
        Self::new(game, queue, ViewUpdate::Move)
    }

    /// Redraws the whole board for a new game.
    pub fn for_new_game() -> Self {
        let game = Game::new();
        let queue = DiskPlacement::whole_board(game.board());
        Self::new(game, queue, ViewUpdate::Reset)
    }

    /// Redraws the whole board for a game that was just loaded.
    pub fn restore(game: Game) -> Self {
        let queue = DiskPlacement::whole_board(game.board());
        Self::new(game, queue, ViewUpdate::Restore)
    }

    /// The game being shown.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// What this pass is for.
    pub fn update(&self) -> ViewUpdate {
        self.update
    }

    /// Placements not yet sent.
    pub fn remaining(&self) -> impl Iterator<Item = &DiskPlacement> {
        self.queue.iter()
    }

    #[instrument(skip(self, ctx), fields(update = %self.update, queued = self.queue.len()))]
    pub(crate) fn start(&mut self, ctx: &FlowContext) {
        self.send_next(ctx);
    }

    /// Sends the next placement. Returns false once the queue is empty.
    fn send_next(&mut self, ctx: &FlowContext) -> bool {
        let Some(placement) = self.queue.pop_front() else {
            return false;
        };

        trace!(?placement, "Scheduling placement");
        let token = self.token.clone();
        let output = ctx.output().clone();
        ctx.dispatcher().dispatch(Box::new(move || {
            if token.is_cancelled() {
                return;
            }
            output.place_disk(placement);
        }));
        true
    }

    pub(crate) fn change_control(&mut self, side: Disk, control: PlayerControl) -> Transition {
        // Saved when the redraw completes.
        self.game.set_player_control(side, control);
        self.controls_changed = true;
        Transition::stay()
    }

    pub(crate) fn reset(&mut self) -> Transition {
        debug!(dropped = self.queue.len(), "Redraw interrupted by reset");
        self.token.cancel();
        Transition::to(Self::for_new_game())
    }

    #[instrument(skip(self, ctx), fields(update = %self.update, queued = self.queue.len()))]
    pub(crate) fn finish_one_cell_update(
        &mut self,
        ctx: &FlowContext,
        finished: bool,
    ) -> Transition {
        if !finished {
            for placement in self.queue.iter_mut() {
                placement.animated = false;
            }
        }

        if self.send_next(ctx) {
            return Transition::stay();
        }

        self.token.cancel();
        let mut game = self.game.clone();
        match self.update {
            ViewUpdate::Move => {
                game.update_turn_after_move();
                Transition::to(make_state(game)).persisted()
            }
            ViewUpdate::Reset => Transition::to(make_state(game)).persisted(),
            ViewUpdate::Restore => {
                Transition::to(make_restored_state(game)).persist_if(self.controls_changed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::ManualDispatcher;
    use crate::flow::StateKind;
    use crate::output::{Notification, StateOutput};
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_unfinished_redraw_switches_rest_to_immediate() {
        let dispatcher = ManualDispatcher::new();
        let (output, mut rx) = StateOutput::channel();
        let ctx = FlowContext::new(Arc::new(dispatcher.clone()), output, Duration::ZERO);

        let mut game = Game::new();
        let flipped = game.place_disk(Disk::Dark, Coordinate::new(3, 2)).unwrap();
        let mut view = UpdatingView::for_move(game, Disk::Dark, Coordinate::new(3, 2), &flipped);
        view.start(&ctx);
        dispatcher.run_all();

        let Ok(Notification::DiskPlaced(first)) = rx.try_recv() else {
            panic!("expected a placement");
        };
        assert!(first.animated);

        let transition = view.finish_one_cell_update(&ctx, false);
        assert!(transition.next().is_none());
        dispatcher.run_all();
        let Ok(Notification::DiskPlaced(second)) = rx.try_recv() else {
            panic!("expected a placement");
        };
        assert!(!second.animated);
        assert_eq!(second.coordinate, Coordinate::new(3, 3));

        let transition = view.finish_one_cell_update(&ctx, true);
        assert_eq!(
            transition.next().map(|s| s.kind()),
            Some(StateKind::UserInputWaiting)
        );
        assert!(transition.persist());
    }

    #[test]
    fn test_reset_silences_pending_placement() {
        let dispatcher = ManualDispatcher::new();
        let (output, mut rx) = StateOutput::channel();
        let ctx = FlowContext::new(Arc::new(dispatcher.clone()), output, Duration::ZERO);

        let mut view = UpdatingView::restore(Game::new());
        view.start(&ctx);
        let transition = view.reset();
        assert!(!transition.persist());

        dispatcher.run_all();
        assert!(rx.try_recv().is_err());
    }
}
