//! Shared fixtures and a driver for flow tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;
use strictly_reversi::{
    FlowContext, FlowError, GameFlow, GameRepository, ManualDispatcher, Notification, StateOutput,
};
use tokio::sync::mpsc::UnboundedReceiver;

/// A new game, Dark to move, both sides Manual.
pub const NEW_GAME: &str =
    "x00\n--------\n--------\n--------\n---ox---\n---xo---\n--------\n--------\n--------\n";

/// Dark (Scripted) has one move, (2,0), after which Light is stuck but Dark is not.
pub const DARK_SCRIPTED_THEN_LIGHT_PASSES: &str =
    "x10\nxo------\n---o----\n--------\n--------\n--------\n--------\n--------\n--------\n";

/// Light to move with no placement; Dark could play. Both sides Scripted.
pub const MUST_PASS_ON_THIS_TURN: &str =
    "o11\nxo------\no-------\n--------\n--------\n--------\n--------\n--------\n--------\n";

/// Left half Dark, right half Light, game over.
pub const TIED: &str = "-11\nxxxxoooo\nxxxxoooo\nxxxxoooo\nxxxxoooo\nxxxxoooo\nxxxxoooo\nxxxxoooo\nxxxxoooo\n";

/// Dark to move on a board where neither side can ever move again.
pub const STALLED: &str =
    "x00\nx-------\n--------\n--------\n--------\n--------\n--------\n--------\n--------\n";

/// Drives a [`GameFlow`] the way a presentation would.
///
/// Immediate work runs on [`Harness::settle`]; delayed work (the scripted
/// move timer) only runs on [`Harness::fire_timer`].
pub struct Harness<R> {
    pub flow: GameFlow<R>,
    pub dispatcher: ManualDispatcher,
    pub notifications: UnboundedReceiver<Notification>,
    pub seen: Vec<Notification>,
}

impl<R: GameRepository> Harness<R> {
    pub fn launch(repository: R) -> Self {
        let dispatcher = ManualDispatcher::new();
        let (output, notifications) = StateOutput::channel();
        let context = FlowContext::new(
            Arc::new(dispatcher.clone()),
            output,
            Duration::from_secs(2),
        );
        let flow = GameFlow::launch(repository, context);
        Self {
            flow,
            dispatcher,
            notifications,
            seen: Vec::new(),
        }
    }

    /// Runs immediate work and answers notifications until nothing moves.
    ///
    /// Placements are acknowledged as finished; scripted decisions are fed back.
    pub fn settle(&mut self) -> Result<(), FlowError> {
        loop {
            let ran = self.dispatcher.run_immediate();
            let handled = self.handle_notifications()?;
            if ran == 0 && handled == 0 {
                return Ok(());
            }
        }
    }

    /// Fires the oldest pending timer, then settles.
    pub fn fire_timer(&mut self) -> Result<bool, FlowError> {
        let fired = self.dispatcher.run_delayed();
        self.settle()?;
        Ok(fired)
    }

    /// Notifications received since the last call.
    pub fn take_seen(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.seen)
    }

    fn handle_notifications(&mut self) -> Result<usize, FlowError> {
        let mut handled = 0;
        while let Ok(notification) = self.notifications.try_recv() {
            handled += 1;
            self.seen.push(notification.clone());
            match notification {
                Notification::DiskPlaced(_) => self.flow.finish_one_cell_update(true)?,
                Notification::MoveDecided(at) => self.flow.input_by_scripted(at)?,
                _ => {}
            }
        }
        Ok(handled)
    }
}

/// Placements in the order they were sent.
pub fn placements(seen: &[Notification]) -> Vec<strictly_reversi::DiskPlacement> {
    seen.iter()
        .filter_map(|n| match n {
            Notification::DiskPlaced(p) => Some(*p),
            _ => None,
        })
        .collect()
}
