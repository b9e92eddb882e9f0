//! Scheduling of deferred work: "now" or "after a delay".
//!
//! Work items never hold the turn state machine. They capture a
//! [`CancellationToken`] and the [`StateOutput`](crate::StateOutput) and
//! check the token before emitting anything.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, instrument, warn};

/// A deferred unit of work.
pub type Work = Box<dyn FnOnce() + Send + 'static>;

/// Runs work items immediately-but-not-inline, or after a delay.
pub trait Dispatcher: Send + Sync {
    /// Runs `work` as soon as possible.
    fn dispatch(&self, work: Work);

    /// Runs `work` after `delay`.
    fn dispatch_after(&self, delay: Duration, work: Work);
}

/// Shared flag marking outstanding work as stale.
///
/// Clones observe the same flag. Cancelling is one-way.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a live token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the token cancelled.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Returns true once [`CancellationToken::cancel`] has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Runs every work item on the spot, ignoring delays.
///
/// Turns all scheduling into deterministic single-step execution for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SynchronousDispatcher;

impl Dispatcher for SynchronousDispatcher {
    fn dispatch(&self, work: Work) {
        work();
    }

    fn dispatch_after(&self, _delay: Duration, work: Work) {
        work();
    }
}

/// Holds work items until the caller fires them.
///
/// Lets tests interleave events with pending timers.
#[derive(Clone, Default)]
pub struct ManualDispatcher {
    pending: Arc<Mutex<VecDeque<(Option<Duration>, Work)>>>,
}

impl ManualDispatcher {
    /// Creates an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of work items waiting.
    pub fn pending(&self) -> usize {
        self.lock().len()
    }

    /// Delay of the oldest waiting item (`None` for immediate items or an empty queue).
    pub fn next_delay(&self) -> Option<Duration> {
        self.lock().front().and_then(|(delay, _)| *delay)
    }

    /// Runs the oldest waiting item. Returns false if nothing was waiting.
    pub fn run_next(&self) -> bool {
        // Release the lock before running so the item may dispatch more work.
        let next = self.lock().pop_front();
        match next {
            Some((_, work)) => {
                work();
                true
            }
            None => false,
        }
    }

    /// Runs items until none are left, including ones queued while running.
    pub fn run_all(&self) -> usize {
        let mut ran = 0;
        while self.run_next() {
            ran += 1;
        }
        ran
    }

    /// Runs every item queued without a delay, oldest first, leaving
    /// delayed items waiting. Includes items queued while running.
    pub fn run_immediate(&self) -> usize {
        let mut ran = 0;
        while self.run_first_where(|delay| delay.is_none()) {
            ran += 1;
        }
        ran
    }

    /// Runs the oldest delayed item, as if its timer fired.
    pub fn run_delayed(&self) -> bool {
        self.run_first_where(|delay| delay.is_some())
    }

    fn run_first_where(&self, matches: impl Fn(Option<Duration>) -> bool) -> bool {
        let next = {
            let mut pending = self.lock();
            pending
                .iter()
                .position(|(delay, _)| matches(*delay))
                .and_then(|index| pending.remove(index))
        };
        match next {
            Some((_, work)) => {
                work();
                true
            }
            None => false,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<(Option<Duration>, Work)>> {
        self.pending
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Dispatcher for ManualDispatcher {
    fn dispatch(&self, work: Work) {
        self.lock().push_back((None, work));
    }

    fn dispatch_after(&self, delay: Duration, work: Work) {
        self.lock().push_back((Some(delay), work));
    }
}

impl std::fmt::Debug for ManualDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualDispatcher")
            .field("pending", &self.pending())
            .finish()
    }
}

/// Posts work to a queue drained by the event loop that owns the game.
///
/// Delayed items are parked on a `tokio` timer task and posted when it
/// fires, so every item runs on the draining thread, in posting order.
/// Must be used from within a tokio runtime.
#[derive(Debug, Clone)]
pub struct QueueDispatcher {
    queue: mpsc::UnboundedSender<Work>,
}

impl QueueDispatcher {
    /// Creates the dispatcher and the receiver the event loop drains.
    #[instrument]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Work>) {
        let (queue, rx) = mpsc::unbounded_channel();
        debug!("Work queue created");
        (Self { queue }, rx)
    }
}

impl Dispatcher for QueueDispatcher {
    fn dispatch(&self, work: Work) {
        if self.queue.send(work).is_err() {
            warn!("Work queue closed, dropping work item");
        }
    }

    fn dispatch_after(&self, delay: Duration, work: Work) {
        let queue = self.queue.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if queue.send(work).is_err() {
                debug!("Work queue closed before delayed item fired");
            }
        });
    }
}
