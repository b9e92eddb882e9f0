//! Shared collaborators handed to every state.

use crate::dispatch::Dispatcher;
use crate::output::StateOutput;
use std::sync::Arc;
use std::time::Duration;

/// Everything a state needs to run its entry behaviour and handle events.
#[derive(Clone, derive_getters::Getters)]
pub struct FlowContext {
    /// Scheduler for deferred work.
    dispatcher: Arc<dyn Dispatcher>,
    /// Notification sender.
    output: StateOutput,
    /// How long a scripted side "thinks" before its move fires.
    thinking_delay: Duration,
}

impl FlowContext {
    /// Creates a context.
    pub fn new(
        dispatcher: Arc<dyn Dispatcher>,
        output: StateOutput,
        thinking_delay: Duration,
    ) -> Self {
        Self {
            dispatcher,
            output,
            thinking_delay,
        }
    }
}

impl std::fmt::Debug for FlowContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowContext")
            .field("output", &self.output)
            .field("thinking_delay", &self.thinking_delay)
            .finish_non_exhaustive()
    }
}
