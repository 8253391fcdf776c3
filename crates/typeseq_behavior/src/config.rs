//! Configuration for the dispatch loop.

/// Configuration for a [`Dispatcher`](crate::Dispatcher).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Re-arm the timeout after every handled message, until the
    /// installation's timeout has fired once.
    ///
    /// Off by default: a timeout fires at most once per installation and any
    /// message arriving before the deadline cancels it for good. Unhandled
    /// messages still cancel but never re-arm.
    pub rearm_on_message: bool,

    /// Maximum number of messages handled per call to `run`.
    pub throughput: usize,

    /// Emit a warning for messages no handler accepts.
    pub log_unhandled: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            rearm_on_message: false,
            throughput: usize::MAX,
            log_unhandled: true,
        }
    }
}

impl DispatchConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration for receive loops, where every handled
    /// message restarts the timeout.
    #[must_use]
    pub fn receive_loop() -> Self {
        Self {
            rearm_on_message: true,
            ..Self::default()
        }
    }

    /// Builder method to set timeout re-arming.
    #[must_use]
    pub fn with_rearm_on_message(mut self, rearm: bool) -> Self {
        self.rearm_on_message = rearm;
        self
    }

    /// Builder method to set the per-run message limit (at least 1).
    #[must_use]
    pub fn with_throughput(mut self, throughput: usize) -> Self {
        self.throughput = throughput.max(1);
        self
    }

    /// Builder method to enable/disable unhandled-message warnings.
    #[must_use]
    pub fn with_log_unhandled(mut self, log: bool) -> Self {
        self.log_unhandled = log;
        self
    }
}
