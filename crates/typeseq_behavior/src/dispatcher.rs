//! A single-threaded, cooperative dispatch loop.
//!
//! The dispatcher owns a mailbox and at most one installed [`Behavior`].
//! Each [`step`](Dispatcher::step) either handles one message, fires the
//! pending timeout, or reports that there is nothing to do. Handlers run to
//! completion before the next step.
//!
//! Messages and the timeout race on time of occurrence: a message that
//! arrived strictly before the deadline cancels the timeout, otherwise the
//! timeout fires first. A timeout fires at most once per installation.

use std::collections::VecDeque;
use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::behavior::{Behavior, Message};
use crate::clock::{Clock, SystemClock};
use crate::config::DispatchConfig;

/// Outcome of a single dispatch step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// A message was handled by the installed behavior.
    Dispatched,
    /// A message was dequeued but no handler accepted it.
    Unhandled,
    /// The timeout handler ran.
    TimedOut,
    /// Nothing to do: the mailbox is empty and no deadline has passed, or
    /// no behavior is installed.
    Idle,
}

/// Counters for a dispatcher's lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchStats {
    /// Messages accepted by a handler.
    pub handled: u64,
    /// Messages no handler accepted.
    pub unhandled: u64,
    /// Timeout handlers run.
    pub timeouts_fired: u64,
    /// Timeouts cancelled by an earlier message.
    pub timeouts_cancelled: u64,
}

/// A queued message with its arrival time.
#[derive(Debug)]
struct Envelope {
    message: Message,
    arrived_at: Duration,
}

/// Drives an installed [`Behavior`] against a mailbox.
pub struct Dispatcher<C: Clock = SystemClock> {
    config: DispatchConfig,
    clock: C,
    mailbox: VecDeque<Envelope>,
    behavior: Option<Behavior>,
    /// Absolute deadline of the armed timeout, if any.
    deadline: Option<Duration>,
    /// Set once the current installation's timeout has fired.
    spent: bool,
    /// Number of behaviors installed so far.
    installation: u64,
    stats: DispatchStats,
}

impl Dispatcher<SystemClock> {
    /// Creates a dispatcher driven by the system clock.
    #[must_use]
    pub fn with_system_clock() -> Self {
        Self::new(SystemClock::new())
    }
}

impl<C: Clock> Dispatcher<C> {
    /// Creates a dispatcher with the default configuration.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self::with_config(DispatchConfig::default(), clock)
    }

    /// Creates a dispatcher with the given configuration.
    #[must_use]
    pub fn with_config(config: DispatchConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            mailbox: VecDeque::new(),
            behavior: None,
            deadline: None,
            spent: false,
            installation: 0,
            stats: DispatchStats::default(),
        }
    }

    /// Installs `behavior`, replacing the current one and arming its timeout.
    pub fn install(&mut self, behavior: Behavior) {
        self.installation += 1;
        self.spent = false;
        self.deadline = self.deadline_after(behavior.timeout());
        debug!(
            installation = self.installation,
            timeout = ?behavior.timeout(),
            handlers = behavior.handler_count(),
            "behavior installed"
        );
        self.behavior = Some(behavior);
    }

    /// Removes and returns the installed behavior, disarming its timeout.
    pub fn uninstall(&mut self) -> Option<Behavior> {
        self.deadline = None;
        self.behavior.take()
    }

    /// Queues `message`, stamped with the current time.
    pub fn enqueue(&mut self, message: Message) {
        let arrived_at = self.clock.now();
        trace!(signature = %message.signature(), ?arrived_at, "message enqueued");
        self.mailbox.push_back(Envelope {
            message,
            arrived_at,
        });
    }

    /// Performs one unit of work.
    pub fn step(&mut self) -> Step {
        let Some(behavior) = self.behavior.as_mut() else {
            return Step::Idle;
        };
        let now = self.clock.now();

        if let Some(deadline) = self.deadline {
            let message_first = self
                .mailbox
                .front()
                .is_some_and(|envelope| envelope.arrived_at < deadline);
            if !message_first && now >= deadline {
                self.deadline = None;
                self.spent = true;
                self.stats.timeouts_fired += 1;
                debug!(installation = self.installation, ?deadline, "timeout fired");
                behavior.fire_timeout();
                return Step::TimedOut;
            }
        }

        let Some(envelope) = self.mailbox.pop_front() else {
            return Step::Idle;
        };

        if let Some(deadline) = self.deadline.take() {
            self.stats.timeouts_cancelled += 1;
            debug!(
                installation = self.installation,
                ?deadline,
                arrived_at = ?envelope.arrived_at,
                "timeout cancelled"
            );
        }

        let step = if behavior.invoke(&envelope.message) {
            self.stats.handled += 1;
            trace!(signature = %envelope.message.signature(), "message dispatched");
            Step::Dispatched
        } else {
            self.stats.unhandled += 1;
            if self.config.log_unhandled {
                warn!(signature = %envelope.message.signature(), "unhandled message");
            }
            Step::Unhandled
        };

        if step == Step::Dispatched && self.config.rearm_on_message && !self.spent {
            let timeout = behavior.timeout();
            self.deadline = self.deadline_after(timeout);
        }
        step
    }

    /// Steps until idle or until `throughput` messages have been processed.
    ///
    /// Returns the number of non-idle steps taken.
    pub fn run(&mut self) -> usize {
        let mut steps = 0;
        let mut messages = 0;
        while messages < self.config.throughput {
            match self.step() {
                Step::Idle => break,
                Step::TimedOut => steps += 1,
                Step::Dispatched | Step::Unhandled => {
                    steps += 1;
                    messages += 1;
                }
            }
        }
        steps
    }

    /// Returns the absolute deadline of the armed timeout, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Returns true if a behavior is installed.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.behavior.is_some()
    }

    /// Returns the number of queued messages.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.mailbox.len()
    }

    /// Returns the lifetime counters.
    #[must_use]
    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    /// Returns the clock.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Deadline `timeout` from now; a deadline past the end of time is never.
    fn deadline_after(&self, timeout: Option<Duration>) -> Option<Duration> {
        timeout.and_then(|t| self.clock.now().checked_add(t))
    }
}
