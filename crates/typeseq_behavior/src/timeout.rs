//! Timeout definitions: a deadline paired with a fallback handler.

use std::fmt;
use std::time::Duration;

use crate::behavior::Behavior;

/// A timeout definition with its handler boxed.
pub type GenericTimeoutDefinition = TimeoutDefinition<Box<dyn FnMut()>>;

/// Pairs a relative deadline with a zero-argument handler.
///
/// The handler runs when the deadline elapses before a message is
/// dequeued. Install it through [`TimeoutDefinition::as_behavior`] or
/// [`Behavior::with_timeout`].
#[derive(Clone)]
pub struct TimeoutDefinition<F> {
    /// How long to wait for a message.
    pub timeout: Duration,
    /// What to run when nothing arrives in time.
    pub handler: F,
}

impl<F: FnMut() + 'static> TimeoutDefinition<F> {
    /// Creates a timeout definition.
    #[must_use]
    pub fn new(timeout: Duration, handler: F) -> Self {
        Self { timeout, handler }
    }

    /// Erases the handler's concrete type.
    #[must_use]
    pub fn into_generic(self) -> GenericTimeoutDefinition {
        TimeoutDefinition {
            timeout: self.timeout,
            handler: Box::new(self.handler),
        }
    }

    /// Builds a behavior that handles no messages and only times out.
    #[must_use]
    pub fn as_behavior(self) -> Behavior {
        Behavior::new().with_timeout(self)
    }
}

impl<F> fmt::Debug for TimeoutDefinition<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimeoutDefinition")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Pairs `duration` with `handler`.
#[must_use]
pub fn make_timeout<F: FnMut() + 'static>(duration: Duration, handler: F) -> TimeoutDefinition<F> {
    TimeoutDefinition::new(duration, handler)
}

/// Turns a timeout definition into an installable behavior.
#[must_use]
pub fn as_behavior<F: FnMut() + 'static>(definition: TimeoutDefinition<F>) -> Behavior {
    definition.as_behavior()
}
