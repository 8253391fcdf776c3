//! Behaviors: message handlers keyed by signature, plus an optional timeout.

use std::fmt;
use std::time::Duration;

use typeseq_algebra::trim;
use typeseq_foundation::{Descriptor, NativeType, Result, TypeRegistry, TypeSequence};

use crate::timeout::{GenericTimeoutDefinition, TimeoutDefinition};

/// Reduces a signature to the form used as a dispatch key.
///
/// Trailing `Void` descriptors carry no data and are dropped, so `[int, void]`
/// and `[int]` select the same handler.
#[must_use]
pub fn canonical_signature(signature: &TypeSequence) -> TypeSequence {
    trim(signature, &Descriptor::Void)
}

/// A message as seen by the dispatcher: only its shape.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Message {
    signature: TypeSequence,
}

impl Message {
    /// Creates a message with the given signature.
    #[must_use]
    pub fn new(signature: TypeSequence) -> Self {
        Self { signature }
    }

    /// Creates a message whose signature describes native types.
    ///
    /// # Errors
    ///
    /// Returns `UnknownType` if a type is not registered.
    pub fn from_types(registry: &impl TypeRegistry, types: &[NativeType]) -> Result<Self> {
        registry.describe_all(types).map(Self::new)
    }

    /// Returns the message's signature.
    #[must_use]
    pub fn signature(&self) -> &TypeSequence {
        &self.signature
    }
}

/// A message handler.
pub type Handler = Box<dyn FnMut(&Message)>;

/// An installable set of message handlers with an optional timeout.
///
/// Handlers are looked up by canonical signature. When two handlers share a
/// canonical signature the first one registered wins.
#[derive(Default)]
pub struct Behavior {
    table: im::HashMap<TypeSequence, usize>,
    handlers: Vec<Handler>,
    timeout: Option<GenericTimeoutDefinition>,
}

impl Behavior {
    /// Creates a behavior with no handlers and no timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a handler for messages matching `signature`.
    #[must_use]
    pub fn on(mut self, signature: &TypeSequence, handler: impl FnMut(&Message) + 'static) -> Self {
        let key = canonical_signature(signature);
        if !self.table.contains_key(&key) {
            self.table.insert(key, self.handlers.len());
            self.handlers.push(Box::new(handler));
        }
        self
    }

    /// Sets the timeout, replacing any previous one.
    #[must_use]
    pub fn with_timeout<F: FnMut() + 'static>(mut self, definition: TimeoutDefinition<F>) -> Self {
        self.timeout = Some(definition.into_generic());
        self
    }

    /// Returns the timeout duration, if one is set.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.as_ref().map(|t| t.timeout)
    }

    /// Returns true if some handler accepts `signature`.
    #[must_use]
    pub fn handles(&self, signature: &TypeSequence) -> bool {
        self.table.contains_key(&canonical_signature(signature))
    }

    /// Returns the number of distinct handlers.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Runs the handler for `message`. Returns false if none matched.
    pub(crate) fn invoke(&mut self, message: &Message) -> bool {
        let key = canonical_signature(message.signature());
        match self.table.get(&key).copied() {
            Some(slot) => {
                (self.handlers[slot])(message);
                true
            }
            None => false,
        }
    }

    /// Runs the timeout handler. Returns false if there is no timeout.
    pub(crate) fn fire_timeout(&mut self) -> bool {
        match self.timeout.as_mut() {
            Some(definition) => {
                (definition.handler)();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Behavior")
            .field("signatures", &self.table.keys().collect::<Vec<_>>())
            .field("timeout", &self.timeout())
            .finish_non_exhaustive()
    }
}
