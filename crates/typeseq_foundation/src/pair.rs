//! Ordered pairs of descriptors.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::descriptor::Descriptor;

/// An ordered 2-tuple of descriptors.
///
/// Produced by `zip` and `zip_with_index`; consumed by `unzip`,
/// `zipped_forall` and `zipped_map`. Cloning is O(1).
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pair {
    first: Arc<Descriptor>,
    second: Arc<Descriptor>,
}

impl Pair {
    /// Creates a new pair.
    #[must_use]
    pub fn new(first: Descriptor, second: Descriptor) -> Self {
        Self {
            first: Arc::new(first),
            second: Arc::new(second),
        }
    }

    /// Returns the first component.
    #[must_use]
    pub fn first(&self) -> &Descriptor {
        &self.first
    }

    /// Returns the second component.
    #[must_use]
    pub fn second(&self) -> &Descriptor {
        &self.second
    }

    /// Returns both components as owned descriptors.
    #[must_use]
    pub fn into_parts(self) -> (Descriptor, Descriptor) {
        (
            Arc::unwrap_or_clone(self.first),
            Arc::unwrap_or_clone(self.second),
        )
    }
}

impl fmt::Debug for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.first, self.second)
    }
}
