//! The sequence core: an ordered, immutable list of descriptors.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::descriptor::Descriptor;

/// Returned by `head`/`back` of the empty sequence.
static VOID: Descriptor = Descriptor::Void;

/// An ordered, immutable, fixed-length list of type descriptors.
///
/// Sequences are values: every operation that "changes" a sequence returns a
/// new one, sharing structure with the original. Cloning is O(1).
///
/// The empty sequence is the unique sequence of length 0. Its `head` and
/// `back` are [`Descriptor::Void`] and its `tail` is itself.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct TypeSequence {
    items: im::Vector<Descriptor>,
}

impl TypeSequence {
    /// Creates the empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sequence holding a single descriptor.
    #[must_use]
    pub fn singleton(descriptor: Descriptor) -> Self {
        Self {
            items: im::Vector::unit(descriptor),
        }
    }

    /// Returns the number of descriptors (the sequence's size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if this is the empty sequence.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the first descriptor, or `Void` if the sequence is empty.
    #[must_use]
    pub fn head(&self) -> &Descriptor {
        self.items.front().unwrap_or(&VOID)
    }

    /// Returns every descriptor but the first.
    ///
    /// The tail of the empty sequence is the empty sequence.
    #[must_use]
    pub fn tail(&self) -> TypeSequence {
        self.split_at(1).1
    }

    /// Returns the last descriptor, or `Void` if the sequence is empty.
    #[must_use]
    pub fn back(&self) -> &Descriptor {
        self.items.back().unwrap_or(&VOID)
    }

    /// Returns the descriptor at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Descriptor> {
        self.items.get(index)
    }

    /// Returns true if some element is structurally equal to `descriptor`.
    #[must_use]
    pub fn contains(&self, descriptor: &Descriptor) -> bool {
        self.items.iter().any(|d| d == descriptor)
    }

    /// Returns an iterator over the descriptors, front to back.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Descriptor> + ExactSizeIterator {
        self.items.iter()
    }

    /// Returns a new sequence with `descriptor` appended.
    #[must_use]
    pub fn push_back(&self, descriptor: Descriptor) -> Self {
        let mut items = self.items.clone();
        items.push_back(descriptor);
        Self { items }
    }

    /// Returns a new sequence with `descriptor` prepended.
    #[must_use]
    pub fn push_front(&self, descriptor: Descriptor) -> Self {
        let mut items = self.items.clone();
        items.push_front(descriptor);
        Self { items }
    }

    /// Returns a new sequence holding `self` followed by `other`.
    #[must_use]
    pub fn append(&self, other: &TypeSequence) -> Self {
        let mut items = self.items.clone();
        items.append(other.items.clone());
        Self { items }
    }

    /// Splits into the first `at` descriptors and the rest.
    ///
    /// `at` is clamped to the length; callers that need a contract check
    /// perform it before splitting.
    #[must_use]
    pub fn split_at(&self, at: usize) -> (Self, Self) {
        let at = at.min(self.len());
        let (left, right) = self.items.clone().split_at(at);
        (Self { items: left }, Self { items: right })
    }
}

impl fmt::Debug for TypeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for TypeSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromIterator<Descriptor> for TypeSequence {
    fn from_iter<I: IntoIterator<Item = Descriptor>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Descriptor>> for TypeSequence {
    fn from(items: Vec<Descriptor>) -> Self {
        items.into_iter().collect()
    }
}

impl<const N: usize> From<[Descriptor; N]> for TypeSequence {
    fn from(items: [Descriptor; N]) -> Self {
        items.into_iter().collect()
    }
}

impl IntoIterator for TypeSequence {
    type Item = Descriptor;
    type IntoIter = im::vector::ConsumingIter<Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a TypeSequence {
    type Item = &'a Descriptor;
    type IntoIter = im::vector::Iter<'a, Descriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Builds a [`TypeSequence`] from a list of descriptor expressions.
///
/// ```
/// use typeseq_foundation::{seq, Descriptor};
///
/// let s = seq![Descriptor::Int, Descriptor::Float];
/// assert_eq!(s.len(), 2);
/// assert!(seq![].is_empty());
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::TypeSequence::new()
    };
    ($($descriptor:expr),+ $(,)?) => {
        <$crate::TypeSequence as ::std::iter::FromIterator<$crate::Descriptor>>::from_iter([
            $($descriptor),+
        ])
    };
}
