//! Type descriptors: the elements of a [`TypeSequence`].

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::pair::Pair;
use crate::sequence::TypeSequence;

/// A token denoting a data shape.
///
/// Descriptors are compared structurally: two descriptors are equal when
/// they have the same variant and equal payloads.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Descriptor {
    /// The unit shape. Doubles as the sentinel returned by `head`/`back`
    /// of an empty sequence and as the default padding element.
    #[default]
    Void,
    /// Boolean.
    Bool,
    /// Signed or unsigned integer of any width.
    Int,
    /// Floating point of any width.
    Float,
    /// Owned or borrowed string.
    String,
    /// Interned constant used as a message tag.
    Atom,
    /// A user type, identified by its registered name.
    Named(Arc<str>),
    /// A build-stage integral constant, e.g. a position from `zip_with_index`.
    Index(usize),
    /// Two descriptors paired together.
    Pair(Pair),
    /// A nested sequence, e.g. one group produced by `group_by`.
    Seq(TypeSequence),
}

impl Descriptor {
    /// Creates a named user descriptor.
    #[must_use]
    pub fn named(name: impl Into<Arc<str>>) -> Self {
        Self::Named(name.into())
    }

    /// Creates a pair descriptor.
    #[must_use]
    pub fn pair(first: Descriptor, second: Descriptor) -> Self {
        Self::Pair(Pair::new(first, second))
    }

    /// Returns true if this is the `Void` descriptor.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    /// Returns true if this descriptor is a [`Pair`].
    #[must_use]
    pub const fn is_pair(&self) -> bool {
        matches!(self, Self::Pair(_))
    }

    /// Returns true if this descriptor is a nested [`TypeSequence`].
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Seq(_))
    }

    /// Returns the pair if this descriptor is one.
    #[must_use]
    pub const fn as_pair(&self) -> Option<&Pair> {
        match self {
            Self::Pair(pair) => Some(pair),
            _ => None,
        }
    }

    /// Returns the nested sequence if this descriptor is one.
    #[must_use]
    pub const fn as_sequence(&self) -> Option<&TypeSequence> {
        match self {
            Self::Seq(seq) => Some(seq),
            _ => None,
        }
    }

    /// Returns the constant if this descriptor is an `Index`.
    #[must_use]
    pub const fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<Pair> for Descriptor {
    fn from(pair: Pair) -> Self {
        Self::Pair(pair)
    }
}

impl From<TypeSequence> for Descriptor {
    fn from(seq: TypeSequence) -> Self {
        Self::Seq(seq)
    }
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => write!(f, "void"),
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::String => write!(f, "string"),
            Self::Atom => write!(f, "atom"),
            Self::Named(name) => write!(f, "{name:?}"),
            Self::Index(n) => write!(f, "#{n}"),
            Self::Pair(pair) => write!(f, "{pair:?}"),
            Self::Seq(seq) => write!(f, "{seq:?}"),
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
