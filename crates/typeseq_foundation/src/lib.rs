//! Type descriptors, pairs, the sequence core, and errors for typeseq.
//!
//! This crate provides:
//! - [`Descriptor`] - Tokens denoting data shapes
//! - [`Pair`] - Ordered 2-tuples of descriptors
//! - [`TypeSequence`] - Ordered, immutable lists of descriptors
//! - [`Error`] - Contract violations with context
//! - [`TypeRegistry`] - Lookup from native types to descriptors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod descriptor;
pub mod error;
pub mod pair;
pub mod registry;
pub mod sequence;

pub use descriptor::Descriptor;
pub use error::{Error, ErrorContext, ErrorKind};
pub use pair::Pair;
pub use registry::{NativeType, Registry, TypeInfo, TypeRegistry};
pub use sequence::TypeSequence;

/// Result type alias for typeseq operations.
pub type Result<T> = std::result::Result<T, Error>;
