//! typeseq - Type-sequence algebra and timeout-aware behaviors
//!
//! This crate re-exports all layers of the typeseq system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: typeseq_behavior   - Behaviors, timeouts, dispatch loop
//! Layer 1: typeseq_algebra    - Pure combinators over sequences
//! Layer 0: typeseq_foundation - Descriptors, pairs, sequences, errors, registry
//! ```

pub use typeseq_algebra as algebra;
pub use typeseq_behavior as behavior;
pub use typeseq_foundation as foundation;
pub use typeseq_foundation::seq;
