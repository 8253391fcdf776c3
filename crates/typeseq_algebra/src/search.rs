//! Left-to-right search: find, find_if.
//!
//! Searches stop at the first match. The `_from` variants take a `base`: the
//! position attributed to the head of the sequence, so that searching the
//! tail of an enclosing sequence starting at `base` reports positions in the
//! enclosing sequence.

use typeseq_foundation::{Descriptor, TypeSequence};

/// Returns the position of the first element equal to `target`.
#[must_use]
pub fn find(seq: &TypeSequence, target: &Descriptor) -> Option<usize> {
    find_from(seq, target, 0)
}

/// Like [`find`], reporting positions relative to `base`.
#[must_use]
pub fn find_from(seq: &TypeSequence, target: &Descriptor, base: usize) -> Option<usize> {
    find_if_from(seq, |d| d == target, base)
}

/// Returns the position of the first element satisfying `predicate`.
#[must_use]
pub fn find_if(seq: &TypeSequence, predicate: impl Fn(&Descriptor) -> bool) -> Option<usize> {
    find_if_from(seq, predicate, 0)
}

/// Like [`find_if`], reporting positions relative to `base`.
#[must_use]
pub fn find_if_from(
    seq: &TypeSequence,
    predicate: impl Fn(&Descriptor) -> bool,
    base: usize,
) -> Option<usize> {
    seq.iter().position(predicate).map(|pos| base + pos)
}
