//! Partitioning into maximal runs: group_by.

use typeseq_foundation::{Descriptor, TypeSequence};

/// Partitions `seq` into non-empty groups of adjacent elements.
///
/// Walking left to right, each element is tested with
/// `adjacent(element, last)` where `last` is the most recent element of the
/// current group. If the test holds the element joins that group, otherwise
/// it starts a new one. The first element always starts the first group.
///
/// The result is a sequence of [`Descriptor::Seq`] groups whose
/// concatenation is `seq`. The empty sequence yields no groups.
#[must_use]
pub fn group_by(
    seq: &TypeSequence,
    adjacent: impl Fn(&Descriptor, &Descriptor) -> bool,
) -> TypeSequence {
    let mut elements = seq.iter();
    let Some(first) = elements.next() else {
        return TypeSequence::new();
    };

    let mut closed = TypeSequence::new();
    let mut current = TypeSequence::singleton(first.clone());
    for element in elements {
        if adjacent(element, current.back()) {
            current = current.push_back(element.clone());
        } else {
            closed = closed.push_back(Descriptor::Seq(current));
            current = TypeSequence::singleton(element.clone());
        }
    }
    closed.push_back(Descriptor::Seq(current))
}
