//! Reducers over a sequence: forall, exists, count, count_not, zipped_forall.

use typeseq_foundation::{Descriptor, Error, Pair, Result, TypeSequence};

/// Returns true iff `predicate` holds for every element.
///
/// Vacuously true on the empty sequence.
#[must_use]
pub fn forall(seq: &TypeSequence, predicate: impl Fn(&Descriptor) -> bool) -> bool {
    seq.iter().all(predicate)
}

/// Returns true iff `predicate` holds for at least one element.
///
/// False on the empty sequence.
#[must_use]
pub fn exists(seq: &TypeSequence, predicate: impl Fn(&Descriptor) -> bool) -> bool {
    seq.iter().any(predicate)
}

/// Counts the elements for which `predicate` holds.
#[must_use]
pub fn count(seq: &TypeSequence, predicate: impl Fn(&Descriptor) -> bool) -> usize {
    seq.iter().filter(|&d| predicate(d)).count()
}

/// Counts the elements for which `predicate` does not hold.
#[must_use]
pub fn count_not(seq: &TypeSequence, predicate: impl Fn(&Descriptor) -> bool) -> usize {
    seq.iter().filter(|&d| !predicate(d)).count()
}

/// Returns true iff every element is a [`Pair`].
#[must_use]
pub fn is_zipped(seq: &TypeSequence) -> bool {
    forall(seq, Descriptor::is_pair)
}

/// Returns true iff `descriptor` is itself a nested sequence.
#[must_use]
pub fn is_type_list(descriptor: &Descriptor) -> bool {
    descriptor.is_sequence()
}

/// Returns true iff the binary `predicate` holds on every `(first, second)`.
///
/// Vacuously true on the empty sequence.
///
/// # Errors
///
/// Returns `NotAPair` if some element is not a pair.
pub fn zipped_forall(
    seq: &TypeSequence,
    predicate: impl Fn(&Descriptor, &Descriptor) -> bool,
) -> Result<bool> {
    let pairs = expect_pairs(seq).map_err(|e| e.in_operation("zipped_forall"))?;
    Ok(pairs
        .into_iter()
        .all(|pair| predicate(pair.first(), pair.second())))
}

/// Borrows every element as a pair, or reports the first that is not.
pub(crate) fn expect_pairs(seq: &TypeSequence) -> Result<Vec<&Pair>> {
    seq.iter()
        .enumerate()
        .map(|(index, d)| {
            d.as_pair()
                .ok_or_else(|| Error::not_a_pair(index, d.clone()))
        })
        .collect()
}
