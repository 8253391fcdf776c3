//! Stable selection: filter, filter_not, filter by value, distinct.

use typeseq_foundation::{Descriptor, TypeSequence};

/// Keeps the elements whose flag in `selected` is set.
fn select(seq: &TypeSequence, selected: &[bool]) -> TypeSequence {
    seq.iter()
        .zip(selected)
        .filter_map(|(d, &keep)| keep.then(|| d.clone()))
        .collect()
}

/// Returns the elements for which `predicate` holds, in order.
#[must_use]
pub fn filter(seq: &TypeSequence, predicate: impl Fn(&Descriptor) -> bool) -> TypeSequence {
    let selected: Vec<bool> = seq.iter().map(predicate).collect();
    select(seq, &selected)
}

/// Returns the elements for which `predicate` does not hold, in order.
#[must_use]
pub fn filter_not(seq: &TypeSequence, predicate: impl Fn(&Descriptor) -> bool) -> TypeSequence {
    let selected: Vec<bool> = seq.iter().map(|d| !predicate(d)).collect();
    select(seq, &selected)
}

/// Returns the elements equal to `value`.
#[must_use]
pub fn filter_by_value(seq: &TypeSequence, value: &Descriptor) -> TypeSequence {
    filter(seq, |d| d == value)
}

/// Returns the elements not equal to `value`.
#[must_use]
pub fn filter_not_by_value(seq: &TypeSequence, value: &Descriptor) -> TypeSequence {
    filter_not(seq, |d| d == value)
}

/// Keeps the first occurrence of each element and drops later duplicates.
///
/// `distinct([h | t]) = [h] ++ distinct(filter_not_by_value(t, h))`.
#[must_use]
pub fn distinct(seq: &TypeSequence) -> TypeSequence {
    let mut out = TypeSequence::new();
    let mut rest = seq.clone();
    while !rest.is_empty() {
        let head = rest.head().clone();
        rest = filter_not_by_value(&rest.tail(), &head);
        out = out.push_back(head);
    }
    out
}
