//! Element-wise transforms: zip, unzip, zip_with_index, map, zipped_map.

use typeseq_foundation::{Descriptor, Error, Result, TypeSequence};

use crate::quantify::expect_pairs;

/// Pairs up elements of two equally sized sequences.
///
/// # Errors
///
/// Returns `LengthMismatch` if the sizes differ.
pub fn zip(left: &TypeSequence, right: &TypeSequence) -> Result<TypeSequence> {
    zip_with(left, right, |a, b| Descriptor::pair(a.clone(), b.clone()))
        .map_err(|e| e.in_operation("zip"))
}

/// Combines elements of two equally sized sequences with `combine`.
///
/// # Errors
///
/// Returns `LengthMismatch` if the sizes differ.
pub fn zip_with(
    left: &TypeSequence,
    right: &TypeSequence,
    combine: impl Fn(&Descriptor, &Descriptor) -> Descriptor,
) -> Result<TypeSequence> {
    if left.len() != right.len() {
        return Err(Error::length_mismatch(left.len(), right.len()).in_operation("zip_with"));
    }
    Ok(left
        .iter()
        .zip(right.iter())
        .map(|(a, b)| combine(a, b))
        .collect())
}

/// Splits a sequence of pairs into the sequences of first and second
/// components.
///
/// # Errors
///
/// Returns `NotAPair` if some element is not a pair.
pub fn unzip(seq: &TypeSequence) -> Result<(TypeSequence, TypeSequence)> {
    let pairs = expect_pairs(seq).map_err(|e| e.in_operation("unzip"))?;
    let first = pairs.iter().map(|p| p.first().clone()).collect();
    let second = pairs.iter().map(|p| p.second().clone()).collect();
    Ok((first, second))
}

/// Pairs each element with its position: `(Index(i), element)`.
#[must_use]
pub fn zip_with_index(seq: &TypeSequence) -> TypeSequence {
    seq.iter()
        .enumerate()
        .map(|(pos, d)| Descriptor::pair(Descriptor::Index(pos), d.clone()))
        .collect()
}

/// Applies `transform` to every element.
#[must_use]
pub fn map(seq: &TypeSequence, transform: impl Fn(&Descriptor) -> Descriptor) -> TypeSequence {
    seq.iter().map(transform).collect()
}

/// Applies the binary `transform` to each pair, yielding a flat sequence.
///
/// # Errors
///
/// Returns `NotAPair` if some element is not a pair.
pub fn zipped_map(
    seq: &TypeSequence,
    transform: impl Fn(&Descriptor, &Descriptor) -> Descriptor,
) -> Result<TypeSequence> {
    let pairs = expect_pairs(seq).map_err(|e| e.in_operation("zipped_map"))?;
    Ok(pairs
        .into_iter()
        .map(|p| transform(p.first(), p.second()))
        .collect())
}
