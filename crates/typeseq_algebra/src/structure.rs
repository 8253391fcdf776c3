//! Structural combinators: reverse, concat, push/pop, slicing, random access.

use typeseq_foundation::{Descriptor, Error, Result, TypeSequence};

/// Returns the elements of `seq` in reverse order.
///
/// Moves the head of the remaining input onto the front of an accumulator
/// until the input is exhausted.
#[must_use]
pub fn reverse(seq: &TypeSequence) -> TypeSequence {
    seq.iter()
        .fold(TypeSequence::new(), |acc, d| acc.push_front(d.clone()))
}

/// Concatenates two sequences.
#[must_use]
pub fn append(left: &TypeSequence, right: &TypeSequence) -> TypeSequence {
    left.append(right)
}

/// Concatenates any number of sequences, folding pairwise left to right.
///
/// A single argument is returned unchanged; no arguments yield the empty
/// sequence.
#[must_use]
pub fn concat<'a>(lists: impl IntoIterator<Item = &'a TypeSequence>) -> TypeSequence {
    let mut lists = lists.into_iter();
    let Some(first) = lists.next() else {
        return TypeSequence::new();
    };
    lists.fold(first.clone(), |acc, next| append(&acc, next))
}

/// Returns `seq` with `descriptor` appended.
#[must_use]
pub fn push_back(seq: &TypeSequence, descriptor: Descriptor) -> TypeSequence {
    seq.push_back(descriptor)
}

/// Returns `seq` with `descriptor` prepended.
#[must_use]
pub fn push_front(seq: &TypeSequence, descriptor: Descriptor) -> TypeSequence {
    seq.push_front(descriptor)
}

/// Alias of [`push_front`].
#[must_use]
pub fn prepend(seq: &TypeSequence, descriptor: Descriptor) -> TypeSequence {
    push_front(seq, descriptor)
}

/// Returns every element but the last.
///
/// Equal to `reverse(tail(reverse(seq)))`; in particular the empty sequence
/// maps to itself.
#[must_use]
pub fn pop_back(seq: &TypeSequence) -> TypeSequence {
    let keep = seq.len().saturating_sub(1);
    seq.split_at(keep).0
}

/// Returns the first `n` elements.
///
/// # Errors
///
/// Returns `LengthExceeded` if `n > seq.len()`.
pub fn first_n(seq: &TypeSequence, n: usize) -> Result<TypeSequence> {
    if n == 0 {
        return Ok(TypeSequence::new());
    }
    if n > seq.len() {
        return Err(Error::length_exceeded(n, seq.len()).in_operation("first_n"));
    }
    Ok(seq.split_at(n).0)
}

/// Returns the last `n` elements.
///
/// # Errors
///
/// Returns `LengthExceeded` if `n > seq.len()`.
pub fn last_n(seq: &TypeSequence, n: usize) -> Result<TypeSequence> {
    if n == 0 {
        return Ok(TypeSequence::new());
    }
    if n > seq.len() {
        return Err(Error::length_exceeded(n, seq.len()).in_operation("last_n"));
    }
    Ok(seq.split_at(seq.len() - n).1)
}

/// Returns the element at position `n`.
///
/// # Errors
///
/// Returns `IndexOutOfRange` if `n >= seq.len()`.
pub fn at(seq: &TypeSequence, n: usize) -> Result<&Descriptor> {
    seq.get(n)
        .ok_or_else(|| Error::index_out_of_range(n, seq.len()).in_operation("at"))
}
