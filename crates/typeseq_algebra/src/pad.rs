//! Resizing: pad_right, pad_left, trim.
//!
//! Right padding truncates when the target is smaller than the source; left
//! padding fails instead.

use typeseq_foundation::{Descriptor, Error, Result, TypeSequence};

use crate::structure::{first_n, pop_back};

/// Resizes `seq` to exactly `n` elements, appending `fill` as needed.
///
/// If `n` is smaller than the sequence, the result is `first_n(seq, n)`.
#[must_use]
pub fn pad_right(seq: &TypeSequence, n: usize, fill: &Descriptor) -> TypeSequence {
    if n < seq.len() {
        // n < len, so the slice cannot fail
        return first_n(seq, n).unwrap_or_default();
    }
    let mut out = seq.clone();
    while out.len() < n {
        out = out.push_back(fill.clone());
    }
    out
}

/// Extends `seq` to exactly `n` elements, prepending `fill` as needed.
///
/// # Errors
///
/// Returns `TargetSmallerThanSource` if `n < seq.len()`.
pub fn pad_left(seq: &TypeSequence, n: usize, fill: &Descriptor) -> Result<TypeSequence> {
    if n < seq.len() {
        return Err(Error::target_smaller_than_source(n, seq.len()).in_operation("pad_left"));
    }
    let mut out = seq.clone();
    while out.len() < n {
        out = out.push_front(fill.clone());
    }
    Ok(out)
}

/// Drops trailing elements equal to `sentinel`.
#[must_use]
pub fn trim(seq: &TypeSequence, sentinel: &Descriptor) -> TypeSequence {
    let mut out = seq.clone();
    while !out.is_empty() && out.back() == sentinel {
        out = pop_back(&out);
    }
    out
}
