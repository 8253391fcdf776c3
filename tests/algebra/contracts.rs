//! Contract violations surface as errors with the failing combinator named.

use typeseq::seq;
use typeseq_algebra::{at, first_n, last_n, pad_left, unzip, zip, zipped_forall, zipped_map};
use typeseq_foundation::{Descriptor, ErrorKind, TypeSequence};

fn three() -> TypeSequence {
    seq![Descriptor::Int, Descriptor::Float, Descriptor::Bool]
}

fn operation(err: &typeseq_foundation::Error) -> Option<&'static str> {
    err.context.as_ref().and_then(|c| c.operation)
}

#[test]
fn zip_length_mismatch() {
    let err = zip(&three(), &seq![Descriptor::Int]).expect_err("sizes differ");
    assert!(matches!(err.kind, ErrorKind::LengthMismatch { left: 3, right: 1 }));
    assert_eq!(operation(&err), Some("zip_with"));
    assert_eq!(err.context.map(|c| c.stack), Some(vec!["zip"]));
}

#[test]
fn at_out_of_range() {
    let err = at(&three(), 3).expect_err("index 3 of 3");
    assert!(matches!(err.kind, ErrorKind::IndexOutOfRange { index: 3, length: 3 }));
    assert_eq!(operation(&err), Some("at"));
}

#[test]
fn slicing_past_the_end() {
    let err = first_n(&three(), 4).expect_err("only 3 elements");
    assert!(matches!(
        err.kind,
        ErrorKind::LengthExceeded {
            requested: 4,
            length: 3
        }
    ));
    assert_eq!(operation(&err), Some("first_n"));

    let err = last_n(&TypeSequence::new(), 1).expect_err("empty");
    assert_eq!(operation(&err), Some("last_n"));
}

#[test]
fn pad_left_undersized_target() {
    let err = pad_left(&three(), 2, &Descriptor::Void).expect_err("target too small");
    assert!(matches!(
        err.kind,
        ErrorKind::TargetSmallerThanSource { target: 2, length: 3 }
    ));
}

#[test]
fn unzip_rejects_non_pairs() {
    let mixed = seq![
        Descriptor::pair(Descriptor::Int, Descriptor::Int),
        Descriptor::Float
    ];
    let err = unzip(&mixed).expect_err("second element is not a pair");
    assert!(matches!(err.kind, ErrorKind::NotAPair { index: 1, .. }));
    assert_eq!(operation(&err), Some("unzip"));
}

#[test]
fn zipped_helpers_reject_non_pairs() {
    let flat = three();
    assert!(zipped_forall(&flat, |_, _| true).is_err());
    assert!(zipped_map(&flat, |a, _| a.clone()).is_err());
}
