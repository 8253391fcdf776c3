//! Concrete combinator behavior on small, hand-written sequences.

use typeseq::seq;
use typeseq_algebra::{
    at, concat, count, count_not, distinct, exists, filter, filter_by_value, filter_not, find,
    find_from, find_if, first_n, forall, group_by, is_type_list, is_zipped, last_n, map, pad_left,
    pad_right, pop_back, prepend, push_back, reverse, trim, unzip, zip, zip_with_index,
    zipped_forall, zipped_map,
};
use typeseq_foundation::{Descriptor, TypeSequence};

/// [Int, Float, Int, String]
fn sample() -> TypeSequence {
    seq![
        Descriptor::Int,
        Descriptor::Float,
        Descriptor::Int,
        Descriptor::String
    ]
}

fn numbers(values: &[usize]) -> TypeSequence {
    values.iter().copied().map(Descriptor::Index).collect()
}

fn is_int(d: &Descriptor) -> bool {
    *d == Descriptor::Int
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn filter_by_value_keeps_matches() {
    assert_eq!(
        filter_by_value(&sample(), &Descriptor::Int),
        seq![Descriptor::Int, Descriptor::Int]
    );
}

#[test]
fn distinct_keeps_first_occurrences() {
    assert_eq!(
        distinct(&sample()),
        seq![Descriptor::Int, Descriptor::Float, Descriptor::String]
    );
}

#[test]
fn filter_and_filter_not_preserve_order() {
    let s = sample();
    assert_eq!(filter(&s, is_int), seq![Descriptor::Int, Descriptor::Int]);
    assert_eq!(
        filter_not(&s, is_int),
        seq![Descriptor::Float, Descriptor::String]
    );
}

// =============================================================================
// Quantifiers
// =============================================================================

#[test]
fn quantifiers_on_sample() {
    let s = sample();
    assert!(exists(&s, is_int));
    assert!(!forall(&s, is_int));
    assert_eq!(count(&s, is_int), 2);
    assert_eq!(count_not(&s, is_int), 2);
}

#[test]
fn quantifiers_on_empty() {
    let empty = TypeSequence::new();
    assert!(forall(&empty, is_int));
    assert!(!exists(&empty, is_int));
    assert_eq!(count(&empty, is_int), 0);
    assert!(is_zipped(&empty));
}

#[test]
fn type_list_recognition() {
    assert!(is_type_list(&Descriptor::from(sample())));
    assert!(!is_type_list(&Descriptor::Int));
}

// =============================================================================
// Structure
// =============================================================================

#[test]
fn reverse_and_at() {
    let r = reverse(&sample());
    assert_eq!(at(&r, 0).ok(), Some(&Descriptor::String));
    assert_eq!(at(&r, 3).ok(), Some(&Descriptor::Int));
}

#[test]
fn slicing() {
    let s = sample();
    assert_eq!(
        first_n(&s, 2).ok(),
        Some(seq![Descriptor::Int, Descriptor::Float])
    );
    assert_eq!(
        last_n(&s, 2).ok(),
        Some(seq![Descriptor::Int, Descriptor::String])
    );
    assert_eq!(first_n(&s, 0).ok(), Some(TypeSequence::new()));
    assert_eq!(last_n(&s, 4).ok(), Some(s));
}

#[test]
fn concat_many() {
    let a = numbers(&[1, 2]);
    let b = numbers(&[]);
    let c = numbers(&[3]);
    assert_eq!(concat([&a, &b, &c]), numbers(&[1, 2, 3]));
}

#[test]
fn push_prepend_pop() {
    let s = numbers(&[1, 2]);
    assert_eq!(push_back(&s, Descriptor::Index(3)), numbers(&[1, 2, 3]));
    assert_eq!(prepend(&s, Descriptor::Index(0)), numbers(&[0, 1, 2]));
    assert_eq!(pop_back(&s), numbers(&[1]));
    assert_eq!(pop_back(&TypeSequence::new()), TypeSequence::new());
}

// =============================================================================
// Search
// =============================================================================

#[test]
fn find_first_position() {
    let s = sample();
    assert_eq!(find(&s, &Descriptor::Int), Some(0));
    assert_eq!(find(&s, &Descriptor::String), Some(3));
    assert_eq!(find(&s, &Descriptor::Bool), None);
    assert_eq!(find_if(&s, |d| *d != Descriptor::Int), Some(1));
}

#[test]
fn find_from_offsets_result() {
    assert_eq!(find_from(&sample(), &Descriptor::Float, 10), Some(11));
    assert_eq!(find_from(&sample(), &Descriptor::Bool, 10), None);
}

// =============================================================================
// Resizing
// =============================================================================

#[test]
fn pad_right_extends() {
    assert_eq!(
        pad_right(&seq![Descriptor::Int, Descriptor::Float], 4, &Descriptor::Void),
        seq![
            Descriptor::Int,
            Descriptor::Float,
            Descriptor::Void,
            Descriptor::Void
        ]
    );
}

#[test]
fn pad_right_truncates() {
    assert_eq!(
        pad_right(
            &seq![Descriptor::Int, Descriptor::Float, Descriptor::Bool],
            2,
            &Descriptor::Void
        ),
        seq![Descriptor::Int, Descriptor::Float]
    );
}

#[test]
fn pad_left_prepends() {
    assert_eq!(
        pad_left(&seq![Descriptor::Int], 3, &Descriptor::Void).ok(),
        Some(seq![Descriptor::Void, Descriptor::Void, Descriptor::Int])
    );
}

#[test]
fn trim_undoes_pad_right() {
    let s = seq![Descriptor::Void, Descriptor::Int];
    let padded = pad_right(&s, 6, &Descriptor::Void);
    assert_eq!(trim(&padded, &Descriptor::Void), s);
}

// =============================================================================
// Zipping
// =============================================================================

#[test]
fn zip_unzip() {
    let a = numbers(&[1, 2, 3]);
    let b = seq![Descriptor::Int, Descriptor::Float, Descriptor::Bool];
    let zipped = zip(&a, &b).expect("equal sizes");

    assert!(is_zipped(&zipped));
    assert_eq!(
        zipped.head(),
        &Descriptor::pair(Descriptor::Index(1), Descriptor::Int)
    );
    assert_eq!(unzip(&zipped).ok(), Some((a, b)));
}

#[test]
fn zip_with_index_numbers_from_zero() {
    let indexed = zip_with_index(&sample());
    assert_eq!(indexed.len(), 4);
    assert_eq!(
        indexed.back(),
        &Descriptor::pair(Descriptor::Index(3), Descriptor::String)
    );
}

#[test]
fn zipped_helpers() {
    let zipped = zip(&numbers(&[1, 5]), &numbers(&[2, 4])).expect("equal sizes");

    let ordered = zipped_forall(&zipped, |a, b| a.as_index() < b.as_index());
    assert_eq!(ordered.ok(), Some(false));

    let maxima = zipped_map(&zipped, |a, b| {
        if a.as_index() >= b.as_index() {
            a.clone()
        } else {
            b.clone()
        }
    });
    assert_eq!(maxima.ok(), Some(numbers(&[2, 5])));
}

#[test]
fn map_wraps_elements() {
    let wrapped = map(&numbers(&[1, 2]), |d| {
        Descriptor::from(TypeSequence::singleton(d.clone()))
    });
    assert!(forall(&wrapped, is_type_list));
}

// =============================================================================
// Grouping
// =============================================================================

#[test]
fn group_by_equal() {
    let groups = group_by(&numbers(&[1, 1, 2, 2, 2, 3]), |a, b| a == b);
    let expected: TypeSequence = [&[1, 1][..], &[2, 2, 2], &[3]]
        .iter()
        .map(|g| Descriptor::from(numbers(g)))
        .collect();
    assert_eq!(groups, expected);
}

#[test]
fn group_by_empty() {
    assert!(group_by(&TypeSequence::new(), |a, b| a == b).is_empty());
}
