//! Cross-combinator laws over generated sequences.

use proptest::prelude::*;
use typeseq_algebra::{
    concat, count, count_not, distinct, exists, filter_by_value, find, forall, group_by,
    is_zipped, map, pad_right, reverse, trim, unzip, zip_with_index,
};
use typeseq_foundation::{Descriptor, TypeSequence};

fn descriptor() -> impl Strategy<Value = Descriptor> {
    prop_oneof![
        Just(Descriptor::Void),
        Just(Descriptor::Int),
        Just(Descriptor::Float),
        Just(Descriptor::Atom),
        (0usize..3).prop_map(Descriptor::Index),
    ]
}

fn sequence() -> impl Strategy<Value = TypeSequence> {
    prop::collection::vec(descriptor(), 0..16).prop_map(TypeSequence::from)
}

proptest! {
    #[test]
    fn distinct_has_no_duplicates(s in sequence()) {
        let d = distinct(&s);
        for x in &d {
            prop_assert_eq!(filter_by_value(&d, x).len(), 1);
        }
        prop_assert!(forall(&s, |x| d.contains(x)));
    }

    #[test]
    fn distinct_preserves_first_occurrence_order(s in sequence()) {
        let d = distinct(&s);
        let positions: Vec<usize> = d.iter().filter_map(|x| find(&s, x)).collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn count_and_count_not_cover(s in sequence(), target in descriptor()) {
        let matches = |d: &Descriptor| *d == target;
        prop_assert_eq!(count(&s, matches) + count_not(&s, matches), s.len());
        prop_assert_eq!(exists(&s, matches), count(&s, matches) > 0);
    }

    #[test]
    fn reverse_swaps_head_and_back(s in sequence()) {
        let r = reverse(&s);
        prop_assert_eq!(r.head(), s.back());
        prop_assert_eq!(r.back(), s.head());
    }

    #[test]
    fn zip_with_index_round_trips(s in sequence()) {
        let indexed = zip_with_index(&s);
        prop_assert!(is_zipped(&indexed));

        let (positions, elements) = unzip(&indexed).expect("all pairs");
        prop_assert_eq!(elements, s.clone());
        let expected: TypeSequence = (0..s.len()).map(Descriptor::Index).collect();
        prop_assert_eq!(positions, expected);
    }

    #[test]
    fn trim_is_idempotent(s in sequence()) {
        let once = trim(&s, &Descriptor::Void);
        prop_assert_eq!(trim(&once, &Descriptor::Void), once.clone());
        prop_assert!(once.is_empty() || *once.back() != Descriptor::Void);
    }

    #[test]
    fn pad_right_then_trim(s in sequence(), extra in 0usize..5) {
        let trimmed = trim(&s, &Descriptor::Void);
        let padded = pad_right(&trimmed, trimmed.len() + extra, &Descriptor::Void);
        prop_assert_eq!(trim(&padded, &Descriptor::Void), trimmed);
    }

    #[test]
    fn group_by_equal_yields_uniform_runs(s in sequence()) {
        let groups = group_by(&s, |a, b| a == b);
        for group in &groups {
            let run = group.as_sequence().expect("groups are sequences");
            prop_assert!(!run.is_empty());
            prop_assert!(forall(run, |d| d == run.head()));
        }
        // Adjacent groups never share a value.
        let heads = map(&groups, |g| g.as_sequence().map(|r| r.head().clone()).unwrap_or_default());
        prop_assert!(heads.iter().zip(heads.iter().skip(1)).all(|(a, b)| a != b));
    }

    #[test]
    fn group_by_always_true_is_one_group(s in sequence()) {
        let groups = group_by(&s, |_, _| true);
        if s.is_empty() {
            prop_assert!(groups.is_empty());
        } else {
            prop_assert_eq!(groups.len(), 1);
            prop_assert_eq!(groups.head().as_sequence(), Some(&s));
        }
    }

    #[test]
    fn group_by_never_splits_everything(s in sequence()) {
        let groups = group_by(&s, |_, _| false);
        prop_assert_eq!(groups.len(), s.len());
        let runs: Vec<TypeSequence> = groups.iter().filter_map(|g| g.as_sequence().cloned()).collect();
        prop_assert_eq!(concat(runs.iter()), s);
    }
}
