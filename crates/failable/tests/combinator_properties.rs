//! Property-based tests for the list combinators.
//!
//! Properties verified:
//! - Flattening all-success lists preserves payload order and length
//! - The first failure in sequence order wins, regardless of what follows
//! - `extract_payloads` always yields one entry per element
//! - `any_failed` agrees with `first_failure`

use failable::{Failable, any_failed, extract_payloads, first_failure, flatten_results};
use proptest::prelude::*;

fn successes(xs: &[i32]) -> Vec<Failable<i32, String>> {
    xs.iter().copied().map(Failable::success).collect()
}

fn arb_failable() -> impl Strategy<Value = Failable<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Failable::success),
        "[a-z]{0,6}".prop_map(Failable::failure),
        Just(Failable::empty()),
    ]
}

proptest! {
    /// Property: a list with no failures flattens to a success whose payload
    /// is the input payloads, in order.
    #[test]
    fn prop_all_success_flattens_in_order(xs in prop::collection::vec(any::<i32>(), 0..50)) {
        let flattened = flatten_results(successes(&xs));
        prop_assert!(flattened.is_success());
        prop_assert_eq!(flattened.payload(), Some(&xs));
    }

    /// Property: the first failure short-circuits flattening, no matter how
    /// many successes or later failures surround it.
    #[test]
    fn prop_first_failure_wins(
        before in prop::collection::vec(any::<i32>(), 0..20),
        after in prop::collection::vec(any::<i32>(), 0..20),
        reason in "[a-z]{1,8}",
    ) {
        let mut list = successes(&before);
        list.push(Failable::failure(reason.clone()));
        list.extend(successes(&after));
        list.push(Failable::failure("later".to_string()));

        prop_assert!(any_failed(&list));
        prop_assert_eq!(
            first_failure(&list).and_then(Failable::failure_payload),
            Some(&reason)
        );

        let flattened = flatten_results(list);
        prop_assert!(flattened.is_failure());
        prop_assert_eq!(flattened.failure_payload(), Some(&reason));
    }

    /// Property: extraction is length-preserving and order-preserving over
    /// arbitrary mixes of kinds.
    #[test]
    fn prop_extract_is_length_preserving(
        list in prop::collection::vec(arb_failable(), 0..50),
    ) {
        let payloads = extract_payloads(&list);
        prop_assert_eq!(payloads.len(), list.len());
        for (element, extracted) in list.iter().zip(&payloads) {
            prop_assert_eq!(element.payload(), *extracted);
        }
    }

    /// Property: `any_failed` is exactly "a first failure exists".
    #[test]
    fn prop_any_failed_matches_first_failure(
        list in prop::collection::vec(arb_failable(), 0..50),
    ) {
        prop_assert_eq!(any_failed(&list), first_failure(&list).is_some());
    }

    /// Property: flattening a failure-free list keeps one payload per
    /// non-empty element.
    #[test]
    fn prop_flatten_drops_only_empties(
        list in prop::collection::vec(
            prop_oneof![
                any::<i32>().prop_map(Failable::<i32, String>::success),
                Just(Failable::empty()),
            ],
            0..50,
        ),
    ) {
        let success_count = list.iter().filter(|x| !x.is_empty()).count();
        let flattened = flatten_results(list);
        prop_assert_eq!(flattened.payload().map(Vec::len), Some(success_count));
    }
}
