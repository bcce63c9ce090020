#![cfg(feature = "collections")]
//! Property-based tests for List.
//!
//! Each lazy operation is checked against the matching eager operation on
//! `Vec`.

use proptest::prelude::*;
use strata::collections::List;

// =============================================================================
// Strategies for Generating Test Data
// =============================================================================

fn arbitrary_elements(max_size: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-100i32..100, 0..max_size)
}

// =============================================================================
// Slicing Laws
// =============================================================================

proptest! {
    /// Law: take(n) keeps min(n, len) leading elements.
    #[test]
    fn prop_take_matches_vec(elements in arbitrary_elements(40), count in 0usize..50) {
        let list: List<i32> = elements.iter().copied().collect();
        let expected: Vec<i32> = elements.iter().copied().take(count).collect();
        prop_assert_eq!(list.take(count).to_vec(), expected);
    }

    /// Law: drop_first(n) ++ take(n) == list.
    #[test]
    fn prop_take_and_drop_first_partition(elements in arbitrary_elements(40), count in 0usize..50) {
        let list: List<i32> = elements.iter().copied().collect();
        let rejoined = list.take(count).append(&list.drop_first(count));
        prop_assert_eq!(rejoined.to_vec(), elements);
    }

    /// Law: drop_last(n) keeps len - n leading elements, or none.
    #[test]
    fn prop_drop_last_matches_vec(elements in arbitrary_elements(40), count in 0usize..50) {
        let list: List<i32> = elements.iter().copied().collect();
        let keep = elements.len().saturating_sub(count);
        prop_assert_eq!(list.drop_last(count).to_vec(), elements[..keep].to_vec());
    }

    /// Law: take_while(p) ++ drop_while(p) == list.
    #[test]
    fn prop_take_while_and_drop_while_partition(elements in arbitrary_elements(40), bound: i32) {
        let list: List<i32> = elements.iter().copied().collect();
        let prefix = list.take_while(move |element| *element < bound);
        let suffix = list.drop_while(|element| *element < bound);
        prop_assert_eq!(prefix.append(&suffix).to_vec(), elements);
    }
}

// =============================================================================
// Transformation Laws
// =============================================================================

proptest! {
    /// Law: map and filter agree with the iterator adapters.
    #[test]
    fn prop_map_filter_match_iterator(elements in arbitrary_elements(40)) {
        let list: List<i32> = elements.iter().copied().collect();
        let expected: Vec<i32> = elements
            .iter()
            .map(|element| element * 2)
            .filter(|element| element % 3 != 0)
            .collect();
        let actual = list.map(|element| element * 2).filter(|element| element % 3 != 0);
        prop_assert_eq!(actual.to_vec(), expected);
    }

    /// Law: zip stops at the shorter list.
    #[test]
    fn prop_zip_matches_iterator(left in arbitrary_elements(30), right in arbitrary_elements(30)) {
        let left_list: List<i32> = left.iter().copied().collect();
        let right_list: List<i32> = right.iter().copied().collect();
        let expected: Vec<(i32, i32)> = left.iter().copied().zip(right.iter().copied()).collect();
        prop_assert_eq!(left_list.zip(&right_list).to_vec(), expected);
    }

    /// Law: reversed().reversed() == list, and len is preserved.
    #[test]
    fn prop_reversed_is_involutive(elements in arbitrary_elements(40)) {
        let list: List<i32> = elements.iter().copied().collect();
        let reversed = list.reversed();
        prop_assert_eq!(reversed.len(), list.len());
        prop_assert_eq!(reversed.reversed(), list);
    }

    /// Law: get(i) agrees with indexing the source sequence.
    #[test]
    fn prop_get_matches_vec(elements in arbitrary_elements(40), index in 0usize..50) {
        let list: List<i32> = elements.iter().copied().collect();
        prop_assert_eq!(list.get(index), elements.get(index));
    }
}
