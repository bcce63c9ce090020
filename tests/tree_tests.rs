#![cfg(feature = "collections")]
//! Unit tests for Tree.
//!
//! These tests cover the public API of the persistent red-black set,
//! including version sharing and borrowed lookups.

use rstest::rstest;
use strata::collections::Tree;
use strata::typeclass::Foldable;

// =============================================================================
// Construction and Queries
// =============================================================================

#[rstest]
fn test_new_is_empty() {
    let tree: Tree<i32> = Tree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.first(), None);
    assert_eq!(tree.last(), None);
    assert_eq!(format!("{tree:?}"), "[]");
}

#[rstest]
fn test_singleton() {
    let tree = Tree::singleton("only");
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.first(), Some(&"only"));
    assert_eq!(tree.last(), Some(&"only"));
}

#[rstest]
#[case(2, true)]
#[case(5, false)]
fn test_contains(#[case] key: i32, #[case] expected: bool) {
    let tree: Tree<i32> = [1, 2, 3].into_iter().collect();
    assert_eq!(tree.contains(&key), expected);
}

#[rstest]
fn test_duplicates_are_ignored() {
    let tree: Tree<i32> = [4, 4, 1, 4, 1].into_iter().collect();
    assert_eq!(tree.len(), 2);
    assert_eq!(format!("{tree:?}"), "[1, 4]");
}

#[rstest]
fn test_borrowed_lookup() {
    let tree: Tree<String> = ["delta", "alpha", "charlie"]
        .into_iter()
        .map(String::from)
        .collect();
    assert!(tree.contains("alpha"));
    assert_eq!(tree.first().map(String::as_str), Some("alpha"));
    let (rest, removed) = tree.remove("charlie").unwrap();
    assert_eq!(removed, "charlie");
    assert_eq!(rest.len(), 2);
}

// =============================================================================
// Removal
// =============================================================================

#[rstest]
fn test_pop_first_three_times() {
    let tree = Tree::new().insert(1).insert(2).insert(3);
    let (tree, first) = tree.pop_first().unwrap();
    let (tree, second) = tree.pop_first().unwrap();
    let (tree, third) = tree.pop_first().unwrap();
    assert_eq!(vec![first, second, third], vec![1, 2, 3]);
    assert!(tree.is_empty());
}

#[rstest]
fn test_pop_on_empty_tree() {
    let tree: Tree<i32> = Tree::new();
    assert!(tree.pop_first().is_none());
    assert!(tree.pop_last().is_none());
    assert!(tree.remove(&1).is_none());
}

#[rstest]
fn test_versions_are_independent() {
    let base: Tree<i32> = (1..=10).collect();
    let (without_five, _) = base.remove(&5).unwrap();
    let with_eleven = base.insert(11);

    assert_eq!(base.len(), 10);
    assert_eq!(without_five.len(), 9);
    assert_eq!(with_eleven.len(), 11);
    assert!(base.contains(&5));
    assert!(!without_five.contains(&5));
    assert!(!base.contains(&11));
}

// =============================================================================
// Iteration
// =============================================================================

#[rstest]
fn test_iteration_forward_and_reverse() {
    let tree: Tree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
    let ascending: Vec<i32> = tree.iter().copied().collect();
    let descending: Vec<i32> = tree.iter().rev().copied().collect();
    assert_eq!(ascending, vec![1, 3, 4, 5, 8]);
    assert_eq!(descending, vec![8, 5, 4, 3, 1]);
    assert_eq!(tree.iter().len(), 5);
}

#[rstest]
fn test_independent_traversals() {
    let tree: Tree<i32> = (0..20).collect();
    let mut first = tree.iter();
    let mut second = tree.iter();
    first.next();
    first.next();
    assert_eq!(second.next(), Some(&0));
    assert_eq!(first.next(), Some(&2));
}

#[rstest]
fn test_owned_into_iter() {
    let tree: Tree<String> = ["b", "a"].into_iter().map(String::from).collect();
    let owned: Vec<String> = tree.into_iter().collect();
    assert_eq!(owned, vec!["a".to_string(), "b".to_string()]);
}

// =============================================================================
// Traits
// =============================================================================

#[rstest]
fn test_equality_ignores_insertion_order() {
    let ascending: Tree<i32> = (1..=6).collect();
    let descending: Tree<i32> = (1..=6).rev().collect();
    assert_eq!(ascending, descending);
}

#[rstest]
fn test_extend() {
    let mut tree: Tree<i32> = (1..=3).collect();
    tree.extend([3, 4, 5]);
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.last(), Some(&5));
}

#[rstest]
fn test_foldable_visits_in_order() {
    let tree: Tree<i32> = [3, 1, 2].into_iter().collect();
    assert_eq!(tree.clone().to_list(), vec![1, 2, 3]);
    assert!(tree.for_all(|element| *element > 0));
    assert_eq!(tree.fold_left(String::new(), |text, element| format!("{text}{element}")), "123");
}

// =============================================================================
// Thread Safety
// =============================================================================

#[cfg(feature = "arc")]
#[rstest]
fn test_versions_can_be_read_from_other_threads() {
    let tree: Tree<i32> = (0..100).collect();
    let handles: Vec<_> = (0..4)
        .map(|offset| {
            let tree = tree.clone();
            std::thread::spawn(move || tree.iter().filter(|element| *element % 4 == offset).count())
        })
        .collect();
    let counts: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(counts, vec![25, 25, 25, 25]);
}
