//! Collection types.
//!
//! - [`Deque`]: double-ended queue over two buffers, O(1) indexing and slicing
//! - [`DequeSlice`]: borrowed view of a contiguous range of a [`Deque`]
//! - [`Tree`]: persistent ordered set (Red-Black Tree)
//! - [`Trie`]: prefix tree over sequences with set semantics
//! - [`List`]: lazy singly-linked list with memoized tails
//!
//! # Examples
//!
//! ## `Deque`
//!
//! ```rust
//! use strata::collections::Deque;
//!
//! let mut deque: Deque<i32> = (0..7).collect();
//! deque.replace_range(2..5, [9, 9]);
//! assert_eq!(deque.to_vec(), vec![0, 1, 9, 9, 5, 6]);
//! assert!(deque.is_balanced());
//! ```
//!
//! ## `Tree`
//!
//! ```rust
//! use strata::collections::Tree;
//!
//! let tree: Tree<i32> = [1, 2, 3].into_iter().collect();
//! assert!(tree.contains(&2));
//!
//! // Structural sharing: the original tree is preserved
//! let (smaller, removed) = tree.remove(&2).unwrap();
//! assert_eq!(removed, 2);
//! assert!(tree.contains(&2));     // Original unchanged
//! assert!(!smaller.contains(&2)); // New version
//! ```
//!
//! ## `Trie`
//!
//! ```rust
//! use strata::collections::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("car".chars());
//! trie.insert("cat".chars());
//! assert!(trie.has_prefix(&['c', 'a']));
//! assert!(!trie.contains(&['c', 'a']));
//! ```
//!
//! ## `List`
//!
//! ```rust
//! use strata::collections::List;
//!
//! let naturals = List::iterate(0, |n| n + 1);
//! let evens: Vec<i32> = naturals.filter(|n| n % 2 == 0).take(3).to_vec();
//! assert_eq!(evens, vec![0, 2, 4]);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type shared by tree nodes.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which lets trees cross thread boundaries.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod deque;
mod error;
mod list;
mod tree;
mod trie;

pub use deque::Deque;
pub use deque::DequeIntoIterator;
pub use deque::DequeIterator;
pub use deque::DequeIteratorMut;
pub use deque::DequeSlice;
pub use error::IndexError;
pub use list::List;
pub use list::ListIterator;
pub use tree::Tree;
pub use tree::TreeIntoIterator;
pub use tree::TreeIterator;
pub use trie::Trie;
pub use trie::TrieIterator;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_shares_value() {
        let original: ReferenceCounter<Vec<i32>> = ReferenceCounter::new(vec![1, 2]);
        let shared = ReferenceCounter::clone(&original);
        assert!(ReferenceCounter::ptr_eq(&original, &shared));
        assert_eq!(ReferenceCounter::strong_count(&original), 2);
    }
}
