//! # strata
//!
//! A small library of general-purpose collection types.
//!
//! ## Overview
//!
//! - **Deque**: a double-ended queue built from two growable buffers, with
//!   amortized O(1) pushes and pops at both ends and O(1) indexing and slicing
//! - **Tree**: a persistent red-black tree with set semantics and structural
//!   sharing between versions
//! - **Trie**: a prefix tree over sequences with set semantics
//! - **List**: a lazy singly-linked list with memoized tails
//! - **Type Classes**: `Foldable` for uniform folding over every collection
//!
//! ## Feature Flags
//!
//! - `typeclass`: `TypeConstructor` and `Foldable`
//! - `collections`: the collection types
//! - `arc`: share tree nodes through `Arc` instead of `Rc`
//! - `serde`: `Serialize`/`Deserialize` for `Deque`, `Tree` and `Trie`
//! - `tracing`: trace events when the deque rebalances its buffers
//! - `full`: Enable all features except `arc`
//!
//! ## Example
//!
//! ```rust
//! use strata::prelude::*;
//!
//! let mut deque: Deque<i32> = (1..=7).collect();
//! assert_eq!(format!("{deque:?}"), "[1, 2, 3 | 4, 5, 6, 7]");
//! deque.rotate_right();
//! assert_eq!(deque.first(), Some(&7));
//!
//! let tree: Tree<i32> = [3, 1, 2].into_iter().collect();
//! let (rest, smallest) = tree.pop_first().unwrap();
//! assert_eq!(smallest, 1);
//! assert_eq!(rest.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use strata::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "collections")]
    pub use crate::collections::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "collections")]
pub mod collections;
