//! Type class traits shared by the collections.
//!
//! - [`TypeConstructor`]: names a container independently of its element type
//! - [`Foldable`]: folds a container into a summary value
//!
//! # Examples
//!
//! ```rust
//! use strata::collections::Trie;
//! use strata::typeclass::Foldable;
//!
//! let words: Trie<char> = ["tea", "ten", "to"]
//!     .into_iter()
//!     .map(|word| word.chars())
//!     .collect();
//! let longest = words.fold_left(0, |longest, word| longest.max(word.len()));
//! assert_eq!(longest, 3);
//! ```

mod foldable;
mod higher;

pub use foldable::Foldable;
pub use higher::TypeConstructor;
