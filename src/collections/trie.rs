//! Prefix tree over sequences, with set semantics.
//!
//! A [`Trie`] stores a set of sequences by sharing their common prefixes.
//! Each node records whether the path leading to it is itself a member and
//! how many members live below it, so `len` is O(1) at every node.
//!
//! # Examples
//!
//! ```rust
//! use strata::collections::Trie;
//!
//! let mut words = Trie::new();
//! assert!(words.insert("tea".chars()));
//! assert!(words.insert("ten".chars()));
//! assert!(!words.insert("tea".chars())); // already a member
//!
//! assert_eq!(words.len(), 2);
//! assert!(words.has_prefix(&['t', 'e']));
//!
//! let completions: Vec<String> = words
//!     .completions(&['t'])
//!     .into_iter()
//!     .map(|word| word.into_iter().collect())
//!     .collect();
//! assert_eq!(completions, vec!["tea", "ten"]);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

use crate::typeclass::{Foldable, TypeConstructor};

// =============================================================================
// Trie Definition
// =============================================================================

/// A set of sequences of `K`, stored as a prefix tree.
///
/// Children are kept in a `BTreeMap`, so iteration visits members in
/// lexicographic order. The empty sequence is a valid member.
///
/// # Time Complexity
///
/// For a sequence of length `m`:
///
/// | Operation    | Complexity     |
/// |--------------|----------------|
/// | `insert`     | O(m log b)     |
/// | `contains`   | O(m log b)     |
/// | `remove`     | O(m log b)     |
/// | `has_prefix` | O(m log b)     |
/// | `len`        | O(1)           |
///
/// where `b` is the largest number of children of a node on the path.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Trie<K> {
    /// Whether the path to this node is a member.
    terminal: bool,
    /// Number of members in this subtree, including this node.
    length: usize,
    children: BTreeMap<K, Self>,
}

impl<K> Trie<K> {
    /// Creates an empty trie.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            terminal: false,
            length: 0,
            children: BTreeMap::new(),
        }
    }

    /// Returns the number of member sequences.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the trie has no members.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl<K: Ord> Trie<K> {
    /// Adds a sequence, returning `true` if it was not already a member.
    pub fn insert<I>(&mut self, sequence: I) -> bool
    where
        I: IntoIterator<Item = K>,
    {
        self.insert_from(sequence.into_iter())
    }

    fn insert_from<I>(&mut self, mut sequence: I) -> bool
    where
        I: Iterator<Item = K>,
    {
        let added = match sequence.next() {
            None => !std::mem::replace(&mut self.terminal, true),
            Some(key) => self.children.entry(key).or_default().insert_from(sequence),
        };
        if added {
            self.length += 1;
        }
        added
    }

    /// Returns `true` if `sequence` is a member.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::Trie;
    ///
    /// let trie: Trie<u8> = [vec![1, 2, 3]].into_iter().collect();
    /// assert!(trie.contains(&[1, 2, 3]));
    /// assert!(!trie.contains(&[1, 2]));
    /// ```
    #[must_use]
    pub fn contains(&self, sequence: &[K]) -> bool {
        self.subtrie(sequence).is_some_and(|node| node.terminal)
    }

    /// Returns `true` if some member starts with `prefix`.
    #[must_use]
    pub fn has_prefix(&self, prefix: &[K]) -> bool {
        self.subtrie(prefix).is_some_and(|node| !node.is_empty())
    }

    /// Returns the subtrie of members starting with `prefix`, with the
    /// prefix itself stripped.
    #[must_use]
    pub fn subtrie(&self, prefix: &[K]) -> Option<&Self> {
        prefix
            .iter()
            .try_fold(self, |node, key| node.children.get(key))
    }

    /// Removes a sequence, returning `true` if it was a member.
    ///
    /// Branches left without members are pruned, so a trie that had a
    /// sequence inserted and removed again equals the trie before.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::Trie;
    ///
    /// let before: Trie<char> = ["car"].into_iter().map(|word| word.chars()).collect();
    /// let mut after = before.clone();
    /// after.insert("cart".chars());
    /// assert!(after.remove(&['c', 'a', 'r', 't']));
    /// assert_eq!(after, before);
    /// ```
    pub fn remove(&mut self, sequence: &[K]) -> bool {
        let removed = match sequence.split_first() {
            None => std::mem::replace(&mut self.terminal, false),
            Some((key, rest)) => {
                let Some(child) = self.children.get_mut(key) else {
                    return false;
                };
                let removed = child.remove(rest);
                if child.is_empty() {
                    self.children.remove(key);
                }
                removed
            }
        };
        if removed {
            self.length -= 1;
        }
        removed
    }
}

impl<K: Ord + Clone> Trie<K> {
    /// Returns every member starting with `prefix`, in lexicographic order.
    #[must_use]
    pub fn completions(&self, prefix: &[K]) -> Vec<Vec<K>> {
        let Some(node) = self.subtrie(prefix) else {
            return Vec::new();
        };
        node.iter()
            .map(|suffix| {
                let mut sequence = prefix.to_vec();
                sequence.extend(suffix);
                sequence
            })
            .collect()
    }
}

impl<K: Clone> Trie<K> {
    /// Returns an iterator over the members in lexicographic order.
    #[must_use]
    pub fn iter(&self) -> TrieIterator<'_, K> {
        TrieIterator {
            pending: vec![(Vec::new(), self)],
            remaining: self.length,
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the members of a [`Trie`], in lexicographic order.
///
/// Traversal is depth-first with an explicit stack of `(path, node)` pairs.
pub struct TrieIterator<'a, K> {
    pending: Vec<(Vec<K>, &'a Trie<K>)>,
    remaining: usize,
}

impl<K: Clone> Iterator for TrieIterator<'_, K> {
    type Item = Vec<K>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((path, node)) = self.pending.pop() {
            for (key, child) in node.children.iter().rev() {
                let mut child_path = path.clone();
                child_path.push(key.clone());
                self.pending.push((child_path, child));
            }
            if node.terminal {
                self.remaining -= 1;
                return Some(path);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Clone> ExactSizeIterator for TrieIterator<'_, K> {}

impl<K: Clone> FusedIterator for TrieIterator<'_, K> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K> Default for Trie<K> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S> FromIterator<S> for Trie<K>
where
    K: Ord,
    S: IntoIterator<Item = K>,
{
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<K, S> Extend<S> for Trie<K>
where
    K: Ord,
    S: IntoIterator<Item = K>,
{
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for sequence in iter {
            self.insert(sequence);
        }
    }
}

impl<'a, K: Clone> IntoIterator for &'a Trie<K> {
    type Item = Vec<K>;
    type IntoIter = TrieIterator<'a, K>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the members as a set: `{['t', 'o'], ['t', 'e', 'a']}` in
/// lexicographic order.
impl<K: Clone + fmt::Debug> fmt::Debug for Trie<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<K> TypeConstructor for Trie<K> {
    type Inner = Vec<K>;
    // Members are sequences, so there is no trie over an arbitrary element
    // type to map into.
    type WithType<B> = Vec<B>;
}

impl<K: Clone> Foldable for Trie<K> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Vec<K>) -> B,
    {
        self.iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(Vec<K>, B) -> B,
    {
        let members: Vec<Vec<K>> = self.iter().collect();
        members
            .into_iter()
            .rev()
            .fold(init, |accumulator, member| function(member, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    fn length(&self) -> usize {
        self.length
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K: serde::Serialize + Clone> serde::Serialize for Trie<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, K> serde::Deserialize<'de> for Trie<K>
where
    K: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Vec::<Vec<K>>::deserialize(deserializer).map(|members| members.into_iter().collect())
    }
}

// =============================================================================
// Tests
// =============================================================================
