//! Persistent (immutable) ordered set based on a Red-Black Tree.
//!
//! This module provides [`Tree`], an immutable ordered set that uses
//! structural sharing for efficient operations.
//!
//! # Overview
//!
//! Every operation that changes the set returns a new `Tree` and leaves the
//! original untouched. Only the nodes on the path from the root to the
//! change are copied; every other subtree is shared between versions.
//!
//! - O(log N) `contains` and `get`
//! - O(log N) `insert`
//! - O(log N) `remove`, `pop_first` and `pop_last`
//! - O(log N) `first` and `last`
//! - O(1) `len` and `is_empty`
//!
//! # Examples
//!
//! ```rust
//! use strata::collections::Tree;
//!
//! let tree = Tree::new().insert(3).insert(1).insert(2);
//! assert_eq!(format!("{tree:?}"), "[1, 2, 3]");
//!
//! let (rest, smallest) = tree.pop_first().unwrap();
//! assert_eq!(smallest, 1);
//! assert_eq!(rest.len(), 2);
//! assert_eq!(tree.len(), 3); // the original version is still intact
//! ```
//!
//! # Internal Structure
//!
//! The tree maintains the following invariants after every operation:
//! 1. Elements in a left subtree are smaller, and elements in a right
//!    subtree larger, than the element of their parent
//! 2. A red node never has a red child (empty subtrees count as black)
//! 3. Every path from a node down to an empty subtree passes through the
//!    same number of black nodes
//! 4. The root is black
//!
//! Insertion follows Okasaki: the new element goes in as a red leaf and
//! [`balance`] rewrites the four red-red shapes on the way back up.
//! Deletion reports whether the rebuilt subtree lost one unit of black
//! height; [`unbalanced_left`] and [`unbalanced_right`] absorb that loss by
//! recoloring or rotating against the sibling subtree.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator};

use smallvec::SmallVec;

use super::ReferenceCounter;
use crate::typeclass::{Foldable, TypeConstructor};

// =============================================================================
// Color Definition
// =============================================================================

/// The color of a Red-Black Tree node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Color {
    Red,
    Black,
}

// =============================================================================
// Node Definition
// =============================================================================

type Link<T> = Option<ReferenceCounter<Node<T>>>;

/// Internal node structure for the Red-Black Tree.
#[derive(Clone)]
struct Node<T> {
    color: Color,
    left: Link<T>,
    value: T,
    right: Link<T>,
}

fn node<T>(color: Color, left: Link<T>, value: T, right: Link<T>) -> Link<T> {
    Some(ReferenceCounter::new(Node {
        color,
        left,
        value,
        right,
    }))
}

fn is_red<T>(link: &Link<T>) -> bool {
    matches!(link, Some(node) if node.color == Color::Red)
}

/// Returns the node behind `link` if it is red.
fn red<T>(link: &Link<T>) -> Option<&Node<T>> {
    link.as_deref().filter(|node| node.color == Color::Red)
}

/// Gives the root of `link` the requested color, reusing the node when it is
/// not shared.
fn repaint<T: Clone>(link: Link<T>, color: Color) -> Link<T> {
    link.map(|shared| {
        if shared.color == color {
            shared
        } else {
            let mut node = ReferenceCounter::unwrap_or_clone(shared);
            node.color = color;
            ReferenceCounter::new(node)
        }
    })
}

fn blacken<T: Clone>(link: Link<T>) -> Link<T> {
    repaint(link, Color::Black)
}

fn redden<T: Clone>(link: &Link<T>) -> Link<T> {
    repaint(link.clone(), Color::Red)
}

// =============================================================================
// Rebalancing
// =============================================================================

/// Builds `Node(color, left, value, right)`, rewriting a red-red violation
/// directly below a black node into a red node with two black children.
///
/// ```text
///        z            z          x            x
///       / \          / \        / \          / \
///      y   d        x   d      a   z        a   y
///     / \          / \            / \          / \
///    x   c        a   y          y   d        b   z
///   / \              / \        / \              / \
///  a   b            b   c      b   c            c   d
///
///                  all four become
///
///                        y
///                      /   \
///                     x     z
///                    / \   / \
///                   a   b c   d
/// ```
fn balance<T: Clone>(color: Color, left: Link<T>, value: T, right: Link<T>) -> Link<T> {
    if color == Color::Black {
        if let Some(outer) = red(&left) {
            if let Some(inner) = red(&outer.left) {
                return node(
                    Color::Red,
                    node(
                        Color::Black,
                        inner.left.clone(),
                        inner.value.clone(),
                        inner.right.clone(),
                    ),
                    outer.value.clone(),
                    node(Color::Black, outer.right.clone(), value, right),
                );
            }
            if let Some(inner) = red(&outer.right) {
                return node(
                    Color::Red,
                    node(
                        Color::Black,
                        outer.left.clone(),
                        outer.value.clone(),
                        inner.left.clone(),
                    ),
                    inner.value.clone(),
                    node(Color::Black, inner.right.clone(), value, right),
                );
            }
        }
        if let Some(outer) = red(&right) {
            if let Some(inner) = red(&outer.left) {
                return node(
                    Color::Red,
                    node(Color::Black, left, value, inner.left.clone()),
                    inner.value.clone(),
                    node(
                        Color::Black,
                        inner.right.clone(),
                        outer.value.clone(),
                        outer.right.clone(),
                    ),
                );
            }
            if let Some(inner) = red(&outer.right) {
                return node(
                    Color::Red,
                    node(Color::Black, left, value, outer.left.clone()),
                    outer.value.clone(),
                    node(
                        Color::Black,
                        inner.left.clone(),
                        inner.value.clone(),
                        inner.right.clone(),
                    ),
                );
            }
        }
    }
    node(color, left, value, right)
}

/// Finishes a deletion fixup after `balance` was applied to a black root
/// whose sibling had been reddened.
///
/// A red result means `balance` rotated, which restores the full black
/// height once the root takes back its original color. Otherwise the
/// result is one black short exactly when the original root was black.
fn settle<T: Clone>(color: Color, balanced: Link<T>) -> (Link<T>, bool) {
    if is_red(&balanced) {
        (repaint(balanced, color), false)
    } else {
        (balanced, color == Color::Black)
    }
}

/// Rebuilds `Node(color, left, value, right)` where `left` has one less
/// black node on every path than `right`.
///
/// Returns the new subtree and whether it is itself one black short.
///
/// # Panics
///
/// Panics if `left` is not red and `right` is empty, which cannot happen in
/// a tree that satisfied the black-height invariant before the deletion.
fn unbalanced_right<T: Clone>(
    color: Color,
    left: Link<T>,
    value: T,
    right: Link<T>,
) -> (Link<T>, bool) {
    if is_red(&left) {
        return (node(color, blacken(left), value, right), false);
    }
    let Some(sibling) = right.as_deref() else {
        panic!("unbalanced_right: shortened left subtree has an empty sibling");
    };
    match sibling.color {
        Color::Black => settle(color, balance(Color::Black, left, value, redden(&right))),
        Color::Red => {
            let (inner, _) = unbalanced_right(Color::Red, left, value, sibling.left.clone());
            (
                node(
                    Color::Black,
                    inner,
                    sibling.value.clone(),
                    sibling.right.clone(),
                ),
                false,
            )
        }
    }
}

/// Mirror image of [`unbalanced_right`]: `right` is one black short.
///
/// # Panics
///
/// Panics if `right` is not red and `left` is empty.
fn unbalanced_left<T: Clone>(
    color: Color,
    left: Link<T>,
    value: T,
    right: Link<T>,
) -> (Link<T>, bool) {
    if is_red(&right) {
        return (node(color, left, value, blacken(right)), false);
    }
    let Some(sibling) = left.as_deref() else {
        panic!("unbalanced_left: shortened right subtree has an empty sibling");
    };
    match sibling.color {
        Color::Black => settle(color, balance(Color::Black, redden(&left), value, right)),
        Color::Red => {
            let (inner, _) = unbalanced_left(Color::Red, sibling.right.clone(), value, right);
            (
                node(
                    Color::Black,
                    sibling.left.clone(),
                    sibling.value.clone(),
                    inner,
                ),
                false,
            )
        }
    }
}

/// Replaces a node of the given color by its only child.
///
/// Returns the replacement and whether it is one black short of the
/// removed node.
fn splice<T: Clone>(color: Color, child: Link<T>) -> (Link<T>, bool) {
    match color {
        Color::Red => (child, false),
        Color::Black if is_red(&child) => (blacken(child), false),
        Color::Black => (child, true),
    }
}

/// Rebuilds a node after its left subtree was replaced.
fn rebuild_left<T: Clone>(
    color: Color,
    left: Link<T>,
    short: bool,
    value: T,
    right: Link<T>,
) -> (Link<T>, bool) {
    if short {
        unbalanced_right(color, left, value, right)
    } else {
        (node(color, left, value, right), false)
    }
}

/// Rebuilds a node after its right subtree was replaced.
fn rebuild_right<T: Clone>(
    color: Color,
    left: Link<T>,
    value: T,
    right: Link<T>,
    short: bool,
) -> (Link<T>, bool) {
    if short {
        unbalanced_left(color, left, value, right)
    } else {
        (node(color, left, value, right), false)
    }
}

// =============================================================================
// Recursive Operations
// =============================================================================

/// Inserts `value` below `link`, or returns `None` if it is already present.
fn insert_into<T: Ord + Clone>(link: &Link<T>, value: T) -> Option<Link<T>> {
    let Some(current) = link.as_deref() else {
        return Some(node(Color::Red, None, value, None));
    };
    match value.cmp(&current.value) {
        Ordering::Less => insert_into(&current.left, value).map(|left| {
            balance(
                current.color,
                left,
                current.value.clone(),
                current.right.clone(),
            )
        }),
        Ordering::Greater => insert_into(&current.right, value).map(|right| {
            balance(
                current.color,
                current.left.clone(),
                current.value.clone(),
                right,
            )
        }),
        Ordering::Equal => None,
    }
}

/// Removes the smallest element below `current`.
fn remove_min_from<T: Clone>(current: &Node<T>) -> (Link<T>, T, bool) {
    match current.left.as_deref() {
        None => {
            let (link, short) = splice(current.color, current.right.clone());
            (link, current.value.clone(), short)
        }
        Some(left) => {
            let (left, minimum, short) = remove_min_from(left);
            let (link, short) = rebuild_left(
                current.color,
                left,
                short,
                current.value.clone(),
                current.right.clone(),
            );
            (link, minimum, short)
        }
    }
}

/// Removes the largest element below `current`.
fn remove_max_from<T: Clone>(current: &Node<T>) -> (Link<T>, T, bool) {
    match current.right.as_deref() {
        None => {
            let (link, short) = splice(current.color, current.left.clone());
            (link, current.value.clone(), short)
        }
        Some(right) => {
            let (right, maximum, short) = remove_max_from(right);
            let (link, short) = rebuild_right(
                current.color,
                current.left.clone(),
                current.value.clone(),
                right,
                short,
            );
            (link, maximum, short)
        }
    }
}

/// Removes the element equal to `key` below `link`.
///
/// A matched node with a right subtree takes over the smallest element of
/// that subtree; otherwise it is spliced out in favor of its left child.
fn remove_from<T, Q>(link: &Link<T>, key: &Q) -> Option<(Link<T>, T, bool)>
where
    T: Borrow<Q> + Clone,
    Q: Ord + ?Sized,
{
    let current = link.as_deref()?;
    match key.cmp(current.value.borrow()) {
        Ordering::Less => {
            let (left, removed, short) = remove_from(&current.left, key)?;
            let (link, short) = rebuild_left(
                current.color,
                left,
                short,
                current.value.clone(),
                current.right.clone(),
            );
            Some((link, removed, short))
        }
        Ordering::Greater => {
            let (right, removed, short) = remove_from(&current.right, key)?;
            let (link, short) = rebuild_right(
                current.color,
                current.left.clone(),
                current.value.clone(),
                right,
                short,
            );
            Some((link, removed, short))
        }
        Ordering::Equal => {
            let removed = current.value.clone();
            let (link, short) = match current.right.as_deref() {
                None => splice(current.color, current.left.clone()),
                Some(right) => {
                    let (right, successor, short) = remove_min_from(right);
                    rebuild_right(
                        current.color,
                        current.left.clone(),
                        successor,
                        right,
                        short,
                    )
                }
            };
            Some((link, removed, short))
        }
    }
}

// =============================================================================
// Tree Definition
// =============================================================================

/// A persistent (immutable) ordered set based on a Red-Black Tree.
///
/// `Tree` keeps its elements sorted and free of duplicates. All operations
/// return new trees without modifying the original, and unmodified
/// subtrees are shared between versions.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `new`          | O(1)       |
/// | `contains`     | O(log N)   |
/// | `insert`       | O(log N)   |
/// | `remove`       | O(log N)   |
/// | `pop_first`    | O(log N)   |
/// | `pop_last`     | O(log N)   |
/// | `first`/`last` | O(log N)   |
/// | `len`          | O(1)       |
/// | `iter`         | O(1) to create, O(N) to exhaust |
///
/// # Examples
///
/// ```rust
/// use strata::collections::Tree;
///
/// let tree: Tree<i32> = [5, 1, 3, 1].into_iter().collect();
/// assert_eq!(tree.len(), 3);
/// assert!(tree.contains(&3));
/// assert!(!tree.contains(&4));
///
/// let descending: Vec<&i32> = tree.iter().rev().collect();
/// assert_eq!(descending, vec![&5, &3, &1]);
/// ```
pub struct Tree<T> {
    root: Link<T>,
    length: usize,
}

impl<T> Tree<T> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::Tree;
    ///
    /// let tree: Tree<i32> = Tree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Creates a tree containing a single element.
    #[must_use]
    pub fn singleton(value: T) -> Self {
        Self {
            root: node(Color::Black, None, value, None),
            length: 1,
        }
    }

    /// Returns the number of elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the smallest element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::Tree;
    ///
    /// let tree: Tree<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.first(), Some(&1));
    /// assert_eq!(Tree::<i32>::new().first(), None);
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        let mut current = self.root.as_deref()?;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        Some(&current.value)
    }

    /// Returns the largest element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        let mut current = self.root.as_deref()?;
        while let Some(right) = current.right.as_deref() {
            current = right;
        }
        Some(&current.value)
    }

    /// Returns the stored element equal to `key`.
    ///
    /// The key may be any borrowed form of the element type, but the
    /// ordering on the borrowed form must match the ordering on the
    /// element type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::Tree;
    ///
    /// let tree: Tree<String> = ["pear", "fig"].into_iter().map(String::from).collect();
    /// assert_eq!(tree.get("fig").map(String::as_str), Some("fig"));
    /// assert_eq!(tree.get("kiwi"), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(node.value.borrow()) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    /// Returns `true` if the tree contains an element equal to `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// The iterator is double-ended, so `.rev()` walks the elements in
    /// descending order.
    #[must_use]
    pub fn iter(&self) -> TreeIterator<'_, T> {
        TreeIterator::new(self)
    }
}

impl<T: Clone> Tree<T> {
    /// Inserts an element, returning the new tree.
    ///
    /// If an equal element is already present, the returned tree shares
    /// every node with `self`.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::Tree;
    ///
    /// let empty = Tree::new();
    /// let one = empty.insert(1);
    /// let still_one = one.insert(1);
    ///
    /// assert!(empty.is_empty());
    /// assert_eq!(one.len(), 1);
    /// assert_eq!(still_one, one);
    /// ```
    #[must_use]
    pub fn insert(&self, value: T) -> Self
    where
        T: Ord,
    {
        match insert_into(&self.root, value) {
            Some(root) => Self {
                root: blacken(root),
                length: self.length + 1,
            },
            None => self.clone(),
        }
    }

    /// Removes the element equal to `key`.
    ///
    /// Returns the new tree together with the removed element, or `None`
    /// if no such element exists.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::Tree;
    ///
    /// let tree: Tree<i32> = (1..=5).collect();
    /// let (smaller, removed) = tree.remove(&3).unwrap();
    ///
    /// assert_eq!(removed, 3);
    /// assert_eq!(smaller.iter().copied().collect::<Vec<_>>(), vec![1, 2, 4, 5]);
    /// assert!(tree.remove(&9).is_none());
    /// ```
    #[must_use]
    pub fn remove<Q>(&self, key: &Q) -> Option<(Self, T)>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (root, removed, _) = remove_from(&self.root, key)?;
        Some((
            Self {
                root: blacken(root),
                length: self.length - 1,
            },
            removed,
        ))
    }

    /// Removes the smallest element.
    ///
    /// Returns the new tree together with the removed element, or `None`
    /// if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::Tree;
    ///
    /// let mut tree: Tree<i32> = [2, 3, 1].into_iter().collect();
    /// let mut drained = Vec::new();
    /// while let Some((rest, smallest)) = tree.pop_first() {
    ///     drained.push(smallest);
    ///     tree = rest;
    /// }
    /// assert_eq!(drained, vec![1, 2, 3]);
    /// assert!(tree.is_empty());
    /// ```
    #[must_use]
    pub fn pop_first(&self) -> Option<(Self, T)> {
        let (root, minimum, _) = remove_min_from(self.root.as_deref()?);
        Some((
            Self {
                root: blacken(root),
                length: self.length - 1,
            },
            minimum,
        ))
    }

    /// Removes the largest element.
    ///
    /// Returns the new tree together with the removed element, or `None`
    /// if the tree is empty.
    #[must_use]
    pub fn pop_last(&self) -> Option<(Self, T)> {
        let (root, maximum, _) = remove_max_from(self.root.as_deref()?);
        Some((
            Self {
                root: blacken(root),
                length: self.length - 1,
            },
            maximum,
        ))
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// Inline stack depth of a tree iterator.
///
/// A red-black tree of height 32 holds at least 65535 elements, so smaller
/// trees are traversed without allocating.
const STACK_CAPACITY: usize = 32;

/// An iterator over the elements of a [`Tree`] in ascending order.
///
/// The iterator keeps two explicit stacks: the unvisited left spine for the
/// ascending end and the unvisited right spine for the descending end. A
/// shared count of remaining elements stops the two ends from crossing.
pub struct TreeIterator<'a, T> {
    front: SmallVec<[&'a Node<T>; STACK_CAPACITY]>,
    back: SmallVec<[&'a Node<T>; STACK_CAPACITY]>,
    remaining: usize,
}

impl<'a, T> TreeIterator<'a, T> {
    fn new(tree: &'a Tree<T>) -> Self {
        let mut iterator = Self {
            front: SmallVec::new(),
            back: SmallVec::new(),
            remaining: tree.length,
        };
        iterator.push_left_spine(tree.root.as_deref());
        iterator.push_right_spine(tree.root.as_deref());
        iterator
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.front.push(node);
            link = node.left.as_deref();
        }
    }

    fn push_right_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.back.push(node);
            link = node.right.as_deref();
        }
    }
}

impl<T> Clone for TreeIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for TreeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for TreeIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back.pop()?;
        self.push_right_spine(node.left.as_deref());
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for TreeIterator<'_, T> {}

impl<T> FusedIterator for TreeIterator<'_, T> {}

/// An owning iterator over the elements of a [`Tree`] in ascending order.
///
/// Elements are cloned out of the shared nodes, since other versions of
/// the tree may still reference them.
pub struct TreeIntoIterator<T> {
    elements: std::vec::IntoIter<T>,
}

impl<T> Iterator for TreeIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.elements.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl<T> DoubleEndedIterator for TreeIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.elements.next_back()
    }
}

impl<T> ExactSizeIterator for TreeIntoIterator<T> {}

impl<T> FusedIterator for TreeIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            length: self.length,
        }
    }
}

impl<T> Default for Tree<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |tree, element| tree.insert(element))
    }
}

impl<T: Ord + Clone> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            *self = self.insert(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = TreeIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = TreeIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        let elements: Vec<T> = self.iter().cloned().collect();
        TreeIntoIterator {
            elements: elements.into_iter(),
        }
    }
}

impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: Hash> Hash for Tree<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Tree<T> {
    type Inner = T;
    type WithType<B> = Tree<B>;
}

impl<T: Clone> Foldable for Tree<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.iter().cloned().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.iter()
            .rev()
            .cloned()
            .fold(init, |accumulator, element| function(element, accumulator))
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
// Send and Sync
// =============================================================================

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Tree<i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Tree<i32>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Tree<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
struct TreeVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for TreeVisitor<T>
where
    T: serde::Deserialize<'de> + Ord + Clone,
{
    type Value = Tree<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut sequence: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut tree = Tree::new();
        while let Some(element) = sequence.next_element()? {
            tree = tree.insert(element);
        }
        Ok(tree)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Tree<T>
where
    T: serde::Deserialize<'de> + Ord + Clone,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(TreeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
