//! Double-ended queue built from two growable buffers.
//!
//! This module provides [`Deque`], a mutable sequence with cheap access to
//! both ends, and [`DequeSlice`], a borrowed view of a contiguous part of it.
//!
//! # Overview
//!
//! A `Deque` keeps its elements in two `Vec`s:
//!
//! - `front` holds the elements nearest the logical start, in *reverse*
//!   physical order, so prepending is a physical push
//! - `back` holds the remaining elements in order, so appending is a
//!   physical push
//!
//! The logical sequence is `reverse(front) ++ back`:
//!
//! ```text
//! logical:   1 2 3 4 5 6 7
//! front:     [3, 2, 1]
//! back:      [4, 5, 6, 7]
//! ```
//!
//! Translating a logical index `i` is plain arithmetic: it lives at
//! `front[front.len() - 1 - i]` when `i < front.len()` and at
//! `back[i - front.len()]` otherwise. That gives:
//!
//! - O(1) amortized `push_front`, `push_back`, `pop_front`, `pop_back`
//! - O(1) `get`, `len` and `is_empty`
//! - O(1) borrowed slicing through [`Deque::range`]
//! - O(1) `reverse` (the buffers trade places)
//! - O(n) `insert` and `remove` at arbitrary positions
//!
//! # Balance
//!
//! Neither buffer may be empty while the other holds more than one element.
//! Every mutating method restores this before it returns: when one side runs
//! dry, all but one element of the other side move across. A run of pops
//! from one end triggers at most one such move, so pops stay amortized O(1).
//!
//! # Examples
//!
//! ```rust
//! use strata::collections::Deque;
//!
//! let mut deque: Deque<i32> = (1..=7).collect();
//! assert_eq!(format!("{deque:?}"), "[1, 2, 3 | 4, 5, 6, 7]");
//!
//! deque.push_front(0);
//! deque.push_back(8);
//! assert_eq!(deque.first(), Some(&0));
//! assert_eq!(deque.last(), Some(&8));
//! assert_eq!(deque[4], 4);
//!
//! let middle = deque.range(2..5);
//! assert_eq!(middle, [2, 3, 4][..]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{FromIterator, FusedIterator, Rev};
use std::ops::{Bound, Index, IndexMut, Range, RangeBounds};

use super::IndexError;
use crate::typeclass::{Foldable, TypeConstructor};

mod slice;

pub use slice::DequeSlice;

// =============================================================================
// Range Translation
// =============================================================================

/// Where a logical range lives inside the two buffers.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Span {
    /// An empty range sitting exactly on the boundary between the buffers.
    Between,
    /// A physical range of `front`.
    Front(Range<usize>),
    /// A physical range of `back`.
    Back(Range<usize>),
    /// The first `front` physical elements of `front` followed by the first
    /// `back` physical elements of `back`.
    Split { front: usize, back: usize },
}

impl Span {
    /// Classifies the validated logical `range` against a front buffer of
    /// `front_length` elements.
    fn locate(range: Range<usize>, front_length: usize) -> Self {
        let Range { start, end } = range;
        if start == end && start == front_length {
            Self::Between
        } else if end <= front_length {
            Self::Front(front_length - end..front_length - start)
        } else if start >= front_length {
            Self::Back(start - front_length..end - front_length)
        } else {
            Self::Split {
                front: front_length - start,
                back: end - front_length,
            }
        }
    }
}

/// Turns any `RangeBounds` into a checked half-open range over `length` elements.
fn resolve_range<R>(range: &R, length: usize) -> Result<Range<usize>, IndexError>
where
    R: RangeBounds<usize>,
{
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&end) => end.saturating_add(1),
        Bound::Excluded(&end) => end,
        Bound::Unbounded => length,
    };
    if start > end {
        Err(IndexError::InvertedRange { start, end })
    } else if end > length {
        Err(IndexError::RangeOutOfBounds { start, end, length })
    } else {
        Ok(start..end)
    }
}

/// Borrows the parts of both buffers covered by the validated logical `range`.
fn slice_buffers<'a, T>(
    front: &'a [T],
    back: &'a [T],
    range: Range<usize>,
) -> (&'a [T], &'a [T]) {
    match Span::locate(range, front.len()) {
        Span::Between => (&[], &[]),
        Span::Front(physical) => (&front[physical], &[]),
        Span::Back(physical) => (&[], &back[physical]),
        Span::Split {
            front: front_count,
            back: back_count,
        } => (&front[..front_count], &back[..back_count]),
    }
}

/// Renders `[<front in logical order> | <back>]`.
fn write_buffers<T: fmt::Debug>(
    front: &[T],
    back: &[T],
    formatter: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    formatter.write_str("[")?;
    for (position, element) in front.iter().rev().enumerate() {
        if position > 0 {
            formatter.write_str(", ")?;
        }
        write!(formatter, "{element:?}")?;
    }
    formatter.write_str(" | ")?;
    for (position, element) in back.iter().enumerate() {
        if position > 0 {
            formatter.write_str(", ")?;
        }
        write!(formatter, "{element:?}")?;
    }
    formatter.write_str("]")
}

// =============================================================================
// Deque Definition
// =============================================================================

/// A double-ended queue over two balanced buffers.
///
/// `Deque` is a mutable value type: cloning copies both buffers, and the
/// copies evolve independently. Share one instance across threads only
/// behind external synchronization.
///
/// # Time Complexity
///
/// | Operation                    | Complexity         |
/// |------------------------------|--------------------|
/// | `push_front` / `push_back`   | O(1) amortized     |
/// | `pop_front` / `pop_back`     | O(1) amortized     |
/// | `get` / `Index`              | O(1)               |
/// | `range`                      | O(1)               |
/// | `reverse`                    | O(1)               |
/// | `extend_front` / `extend_back` | O(k)             |
/// | `insert` / `remove`          | O(n)               |
/// | `replace_range`              | O(n + k)           |
///
/// # Examples
///
/// ```rust
/// use strata::collections::Deque;
///
/// let mut deque = Deque::new();
/// deque.push_back(2);
/// deque.push_front(1);
/// deque.push_back(3);
///
/// assert_eq!(deque.pop_front(), Some(1));
/// assert_eq!(deque.pop_back(), Some(3));
/// assert_eq!(deque.len(), 1);
/// ```
#[derive(Clone)]
pub struct Deque<T> {
    /// Elements nearest the logical start, stored last-to-first.
    front: Vec<T>,
    /// The remaining elements, stored first-to-last.
    back: Vec<T>,
}

impl<T> Deque<T> {
    /// Creates a new empty deque.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::Deque;
    ///
    /// let deque: Deque<i32> = Deque::new();
    /// assert!(deque.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            front: Vec::new(),
            back: Vec::new(),
        }
    }

    /// Creates an empty deque with room for `capacity` elements, split
    /// between the two buffers.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let front_capacity = capacity / 2;
        Self {
            front: Vec::with_capacity(front_capacity),
            back: Vec::with_capacity(capacity - front_capacity),
        }
    }

    /// Builds a balanced deque by splitting `elements` at the midpoint.
    fn from_vec(mut elements: Vec<T>) -> Self {
        let back = elements.split_off(elements.len() / 2);
        elements.reverse();
        Self {
            front: elements,
            back,
        }
    }

    /// Returns the number of elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }

    /// Returns `true` if the deque contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.front.is_empty() && self.back.is_empty()
    }

    /// Returns `true` if neither buffer is empty while the other holds more
    /// than one element.
    ///
    /// Every public method leaves the deque balanced; this is exposed so
    /// callers and tests can observe it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::Deque;
    ///
    /// let mut deque: Deque<i32> = (0..10).collect();
    /// while deque.pop_front().is_some() {
    ///     assert!(deque.is_balanced());
    /// }
    /// ```
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        !(self.front.is_empty() && self.back.len() > 1)
            && !(self.back.is_empty() && self.front.len() > 1)
    }

    /// Returns the first element, or `None` if the deque is empty.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.front.last().or_else(|| self.back.first())
    }

    /// Returns the last element, or `None` if the deque is empty.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.back.last().or_else(|| self.front.first())
    }

    /// Returns a mutable reference to the first element.
    pub fn first_mut(&mut self) -> Option<&mut T> {
        match self.front.last_mut() {
            Some(element) => Some(element),
            None => self.back.first_mut(),
        }
    }

    /// Returns a mutable reference to the last element.
    pub fn last_mut(&mut self) -> Option<&mut T> {
        match self.back.last_mut() {
            Some(element) => Some(element),
            None => self.front.first_mut(),
        }
    }

    /// Returns a reference to the element at `index`, or `None` if `index`
    /// is out of bounds.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::Deque;
    ///
    /// let deque: Deque<char> = "abcde".chars().collect();
    /// assert_eq!(deque.get(0), Some(&'a'));
    /// assert_eq!(deque.get(4), Some(&'e'));
    /// assert_eq!(deque.get(5), None);
    /// ```
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        let front_length = self.front.len();
        if index < front_length {
            self.front.get(front_length - 1 - index)
        } else {
            self.back.get(index - front_length)
        }
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// `index` is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let front_length = self.front.len();
        if index < front_length {
            self.front.get_mut(front_length - 1 - index)
        } else {
            self.back.get_mut(index - front_length)
        }
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn set(&mut self, index: usize, element: T) -> T {
        std::mem::replace(&mut self[index], element)
    }

    /// Prepends an element.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    pub fn push_front(&mut self, element: T) {
        self.front.push(element);
        self.rebalance();
    }

    /// Appends an element.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    pub fn push_back(&mut self, element: T) {
        self.back.push(element);
        self.rebalance();
    }

    /// Prepends every element of `elements`, keeping their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::Deque;
    ///
    /// let mut deque: Deque<i32> = [4, 5].into_iter().collect();
    /// deque.extend_front([1, 2, 3]);
    /// assert_eq!(deque.to_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn extend_front<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        let elements: Vec<T> = elements.into_iter().collect();
        self.front.extend(elements.into_iter().rev());
        self.rebalance();
    }

    /// Appends every element of `elements`.
    pub fn extend_back<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.back.extend(elements);
        self.rebalance();
    }

    /// Removes and returns the first element, or `None` if the deque is empty.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::Deque;
    ///
    /// let mut deque: Deque<i32> = Deque::new();
    /// assert_eq!(deque.pop_front(), None);
    ///
    /// deque.push_back(1);
    /// assert_eq!(deque.pop_front(), Some(1));
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let element = match self.front.pop() {
            Some(element) => Some(element),
            None if self.back.is_empty() => None,
            None => Some(self.back.remove(0)),
        };
        self.rebalance();
        element
    }

    /// Removes and returns the last element, or `None` if the deque is empty.
    ///
    /// # Complexity
    ///
    /// O(1) amortized
    pub fn pop_back(&mut self) -> Option<T> {
        let element = match self.back.pop() {
            Some(element) => Some(element),
            None if self.front.is_empty() => None,
            None => Some(self.front.remove(0)),
        };
        self.rebalance();
        element
    }

    /// Removes and returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty. Use [`pop_front`](Self::pop_front) when
    /// emptiness is an expected outcome.
    pub fn remove_first(&mut self) -> T {
        let Some(element) = self.pop_front() else {
            panic!("remove_first called on an empty deque");
        };
        element
    }

    /// Removes and returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty. Use [`pop_back`](Self::pop_back) when
    /// emptiness is an expected outcome.
    pub fn remove_last(&mut self) -> T {
        let Some(element) = self.pop_back() else {
            panic!("remove_last called on an empty deque");
        };
        element
    }

    /// Inserts `element` so that it ends up at position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    ///
    /// # Complexity
    ///
    /// O(n) worst case
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::Deque;
    ///
    /// let mut deque: Deque<i32> = [1, 2, 4].into_iter().collect();
    /// deque.insert(2, 3);
    /// assert_eq!(deque.to_vec(), vec![1, 2, 3, 4]);
    /// ```
    pub fn insert(&mut self, index: usize, element: T) {
        if let Err(error) = self.try_insert(index, element) {
            panic!("{error}");
        }
    }

    /// Inserts `element` at position `index`, or reports why `index` is invalid.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfBounds`] if `index > len`; the deque is
    /// left untouched.
    pub fn try_insert(&mut self, index: usize, element: T) -> Result<(), IndexError> {
        let length = self.len();
        if index > length {
            return Err(IndexError::OutOfBounds { index, length });
        }
        let front_length = self.front.len();
        if index < front_length {
            self.front.insert(front_length - index, element);
        } else {
            self.back.insert(index - front_length, element);
        }
        self.rebalance();
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    ///
    /// # Complexity
    ///
    /// O(n) worst case
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index)
            .unwrap_or_else(|error| panic!("{error}"))
    }

    /// Removes and returns the element at `index`, or reports why `index`
    /// is invalid.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::OutOfBounds`] if `index >= len`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexError> {
        let length = self.len();
        if index >= length {
            return Err(IndexError::OutOfBounds { index, length });
        }
        let front_length = self.front.len();
        let element = if index < front_length {
            self.front.remove(front_length - 1 - index)
        } else {
            self.back.remove(index - front_length)
        };
        self.rebalance();
        Ok(element)
    }

    /// Borrows the elements in `range` as a [`DequeSlice`].
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or ends past `len`.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::Deque;
    ///
    /// let deque: Deque<i32> = (0..7).collect();
    /// let middle = deque.range(2..5);
    /// assert_eq!(middle.len(), 3);
    /// assert_eq!(middle.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    /// ```
    #[must_use]
    pub fn range<R>(&self, range: R) -> DequeSlice<'_, T>
    where
        R: RangeBounds<usize>,
    {
        self.try_range(range)
            .unwrap_or_else(|error| panic!("{error}"))
    }

    /// Borrows the elements in `range`, or reports why the range is invalid.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::InvertedRange`] or
    /// [`IndexError::RangeOutOfBounds`].
    pub fn try_range<R>(&self, range: R) -> Result<DequeSlice<'_, T>, IndexError>
    where
        R: RangeBounds<usize>,
    {
        let range = resolve_range(&range, self.len())?;
        let (front, back) = slice_buffers(&self.front, &self.back, range);
        Ok(DequeSlice::new(front, back))
    }

    /// Replaces the elements in `range` with `replacement`.
    ///
    /// The replacement may be shorter or longer than the range; an empty
    /// range inserts, an empty replacement removes.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or ends past `len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::Deque;
    ///
    /// let mut deque: Deque<i32> = (0..7).collect();
    /// deque.replace_range(2..5, [9, 9]);
    ///
    /// let mut expected: Vec<i32> = (0..7).collect();
    /// expected.splice(2..5, [9, 9]);
    /// assert_eq!(deque.to_vec(), expected);
    /// ```
    pub fn replace_range<R, I>(&mut self, range: R, replacement: I)
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
    {
        if let Err(error) = self.try_replace_range(range, replacement) {
            panic!("{error}");
        }
    }

    /// Replaces the elements in `range`, or reports why the range is invalid.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::InvertedRange`] or
    /// [`IndexError::RangeOutOfBounds`]; the deque is left untouched.
    pub fn try_replace_range<R, I>(&mut self, range: R, replacement: I) -> Result<(), IndexError>
    where
        R: RangeBounds<usize>,
        I: IntoIterator<Item = T>,
    {
        let range = resolve_range(&range, self.len())?;
        match Span::locate(range, self.front.len()) {
            Span::Between => {
                drop(self.back.splice(0..0, replacement));
            }
            Span::Front(physical) => {
                let elements: Vec<T> = replacement.into_iter().collect();
                drop(self.front.splice(physical, elements.into_iter().rev()));
            }
            Span::Back(physical) => {
                drop(self.back.splice(physical, replacement));
            }
            Span::Split { front, back } => {
                drop(self.front.drain(..front));
                drop(self.back.splice(..back, replacement));
            }
        }
        self.rebalance();
        Ok(())
    }

    /// Removes the elements in `range`.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or ends past `len`.
    pub fn remove_range<R>(&mut self, range: R)
    where
        R: RangeBounds<usize>,
    {
        self.replace_range(range, std::iter::empty());
    }

    /// Removes the elements in `range`, or reports why the range is invalid.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::InvertedRange`] or
    /// [`IndexError::RangeOutOfBounds`].
    pub fn try_remove_range<R>(&mut self, range: R) -> Result<(), IndexError>
    where
        R: RangeBounds<usize>,
    {
        self.try_replace_range(range, std::iter::empty())
    }

    /// Moves the first element to the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::Deque;
    ///
    /// let mut deque: Deque<i32> = (1..=5).collect();
    /// deque.rotate_left();
    /// assert_eq!(deque.to_vec(), vec![2, 3, 4, 5, 1]);
    /// ```
    pub fn rotate_left(&mut self) {
        if let Some(element) = self.pop_front() {
            self.push_back(element);
        }
    }

    /// Moves the last element to the start.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::Deque;
    ///
    /// let mut deque: Deque<i32> = (1..=5).collect();
    /// deque.rotate_right();
    /// assert_eq!(deque.to_vec(), vec![5, 1, 2, 3, 4]);
    /// ```
    pub fn rotate_right(&mut self) {
        if let Some(element) = self.pop_back() {
            self.push_front(element);
        }
    }

    /// Removes the first element and appends `element` in its place.
    ///
    /// Returns the removed element, or `None` if the deque was empty (in
    /// which case `element` becomes its only element).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::Deque;
    ///
    /// let mut window: Deque<i32> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(window.rotate_left_with(4), Some(1));
    /// assert_eq!(window.to_vec(), vec![2, 3, 4]);
    /// ```
    pub fn rotate_left_with(&mut self, element: T) -> Option<T> {
        let removed = self.pop_front();
        self.push_back(element);
        removed
    }

    /// Removes the last element and prepends `element` in its place.
    ///
    /// Returns the removed element, or `None` if the deque was empty.
    pub fn rotate_right_with(&mut self, element: T) -> Option<T> {
        let removed = self.pop_back();
        self.push_front(element);
        removed
    }

    /// Reverses the order of the elements in place.
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn reverse(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// Returns the deque with its elements in reverse order.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::Deque;
    ///
    /// let deque: Deque<i32> = (1..=4).collect();
    /// assert_eq!(deque.reversed().to_vec(), vec![4, 3, 2, 1]);
    /// ```
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.reverse();
        self
    }

    /// Reserves room for at least `additional` more elements, split between
    /// the two buffers.
    pub fn reserve(&mut self, additional: usize) {
        let front_share = additional / 2;
        self.front.reserve(front_share);
        self.back.reserve(additional - front_share);
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.front.clear();
        self.back.clear();
    }

    /// Returns `true` if the deque contains `element`.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.front.contains(element) || self.back.contains(element)
    }

    /// Returns a front-to-back iterator over references to the elements.
    #[must_use]
    pub fn iter(&self) -> DequeIterator<'_, T> {
        DequeIterator::new(&self.front, &self.back)
    }

    /// Returns a front-to-back iterator over mutable references.
    pub fn iter_mut(&mut self) -> DequeIteratorMut<'_, T> {
        DequeIteratorMut {
            front: self.front.iter_mut().rev(),
            back: self.back.iter_mut(),
        }
    }

    /// Copies the elements into a `Vec` in logical order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Restores balance after a mutation.
    ///
    /// When one buffer is empty and the other holds more than one element,
    /// everything except the element at the far end moves across.
    fn rebalance(&mut self) {
        if self.front.is_empty() && self.back.len() > 1 {
            Self::refill(&mut self.back, &mut self.front);
        } else if self.back.is_empty() && self.front.len() > 1 {
            Self::refill(&mut self.front, &mut self.back);
        } else {
            return;
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            front = self.front.len(),
            back = self.back.len(),
            "rebalanced deque buffers"
        );
    }

    /// Moves all but the physically last element of `source` into the empty
    /// `target`, reversing their physical order.
    fn refill(source: &mut Vec<T>, target: &mut Vec<T>) {
        let moved = source.len() - 1;
        target.extend(source.drain(..moved).rev());
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the elements of a [`Deque`] or
/// [`DequeSlice`].
pub struct DequeIterator<'a, T> {
    front: Rev<std::slice::Iter<'a, T>>,
    back: std::slice::Iter<'a, T>,
}

impl<'a, T> DequeIterator<'a, T> {
    fn new(front: &'a [T], back: &'a [T]) -> Self {
        Self {
            front: front.iter().rev(),
            back: back.iter(),
        }
    }
}

impl<T> Clone for DequeIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<'a, T> Iterator for DequeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.front.next().or_else(|| self.back.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.front.len() + self.back.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for DequeIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.back.next_back().or_else(|| self.front.next_back())
    }
}

impl<T> ExactSizeIterator for DequeIterator<'_, T> {}

impl<T> FusedIterator for DequeIterator<'_, T> {}

/// An iterator over mutable references to the elements of a [`Deque`].
pub struct DequeIteratorMut<'a, T> {
    front: Rev<std::slice::IterMut<'a, T>>,
    back: std::slice::IterMut<'a, T>,
}

impl<'a, T> Iterator for DequeIteratorMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.front.next() {
            Some(element) => Some(element),
            None => self.back.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.front.len() + self.back.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for DequeIteratorMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match self.back.next_back() {
            Some(element) => Some(element),
            None => self.front.next_back(),
        }
    }
}

impl<T> ExactSizeIterator for DequeIteratorMut<'_, T> {}

impl<T> FusedIterator for DequeIteratorMut<'_, T> {}

/// An owning iterator over the elements of a [`Deque`].
pub struct DequeIntoIterator<T> {
    front: Rev<std::vec::IntoIter<T>>,
    back: std::vec::IntoIter<T>,
}

impl<T> Iterator for DequeIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.front.next().or_else(|| self.back.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.front.len() + self.back.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for DequeIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.back.next_back().or_else(|| self.front.next_back())
    }
}

impl<T> ExactSizeIterator for DequeIntoIterator<T> {}

impl<T> FusedIterator for DequeIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Deque<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Deque<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for Deque<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from_vec(Vec::from(elements))
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.extend_back(iter);
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = DequeIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        DequeIntoIterator {
            front: self.front.into_iter().rev(),
            back: self.back.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = DequeIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Deque<T> {
    type Item = &'a mut T;
    type IntoIter = DequeIteratorMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        let length = self.len();
        self.get(index)
            .unwrap_or_else(|| panic!("{}", IndexError::OutOfBounds { index, length }))
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let length = self.len();
        self.get_mut(index)
            .unwrap_or_else(|| panic!("{}", IndexError::OutOfBounds { index, length }))
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: PartialEq> PartialEq<Vec<T>> for Deque<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Deque<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.len() == N && self.iter().eq(other.iter())
    }
}

impl<T: PartialOrd> PartialOrd for Deque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for Deque<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

/// Hashes the length followed by every element in logical order, so equal
/// deques hash equally whatever their internal split.
impl<T: Hash> Hash for Deque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

/// Shows the buffer split: `[1, 2, 3 | 4, 5, 6, 7]`.
impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_buffers(&self.front, &self.back, formatter)
    }
}

impl<T: fmt::Display> fmt::Display for Deque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Deque<T> {
    type Inner = T;
    type WithType<B> = Deque<B>;
}

impl<T> Foldable for Deque<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Deque<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Deque<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // Going through Vec gives the midpoint split of a fresh deque.
        Vec::<T>::deserialize(deserializer).map(Self::from_vec)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn buffers<T: Clone>(deque: &Deque<T>) -> (Vec<T>, Vec<T>) {
        (deque.front.clone(), deque.back.clone())
    }

    // =========================================================================
    // Construction
    // =========================================================================

    #[rstest]
    fn test_from_vec_splits_at_midpoint() {
        let deque = Deque::from(vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(buffers(&deque), (vec![3, 2, 1], vec![4, 5, 6, 7]));
        assert_eq!(format!("{deque:?}"), "[1, 2, 3 | 4, 5, 6, 7]");
    }

    #[rstest]
    #[case(0, "[ | ]")]
    #[case(1, "[ | 0]")]
    #[case(2, "[0 | 1]")]
    #[case(3, "[0 | 1, 2]")]
    fn test_debug_small_deques(#[case] length: i32, #[case] expected: &str) {
        let deque: Deque<i32> = (0..length).collect();
        assert_eq!(format!("{deque:?}"), expected);
        assert!(deque.is_balanced());
    }

    #[rstest]
    fn test_display_hides_buffer_split() {
        let deque: Deque<i32> = (1..=4).collect();
        assert_eq!(format!("{deque}"), "[1, 2, 3, 4]");
    }

    // =========================================================================
    // Rebalancing
    // =========================================================================

    #[rstest]
    fn test_rebalance_moves_all_but_last_into_empty_front() {
        let mut deque = Deque::new();
        deque.back = vec![1, 2, 3, 4];
        deque.rebalance();
        assert_eq!(buffers(&deque), (vec![3, 2, 1], vec![4]));
        assert_eq!(deque.to_vec(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_rebalance_moves_all_but_first_into_empty_back() {
        let mut deque = Deque::new();
        deque.front = vec![3, 2, 1];
        deque.rebalance();
        assert_eq!(buffers(&deque), (vec![1], vec![2, 3]));
        assert_eq!(deque.to_vec(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_pop_front_steals_sole_back_element() {
        let mut deque = Deque::from(vec![1, 2]);
        assert_eq!(deque.pop_front(), Some(1));
        assert_eq!(deque.pop_front(), Some(2));
        assert_eq!(deque.pop_front(), None);
    }

    #[rstest]
    fn test_pops_from_one_end_keep_balance() {
        let mut deque: Deque<i32> = (0..20).collect();
        let mut popped = Vec::new();
        while let Some(element) = deque.pop_back() {
            assert!(deque.is_balanced());
            popped.push(element);
        }
        assert_eq!(popped, (0..20).rev().collect::<Vec<_>>());
    }

    #[rstest]
    fn test_pushes_to_one_end_keep_balance() {
        let mut deque = Deque::new();
        for element in 0..10 {
            deque.push_front(element);
            assert!(deque.is_balanced());
        }
        assert_eq!(deque.to_vec(), (0..10).rev().collect::<Vec<_>>());
    }

    // =========================================================================
    // Index Translation
    // =========================================================================

    #[rstest]
    fn test_get_crosses_the_buffer_boundary() {
        let deque: Deque<i32> = (10..17).collect();
        for index in 0..7 {
            assert_eq!(deque.get(index), Some(&(10 + index as i32)));
        }
        assert_eq!(deque.get(7), None);
    }

    #[rstest]
    fn test_set_changes_only_one_position() {
        let mut deque: Deque<i32> = (0..6).collect();
        assert_eq!(deque.set(1, 100), 1);
        assert_eq!(deque.set(4, 400), 4);
        assert_eq!(deque.to_vec(), vec![0, 100, 2, 3, 400, 5]);
    }

    #[rstest]
    #[should_panic(expected = "index 3 out of bounds for length 3")]
    fn test_index_out_of_bounds_panics() {
        let deque: Deque<i32> = (0..3).collect();
        let _ = deque[3];
    }

    #[rstest]
    #[case(0)]
    #[case(2)]
    #[case(3)]
    #[case(5)]
    fn test_insert_matches_vec_insert(#[case] index: usize) {
        let mut deque: Deque<i32> = (0..5).collect();
        let mut expected: Vec<i32> = (0..5).collect();
        deque.insert(index, 99);
        expected.insert(index, 99);
        assert_eq!(deque.to_vec(), expected);
        assert!(deque.is_balanced());
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(4)]
    fn test_remove_matches_vec_remove(#[case] index: usize) {
        let mut deque: Deque<i32> = (0..5).collect();
        let mut expected: Vec<i32> = (0..5).collect();
        assert_eq!(deque.remove(index), expected.remove(index));
        assert_eq!(deque.to_vec(), expected);
        assert!(deque.is_balanced());
    }

    #[rstest]
    fn test_try_insert_past_end_leaves_deque_untouched() {
        let mut deque: Deque<i32> = (0..3).collect();
        assert_eq!(
            deque.try_insert(4, 9),
            Err(IndexError::OutOfBounds { index: 4, length: 3 })
        );
        assert_eq!(deque.to_vec(), vec![0, 1, 2]);
    }

    // =========================================================================
    // Range Translation
    // =========================================================================

    #[rstest]
    #[case(3..3, Span::Between)]
    #[case(0..0, Span::Front(3..3))]
    #[case(0..2, Span::Front(1..3))]
    #[case(1..3, Span::Front(0..2))]
    #[case(3..5, Span::Back(0..2))]
    #[case(5..7, Span::Back(2..4))]
    #[case(2..5, Span::Split { front: 1, back: 2 })]
    #[case(0..7, Span::Split { front: 3, back: 4 })]
    fn test_span_locate(#[case] range: Range<usize>, #[case] expected: Span) {
        assert_eq!(Span::locate(range, 3), expected);
    }

    #[rstest]
    fn test_resolve_range_accepts_all_bound_kinds() {
        assert_eq!(resolve_range(&(..), 5), Ok(0..5));
        assert_eq!(resolve_range(&(2..=4), 5), Ok(2..5));
        assert_eq!(resolve_range(&(3..), 5), Ok(3..5));
        assert_eq!(resolve_range(&(..=0), 5), Ok(0..1));
    }

    #[rstest]
    fn test_resolve_range_rejects_bad_ranges() {
        assert_eq!(
            resolve_range(&(2..9), 5),
            Err(IndexError::RangeOutOfBounds {
                start: 2,
                end: 9,
                length: 5
            })
        );
        #[allow(clippy::reversed_empty_ranges)]
        let inverted = 4..2;
        assert_eq!(
            resolve_range(&inverted, 5),
            Err(IndexError::InvertedRange { start: 4, end: 2 })
        );
    }

    #[rstest]
    #[case(2..5, vec![9, 9])]
    #[case(0..2, vec![7])]
    #[case(4..7, vec![])]
    #[case(3..3, vec![1, 2, 3])]
    #[case(1..1, vec![5])]
    #[case(0..7, vec![])]
    fn test_replace_range_matches_vec_splice(
        #[case] range: Range<usize>,
        #[case] replacement: Vec<i32>,
    ) {
        let mut deque: Deque<i32> = (0..7).collect();
        let mut expected: Vec<i32> = (0..7).collect();
        deque.replace_range(range.clone(), replacement.clone());
        expected.splice(range, replacement);
        assert_eq!(deque.to_vec(), expected);
        assert!(deque.is_balanced());
    }

    #[rstest]
    fn test_remove_range_across_buffers() {
        let mut deque: Deque<i32> = (0..10).collect();
        deque.remove_range(2..8);
        assert_eq!(deque.to_vec(), vec![0, 1, 8, 9]);
        assert!(deque.is_balanced());
    }

    // =========================================================================
    // Rotation and Reversal
    // =========================================================================

    #[rstest]
    fn test_rotate_right_moves_last_to_front() {
        let mut deque = Deque::from([1, 2, 3, 4, 5]);
        deque.rotate_right();
        assert_eq!(deque, [5, 1, 2, 3, 4]);
        assert!(deque.is_balanced());
    }

    #[rstest]
    fn test_rotate_with_replacement_on_empty_deque() {
        let mut deque: Deque<i32> = Deque::new();
        assert_eq!(deque.rotate_right_with(1), None);
        assert_eq!(deque, [1]);
        assert_eq!(deque.rotate_right_with(2), Some(1));
        assert_eq!(deque, [2]);
    }

    #[rstest]
    fn test_reverse_swaps_buffers() {
        let mut deque = Deque::from(vec![1, 2, 3, 4, 5]);
        deque.reverse();
        assert_eq!(deque, [5, 4, 3, 2, 1]);
        assert_eq!(format!("{deque:?}"), "[5, 4, 3 | 2, 1]");
        assert!(deque.is_balanced());
    }

    // =========================================================================
    // Removal From Empty Deques
    // =========================================================================

    #[rstest]
    #[should_panic(expected = "remove_first called on an empty deque")]
    fn test_remove_first_on_empty_panics() {
        let mut deque: Deque<i32> = Deque::new();
        deque.remove_first();
    }

    #[rstest]
    #[should_panic(expected = "remove_last called on an empty deque")]
    fn test_remove_last_on_empty_panics() {
        let mut deque: Deque<i32> = Deque::new();
        deque.remove_last();
    }

    // =========================================================================
    // Traits
    // =========================================================================

    #[rstest]
    fn test_equal_content_with_different_splits_is_equal() {
        let mut pushed = Deque::new();
        for element in 0..4 {
            pushed.push_back(element);
        }
        let collected: Deque<i32> = (0..4).collect();
        assert_ne!(buffers(&pushed), buffers(&collected));
        assert_eq!(pushed, collected);
    }

    #[rstest]
    fn test_iter_mut_reaches_both_buffers() {
        let mut deque: Deque<i32> = (1..=5).collect();
        for element in &mut deque {
            *element *= 10;
        }
        assert_eq!(deque, [10, 20, 30, 40, 50]);
    }

    #[rstest]
    fn test_into_iter_is_double_ended() {
        let deque: Deque<i32> = (1..=5).collect();
        let backwards: Vec<i32> = deque.into_iter().rev().collect();
        assert_eq!(backwards, vec![5, 4, 3, 2, 1]);
    }

    #[rstest]
    fn test_fold_right_visits_last_first() {
        let deque: Deque<i32> = (1..=3).collect();
        let seen = deque.fold_right(Vec::new(), |element, mut seen| {
            seen.push(element);
            seen
        });
        assert_eq!(seen, vec![3, 2, 1]);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_in_logical_order() {
        let deque: Deque<i32> = (1..=4).collect();
        assert_eq!(serde_json::to_string(&deque).unwrap(), "[1,2,3,4]");
    }

    #[rstest]
    fn test_deserialize_builds_balanced_deque() {
        let deque: Deque<i32> = serde_json::from_str("[1,2,3,4,5,6,7]").unwrap();
        assert_eq!(format!("{deque:?}"), "[1, 2, 3 | 4, 5, 6, 7]");
    }
}
