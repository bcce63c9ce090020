//! Borrowed views into a [`Deque`](super::Deque).

use std::fmt;
use std::ops::{Index, RangeBounds};

use super::{DequeIterator, resolve_range, slice_buffers, write_buffers};
use crate::collections::{Deque, IndexError};

/// A read-only view of a contiguous range of a [`Deque`].
///
/// A slice borrows one part of each of the deque's buffers, so taking a
/// slice and sub-slicing it are O(1) and never copy elements.
///
/// Unlike [`Deque`], a slice does not keep the buffers balanced: the buffer
/// parts are used as they fall, so `deque.range(0..2)` may cover only the
/// front buffer. Rebalancing would require moving elements the view does
/// not own. [`is_balanced`](Self::is_balanced) reports the split and
/// [`to_deque`](Self::to_deque) produces a balanced owned copy.
///
/// # Examples
///
/// ```rust
/// use strata::collections::Deque;
///
/// let deque: Deque<i32> = (0..10).collect();
/// let slice = deque.range(2..8);
/// assert_eq!(slice.first(), Some(&2));
/// assert_eq!(slice[5], 7);
///
/// let inner = slice.range(1..3);
/// assert_eq!(inner, [3, 4][..]);
/// ```
pub struct DequeSlice<'a, T> {
    /// Part of the deque's front buffer, stored last-to-first.
    front: &'a [T],
    /// Part of the deque's back buffer, stored first-to-last.
    back: &'a [T],
}

impl<'a, T> DequeSlice<'a, T> {
    pub(super) const fn new(front: &'a [T], back: &'a [T]) -> Self {
        Self { front, back }
    }

    /// Returns the number of elements in the view.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.front.len() + self.back.len()
    }

    /// Returns `true` if the view contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.front.is_empty() && self.back.is_empty()
    }

    /// Returns `true` if the view's split would satisfy the [`Deque`]
    /// balance rule. Views are not rebalanced, so this may be `false`.
    #[must_use]
    pub const fn is_balanced(&self) -> bool {
        !(self.front.is_empty() && self.back.len() > 1)
            && !(self.back.is_empty() && self.front.len() > 1)
    }

    /// Returns the first element of the view.
    #[must_use]
    pub fn first(&self) -> Option<&'a T> {
        self.front.last().or_else(|| self.back.first())
    }

    /// Returns the last element of the view.
    #[must_use]
    pub fn last(&self) -> Option<&'a T> {
        self.back.last().or_else(|| self.front.first())
    }

    /// Returns the element at `index` relative to the start of the view.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&'a T> {
        let front_length = self.front.len();
        if index < front_length {
            self.front.get(front_length - 1 - index)
        } else {
            self.back.get(index - front_length)
        }
    }

    /// Returns an iterator over the elements of the view.
    #[must_use]
    pub fn iter(&self) -> DequeIterator<'a, T> {
        DequeIterator::new(self.front, self.back)
    }

    /// Narrows the view to `range`, relative to the start of the view.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or ends past `len`.
    #[must_use]
    pub fn range<R>(&self, range: R) -> Self
    where
        R: RangeBounds<usize>,
    {
        self.try_range(range)
            .unwrap_or_else(|error| panic!("{error}"))
    }

    /// Narrows the view to `range`, or reports why the range is invalid.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::InvertedRange`] or
    /// [`IndexError::RangeOutOfBounds`].
    pub fn try_range<R>(&self, range: R) -> Result<Self, IndexError>
    where
        R: RangeBounds<usize>,
    {
        let range = resolve_range(&range, self.len())?;
        let (front, back) = slice_buffers(self.front, self.back, range);
        Ok(Self::new(front, back))
    }

    /// Copies the view into a new, balanced [`Deque`].
    #[must_use]
    pub fn to_deque(&self) -> Deque<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Copies the view into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Clone for DequeSlice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DequeSlice<'_, T> {}

impl<T> Index<usize> for DequeSlice<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        let length = self.len();
        self.get(index)
            .unwrap_or_else(|| panic!("{}", IndexError::OutOfBounds { index, length }))
    }
}

impl<'a, T> IntoIterator for DequeSlice<'a, T> {
    type Item = &'a T;
    type IntoIter = DequeIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &DequeSlice<'a, T> {
    type Item = &'a T;
    type IntoIter = DequeIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for DequeSlice<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DequeSlice<'_, T> {}

impl<T: PartialEq> PartialEq<[T]> for DequeSlice<'_, T> {
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for DequeSlice<'_, T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        *self == other[..]
    }
}

/// Uses the same `[front | back]` layout as [`Deque`].
impl<T: fmt::Debug> fmt::Debug for DequeSlice<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_buffers(self.front, self.back, formatter)
    }
}
