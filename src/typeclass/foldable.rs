//! Foldable type class - reducing a collection to a summary value.
//!
//! Every collection in this crate implements [`Foldable`], so code that only
//! needs to walk the elements once (sums, searches, conversions) can be
//! written against the trait instead of a concrete container.
//!
//! # Laws
//!
//! ## Consistency between `fold_left` and `fold_right`
//!
//! For an associative operation `f` with identity `e`:
//!
//! ```text
//! fa.fold_left(e, f) == fa.fold_right(e, flip(f))
//! ```
//!
//! ## Consistency with `to_list`
//!
//! ```text
//! fa.fold_left(init, f) == fa.to_list().into_iter().fold(init, f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use strata::collections::{Deque, Tree};
//! use strata::typeclass::Foldable;
//!
//! let deque: Deque<i32> = (1..=4).collect();
//! assert_eq!(deque.fold_left(0, |total, element| total + element), 10);
//!
//! // Trees fold in ascending order regardless of insertion order
//! let tree: Tree<i32> = [3, 1, 2].into_iter().collect();
//! let digits = tree.fold_right(String::new(), |element, text| format!("{element}{text}"));
//! assert_eq!(digits, "123");
//! ```

use super::higher::TypeConstructor;

/// A collection whose elements can be folded into a single value.
///
/// # Required Methods
///
/// - `fold_left`: fold from the first element to the last
/// - `fold_right`: fold from the last element to the first
///
/// # Provided Methods
///
/// `is_empty`, `length`, `to_list`, `find`, `exists` and `for_all` are
/// derived from `fold_left`. Collections that track their size override
/// `is_empty` and `length`.
pub trait Foldable: TypeConstructor {
    /// Folds the elements from first to last.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::typeclass::Foldable;
    ///
    /// let values = vec![1, 2, 3];
    /// assert_eq!(values.fold_left(0, |total, element| total + element), 6);
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the elements from last to first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::typeclass::Foldable;
    ///
    /// let values = vec!['a', 'b', 'c'];
    /// let text = values.fold_right(String::new(), |element, mut text| {
    ///     text.push(element);
    ///     text
    /// });
    /// assert_eq!(text, "cba");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns `true` if the collection has no elements.
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Returns the number of elements.
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Collects the elements into a `Vec` in fold order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::Tree;
    /// use strata::typeclass::Foldable;
    ///
    /// let tree: Tree<i32> = [5, 3, 4].into_iter().collect();
    /// assert_eq!(tree.to_list(), vec![3, 4, 5]);
    /// ```
    fn to_list(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }

    /// Returns the first element satisfying `predicate`.
    fn find<P>(self, mut predicate: P) -> Option<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(None, |found, element| {
            found.or_else(|| predicate(&element).then_some(element))
        })
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        self.clone().find(|element| predicate(element)).is_some()
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// An empty collection satisfies every predicate.
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Clone,
    {
        !self.exists(|element| !predicate(element))
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Some(element) => function(element, init),
            None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> Foldable for Vec<T> {
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
        self.is_empty()
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn to_list(self) -> Self {
        self
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(4), 14)]
    #[case(None, 10)]
    fn option_fold_left_adds_the_element(#[case] value: Option<i32>, #[case] expected: i32) {
        assert_eq!(value.fold_left(10, |total, element| total + element), expected);
    }

    #[rstest]
    fn option_length_and_emptiness() {
        assert_eq!(Some(1).length(), 1);
        assert_eq!(None::<i32>.length(), 0);
        assert!(Foldable::is_empty(&None::<i32>));
    }

    #[rstest]
    fn vec_fold_right_visits_last_element_first() {
        let visited = vec![1, 2, 3].fold_right(Vec::new(), |element, mut seen| {
            seen.push(element);
            seen
        });
        assert_eq!(visited, vec![3, 2, 1]);
    }

    #[rstest]
    fn find_returns_first_match() {
        assert_eq!(vec![1, 4, 6, 9].find(|element| element % 2 == 0), Some(4));
        assert_eq!(vec![1, 3].find(|element| element % 2 == 0), None);
    }

    #[rstest]
    fn exists_and_for_all_agree_on_empty_vec() {
        let empty: Vec<i32> = Vec::new();
        assert!(!empty.exists(|_| true));
        assert!(empty.for_all(|_| false));
    }
}
