//! Lazy singly-linked list with memoized tails.
//!
//! This module provides [`List`], a persistent cons list whose tails are
//! computed on demand.
//!
//! # Overview
//!
//! A `List` is either empty or a head element followed by a *tail thunk*:
//! a closure that produces the rest of the list the first time it is
//! needed. The result is cached, so walking the same list twice runs each
//! thunk at most once.
//!
//! - O(1) `cons`, `head`, `is_empty`
//! - O(1) `tail` (plus the cost of the thunk on first access)
//! - O(n) `get`, `len`, `reversed`, `to_vec`
//! - Lazy `map`, `filter`, `take`, `take_while`, `zip`, `append`, `drop_last`
//!
//! Because tails are only forced when reached, lists may be infinite:
//!
//! ```rust
//! use strata::collections::List;
//!
//! let squares = List::iterate(1u64, |n| n + 1).map(|n| n * n);
//! assert_eq!(squares.take(4).to_vec(), vec![1, 4, 9, 16]);
//! ```
//!
//! Operations that need the whole list (`len`, `to_vec`, `reversed`,
//! equality, formatting, folding) never return on an infinite list.
//!
//! # Sharing
//!
//! Cloning a list copies one pointer. Lists are built on `Rc` and hold
//! non-`Send` closures, so they stay on the thread that created them.

use std::cell::{Cell, OnceCell};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};
use std::rc::Rc;

use super::Deque;
use crate::typeclass::{Foldable, TypeConstructor};

// =============================================================================
// Tail Definition
// =============================================================================

type Thunk<T> = Box<dyn FnOnce() -> List<T>>;

/// The memoized rest of a list.
///
/// Holds the thunk until the first `force`, then the list it produced. A
/// thunk that panics leaves the tail poisoned.
struct Tail<T> {
    forced: OnceCell<List<T>>,
    thunk: Cell<Option<Thunk<T>>>,
}

impl<T> Tail<T> {
    fn pending(thunk: Thunk<T>) -> Self {
        Self {
            forced: OnceCell::new(),
            thunk: Cell::new(Some(thunk)),
        }
    }

    fn ready(list: List<T>) -> Self {
        Self {
            forced: OnceCell::from(list),
            thunk: Cell::new(None),
        }
    }

    /// Runs the thunk on first access and returns the cached list.
    ///
    /// # Panics
    ///
    /// Panics if an earlier call to the thunk panicked.
    fn force(&self) -> &List<T> {
        self.forced.get_or_init(|| {
            let Some(thunk) = self.thunk.take() else {
                panic!("list tail has been poisoned by a panicking thunk");
            };
            thunk()
        })
    }
}

enum Node<T> {
    Nil,
    Cons(T, Tail<T>),
}

// =============================================================================
// List Definition
// =============================================================================

/// A lazy, persistent singly-linked list.
///
/// # Time Complexity
///
/// | Operation        | Complexity                          |
/// |------------------|-------------------------------------|
/// | `new`, `cons`    | O(1)                                |
/// | `head`           | O(1)                                |
/// | `tail`           | O(1) after the tail has been forced |
/// | `get`            | O(i)                                |
/// | `len`            | O(n)                                |
/// | lazy transforms  | O(1) until traversed                |
///
/// # Examples
///
/// ```rust
/// use strata::collections::List;
///
/// let list: List<i32> = (1..=3).collect();
/// let extended = List::cons(0, list.clone());
///
/// assert_eq!(extended.to_vec(), vec![0, 1, 2, 3]);
/// assert_eq!(list.to_vec(), vec![1, 2, 3]); // shared, not copied
/// assert_eq!(format!("{extended}"), "[0, 1, 2, 3]");
/// ```
pub struct List<T> {
    node: Rc<Node<T>>,
}

impl<T> List<T> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            node: Rc::new(Node::Nil),
        }
    }

    /// Prepends `head` to an already built `tail`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::List;
    ///
    /// let list = List::cons(1, List::cons(2, List::new()));
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(list.len(), 2);
    /// ```
    #[must_use]
    pub fn cons(head: T, tail: Self) -> Self {
        Self {
            node: Rc::new(Node::Cons(head, Tail::ready(tail))),
        }
    }

    /// Prepends `head` to a tail that is computed on first access.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use strata::collections::List;
    ///
    /// let calls = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&calls);
    /// let list = List::lazy(1, move || {
    ///     counter.set(counter.get() + 1);
    ///     List::cons(2, List::new())
    /// });
    ///
    /// assert_eq!(calls.get(), 0);
    /// assert_eq!(list.get(1), Some(&2));
    /// assert_eq!(list.get(1), Some(&2));
    /// assert_eq!(calls.get(), 1); // memoized
    /// ```
    #[must_use]
    pub fn lazy<F>(head: T, tail: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        Self {
            node: Rc::new(Node::Cons(head, Tail::pending(Box::new(tail)))),
        }
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(*self.node, Node::Nil)
    }

    /// Returns the first element.
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        match &*self.node {
            Node::Nil => None,
            Node::Cons(head, _) => Some(head),
        }
    }

    /// Returns the list without its first element, forcing the tail.
    #[must_use]
    pub fn tail(&self) -> Option<Self> {
        self.forced_tail().cloned()
    }

    /// Splits the list into its first element and the rest.
    #[must_use]
    pub fn uncons(&self) -> Option<(&T, Self)> {
        match &*self.node {
            Node::Nil => None,
            Node::Cons(head, tail) => Some((head, tail.force().clone())),
        }
    }

    fn forced_tail(&self) -> Option<&Self> {
        match &*self.node {
            Node::Nil => None,
            Node::Cons(_, tail) => Some(tail.force()),
        }
    }

    /// Forces the tail and continues with `then`, or ends the list.
    fn rest<U, F>(&self, then: F) -> List<U>
    where
        F: FnOnce(&Self) -> List<U>,
    {
        self.forced_tail().map_or_else(List::new, then)
    }

    /// Returns the element at `index`, forcing the tails before it.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        let mut current = self;
        for _ in 0..index {
            current = current.forced_tail()?;
        }
        current.head()
    }

    /// Returns the number of elements, forcing the whole list.
    ///
    /// Does not return for an infinite list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns an iterator over references to the elements.
    ///
    /// Each step forces one more tail.
    #[must_use]
    pub fn iter(&self) -> ListIterator<'_, T> {
        ListIterator {
            cursor: Cursor::At(self),
        }
    }

    /// Returns the list without its first `count` elements.
    ///
    /// The result shares its cells with `self`; only the first `count`
    /// tails are forced.
    #[must_use]
    pub fn drop_first(&self, count: usize) -> Self {
        let mut current = self;
        for _ in 0..count {
            match current.forced_tail() {
                Some(tail) => current = tail,
                None => break,
            }
        }
        current.clone()
    }

    /// Returns the list without its longest prefix satisfying `predicate`.
    #[must_use]
    pub fn drop_while<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let mut current = self;
        while let Node::Cons(head, tail) = &*current.node {
            if !predicate(head) {
                break;
            }
            current = tail.force();
        }
        current.clone()
    }

    /// Detaches an already forced tail from a list that is the only owner
    /// of its first cell.
    fn detach_tail(&mut self) -> Option<Self> {
        match Rc::get_mut(&mut self.node)? {
            Node::Nil => None,
            Node::Cons(_, tail) => tail.forced.take(),
        }
    }
}

impl<T: Clone + 'static> List<T> {
    /// Creates an infinite list repeating `element`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::List;
    ///
    /// assert_eq!(List::repeat('x').take(3).to_vec(), vec!['x', 'x', 'x']);
    /// ```
    #[must_use]
    pub fn repeat(element: T) -> Self {
        Self::lazy(element.clone(), move || Self::repeat(element))
    }

    /// Creates the infinite list `seed, step(seed), step(step(seed)), ...`.
    #[must_use]
    pub fn iterate<F>(seed: T, step: F) -> Self
    where
        F: Fn(&T) -> T + 'static,
    {
        Self::iterate_shared(seed, Rc::new(step))
    }

    fn iterate_shared<F>(seed: T, step: Rc<F>) -> Self
    where
        F: Fn(&T) -> T + 'static,
    {
        Self::lazy(seed.clone(), move || {
            let next = step(&seed);
            Self::iterate_shared(next, step)
        })
    }

    /// Builds a list by repeatedly applying `step` to a state until it
    /// returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::List;
    ///
    /// let countdown = List::unfold(3, |n| (n > 0).then(|| (n, n - 1)));
    /// assert_eq!(countdown.to_vec(), vec![3, 2, 1]);
    /// ```
    #[must_use]
    pub fn unfold<S, F>(state: S, step: F) -> Self
    where
        S: 'static,
        F: Fn(S) -> Option<(T, S)> + 'static,
    {
        Self::unfold_shared(state, Rc::new(step))
    }

    fn unfold_shared<S, F>(state: S, step: Rc<F>) -> Self
    where
        S: 'static,
        F: Fn(S) -> Option<(T, S)> + 'static,
    {
        match step(state) {
            None => Self::new(),
            Some((head, next)) => Self::lazy(head, move || Self::unfold_shared(next, step)),
        }
    }

    /// Lazily applies `function` to every element.
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> List<U>
    where
        U: 'static,
        F: Fn(&T) -> U + 'static,
    {
        Self::map_shared(self, Rc::new(function))
    }

    fn map_shared<U, F>(list: &Self, function: Rc<F>) -> List<U>
    where
        U: 'static,
        F: Fn(&T) -> U + 'static,
    {
        let Some(head) = list.head() else {
            return List::new();
        };
        let mapped = function(head);
        let list = list.clone();
        List::lazy(mapped, move || {
            list.rest(|tail| Self::map_shared(tail, function))
        })
    }

    /// Lazily keeps the elements satisfying `predicate`.
    ///
    /// Finding each kept element forces the tails of the skipped ones, so
    /// filtering an infinite list with no further matches does not return.
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self::filter_shared(self, Rc::new(predicate))
    }

    fn filter_shared<P>(list: &Self, predicate: Rc<P>) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        let matched = list.drop_while(|element| !predicate(element));
        let Some(head) = matched.head().cloned() else {
            return Self::new();
        };
        Self::lazy(head, move || {
            matched.rest(|tail| Self::filter_shared(tail, predicate))
        })
    }

    /// Lazily keeps the first `count` elements.
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        let Some(head) = self.head().filter(|_| count > 0) else {
            return Self::new();
        };
        let list = self.clone();
        Self::lazy(head.clone(), move || match count - 1 {
            0 => Self::new(),
            remaining => list.rest(|tail| tail.take(remaining)),
        })
    }

    /// Lazily keeps the longest prefix satisfying `predicate`.
    #[must_use]
    pub fn take_while<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self::take_while_shared(self, Rc::new(predicate))
    }

    fn take_while_shared<P>(list: &Self, predicate: Rc<P>) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        let Some(head) = list.head().filter(|head| predicate(*head)) else {
            return Self::new();
        };
        let list = list.clone();
        Self::lazy(head.clone(), move || {
            list.rest(|tail| Self::take_while_shared(tail, predicate))
        })
    }

    /// Lazily pairs up the elements of two lists, stopping at the shorter.
    #[must_use]
    pub fn zip<U>(&self, other: &List<U>) -> List<(T, U)>
    where
        U: Clone + 'static,
    {
        let (Some(left), Some(right)) = (self.head(), other.head()) else {
            return List::new();
        };
        let (left_list, right_list) = (self.clone(), other.clone());
        List::lazy((left.clone(), right.clone()), move || {
            match (left_list.forced_tail(), right_list.forced_tail()) {
                (Some(left_tail), Some(right_tail)) => left_tail.zip(right_tail),
                _ => List::new(),
            }
        })
    }

    /// Lazily concatenates `other` after `self`.
    ///
    /// The cells of `other` are shared, not copied.
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        let Some(head) = self.head() else {
            return other.clone();
        };
        let (list, other) = (self.clone(), other.clone());
        Self::lazy(head.clone(), move || list.rest(|tail| tail.append(&other)))
    }

    /// Lazily drops the last `count` elements.
    ///
    /// Reading runs `count` elements ahead of what has been produced, kept in
    /// a sliding [`Deque`] window, so this also works on infinite lists.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strata::collections::List;
    ///
    /// let list: List<i32> = (1..=5).collect();
    /// assert_eq!(list.drop_last(2).to_vec(), vec![1, 2, 3]);
    ///
    /// let naturals = List::iterate(0, |n| n + 1);
    /// assert_eq!(naturals.drop_last(3).take(2).to_vec(), vec![0, 1]);
    /// ```
    #[must_use]
    pub fn drop_last(&self, count: usize) -> Self {
        Self::drop_last_from(self.clone(), Deque::new(), count)
    }

    fn drop_last_from(mut list: Self, mut window: Deque<T>, count: usize) -> Self {
        while window.len() <= count {
            let Some((head, tail)) = list.uncons() else {
                return Self::new();
            };
            window.push_back(head.clone());
            list = tail;
        }
        let emitted = window.remove_first();
        Self::lazy(emitted, move || Self::drop_last_from(list, window, count))
    }
}

impl<T: Clone> List<T> {
    /// Returns a new list with the elements in reverse order.
    ///
    /// Forces the whole list.
    #[must_use]
    pub fn reversed(&self) -> Self {
        self.iter()
            .fold(Self::new(), |reversed, element| Self::cons(element.clone(), reversed))
    }

    /// Copies the elements into a `Vec`, forcing the whole list.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the elements of a [`List`].
///
/// The tail behind an element is forced only when the element after it is
/// requested.
pub struct ListIterator<'a, T> {
    cursor: Cursor<'a, T>,
}

/// Where a [`ListIterator`] resumes.
enum Cursor<'a, T> {
    At(&'a List<T>),
    After(&'a Tail<T>),
    Done,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> Clone for ListIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor,
        }
    }
}

impl<'a, T> Iterator for ListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let list = match self.cursor {
            Cursor::At(list) => list,
            Cursor::After(tail) => tail.force(),
            Cursor::Done => return None,
        };
        match &*list.node {
            Node::Nil => {
                self.cursor = Cursor::Done;
                None
            }
            Node::Cons(head, tail) => {
                self.cursor = Cursor::After(tail);
                Some(head)
            }
        }
    }
}

impl<T> FusedIterator for ListIterator<'_, T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            node: Rc::clone(&self.node),
        }
    }
}

impl<T> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Unlinks forced tails one at a time, so dropping a long list does not
/// recurse once per cell.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut next = self.detach_tail();
        while let Some(mut list) = next {
            next = list.detach_tail();
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        elements
            .into_iter()
            .rev()
            .fold(Self::new(), |tail, head| Self::cons(head, tail))
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = ListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node) || self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
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

impl<T> TypeConstructor for List<T> {
    type Inner = T;
    type WithType<B> = List<B>;
}

impl<T: Clone> Foldable for List<T> {
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
        self.to_vec()
            .into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}

static_assertions::assert_not_impl_any!(List<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
