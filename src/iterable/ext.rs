//! Method-call syntax for the iterable helpers.

use std::iter::Sum;

use super::{first, first_or_none, map_not_none, none, sum_by, try_first, try_first_or_none};
use crate::error::{NotFoundError, SearchError};

/// Extension methods available on every [`IntoIterator`].
///
/// Each method forwards to the free function of the same purpose in
/// [`crate::iterable`]. Method names avoid the ones [`Iterator`] already
/// defines.
///
/// # Examples
///
/// ```rust
/// use peculiar::iterable::IterableExt;
///
/// let numbers = vec![3, 8, 12, 5];
///
/// assert_eq!(numbers.iter().first_matching(|n| **n > 10), Ok(&12));
/// assert_eq!(numbers.iter().first_matching_or_none(|n| **n > 100), None);
/// assert!(numbers.iter().none_match(|n| **n < 0));
///
/// let total: i32 = numbers.iter().sum_by(|n| *n);
/// assert_eq!(total, 28);
///
/// let halves = numbers.map_not_none(|n| (n % 2 == 0).then_some(n / 2));
/// assert_eq!(halves, [4, 6]);
/// ```
pub trait IterableExt: IntoIterator + Sized {
    /// See [`first`](crate::iterable::first).
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if no item matches `predicate`.
    fn first_matching<P>(self, predicate: P) -> Result<Self::Item, NotFoundError>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        first(self, predicate)
    }

    /// See [`first_or_none`](crate::iterable::first_or_none).
    fn first_matching_or_none<P>(self, predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        first_or_none(self, predicate)
    }

    /// See [`try_first`](crate::iterable::try_first).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Predicate`] if `predicate` fails and
    /// [`SearchError::NotFound`] if nothing matches.
    fn try_first_matching<P, E>(self, predicate: P) -> Result<Self::Item, SearchError<E>>
    where
        P: FnMut(&Self::Item) -> Result<bool, E>,
    {
        try_first(self, predicate)
    }

    /// See [`try_first_or_none`](crate::iterable::try_first_or_none).
    ///
    /// # Errors
    ///
    /// Returns the predicate's error if it fails before a match is found.
    fn try_first_matching_or_none<P, E>(self, predicate: P) -> Result<Option<Self::Item>, E>
    where
        P: FnMut(&Self::Item) -> Result<bool, E>,
    {
        try_first_or_none(self, predicate)
    }

    /// See [`map_not_none`](crate::iterable::map_not_none).
    fn map_not_none<F, R>(self, mapping: F) -> Vec<R>
    where
        F: FnMut(Self::Item) -> Option<R>,
    {
        map_not_none(self, mapping)
    }

    /// See [`none`](crate::iterable::none).
    fn none_match<P>(self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        none(self, predicate)
    }

    /// See [`sum_by`](crate::iterable::sum_by).
    fn sum_by<F, N>(self, selector: F) -> N
    where
        F: FnMut(Self::Item) -> N,
        N: Sum<N>,
    {
        sum_by(self, selector)
    }
}

impl<I: IntoIterator> IterableExt for I {}
