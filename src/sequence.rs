//! Backward searches over sequences.
//!
//! A sequence here is anything whose iterator can be walked from the back:
//! `Vec`, slices, arrays, `VecDeque`, ranges, `BTreeMap` and so on
//! ([`DoubleEndedIterator`]). Single-pass iterables that can only be read
//! forward are rejected at compile time.
//!
//! - [`last`]: the last item matching a predicate, or [`NotFoundError`]
//! - [`last_or_none`]: the last item matching a predicate, or `None`
//! - [`try_last`] / [`try_last_or_none`]: the same with fallible predicates
//! - [`SequenceExt`]: method-call syntax for all of the above
//!
//! # Examples
//!
//! ```rust
//! use peculiar::sequence::{last, last_or_none};
//!
//! let numbers = [4, 7, 10, 13, 16];
//!
//! assert_eq!(last(&numbers, |n| **n % 2 == 1), Ok(&13));
//! assert_eq!(last_or_none(&numbers, |n| **n > 20), None);
//! ```

use crate::error::{NotFoundError, SearchError};

/// Returns the last item of `sequence` matching `predicate`.
///
/// The sequence is scanned from the back, so `predicate` only sees the items
/// after the last match, and the match itself.
///
/// # Errors
///
/// Returns [`NotFoundError`] if no item matches `predicate`.
///
/// # Examples
///
/// ```rust
/// use peculiar::error::NotFoundError;
/// use peculiar::sequence::last;
///
/// assert_eq!(last(1..10, |n| n % 2 == 0), Ok(8));
/// assert_eq!(last(1..10, |n| n % 3 == 0), Ok(9));
/// assert_eq!(last(1..10, |n| *n == 10), Err(NotFoundError));
/// ```
pub fn last<S, P>(sequence: S, predicate: P) -> Result<S::Item, NotFoundError>
where
    S: IntoIterator,
    S::IntoIter: DoubleEndedIterator,
    P: FnMut(&S::Item) -> bool,
{
    sequence.into_iter().rfind(predicate).ok_or_else(|| {
        tracing::trace!("last: no item matched predicate");
        NotFoundError
    })
}

/// Returns the last item of `sequence` matching `predicate`, or `None`.
///
/// # Examples
///
/// ```rust
/// use peculiar::sequence::last_or_none;
///
/// let words = vec!["apple", "banana", "avocado", "cherry"];
///
/// assert_eq!(last_or_none(&words, |word| word.starts_with('a')), Some(&"avocado"));
/// assert_eq!(last_or_none(&words, |word| word.is_empty()), None);
/// ```
pub fn last_or_none<S, P>(sequence: S, predicate: P) -> Option<S::Item>
where
    S: IntoIterator,
    S::IntoIter: DoubleEndedIterator,
    P: FnMut(&S::Item) -> bool,
{
    match last(sequence, predicate) {
        Ok(item) => Some(item),
        Err(NotFoundError) => None,
    }
}

/// Returns the last item of `sequence` for which a fallible `predicate`
/// returns `Ok(true)`.
///
/// # Errors
///
/// - [`SearchError::Predicate`] with the predicate's error if it fails
/// - [`SearchError::NotFound`] if every item was rejected
pub fn try_last<S, P, E>(sequence: S, mut predicate: P) -> Result<S::Item, SearchError<E>>
where
    S: IntoIterator,
    S::IntoIter: DoubleEndedIterator,
    P: FnMut(&S::Item) -> Result<bool, E>,
{
    for item in sequence.into_iter().rev() {
        if predicate(&item).map_err(SearchError::Predicate)? {
            return Ok(item);
        }
    }
    tracing::trace!("try_last: no item matched predicate");
    Err(NotFoundError.into())
}

/// Like [`try_last`], but a search without a match yields `Ok(None)`.
///
/// # Errors
///
/// Returns the predicate's error if it fails before a match is found.
///
/// # Examples
///
/// ```rust
/// use peculiar::sequence::try_last_or_none;
///
/// let inputs = ["3", "oops", "12", "5"];
/// let big = |text: &&str| text.parse::<u32>().map(|n| n > 10);
///
/// assert_eq!(try_last_or_none(inputs, big), Ok(Some("12")));
/// assert!(try_last_or_none(["oops", "1"], big).is_err());
/// ```
pub fn try_last_or_none<S, P, E>(sequence: S, predicate: P) -> Result<Option<S::Item>, E>
where
    S: IntoIterator,
    S::IntoIter: DoubleEndedIterator,
    P: FnMut(&S::Item) -> Result<bool, E>,
{
    match try_last(sequence, predicate) {
        Ok(item) => Ok(Some(item)),
        Err(SearchError::NotFound(_)) => Ok(None),
        Err(SearchError::Predicate(error)) => Err(error),
    }
}

/// Extension methods for backward searches on double-ended sequences.
///
/// # Examples
///
/// ```rust
/// use peculiar::sequence::SequenceExt;
///
/// let readings = vec![1.5, 3.0, 2.25, 0.5];
///
/// assert_eq!(readings.iter().last_matching(|r| **r > 2.0), Ok(&2.25));
/// assert_eq!(readings.iter().last_matching_or_none(|r| **r > 9.0), None);
/// ```
pub trait SequenceExt: IntoIterator + Sized {
    /// See [`last`].
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] if no item matches `predicate`.
    fn last_matching<P>(self, predicate: P) -> Result<Self::Item, NotFoundError>
    where
        Self::IntoIter: DoubleEndedIterator,
        P: FnMut(&Self::Item) -> bool,
    {
        last(self, predicate)
    }

    /// See [`last_or_none`].
    fn last_matching_or_none<P>(self, predicate: P) -> Option<Self::Item>
    where
        Self::IntoIter: DoubleEndedIterator,
        P: FnMut(&Self::Item) -> bool,
    {
        last_or_none(self, predicate)
    }

    /// See [`try_last`].
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Predicate`] if `predicate` fails and
    /// [`SearchError::NotFound`] if nothing matches.
    fn try_last_matching<P, E>(self, predicate: P) -> Result<Self::Item, SearchError<E>>
    where
        Self::IntoIter: DoubleEndedIterator,
        P: FnMut(&Self::Item) -> Result<bool, E>,
    {
        try_last(self, predicate)
    }

    /// See [`try_last_or_none`].
    ///
    /// # Errors
    ///
    /// Returns the predicate's error if it fails before a match is found.
    fn try_last_matching_or_none<P, E>(self, predicate: P) -> Result<Option<Self::Item>, E>
    where
        Self::IntoIter: DoubleEndedIterator,
        P: FnMut(&Self::Item) -> Result<bool, E>,
    {
        try_last_or_none(self, predicate)
    }
}

impl<S: IntoIterator> SequenceExt for S {}
