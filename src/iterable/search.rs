//! Forward searches and quantifiers over arbitrary iterables.
//!
//! Every function here consumes its iterable front to back and stops as soon
//! as the answer is known. Pass `&collection` to search by reference and keep
//! the collection.
//!
//! # Examples
//!
//! ```rust
//! use peculiar::iterable::{first, first_or_none, none};
//!
//! let numbers = vec![1, 2, 3, 4, 5, 6, 7, 8, 9];
//!
//! assert_eq!(first(&numbers, |n| *n % 3 == 0), Ok(&3));
//! assert_eq!(first_or_none(&numbers, |n| **n == 10), None);
//! assert!(none(&numbers, |n| **n % 10 == 0));
//! ```

use crate::error::{NotFoundError, SearchError};

/// Returns the first item of `iterable` matching `predicate`.
///
/// Items after the first match are never passed to `predicate`.
///
/// # Errors
///
/// Returns [`NotFoundError`] if no item matches `predicate`.
///
/// # Examples
///
/// ```rust
/// use peculiar::error::NotFoundError;
/// use peculiar::iterable::first;
///
/// assert_eq!(first(1..10, |n| n % 2 == 0), Ok(2));
/// assert_eq!(first(1..10, |n| *n == 10), Err(NotFoundError));
/// ```
pub fn first<I, P>(iterable: I, predicate: P) -> Result<I::Item, NotFoundError>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    iterable.into_iter().find(predicate).ok_or_else(|| {
        tracing::trace!("first: no item matched predicate");
        NotFoundError
    })
}

/// Returns the first item of `iterable` matching `predicate`, or `None`.
///
/// # Examples
///
/// ```rust
/// use peculiar::iterable::first_or_none;
///
/// assert_eq!(first_or_none(1..10, |n| n % 3 == 0), Some(3));
/// assert_eq!(first_or_none(1..10, |n| *n == 10), None);
/// ```
pub fn first_or_none<I, P>(iterable: I, predicate: P) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    match first(iterable, predicate) {
        Ok(item) => Some(item),
        Err(NotFoundError) => None,
    }
}

/// Returns the first item of `iterable` for which a fallible `predicate`
/// returns `Ok(true)`.
///
/// The search stops at the first match or at the first predicate error,
/// whichever comes first.
///
/// # Errors
///
/// - [`SearchError::Predicate`] with the predicate's error if it fails
/// - [`SearchError::NotFound`] if every item was rejected
///
/// # Examples
///
/// ```rust
/// use peculiar::error::SearchError;
/// use peculiar::iterable::try_first;
///
/// let words = ["12", "7", "x", "40"];
/// let parse = |word: &&str| word.parse::<i32>().map(|n| n > 10);
///
/// assert_eq!(try_first(words, parse), Ok("12"));
///
/// let result = try_first(["1", "x", "40"], parse);
/// assert!(matches!(result, Err(SearchError::Predicate(_))));
/// ```
pub fn try_first<I, P, E>(iterable: I, mut predicate: P) -> Result<I::Item, SearchError<E>>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
{
    for item in iterable {
        if predicate(&item).map_err(SearchError::Predicate)? {
            return Ok(item);
        }
    }
    tracing::trace!("try_first: no item matched predicate");
    Err(NotFoundError.into())
}

/// Like [`try_first`], but a search without a match yields `Ok(None)`.
///
/// Only the "not found" outcome is converted. Predicate errors are returned
/// unchanged.
///
/// # Errors
///
/// Returns the predicate's error if it fails before a match is found.
///
/// # Examples
///
/// ```rust
/// use peculiar::iterable::try_first_or_none;
///
/// let positive = |n: &i32| if *n < 0 { Err("negative") } else { Ok(*n > 5) };
///
/// assert_eq!(try_first_or_none([1, 2, 3], positive), Ok(None));
/// assert_eq!(try_first_or_none([1, 9, 3], positive), Ok(Some(9)));
/// assert_eq!(try_first_or_none([1, -1, 9], positive), Err("negative"));
/// ```
pub fn try_first_or_none<I, P, E>(iterable: I, predicate: P) -> Result<Option<I::Item>, E>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
{
    match try_first(iterable, predicate) {
        Ok(item) => Ok(Some(item)),
        Err(SearchError::NotFound(_)) => Ok(None),
        Err(SearchError::Predicate(error)) => Err(error),
    }
}

/// Returns `true` if no item of `iterable` matches `predicate`.
///
/// Returns `false` at the first match without inspecting the remaining
/// items. An empty iterable yields `true`.
///
/// # Examples
///
/// ```rust
/// use peculiar::iterable::none;
///
/// assert!(none(1..10, |n| n % 10 == 0));
/// assert!(!none(1..10, |n| n % 2 == 0));
/// assert!(none(Vec::<i32>::new(), |_| true));
/// ```
pub fn none<I, P>(iterable: I, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    !iterable.into_iter().any(|item| predicate(&item))
}
