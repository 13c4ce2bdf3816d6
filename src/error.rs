//! Error types raised by the collection helpers.
//!
//! Every fallible helper in this crate returns one of the types below:
//!
//! - [`NotFoundError`]: no element satisfied the predicate of a search
//! - [`SearchError`]: a search with a fallible predicate either found nothing
//!   or the predicate itself failed
//! - [`PreconditionError`]: a `check*` or `require*` gate rejected its input
//!
//! # Examples
//!
//! ```rust
//! use peculiar::error::{NotFoundError, PreconditionError};
//!
//! assert_eq!(
//!     NotFoundError.to_string(),
//!     "No item found matching predicate."
//! );
//!
//! let error = PreconditionError::IllegalArgument {
//!     message: "name is required".to_string(),
//! };
//! assert!(error.is_illegal_argument());
//! assert_eq!(error.message(), "name is required");
//! ```

use thiserror::Error;

/// Raised when no element of a collection satisfies a search predicate.
///
/// Returned by `first` and `last`. The `_or_none` counterparts intercept
/// exactly this error and turn it into `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
#[error("No item found matching predicate.")]
pub struct NotFoundError;

/// The failure of a search whose predicate can itself fail.
///
/// # Examples
///
/// ```rust
/// use peculiar::error::{NotFoundError, SearchError};
///
/// let missing: SearchError<String> = SearchError::NotFound(NotFoundError);
/// assert!(missing.is_not_found());
///
/// let failed: SearchError<String> = SearchError::Predicate("bad input".to_string());
/// assert_eq!(failed.into_predicate_error(), Some("bad input".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError<E> {
    /// Every element was inspected and none matched.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The predicate returned an error before a match was found.
    #[error("predicate failed: {0}")]
    Predicate(E),
}

impl<E> SearchError<E> {
    /// Returns `true` if the search ran to completion without a match.
    #[inline]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns the predicate's error, if that is what stopped the search.
    #[inline]
    pub fn into_predicate_error(self) -> Option<E> {
        match self {
            Self::NotFound(_) => None,
            Self::Predicate(error) => Some(error),
        }
    }
}

/// Raised by the `check*` and `require*` families when a condition fails.
///
/// The three variants mirror the three intents a caller can express:
///
/// - [`Failed`](Self::Failed): a boolean condition passed to `check` or
///   `require` did not hold
/// - [`IllegalState`](Self::IllegalState): `check_not_none` found an absent
///   value where internal state promised one
/// - [`IllegalArgument`](Self::IllegalArgument): `require_not_none` found an
///   absent argument
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum PreconditionError {
    /// A boolean condition did not hold.
    #[error("{message}")]
    Failed {
        /// Human-readable description of the failed condition.
        message: String,
    },

    /// An internal value assumed to be present was absent.
    #[error("{message}")]
    IllegalState {
        /// Human-readable description of the missing value.
        message: String,
    },

    /// A caller-supplied argument required to be present was absent.
    #[error("{message}")]
    IllegalArgument {
        /// Human-readable description of the missing argument.
        message: String,
    },
}

impl PreconditionError {
    /// Returns the message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            Self::Failed { message }
            | Self::IllegalState { message }
            | Self::IllegalArgument { message } => message,
        }
    }

    /// Returns `true` for a failed boolean condition.
    #[inline]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Returns `true` for a failed state assumption.
    #[inline]
    pub const fn is_illegal_state(&self) -> bool {
        matches!(self, Self::IllegalState { .. })
    }

    /// Returns `true` for a failed argument validation.
    #[inline]
    pub const fn is_illegal_argument(&self) -> bool {
        matches!(self, Self::IllegalArgument { .. })
    }
}

static_assertions::assert_impl_all!(NotFoundError: Send, Sync, Copy, std::error::Error);
static_assertions::assert_impl_all!(PreconditionError: Send, Sync, std::error::Error);
static_assertions::assert_impl_all!(SearchError<std::io::Error>: Send, Sync, std::error::Error);
