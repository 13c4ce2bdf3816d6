//! # peculiar
//!
//! Functional-style helpers over iterables and sequences, in the spirit of
//! the collection APIs of languages such as Kotlin.
//!
//! ## Overview
//!
//! Every helper is a stateless, single-pass function over anything that
//! implements [`IntoIterator`]. Inputs are never mutated. The library
//! includes:
//!
//! - **Search**: `first`, `first_or_none`, `last`, `last_or_none`, with
//!   fallible-predicate variants
//! - **Transformation**: `flat_map`, `flatten`, `map_not_none`, and the
//!   variadic `flat_map!` / `flatten!` macros
//! - **Aggregation**: `fold`, `sum_by`, and [`Number`](iterable::Number) for
//!   sums that promote from integer to floating point
//! - **Quantifier**: `none`
//! - **Preconditions**: `check*` for state assumptions and `require*` for
//!   argument validation
//!
//! ## Feature Flags
//!
//! - `iterable`: Forward search, transformation and aggregation helpers
//! - `sequence`: Backward search over double-ended sequences
//! - `preconditions`: The `check*` and `require*` families
//! - `serde`: `Serialize`/`Deserialize` for [`Number`](iterable::Number)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use peculiar::prelude::*;
//!
//! fn average_even(values: &[i32]) -> Result<f64, PreconditionError> {
//!     require_with_message(!values.is_empty(), "values must not be empty")?;
//!     let evens = map_not_none(values, |n| (n % 2 == 0).then_some(f64::from(*n)));
//!     check_with_message(!evens.is_empty(), "no even values")?;
//!     Ok(sum_by(&evens, |n| *n) / evens.len() as f64)
//! }
//!
//! assert_eq!(average_even(&[1, 2, 3, 4]), Ok(3.0));
//! assert!(average_even(&[]).unwrap_err().is_failed());
//!
//! assert_eq!(first(1..10, |n| n % 3 == 0), Ok(3));
//! assert_eq!(last(1..10, |n| n % 3 == 0), Ok(9));
//! assert_eq!(flatten!(0..2, vec![7]), [0, 1, 7]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the error types and every enabled helper.
///
/// # Usage
///
/// ```rust
/// use peculiar::prelude::*;
/// ```
pub mod prelude {

    pub use crate::error::*;

    #[cfg(feature = "iterable")]
    pub use crate::iterable::*;

    #[cfg(feature = "iterable")]
    pub use crate::{flat_map, flatten};

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "preconditions")]
    pub use crate::preconditions::*;
}

pub mod error;

#[cfg(feature = "iterable")]
pub mod iterable;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "preconditions")]
pub mod preconditions;
