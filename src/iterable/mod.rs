//! Helpers over arbitrary iterables.
//!
//! This module provides single-pass functions that accept anything
//! implementing [`IntoIterator`]. None of them mutate their input: pass a
//! collection by value to consume it, or by reference to borrow it.
//!
//! - Search: [`first`], [`first_or_none`], [`try_first`], [`try_first_or_none`]
//! - Quantifier: [`none`]
//! - Transformation: [`flat_map`], [`flatten`], [`map_not_none`]
//! - Aggregation: [`fold`], [`sum_by`], with [`Number`] for sums that
//!   promote from integer to floating point
//! - Method syntax: [`IterableExt`]
//! - Variadic forms: [`flatten!`](crate::flatten!) and
//!   [`flat_map!`](crate::flat_map!)
//!
//! # Examples
//!
//! ```rust
//! use peculiar::iterable::{first, fold, map_not_none, none, sum_by};
//!
//! let numbers: Vec<i32> = (0..10).collect();
//!
//! assert_eq!(first(&numbers, |n| **n > 4), Ok(&5));
//! assert_eq!(fold(&numbers, 0, |total, n| total + n), 45);
//! assert_eq!(sum_by(&numbers, |n| i64::from(*n)), 45);
//! assert!(none(&numbers, |n| **n > 9));
//!
//! let odds = map_not_none(&numbers, |n| (n % 2 == 1).then_some(*n));
//! assert_eq!(odds, [1, 3, 5, 7, 9]);
//! ```

mod ext;
mod macros;
mod search;
mod sum;
mod transform;

pub use ext::IterableExt;
pub use search::{first, first_or_none, none, try_first, try_first_or_none};
pub use sum::{Number, sum_by};
pub use transform::{flat_map, flatten, fold, map_not_none};
