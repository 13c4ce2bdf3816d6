//! Summation by selector, and a number type that promotes from integer to
//! floating point.
//!
//! [`sum_by`] adds up whatever numeric type the selector returns, so the
//! result type is fixed at compile time by the selector's return type:
//!
//! ```rust
//! use peculiar::iterable::sum_by;
//!
//! let lengths: usize = sum_by(["a", "bb", "ccc"], str::len);
//! assert_eq!(lengths, 6);
//!
//! let halves: f64 = sum_by([1_i32, 2, 3], |n| f64::from(n) / 2.0);
//! assert!((halves - 3.0).abs() < f64::EPSILON);
//! ```
//!
//! When the selector only knows at run time whether it produces an integer
//! or a floating-point value, return a [`Number`]. The total starts at
//! `Number::Int(0)`, stays an integer while every addend is an integer, and
//! becomes a float from the first float addend onward:
//!
//! ```rust
//! use peculiar::iterable::{sum_by, Number};
//!
//! let total: Number = sum_by([1_i32, 2, 3], Number::from);
//! assert_eq!(total, Number::Int(6));
//!
//! let mixed: Number = sum_by([1.0_f64, 2.0], Number::from);
//! assert_eq!(mixed, Number::Float(3.0));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Sums `selector(item)` over every item of `iterable`, left to right.
///
/// The accumulation starts at the zero of `N` (via [`Sum`]). Summing
/// [`Number`]s reproduces integer-to-float promotion.
///
/// # Examples
///
/// ```rust
/// use peculiar::iterable::sum_by;
///
/// struct Line {
///     quantity: u32,
///     price: f64,
/// }
///
/// let lines = [
///     Line { quantity: 2, price: 1.5 },
///     Line { quantity: 1, price: 4.0 },
/// ];
///
/// let items: u32 = sum_by(&lines, |line| line.quantity);
/// let total: f64 = sum_by(&lines, |line| f64::from(line.quantity) * line.price);
///
/// assert_eq!(items, 3);
/// assert!((total - 7.0).abs() < f64::EPSILON);
/// ```
pub fn sum_by<I, F, N>(iterable: I, selector: F) -> N
where
    I: IntoIterator,
    F: FnMut(I::Item) -> N,
    N: Sum<N>,
{
    iterable.into_iter().map(selector).sum()
}

/// An integer or floating-point value whose sums promote to floating point.
///
/// Adding two `Int`s yields an `Int`. Adding anything to a `Float` yields a
/// `Float`. An `i64` overflow also promotes the result to `Float`.
///
/// `Int(1)` and `Float(1.0)` are not equal: the variant is part of the value.
/// Ordering compares numeric values across variants. Equal values of
/// different variants order `Int` before `Float`, consistent with `==`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
    /// An integer value.
    Int(i64),
    /// A floating-point value.
    Float(f64),
}

impl Number {
    /// Returns `true` if this is an [`Int`](Self::Int).
    #[inline]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Returns `true` if this is a [`Float`](Self::Float).
    #[inline]
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Returns the integer value, or `None` for a `Float`.
    #[inline]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Float(_) => None,
        }
    }

    /// Returns the value as an `f64`, converting integers.
    ///
    /// Integers beyond 2^53 in magnitude lose precision.
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> f64 {
        match self {
            Self::Int(value) => *value as f64,
            Self::Float(value) => *value,
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(left), Self::Int(right)) => Some(left.cmp(right)),
            _ => self
                .as_f64()
                .partial_cmp(&other.as_f64())
                .map(|ordering| ordering.then_with(|| self.is_float().cmp(&other.is_float()))),
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::Int(0)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(formatter, "{value}"),
            // Debug keeps the trailing ".0" so floats never print like ints
            Self::Float(value) => write!(formatter, "{value:?}"),
        }
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(left), Self::Int(right)) => left
                .checked_add(right)
                .map_or_else(|| Self::Float(self.as_f64() + rhs.as_f64()), Self::Int),
            _ => Self::Float(self.as_f64() + rhs.as_f64()),
        }
    }
}

impl AddAssign for Number {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Number {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a Number> for Number {
    fn sum<I: Iterator<Item = &'a Number>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

macro_rules! impl_from_int {
    ($($source:ty),*) => {
        $(
            impl From<$source> for Number {
                fn from(value: $source) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

// Values beyond `i64::MAX` promote to `Float`, as an overflowing sum does.
macro_rules! impl_from_wide_int {
    ($($source:ty),*) => {
        $(
            impl From<$source> for Number {
                #[allow(clippy::cast_precision_loss)]
                fn from(value: $source) -> Self {
                    i64::try_from(value).map_or(Self::Float(value as f64), Self::Int)
                }
            }
        )*
    };
}

impl_from_wide_int!(u64, usize);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
