//! The `flatten!` and `flat_map!` macros for heterogeneous iterables.
//!
//! The [`flatten`](crate::iterable::flatten) and
//! [`flat_map`](crate::iterable::flat_map) functions take an iterable of
//! iterables, which forces every inner iterable to have the same type.
//! These macros accept any number of iterable expressions of different
//! types, as long as they yield the same item type.

/// Concatenates any number of iterables into one `Vec`, in argument order.
///
/// Each argument may be a different iterable type (a range, a `Vec`, an
/// array, an iterator adapter) as long as all of them yield the same item
/// type.
///
/// # Syntax
///
/// - `flatten!(a)` - Collects `a`
/// - `flatten!(a, b, ...)` - Collects `a`, then `b`, then ...
///
/// # Examples
///
/// ```rust
/// use peculiar::flatten;
///
/// let evens = (0..10).step_by(2);
/// let odds = vec![1, 3, 5, 7, 9];
///
/// let all = flatten!(evens, odds);
/// assert_eq!(all, [0, 2, 4, 6, 8, 1, 3, 5, 7, 9]);
/// ```
///
/// ```rust
/// use peculiar::flatten;
///
/// let words = flatten!(["a", "b"], Vec::<&str>::new(), Some("c"));
/// assert_eq!(words, ["a", "b", "c"]);
/// ```
#[macro_export]
macro_rules! flatten {
    ($first:expr $(, $rest:expr)* $(,)?) => {
        $crate::iterable::flatten(::core::iter::once(
            ::core::iter::IntoIterator::into_iter($first)$(.chain($rest))*,
        ))
    };
}

/// Maps every item of any number of iterables and concatenates the results
/// into one `Vec`.
///
/// The iterables come first, separated by commas; the mapping follows a
/// semicolon. Mapped items keep argument order: everything from the first
/// iterable, then everything from the second, and so on.
///
/// # Syntax
///
/// - `flat_map!(a; mapping)`
/// - `flat_map!(a, b, ...; mapping)`
///
/// # Examples
///
/// ```rust
/// use peculiar::flat_map;
///
/// let evens = (0..10).step_by(2);
/// let odds = [1, 3, 5, 7, 9];
///
/// let strings = flat_map!(evens, odds; |n: i32| n.to_string());
/// assert_eq!(strings, ["0", "2", "4", "6", "8", "1", "3", "5", "7", "9"]);
/// ```
///
/// ```rust
/// use peculiar::flat_map;
///
/// fn square(n: u64) -> u64 {
///     n * n
/// }
///
/// assert_eq!(flat_map!(1..3, vec![10]; square), [1, 4, 100]);
/// ```
#[macro_export]
macro_rules! flat_map {
    ($first:expr $(, $rest:expr)* $(,)?; $mapping:expr) => {
        $crate::iterable::flat_map(
            ::core::iter::once(::core::iter::IntoIterator::into_iter($first)$(.chain($rest))*),
            $mapping,
        )
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_flatten_single() {
        let result = flatten!(vec![1, 2, 3]);
        assert_eq!(result, vec![1, 2, 3]);
    }

    #[test]
    fn test_flatten_trailing_comma() {
        let result = flatten!(0..2, 5..6,);
        assert_eq!(result, vec![0, 1, 5]);
    }

    #[test]
    fn test_flatten_with_empty_middle() {
        let result = flatten!(vec![1], Vec::new(), [2, 3]);
        assert_eq!(result, vec![1, 2, 3]);
    }

    #[test]
    fn test_flat_map_single() {
        let result = flat_map!(1..4; |n: i32| n * 2);
        assert_eq!(result, vec![2, 4, 6]);
    }

    #[test]
    fn test_flat_map_evaluates_each_argument_once() {
        let mut evaluations = 0;
        let mut next = || {
            evaluations += 1;
            vec![evaluations]
        };
        let result = flat_map!(next(), next(); |n: i32| n + 100);
        assert_eq!(result, vec![101, 102]);
        assert_eq!(evaluations, 2);
    }
}
