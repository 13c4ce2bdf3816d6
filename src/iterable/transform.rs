//! Transformations and aggregations that build a new value from iterables.

/// Maps every item of every iterable in `iterables` and concatenates the
/// results into one `Vec`.
///
/// All mapped items of the first iterable come first, then those of the
/// second, and so on. Iterables may be empty or of different lengths.
/// For iterables of different types, use the [`flat_map!`](crate::flat_map!)
/// macro.
///
/// # Examples
///
/// ```rust
/// use peculiar::iterable::flat_map;
///
/// let evens = vec![0, 2, 4, 6, 8];
/// let odds = vec![1, 3, 5, 7, 9];
///
/// let strings = flat_map([evens, odds], |n| n.to_string());
/// assert_eq!(strings, ["0", "2", "4", "6", "8", "1", "3", "5", "7", "9"]);
/// ```
pub fn flat_map<I, F, R>(iterables: I, mapping: F) -> Vec<R>
where
    I: IntoIterator,
    I::Item: IntoIterator,
    F: FnMut(<I::Item as IntoIterator>::Item) -> R,
{
    iterables.into_iter().flatten().map(mapping).collect()
}

/// Concatenates every iterable in `iterables` into one `Vec`, in order.
///
/// # Examples
///
/// ```rust
/// use peculiar::iterable::flatten;
///
/// let flattened = flatten([vec![0, 2, 4], vec![], vec![1, 3]]);
/// assert_eq!(flattened, [0, 2, 4, 1, 3]);
/// ```
pub fn flatten<I>(iterables: I) -> Vec<<I::Item as IntoIterator>::Item>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    iterables.into_iter().flatten().collect()
}

/// Maps each item with `mapping`, keeping only the `Some` results.
///
/// Surviving values keep their relative order.
///
/// # Examples
///
/// ```rust
/// use peculiar::iterable::map_not_none;
///
/// let evens = map_not_none(0..10, |n| (n % 2 == 0).then(|| n.to_string()));
/// assert_eq!(evens, ["0", "2", "4", "6", "8"]);
/// ```
pub fn map_not_none<I, F, R>(iterable: I, mapping: F) -> Vec<R>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Option<R>,
{
    iterable.into_iter().filter_map(mapping).collect()
}

/// Accumulates a value from left to right, starting from `initial_value`.
///
/// `accumulator` receives the running value and the next item and returns
/// the new running value. An empty iterable returns `initial_value`.
///
/// # Examples
///
/// ```rust
/// use peculiar::iterable::fold;
///
/// assert_eq!(fold(0..10, 0, |total, n| total + n), 45);
///
/// let joined = fold(["a", "b", "c"], String::new(), |mut text, part| {
///     text.push_str(part);
///     text
/// });
/// assert_eq!(joined, "abc");
/// ```
pub fn fold<I, R, F>(iterable: I, initial_value: R, accumulator: F) -> R
where
    I: IntoIterator,
    F: FnMut(R, I::Item) -> R,
{
    iterable.into_iter().fold(initial_value, accumulator)
}
