//! Unit tests for backward searches over sequences.

#![cfg(feature = "sequence")]

use std::cell::Cell;
use std::collections::{BTreeMap, VecDeque};

use peculiar::error::{NotFoundError, SearchError};
use peculiar::sequence::{SequenceExt, last, last_or_none, try_last, try_last_or_none};
use rstest::rstest;

// =============================================================================
// last / last_or_none
// =============================================================================

#[rstest]
#[case(|i: &i32| i % 2 == 0, Ok(8))]
#[case(|i: &i32| i % 3 == 0, Ok(9))]
#[case(|i: &i32| *i < 3, Ok(2))]
#[case(|i: &i32| *i == 10, Err(NotFoundError))]
fn last_returns_highest_matching_item(
    #[case] predicate: fn(&i32) -> bool,
    #[case] expected: Result<i32, NotFoundError>,
) {
    let sequence: Vec<i32> = (1..10).collect();
    assert_eq!(last(sequence, predicate), expected);
}

#[rstest]
#[case(|i: &i32| i % 2 == 0, Some(8))]
#[case(|i: &i32| *i == 10, None)]
fn last_or_none_returns_highest_matching_item(
    #[case] predicate: fn(&i32) -> bool,
    #[case] expected: Option<i32>,
) {
    assert_eq!(last_or_none(1..10, predicate), expected);
}

#[rstest]
fn last_scans_from_the_back() {
    let inspected = Cell::new(0);
    let sequence = ["x", "match", "y", "match", "z"];
    let result = last(&sequence, |item| {
        inspected.set(inspected.get() + 1);
        **item == "match"
    });
    assert_eq!(result, Ok(&"match"));
    assert_eq!(inspected.get(), 2);
}

#[rstest]
fn last_returns_the_later_of_equal_keys() {
    let people = [("ada", 36), ("grace", 85), ("alan", 41), ("grace", 12)];
    let found = last(&people, |(name, _)| *name == "grace");
    assert_eq!(found, Ok(&("grace", 12)));
}

#[rstest]
fn last_works_on_other_double_ended_collections() {
    let queue: VecDeque<i32> = (1..=5).collect();
    assert_eq!(last(&queue, |n| **n < 4), Ok(&3));

    let scores: BTreeMap<&str, u32> = [("a", 3), ("b", 9), ("c", 4)].into_iter().collect();
    let (name, _) = last(&scores, |(_, score)| **score > 3).unwrap();
    assert_eq!(*name, "c");
}

#[rstest]
fn last_or_none_on_empty_is_none() {
    assert_eq!(last_or_none(Vec::<char>::new(), |_| true), None);
}

// =============================================================================
// try_last / try_last_or_none
// =============================================================================

fn is_large(value: &i64) -> Result<bool, String> {
    if *value < 0 {
        Err(format!("negative value {value}"))
    } else {
        Ok(*value > 100)
    }
}

#[rstest]
#[case(vec![500, 1, 200, 3], Ok(200))]
#[case(vec![1, 2, 3], Err(SearchError::NotFound(NotFoundError)))]
#[case(vec![500, -4, 3], Err(SearchError::Predicate("negative value -4".to_string())))]
#[case(vec![-4, 500], Ok(500))]
fn try_last_outcomes(#[case] values: Vec<i64>, #[case] expected: Result<i64, SearchError<String>>) {
    assert_eq!(try_last(values, is_large), expected);
}

#[rstest]
#[case(vec![1, 2, 3], Ok(None))]
#[case(vec![101, 2, 3], Ok(Some(101)))]
#[case(vec![101, -1], Err("negative value -1".to_string()))]
fn try_last_or_none_converts_only_not_found(
    #[case] values: Vec<i64>,
    #[case] expected: Result<Option<i64>, String>,
) {
    assert_eq!(try_last_or_none(values, is_large), expected);
}

// =============================================================================
// SequenceExt
// =============================================================================

#[rstest]
fn extension_methods_match_functions() {
    let values = vec![3, 1, 4, 1, 5, 9, 2, 6];

    assert_eq!(values.iter().last_matching(|n| **n < 3), Ok(&2));
    assert_eq!(values.iter().last_matching_or_none(|n| **n > 9), None);
    assert_eq!(
        values.iter().try_last_matching(|n| Ok::<_, ()>(**n == 1)),
        Ok(&1)
    );
    assert_eq!(
        values.iter().try_last_matching_or_none(|n| if **n == 6 { Err("six") } else { Ok(false) }),
        Err("six")
    );
}
