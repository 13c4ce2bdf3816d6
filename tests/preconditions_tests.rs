//! Unit tests for the `check*` and `require*` precondition families.

#![cfg(feature = "preconditions")]

use peculiar::error::PreconditionError;
use peculiar::preconditions::{
    check, check_as, check_not_none, check_not_none_with_message, check_with_message, require,
    require_as, require_not_none, require_not_none_with_message, require_with_message,
};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq, Eq)]
enum InventoryError {
    OutOfStock(String),
    Corrupted(String),
}

// =============================================================================
// Boolean gates
// =============================================================================

#[rstest]
#[case(check(true))]
#[case(require(true))]
#[case(check_with_message(true, "never shown"))]
#[case(require_with_message(true, "never shown"))]
fn passing_condition_is_ok(#[case] result: Result<(), PreconditionError>) {
    assert_eq!(result, Ok(()));
}

#[rstest]
#[case(check(false), "Check failed.")]
#[case(require(false), "Requirement not met.")]
#[case(check_with_message(false, "cache is warm"), "cache is warm")]
#[case(require_with_message(false, "limit must be positive".to_string()), "limit must be positive")]
fn failing_condition_raises_failed(
    #[case] result: Result<(), PreconditionError>,
    #[case] expected_message: &str,
) {
    assert_eq!(
        result,
        Err(PreconditionError::Failed {
            message: expected_message.to_string()
        })
    );
}

#[rstest]
fn check_as_raises_chosen_kind() {
    let result = check_as(false, "index is corrupted", InventoryError::Corrupted);
    assert_eq!(
        result,
        Err(InventoryError::Corrupted("index is corrupted".to_string()))
    );
}

#[rstest]
fn require_as_raises_chosen_kind() {
    let result = require_as(false, "widget", InventoryError::OutOfStock);
    assert_eq!(result, Err(InventoryError::OutOfStock("widget".to_string())));
}

#[rstest]
fn require_as_accepts_any_constructor() {
    let result: Result<(), std::io::Error> = require_as(false, "bad input", |message| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, message)
    });
    let error = result.unwrap_err();
    assert_eq!(error.kind(), std::io::ErrorKind::InvalidInput);
    assert_eq!(error.to_string(), "bad input");
}

#[rstest]
fn as_variants_pass_through_on_success() {
    assert_eq!(check_as(true, "x", InventoryError::Corrupted), Ok(()));
    assert_eq!(require_as(true, "x", InventoryError::OutOfStock), Ok(()));
}

// =============================================================================
// Not-none gates
// =============================================================================

#[rstest]
fn not_none_returns_the_value_for_inline_use() {
    let port = require_not_none(Some(8080_u16)).unwrap() + 1;
    assert_eq!(port, 8081);

    let name = check_not_none(Some("primary")).unwrap();
    assert_eq!(name.len(), 7);
}

#[rstest]
fn check_not_none_raises_illegal_state() {
    let error = check_not_none::<String>(None).unwrap_err();
    assert_eq!(
        error,
        PreconditionError::IllegalState {
            message: "Value was None.".to_string()
        }
    );
}

#[rstest]
fn require_not_none_raises_illegal_argument() {
    let error = require_not_none::<String>(None).unwrap_err();
    assert_eq!(
        error,
        PreconditionError::IllegalArgument {
            message: "Requirement not met: value was None.".to_string()
        }
    );
}

#[rstest]
#[case(check_not_none_with_message::<i32>(None, "connection missing"), true)]
#[case(require_not_none_with_message::<i32>(None, "connection missing"), false)]
fn custom_messages_keep_their_kind(
    #[case] result: Result<i32, PreconditionError>,
    #[case] expect_state: bool,
) {
    let error = result.unwrap_err();
    assert_eq!(error.message(), "connection missing");
    assert_eq!(error.is_illegal_state(), expect_state);
    assert_eq!(error.is_illegal_argument(), !expect_state);
}

#[rstest]
#[case(
    check_not_none_with_message::<i32>(None, ""),
    PreconditionError::IllegalState { message: "Value was None.".to_string() }
)]
#[case(
    require_not_none_with_message::<i32>(None, String::new()),
    PreconditionError::IllegalArgument {
        message: "Requirement not met: value was None.".to_string()
    }
)]
fn empty_message_falls_back_to_default(
    #[case] result: Result<i32, PreconditionError>,
    #[case] expected: PreconditionError,
) {
    assert_eq!(result, Err(expected));
}

#[rstest]
fn empty_message_is_irrelevant_when_value_present() {
    assert_eq!(check_not_none_with_message(Some(1), ""), Ok(1));
    assert_eq!(require_not_none_with_message(Some(2), ""), Ok(2));
}

#[rstest]
fn families_are_distinguishable() {
    let state = check_not_none::<()>(None).unwrap_err();
    let argument = require_not_none::<()>(None).unwrap_err();
    assert_ne!(
        std::mem::discriminant(&state),
        std::mem::discriminant(&argument)
    );
}

#[rstest]
fn gates_compose_with_question_mark() {
    fn reserve(stock: Option<u32>, quantity: u32) -> Result<u32, PreconditionError> {
        require(quantity > 0)?;
        let available = check_not_none_with_message(stock, "stock not loaded")?;
        check_with_message(available >= quantity, "not enough stock")?;
        Ok(available - quantity)
    }

    assert_eq!(reserve(Some(10), 3), Ok(7));
    assert!(reserve(Some(10), 0).unwrap_err().is_failed());
    assert!(reserve(None, 1).unwrap_err().is_illegal_state());
    assert_eq!(
        reserve(Some(2), 3).unwrap_err().message(),
        "not enough stock"
    );
}
