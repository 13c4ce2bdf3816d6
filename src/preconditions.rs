//! Precondition gates for arguments and state.
//!
//! Two families of functions share the same logic but tell the reader
//! different things:
//!
//! - `require*` validates arguments a caller handed in, at the top of a
//!   function, before any work is done.
//! - `check*` asserts assumptions about internal state in the middle of
//!   a computation.
//!
//! Each family has the same members:
//!
//! | Function                        | Fails with                            |
//! |---------------------------------|---------------------------------------|
//! | `check` / `require`             | [`PreconditionError::Failed`]         |
//! | `check_with_message` / `require_with_message` | [`PreconditionError::Failed`] |
//! | `check_as` / `require_as`       | any caller-chosen error type          |
//! | `check_not_none` / `require_not_none` (and `*_with_message`) | [`PreconditionError::IllegalState`] / [`PreconditionError::IllegalArgument`] |
//!
//! All of them return `Ok` without side effects when the condition holds.
//! The not-none variants hand the unwrapped value back, so they can be used
//! inline. Failures are logged at `debug` level through `tracing`.
//!
//! # Examples
//!
//! ```rust
//! use peculiar::error::PreconditionError;
//! use peculiar::preconditions::{check_not_none, require, require_not_none};
//!
//! struct Session {
//!     user: Option<String>,
//! }
//!
//! fn greet(session: &Session, greeting: Option<&str>) -> Result<String, PreconditionError> {
//!     let greeting = require_not_none(greeting)?;
//!     require(!greeting.is_empty())?;
//!     let user = check_not_none(session.user.as_deref())?;
//!     Ok(format!("{greeting}, {user}!"))
//! }
//!
//! let session = Session { user: Some("Ada".to_string()) };
//! assert_eq!(greet(&session, Some("Hello")).unwrap(), "Hello, Ada!");
//!
//! let error = greet(&session, None).unwrap_err();
//! assert!(error.is_illegal_argument());
//!
//! let anonymous = Session { user: None };
//! let error = greet(&anonymous, Some("Hi")).unwrap_err();
//! assert!(error.is_illegal_state());
//! assert_eq!(error.message(), "Value was None.");
//! ```
//!
//! ## Raising a domain error
//!
//! ```rust
//! use peculiar::preconditions::require_as;
//!
//! #[derive(Debug, PartialEq)]
//! enum TransferError {
//!     InvalidAmount(String),
//! }
//!
//! fn transfer(amount: i64) -> Result<i64, TransferError> {
//!     require_as(amount > 0, "amount must be positive", TransferError::InvalidAmount)?;
//!     Ok(amount)
//! }
//!
//! assert_eq!(
//!     transfer(-5),
//!     Err(TransferError::InvalidAmount("amount must be positive".to_string()))
//! );
//! ```

use crate::error::PreconditionError;

macro_rules! precondition_family {
    (
        $family:ident,
        intent = $intent:literal,
        condition_message = $condition_message:literal,
        none_message = $none_message:literal,
        none_error = $none_error:ident $(,)?
    ) => {
        paste::paste! {
            #[doc = "Verifies " $intent "."]
            #[doc = ""]
            #[doc = "Fails with the message `" $condition_message "`."]
            #[doc = ""]
            #[doc = "# Errors"]
            #[doc = ""]
            #[doc = "Returns [`PreconditionError::Failed`] if `condition` is false."]
            #[inline]
            pub fn $family(condition: bool) -> Result<(), PreconditionError> {
                [<$family _with_message>](condition, $condition_message)
            }

            #[doc = "Verifies " $intent ", failing with `message`."]
            #[doc = ""]
            #[doc = "# Errors"]
            #[doc = ""]
            #[doc = "Returns [`PreconditionError::Failed`] if `condition` is false."]
            #[inline]
            pub fn [<$family _with_message>](
                condition: bool,
                message: impl Into<String>,
            ) -> Result<(), PreconditionError> {
                [<$family _as>](condition, message, |message| PreconditionError::Failed { message })
            }

            #[doc = "Verifies " $intent ", failing with an error built by `kind`."]
            #[doc = ""]
            #[doc = "`kind` receives `message` and is only called on failure, so an enum"]
            #[doc = "tuple variant or any `fn(String) -> E` selects the error type."]
            #[doc = ""]
            #[doc = "# Errors"]
            #[doc = ""]
            #[doc = "Returns `kind(message)` if `condition` is false."]
            pub fn [<$family _as>]<E, K>(
                condition: bool,
                message: impl Into<String>,
                kind: K,
            ) -> Result<(), E>
            where
                K: FnOnce(String) -> E,
            {
                if condition {
                    Ok(())
                } else {
                    let message = message.into();
                    tracing::debug!(
                        precondition = stringify!($family),
                        %message,
                        "precondition failed"
                    );
                    Err(kind(message))
                }
            }

            #[doc = "Unwraps `value` under " $intent ": the value must be present."]
            #[doc = ""]
            #[doc = "Fails with the message `" $none_message "`."]
            #[doc = ""]
            #[doc = "# Errors"]
            #[doc = ""]
            #[doc = "Returns [`PreconditionError::" $none_error "`] if `value` is `None`."]
            #[inline]
            pub fn [<$family _not_none>]<T>(value: Option<T>) -> Result<T, PreconditionError> {
                [<$family _not_none_with_message>](value, $none_message)
            }

            #[doc = "Unwraps `value` under " $intent ", failing with `message` if it is absent."]
            #[doc = ""]
            #[doc = "An empty `message` falls back to `" $none_message "`."]
            #[doc = ""]
            #[doc = "# Errors"]
            #[doc = ""]
            #[doc = "Returns [`PreconditionError::" $none_error "`] if `value` is `None`."]
            pub fn [<$family _not_none_with_message>]<T>(
                value: Option<T>,
                message: impl Into<String>,
            ) -> Result<T, PreconditionError> {
                value.ok_or_else(|| {
                    let message = message.into();
                    let message = if message.is_empty() {
                        $none_message.to_string()
                    } else {
                        message
                    };
                    tracing::debug!(
                        precondition = stringify!([<$family _not_none>]),
                        %message,
                        "precondition failed"
                    );
                    PreconditionError::$none_error { message }
                })
            }
        }
    };
}

precondition_family! {
    check,
    intent = "an assumption about internal state",
    condition_message = "Check failed.",
    none_message = "Value was None.",
    none_error = IllegalState,
}

precondition_family! {
    require,
    intent = "a requirement on a caller-supplied argument",
    condition_message = "Requirement not met.",
    none_message = "Requirement not met: value was None.",
    none_error = IllegalArgument,
}
