//! Testing utilities for code built on pipeguard
//!
//! # Assertion Macros
//!
//! ```rust
//! use pipeguard::{assert_fails_with, assert_passes, ensure, ErrorKind};
//!
//! let ok = ensure(5, |x: &i32| *x > 0);
//! assert_eq!(assert_passes!(ok), 5);
//!
//! let bad = ensure(-5, |x: &i32| *x > 0);
//! assert_fails_with!(bad, ErrorKind::Validation);
//! ```
//!
//! # Property-based testing
//!
//! With the `proptest` feature, [`ErrorKind`](crate::ErrorKind) implements
//! `Arbitrary` and [`arb_pipe_error`] generates errors of every kind.

/// Assert that a check passed and yield its value.
///
/// Panics with the error if the result is `Err`.
///
/// # Example
///
/// ```rust
/// use pipeguard::{assert_passes, pipe};
///
/// let value = assert_passes!(pipe(3, |x: &i32| *x == 3).resolve());
/// assert_eq!(value, 3);
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($result:expr) => {
        match $result {
            ::core::result::Result::Ok(value) => value,
            ::core::result::Result::Err(e) => {
                panic!("Expected check to pass, got error: {:?}", e);
            }
        }
    };
}

/// Assert that a check failed with the given [`ErrorKind`](crate::ErrorKind).
///
/// An optional third argument is compared against the error's message.
///
/// # Example
///
/// ```rust
/// use pipeguard::{assert_fails_with, pipe, ErrorKind};
///
/// let result = pipe(-1, |x: &i32| *x >= 0)
///     .with_message("negative")
///     .or_null(Some("x"));
/// assert_fails_with!(result, ErrorKind::Null, "negative");
/// ```
#[macro_export]
macro_rules! assert_fails_with {
    ($result:expr, $kind:expr) => {
        match $result {
            ::core::result::Result::Err(e) => {
                assert_eq!(e.kind(), $kind, "unexpected error kind: {:?}", e);
            }
            ::core::result::Result::Ok(v) => {
                panic!("Expected {:?} failure, got value: {:?}", $kind, v);
            }
        }
    };
    ($result:expr, $kind:expr, $message:expr) => {
        match $result {
            ::core::result::Result::Err(e) => {
                assert_eq!(e.kind(), $kind, "unexpected error kind: {:?}", e);
                assert_eq!(e.message(), $message);
            }
            ::core::result::Result::Ok(v) => {
                panic!("Expected {:?} failure, got value: {:?}", $kind, v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::{ErrorKind, PipeError};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for ErrorKind {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(ErrorKind::Validation),
            Just(ErrorKind::Null),
            Just(ErrorKind::InvalidOperation),
        ]
        .boxed()
    }
}

/// Strategy producing a [`PipeError`] of any kind with an arbitrary message.
#[cfg(feature = "proptest")]
pub fn arb_pipe_error() -> impl Strategy<Value = PipeError> {
    (
        any::<ErrorKind>(),
        ".*",
        proptest::option::of("[a-z_]{1,12}"),
    )
        .prop_map(|(kind, message, param_name)| match kind {
            ErrorKind::Validation => PipeError::validation(message),
            ErrorKind::Null => PipeError::null(param_name.as_deref(), message),
            ErrorKind::InvalidOperation => PipeError::invalid_operation(message),
        })
}
