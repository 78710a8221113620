//! String guards
//!
//! Lengths are counted in `char`s, not bytes. A missing string (`None`)
//! fails every guard except [`StrGuard::ensure_max_length`], which treats it
//! as the empty string.

use super::invalid;
use crate::error::PipeError;

mod sealed {
    /// A string that may be missing.
    pub trait MaybeStr: Sized {
        type Output;

        fn as_str_opt(&self) -> Option<&str>;
        fn into_output(self) -> Option<Self::Output>;
        fn empty() -> Self::Output;
    }

    impl MaybeStr for String {
        type Output = String;

        fn as_str_opt(&self) -> Option<&str> {
            Some(self.as_str())
        }
        fn into_output(self) -> Option<String> {
            Some(self)
        }
        fn empty() -> String {
            String::new()
        }
    }

    impl<'a> MaybeStr for &'a str {
        type Output = &'a str;

        fn as_str_opt(&self) -> Option<&str> {
            Some(*self)
        }
        fn into_output(self) -> Option<&'a str> {
            Some(self)
        }
        fn empty() -> &'a str {
            ""
        }
    }

    impl MaybeStr for Option<String> {
        type Output = String;

        fn as_str_opt(&self) -> Option<&str> {
            self.as_deref()
        }
        fn into_output(self) -> Option<String> {
            self
        }
        fn empty() -> String {
            String::new()
        }
    }

    impl<'a> MaybeStr for Option<&'a str> {
        type Output = &'a str;

        fn as_str_opt(&self) -> Option<&str> {
            *self
        }
        fn into_output(self) -> Option<&'a str> {
            self
        }
        fn empty() -> &'a str {
            ""
        }
    }
}

type Checked<S> = Result<<S as sealed::MaybeStr>::Output, PipeError>;

/// Guards for strings and optional strings.
///
/// # Example
///
/// ```rust
/// use pipeguard::guard::StrGuard;
///
/// assert_eq!("hello".ensure_min_length(3, None), Ok("hello"));
/// assert_eq!(
///     "hi".ensure_min_length(3, None).unwrap_err().message(),
///     "String must be at least 3 characters"
/// );
/// assert_eq!(None::<String>.ensure_max_length(3, None), Ok(String::new()));
/// ```
pub trait StrGuard: sealed::MaybeStr {
    /// Require a present, non-empty string.
    fn ensure_not_empty(self, message: Option<&str>) -> Checked<Self> {
        if self.as_str_opt().is_some_and(|s| !s.is_empty()) {
            Ok(present(self))
        } else {
            Err(invalid(message, || {
                "String cannot be null or empty".to_string()
            }))
        }
    }

    /// Require a present string with at least one non-whitespace character.
    fn ensure_not_blank(self, message: Option<&str>) -> Checked<Self> {
        if self
            .as_str_opt()
            .is_some_and(|s| !s.chars().all(char::is_whitespace))
        {
            Ok(present(self))
        } else {
            Err(invalid(message, || {
                "String cannot be null or whitespace".to_string()
            }))
        }
    }

    /// Require a present string of at least `min_length` characters.
    fn ensure_min_length(self, min_length: usize, message: Option<&str>) -> Checked<Self> {
        if self
            .as_str_opt()
            .is_some_and(|s| s.chars().count() >= min_length)
        {
            Ok(present(self))
        } else {
            Err(invalid(message, || {
                format!("String must be at least {} characters", min_length)
            }))
        }
    }

    /// Require at most `max_length` characters. A missing string passes as `""`.
    fn ensure_max_length(self, max_length: usize, message: Option<&str>) -> Checked<Self> {
        match self.as_str_opt() {
            Some(s) if s.chars().count() > max_length => Err(invalid(message, || {
                format!("String must be at most {} characters", max_length)
            })),
            _ => Ok(self.into_output().unwrap_or_else(Self::empty)),
        }
    }
}

impl<S: sealed::MaybeStr> StrGuard for S {}

// Only called after `as_str_opt` returned `Some`.
fn present<S: sealed::MaybeStr>(value: S) -> S::Output {
    value.into_output().unwrap_or_else(S::empty)
}
