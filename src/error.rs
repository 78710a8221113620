//! Error taxonomy for failed checks
//!
//! Every built-in failure is a [`PipeError`]. Its [`ErrorKind`] tells the
//! caller *why* the check failed: a bad argument, a missing value, or an
//! operation attempted in the wrong state. Custom failures never go through
//! this type; terminal consumers such as
//! [`Pending::or_error`](crate::Pending::or_error) hand back the caller's own
//! error unchanged.
//!
//! # Example
//!
//! ```
//! use pipeguard::{ErrorKind, PipeError};
//!
//! let err = PipeError::null(Some("user_id"), "Value cannot be null");
//! assert_eq!(err.kind(), ErrorKind::Null);
//! assert_eq!(err.param_name(), Some("user_id"));
//! assert_eq!(err.to_string(), "Value cannot be null (parameter 'user_id')");
//! ```

use std::fmt;

/// Prefix of every message derived from a failed predicate.
pub(crate) const CONDITION_NOT_MET: &str = "Condition not met";

/// Classification of a built-in failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The supplied value violates a caller-stated condition.
    Validation,
    /// A required value was absent.
    Null,
    /// The failure signals an invalid operation context rather than a bad argument.
    InvalidOperation,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Null => "null",
            ErrorKind::InvalidOperation => "invalid operation",
        };
        f.write_str(name)
    }
}

/// Error returned when a check fails.
///
/// # Examples
///
/// ```
/// use pipeguard::{pipe, ErrorKind};
///
/// let err = pipe(-1, |x: &i32| *x >= 0)
///     .with_message("must not be negative")
///     .or_invalid_operation()
///     .unwrap_err();
///
/// assert_eq!(err.kind(), ErrorKind::InvalidOperation);
/// assert_eq!(err.message(), "must not be negative");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipeError {
    /// A value violated a condition.
    Validation {
        /// Diagnostic message.
        message: String,
    },
    /// A required value was missing.
    Null {
        /// Name of the offending parameter, if the caller supplied one.
        param_name: Option<String>,
        /// Diagnostic message.
        message: String,
    },
    /// A condition failed in a way that marks the current operation as invalid.
    InvalidOperation {
        /// Diagnostic message.
        message: String,
    },
}

impl PipeError {
    /// Create a validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        PipeError::Validation {
            message: message.into(),
        }
    }

    /// Create a null failure, optionally tagged with a parameter name.
    pub fn null(param_name: Option<&str>, message: impl Into<String>) -> Self {
        PipeError::Null {
            param_name: param_name.map(str::to_owned),
            message: message.into(),
        }
    }

    /// Create an invalid-operation failure.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        PipeError::InvalidOperation {
            message: message.into(),
        }
    }

    /// The kind of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipeError::Validation { .. } => ErrorKind::Validation,
            PipeError::Null { .. } => ErrorKind::Null,
            PipeError::InvalidOperation { .. } => ErrorKind::InvalidOperation,
        }
    }

    /// The diagnostic message, without the parameter name.
    pub fn message(&self) -> &str {
        match self {
            PipeError::Validation { message }
            | PipeError::Null { message, .. }
            | PipeError::InvalidOperation { message } => message,
        }
    }

    /// The parameter name attached to a [`PipeError::Null`], if any.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            PipeError::Null { param_name, .. } => param_name.as_deref(),
            _ => None,
        }
    }

    /// Emit the failure event and hand the error back.
    pub(crate) fn traced(self) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(kind = %self.kind(), message = %self.message(), "check failed");
        self
    }
}

impl fmt::Display for PipeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())?;
        if let Some(name) = self.param_name() {
            write!(f, " (parameter '{}')", name)?;
        }
        Ok(())
    }
}

impl std::error::Error for PipeError {}

/// Build the diagnostic for a failed predicate.
///
/// Explicit message first, then the captured predicate source, then the bare
/// fallback.
pub(crate) fn condition_message(message: Option<&str>, source: Option<&str>) -> String {
    match (message, source) {
        (Some(message), _) => message.to_owned(),
        (None, Some(source)) => format!("{}: {}", CONDITION_NOT_MET, source),
        (None, None) => CONDITION_NOT_MET.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(PipeError::validation("x").kind(), ErrorKind::Validation);
        assert_eq!(PipeError::null(None, "x").kind(), ErrorKind::Null);
        assert_eq!(
            PipeError::invalid_operation("x").kind(),
            ErrorKind::InvalidOperation
        );
    }

    #[test]
    fn test_display_plain_message() {
        let err = PipeError::validation("Value must be positive");
        assert_eq!(err.to_string(), "Value must be positive");
    }

    #[test]
    fn test_display_null_with_param_name() {
        let err = PipeError::null(Some("value"), "Condition not met");
        assert_eq!(err.to_string(), "Condition not met (parameter 'value')");
        assert_eq!(err.message(), "Condition not met");
    }

    #[test]
    fn test_display_null_without_param_name() {
        let err = PipeError::null(None, "Value cannot be null");
        assert_eq!(err.to_string(), "Value cannot be null");
        assert_eq!(err.param_name(), None);
    }

    #[test]
    fn test_param_name_only_on_null() {
        assert_eq!(PipeError::validation("x").param_name(), None);
        assert_eq!(PipeError::invalid_operation("x").param_name(), None);
    }

    #[test]
    fn test_condition_message_prefers_explicit_message() {
        let msg = condition_message(Some("custom"), Some("|x| *x > 0"));
        assert_eq!(msg, "custom");
    }

    #[test]
    fn test_condition_message_uses_source() {
        let msg = condition_message(None, Some("|x| *x > 0"));
        assert_eq!(msg, "Condition not met: |x| *x > 0");
    }

    #[test]
    fn test_condition_message_fallback() {
        assert_eq!(condition_message(None, None), "Condition not met");
    }

    #[test]
    fn test_error_trait() {
        use std::error::Error;

        let err = PipeError::validation("bad");
        let dyn_err: &dyn Error = &err;
        assert!(dyn_err.source().is_none());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::Validation.to_string(), "validation");
        assert_eq!(ErrorKind::Null.to_string(), "null");
        assert_eq!(ErrorKind::InvalidOperation.to_string(), "invalid operation");
    }

    #[cfg(feature = "tracing")]
    mod tracing_events {
        use crate::pipe;
        use tracing_test::traced_test;

        #[traced_test]
        #[test]
        fn test_failure_emits_event() {
            let _ = pipe(-1, |x: &i32| *x >= 0)
                .with_message("must not be negative")
                .or_invalid_operation();
            assert!(logs_contain("check failed"));
            assert!(logs_contain("must not be negative"));
            assert!(logs_contain("invalid operation"));
        }

        #[traced_test]
        #[test]
        fn test_success_is_silent() {
            let _ = pipe(1, |x: &i32| *x >= 0).resolve();
            assert!(!logs_contain("check failed"));
        }
    }
}
