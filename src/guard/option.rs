//! Presence guards for optional values.

use super::missing;
use crate::error::PipeError;

const VALUE_CANNOT_BE_NULL: &str = "Value cannot be null";

/// Guards that unwrap an `Option` or fail with [`PipeError::Null`].
///
/// # Example
///
/// ```rust
/// use pipeguard::guard::OptionGuard;
/// use pipeguard::ErrorKind;
///
/// assert_eq!(Some(7).ensure_not_null(None), Ok(7));
///
/// let err = None::<u32>.ensure_not_null_named("retries", None).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Null);
/// assert_eq!(err.to_string(), "Value cannot be null (parameter 'retries')");
/// ```
pub trait OptionGuard<T> {
    /// Require a present value.
    fn ensure_not_null(self, message: Option<&str>) -> Result<T, PipeError>;

    /// Require a present value, naming the parameter in the error.
    fn ensure_not_null_named(self, param_name: &str, message: Option<&str>)
        -> Result<T, PipeError>;
}

impl<T> OptionGuard<T> for Option<T> {
    fn ensure_not_null(self, message: Option<&str>) -> Result<T, PipeError> {
        self.ok_or_else(|| missing(None, message, VALUE_CANNOT_BE_NULL))
    }

    fn ensure_not_null_named(
        self,
        param_name: &str,
        message: Option<&str>,
    ) -> Result<T, PipeError> {
        self.ok_or_else(|| missing(Some(param_name), message, VALUE_CANNOT_BE_NULL))
    }
}
