//! Eager, single-condition guards for common data shapes
//!
//! Guards skip the chain entirely: each method checks one fixed condition
//! right away and hands the original value back on success. Every method
//! takes an optional message that replaces the condition's default
//! diagnostic.
//!
//! - [`StrGuard`]: `String`, `&str`, and their `Option` forms.
//! - [`OptionGuard`]: any `Option<T>`.
//! - [`CollectionGuard`]: anything implementing
//!   [`Counted`](crate::predicate::Counted), and `Option` of it.
//!
//! # Example
//!
//! ```rust
//! use pipeguard::guard::*;
//! use pipeguard::PipeError;
//!
//! fn register(name: Option<&str>, tags: Vec<&str>) -> Result<(String, Vec<String>), PipeError> {
//!     let name = name.ensure_not_blank(Some("name is required"))?;
//!     let name = name.ensure_max_length(32, None)?;
//!     let tags = tags.ensure_max_count(5, None)?;
//!     Ok((name.to_string(), tags.into_iter().map(String::from).collect()))
//! }
//!
//! assert!(register(Some("ada"), vec!["admin"]).is_ok());
//! assert_eq!(
//!     register(Some("  "), vec![]).unwrap_err().message(),
//!     "name is required"
//! );
//! ```

mod collection;
mod option;
mod string;

pub use collection::CollectionGuard;
pub use option::OptionGuard;
pub use string::StrGuard;

use crate::error::PipeError;

/// Validation failure with the caller's message or the default.
fn invalid(message: Option<&str>, default: impl FnOnce() -> String) -> PipeError {
    PipeError::validation(message.map_or_else(default, str::to_owned)).traced()
}

/// Null failure with the caller's message or the default.
fn missing(param_name: Option<&str>, message: Option<&str>, default: &str) -> PipeError {
    PipeError::null(param_name, message.unwrap_or(default)).traced()
}
