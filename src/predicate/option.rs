//! Presence predicate for optional values.

use super::Predicate;

/// Predicate that checks if an optional value is present.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsSome;

impl<T> Predicate<Option<T>> for IsSome {
    #[inline]
    fn check(&self, value: &Option<T>) -> bool {
        value.is_some()
    }
}

/// Create a predicate that checks if an optional value is present.
///
/// # Example
///
/// ```rust
/// use pipeguard::predicate::*;
///
/// assert!(is_some().check(&Some(3)));
/// assert!(!is_some().check(&None::<i32>));
/// ```
pub fn is_some() -> IsSome {
    IsSome
}
