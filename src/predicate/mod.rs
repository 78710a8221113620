//! Predicates and ready-made predicate factories
//!
//! A [`Predicate`] is a boolean condition over a value. Any
//! `Fn(&T) -> bool` closure is a predicate, so ad-hoc
//! conditions need no extra type. The factories in this module cover the
//! conditions that come up again and again: numeric sign and range checks,
//! string emptiness and blankness, presence of optional values, and
//! collection sizes.
//!
//! Factories are stateless. Calling one twice with the same arguments gives
//! two predicates that behave identically.
//!
//! # Example
//!
//! ```rust
//! use pipeguard::predicate::*;
//!
//! assert!(positive::<i32>().check(&5));
//! assert!(in_range(0.0, 1.0).check(&0.5));
//! assert!(not_blank().check("hello"));
//! assert!(has_min_count(2).check(&vec![1, 2, 3]));
//! ```
//!
//! # Use with a chain
//!
//! ```rust
//! use pipeguard::{pipe, predicate::*, PipeError};
//!
//! fn port(p: i32) -> Result<i32, PipeError> {
//!     pipe(p, positive::<i32>()).and_then(in_range(1, 65535))?.resolve()
//! }
//!
//! assert_eq!(port(8080), Ok(8080));
//! assert!(port(70000).is_err());
//! ```

mod collection;
mod number;
mod option;
mod string;

pub use collection::{
    has_count, has_max_count, has_min_count, is_not_empty, not_empty_collection, Counted,
    HasCount, HasMaxCount, HasMinCount, IsNotEmpty,
};
pub use number::{in_range, negative, non_negative, positive, Ge, Gt, InRange, Lt};
pub use option::{is_some, IsSome};
pub use string::{not_blank, not_empty, NotBlank, NotEmpty};

/// A condition over values of type `T`.
///
/// # Example
///
/// ```rust
/// use pipeguard::Predicate;
///
/// let even = |x: &i32| x % 2 == 0;
/// assert!(even.check(&4));
/// assert!(!even.check(&3));
/// ```
pub trait Predicate<T: ?Sized> {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}
