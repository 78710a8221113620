//! Number predicates
//!
//! Sign and range checks. Every factory is generic over
//! `PartialOrd + Default`, with `Default` standing in for zero, so the same
//! functions serve `i32`, `i64`, `f32`, `f64`, and decimal types such as
//! `rust_decimal::Decimal`.

use super::Predicate;

/// Predicate for greater than.
#[derive(Clone, Copy, Debug)]
pub struct Gt<T>(pub T);

impl<T: PartialOrd> Predicate<T> for Gt<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value > self.0
    }
}

/// Predicate for greater than or equal.
#[derive(Clone, Copy, Debug)]
pub struct Ge<T>(pub T);

impl<T: PartialOrd> Predicate<T> for Ge<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.0
    }
}

/// Predicate for less than.
#[derive(Clone, Copy, Debug)]
pub struct Lt<T>(pub T);

impl<T: PartialOrd> Predicate<T> for Lt<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value < self.0
    }
}

/// Predicate for value in range (inclusive).
#[derive(Clone, Copy, Debug)]
pub struct InRange<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd> Predicate<T> for InRange<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }
}

/// Create a predicate that checks if value is between min and max (inclusive).
///
/// # Example
///
/// ```rust
/// use pipeguard::predicate::*;
///
/// let p = in_range(0, 100);
/// assert!(p.check(&0));
/// assert!(p.check(&100));
/// assert!(!p.check(&-1));
/// assert!(!p.check(&101));
/// ```
pub fn in_range<T: PartialOrd>(min: T, max: T) -> InRange<T> {
    InRange { min, max }
}

/// Create a predicate that checks if value is positive (greater than zero).
///
/// # Example
///
/// ```rust
/// use pipeguard::predicate::*;
///
/// let p = positive::<i64>();
/// assert!(p.check(&1));
/// assert!(!p.check(&0));
/// assert!(!p.check(&-1));
/// ```
pub fn positive<T>() -> Gt<T>
where
    T: PartialOrd + Default,
{
    Gt(T::default())
}

/// Create a predicate that checks if value is negative (less than zero).
pub fn negative<T>() -> Lt<T>
where
    T: PartialOrd + Default,
{
    Lt(T::default())
}

/// Create a predicate that checks if value is non-negative (greater than or equal to zero).
///
/// # Example
///
/// ```rust
/// use pipeguard::predicate::*;
///
/// let p = non_negative::<f64>();
/// assert!(p.check(&0.0));
/// assert!(!p.check(&-0.5));
/// ```
pub fn non_negative<T>() -> Ge<T>
where
    T: PartialOrd + Default,
{
    Ge(T::default())
}
