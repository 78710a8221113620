//! Collection guards
//!
//! Implemented for every [`Counted`](crate::predicate::Counted) collection (including references such
//! as `&[T]` and `&Vec<T>`, which come back as the same reference) and for
//! `Option` of one. A missing collection fails every guard; only
//! [`CollectionGuard::ensure_present`] and [`CollectionGuard::ensure_max_count`]
//! report it as [`PipeError::Null`].

use super::{invalid, missing};
use crate::error::PipeError;

const COLLECTION_CANNOT_BE_NULL: &str = "Collection cannot be null";

mod sealed {
    use crate::predicate::Counted;

    /// A collection that may be missing.
    pub trait MaybeCollection: Sized {
        type Output;

        fn count_opt(&self) -> Option<usize>;
        fn into_output(self) -> Option<Self::Output>;
    }

    impl<C: Counted> MaybeCollection for C {
        type Output = C;

        fn count_opt(&self) -> Option<usize> {
            Some(self.count())
        }
        fn into_output(self) -> Option<C> {
            Some(self)
        }
    }

    impl<C: Counted> MaybeCollection for Option<C> {
        type Output = C;

        fn count_opt(&self) -> Option<usize> {
            self.as_ref().map(Counted::count)
        }
        fn into_output(self) -> Option<C> {
            self
        }
    }
}

type Checked<C> = Result<<C as sealed::MaybeCollection>::Output, PipeError>;

/// Guards for collections and optional collections.
///
/// # Example
///
/// ```rust
/// use pipeguard::guard::CollectionGuard;
///
/// assert_eq!(vec![1, 2, 3].ensure_min_count(2, None), Ok(vec![1, 2, 3]));
/// assert_eq!(
///     vec![1, 2, 3].ensure_min_count(5, None).unwrap_err().message(),
///     "Collection must have at least 5 items"
/// );
/// ```
pub trait CollectionGuard: sealed::MaybeCollection {
    /// Require a present collection.
    fn ensure_present(self, message: Option<&str>) -> Checked<Self> {
        self.into_output()
            .ok_or_else(|| missing(None, message, COLLECTION_CANNOT_BE_NULL))
    }

    /// Require a present, non-empty collection.
    fn ensure_not_empty(self, message: Option<&str>) -> Checked<Self> {
        guard(self, |count| count > 0, message, || {
            "Collection cannot be null or empty".to_string()
        })
    }

    /// Require exactly `count` items.
    fn ensure_count(self, count: usize, message: Option<&str>) -> Checked<Self> {
        guard(self, |actual| actual == count, message, || {
            format!("Collection must have exactly {} items", count)
        })
    }

    /// Require at least `min_count` items.
    fn ensure_min_count(self, min_count: usize, message: Option<&str>) -> Checked<Self> {
        guard(self, |actual| actual >= min_count, message, || {
            format!("Collection must have at least {} items", min_count)
        })
    }

    /// Require at most `max_count` items. A missing collection is a
    /// [`PipeError::Null`].
    fn ensure_max_count(self, max_count: usize, message: Option<&str>) -> Checked<Self> {
        match self.count_opt() {
            None => Err(missing(None, None, COLLECTION_CANNOT_BE_NULL)),
            Some(actual) if actual > max_count => Err(invalid(message, || {
                format!("Collection must have at most {} items", max_count)
            })),
            Some(_) => self.ensure_present(None),
        }
    }
}

impl<C: sealed::MaybeCollection> CollectionGuard for C {}

fn guard<C, F, D>(collection: C, holds: F, message: Option<&str>, default: D) -> Checked<C>
where
    C: sealed::MaybeCollection,
    F: FnOnce(usize) -> bool,
    D: FnOnce() -> String,
{
    match collection.count_opt() {
        Some(count) if holds(count) => collection.ensure_present(None),
        _ => Err(invalid(message, default)),
    }
}
