//! Collection predicates
//!
//! This module provides count-based predicates over anything implementing
//! [`Counted`]. Each predicate also accepts `Option<C>`, where `None` never
//! satisfies it.

use super::Predicate;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// A collection that knows how many items it holds.
pub trait Counted {
    /// Number of items in the collection.
    fn count(&self) -> usize;
}

impl<T> Counted for Vec<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Counted for [T] {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Counted for [T; N] {
    fn count(&self) -> usize {
        N
    }
}

impl<T> Counted for VecDeque<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Counted for HashMap<K, V, S> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T, S> Counted for HashSet<T, S> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<K, V> Counted for BTreeMap<K, V> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Counted for BTreeSet<T> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<C: Counted + ?Sized> Counted for &C {
    fn count(&self) -> usize {
        (**self).count()
    }
}

// Implements a count predicate for `C: Counted` and `Option<C>`, given the
// check on a present count.
macro_rules! impl_count_predicate {
    ($pred:ty, |$this:ident, $count:ident| $check:expr) => {
        impl<C: Counted + ?Sized> Predicate<C> for $pred {
            #[inline]
            fn check(&self, value: &C) -> bool {
                let $this = self;
                let $count = value.count();
                $check
            }
        }

        impl<C: Counted> Predicate<Option<C>> for $pred {
            #[inline]
            fn check(&self, value: &Option<C>) -> bool {
                match value {
                    Some(collection) => {
                        let $this = self;
                        let $count = collection.count();
                        $check
                    }
                    None => false,
                }
            }
        }
    };
}

/// Predicate that checks if a collection is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsNotEmpty;

impl_count_predicate!(IsNotEmpty, |_this, count| count > 0);

/// Create a predicate that checks if a collection is not empty.
///
/// # Example
///
/// ```rust
/// use pipeguard::predicate::*;
///
/// assert!(is_not_empty().check(&vec![1, 2, 3]));
/// assert!(!is_not_empty().check(&Vec::<i32>::new()));
/// ```
pub fn is_not_empty() -> IsNotEmpty {
    IsNotEmpty
}

/// Same as [`is_not_empty`].
pub fn not_empty_collection() -> IsNotEmpty {
    IsNotEmpty
}

/// Predicate that checks collection count equals expected.
#[derive(Clone, Copy, Debug)]
pub struct HasCount {
    expected: usize,
}

impl_count_predicate!(HasCount, |this, count| count == this.expected);

/// Create a predicate that checks if a collection has exactly `expected` items.
pub fn has_count(expected: usize) -> HasCount {
    HasCount { expected }
}

/// Predicate that checks minimum collection count.
#[derive(Clone, Copy, Debug)]
pub struct HasMinCount {
    min: usize,
}

impl_count_predicate!(HasMinCount, |this, count| count >= this.min);

/// Create a predicate that checks if a collection has at least `min` items.
///
/// # Example
///
/// ```rust
/// use pipeguard::predicate::*;
///
/// assert!(has_min_count(2).check(&vec![1, 2]));
/// assert!(!has_min_count(2).check(&vec![1]));
/// ```
pub fn has_min_count(min: usize) -> HasMinCount {
    HasMinCount { min }
}

/// Predicate that checks maximum collection count.
#[derive(Clone, Copy, Debug)]
pub struct HasMaxCount {
    max: usize,
}

impl_count_predicate!(HasMaxCount, |this, count| count <= this.max);

/// Create a predicate that checks if a collection has at most `max` items.
pub fn has_max_count(max: usize) -> HasMaxCount {
    HasMaxCount { max }
}
