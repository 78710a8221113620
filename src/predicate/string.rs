//! String predicates
//!
//! Both predicates treat a missing string (`None`) as failing, so they work
//! the same on `Option<String>` as on plain strings.

use super::Predicate;

/// Predicate that checks if a string is present and not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

/// Predicate that checks if a string is present and contains a non-whitespace character.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotBlank;

fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

// Implements a string predicate for every supported string shape, given the
// check on a present `&str`.
macro_rules! impl_str_predicate {
    ($pred:ty, $check:expr) => {
        impl Predicate<str> for $pred {
            #[inline]
            fn check(&self, value: &str) -> bool {
                $check(value)
            }
        }

        impl Predicate<String> for $pred {
            #[inline]
            fn check(&self, value: &String) -> bool {
                $check(value.as_str())
            }
        }

        impl<'a> Predicate<&'a str> for $pred {
            #[inline]
            fn check(&self, value: &&'a str) -> bool {
                $check(*value)
            }
        }

        impl Predicate<Option<String>> for $pred {
            #[inline]
            fn check(&self, value: &Option<String>) -> bool {
                value.as_deref().is_some_and($check)
            }
        }

        impl<'a> Predicate<Option<&'a str>> for $pred {
            #[inline]
            fn check(&self, value: &Option<&'a str>) -> bool {
                value.is_some_and($check)
            }
        }
    };
}

impl_str_predicate!(NotEmpty, |s: &str| !s.is_empty());
impl_str_predicate!(NotBlank, |s: &str| !is_blank(s));

/// Create a predicate that checks if a string is present and not empty.
///
/// # Example
///
/// ```rust
/// use pipeguard::predicate::*;
///
/// assert!(not_empty().check("hello"));
/// assert!(!not_empty().check(""));
/// assert!(!not_empty().check(&None::<String>));
/// ```
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Create a predicate that checks if a string is present and not only whitespace.
///
/// # Example
///
/// ```rust
/// use pipeguard::predicate::*;
///
/// assert!(not_blank().check(" a "));
/// assert!(!not_blank().check(" \t\n"));
/// ```
pub fn not_blank() -> NotBlank {
    NotBlank
}
