//! # Pipeguard
//!
//! Fluent precondition checks whose error is picked at the end of the chain.
//!
//! A check starts with a value and a condition. The condition is not
//! evaluated until the chain moves on or is consumed, and the consumer
//! decides which error a failure turns into:
//!
//! ```rust
//! use pipeguard::{pipe, ErrorKind, PipeError};
//!
//! fn withdraw(balance: u64, amount: u64) -> Result<u64, PipeError> {
//!     let amount = pipe(amount, |a: &u64| *a > 0)
//!         .with_message("amount must be positive")
//!         .resolve()?;
//!
//!     pipe(balance, move |b: &u64| *b >= amount)
//!         .with_message("insufficient funds")
//!         .or_invalid_operation()
//!         .map(|b| b - amount)
//! }
//!
//! assert_eq!(withdraw(100, 30), Ok(70));
//! assert_eq!(withdraw(100, 0).unwrap_err().kind(), ErrorKind::Validation);
//! assert_eq!(withdraw(10, 30).unwrap_err().kind(), ErrorKind::InvalidOperation);
//! ```
//!
//! ## Building blocks
//!
//! - [`pipe`] / [`pipe!`] start a [`Pending`] check; [`Pending::and_then`] and
//!   [`chain!`] continue it.
//! - Terminal consumers on [`Pending`] pick the error: [`Pending::resolve`],
//!   [`Pending::or_invalid_operation`], [`Pending::or_null`],
//!   [`Pending::or_error`], [`Pending::or_error_with`],
//!   [`Pending::or_default_error`].
//! - [`ensure`], [`ensure_or`] and [`ensure!`] check immediately.
//! - [`predicate`] holds ready-made conditions, [`guard`] holds one-shot
//!   checks for strings, options, and collections.
//!
//! ## Features
//!
//! - `tracing`: emit a `debug` event for every built-in failure. Off by default.
//! - `proptest`: `Arbitrary` support in [`testing`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod macros;

pub mod error;
pub mod guard;
pub mod pending;
pub mod predicate;
pub mod testing;

// Re-exports
pub use error::{ErrorKind, PipeError};
pub use guard::{CollectionGuard, OptionGuard, StrGuard};
pub use pending::{ensure, ensure_or, ensure_with, pipe, Pending, PipeExt};
pub use predicate::Predicate;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{ErrorKind, PipeError};
    pub use crate::guard::{CollectionGuard, OptionGuard, StrGuard};
    pub use crate::pending::{ensure_or, ensure_with, Pending, PipeExt};
    pub use crate::predicate::Predicate;
    // Functions and macros of the same name
    pub use crate::{chain, ensure, pipe};
}
