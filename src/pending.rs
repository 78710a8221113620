//! Deferred checks and the chain built from them
//!
//! A [`Pending`] holds a value and one condition that has not been evaluated
//! yet. Nothing happens until the link is consumed:
//!
//! - [`Pending::and_then`] evaluates the current condition and, if it holds,
//!   returns the next link. A failure here is always a
//!   [`PipeError::Validation`].
//! - A terminal consumer ([`Pending::resolve`], [`Pending::or_null`],
//!   [`Pending::or_error`], ...) evaluates the last condition and picks the
//!   error to return if it fails.
//!
//! Only the last link's failure can be routed to a different error kind.
//! Earlier links have already been evaluated by the time the terminal
//! consumer runs.
//!
//! # Example
//!
//! ```rust
//! use pipeguard::{pipe, ErrorKind, PipeError};
//!
//! fn checked_percent(x: i32) -> Result<i32, PipeError> {
//!     pipe(x, |x: &i32| *x >= 0)
//!         .with_message("percent must not be negative")
//!         .and_then(|x: &i32| *x <= 100)?
//!         .with_message("percent must not exceed 100")
//!         .or_invalid_operation()
//! }
//!
//! assert_eq!(checked_percent(42), Ok(42));
//! assert_eq!(checked_percent(-1).unwrap_err().kind(), ErrorKind::Validation);
//! assert_eq!(checked_percent(101).unwrap_err().kind(), ErrorKind::InvalidOperation);
//! ```

use crate::error::{condition_message, PipeError};
use crate::predicate::Predicate;
use std::borrow::Cow;
use std::fmt;

/// A value paired with a condition that has not been evaluated yet.
///
/// `Pending` is consumed by every operation that evaluates its condition, so
/// a condition runs at most once.
#[must_use = "a pending check does nothing until it is resolved"]
pub struct Pending<T, P> {
    value: T,
    predicate: P,
    message: Option<Cow<'static, str>>,
    source: Option<&'static str>,
}

/// Start a chain over `value`.
///
/// The predicate is bound through [`Predicate`], not `Fn`, so a closure's
/// parameter type is not inferred from `value`. Annotate it:
/// `pipe(25, |x: &i32| *x >= 0)` compiles where `pipe(25, |x| *x >= 0)`
/// does not. The same holds for [`ensure`], [`Pending::and_then`] and the
/// macros.
///
/// # Example
///
/// ```rust
/// use pipeguard::pipe;
///
/// assert_eq!(pipe(25, |x: &i32| *x >= 0).resolve(), Ok(25));
/// assert!(pipe(-5, |x: &i32| *x >= 0).resolve().is_err());
/// ```
pub fn pipe<T, P>(value: T, predicate: P) -> Pending<T, P>
where
    P: Predicate<T>,
{
    Pending::new(value, predicate)
}

impl<T, P> Pending<T, P>
where
    P: Predicate<T>,
{
    /// Create a link without evaluating anything.
    pub fn new(value: T, predicate: P) -> Self {
        Pending {
            value,
            predicate,
            message: None,
            source: None,
        }
    }

    /// Attach the diagnostic used if this link's condition fails.
    pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> Self {
        Pending {
            message: Some(message.into()),
            ..self
        }
    }

    /// Attach the predicate's source text, used when no message is set.
    ///
    /// The [`pipe!`](crate::pipe!) and [`chain!`](crate::chain!) macros call
    /// this with the text of the predicate expression.
    pub fn with_source(self, source: &'static str) -> Self {
        Pending {
            source: Some(source),
            ..self
        }
    }

    /// The value under check.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The explicit message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The captured predicate source text, if any.
    pub fn source(&self) -> Option<&'static str> {
        self.source
    }

    /// Evaluate this link and, if it holds, continue with `next`.
    ///
    /// `next` is stored, not evaluated. A failure is always
    /// [`PipeError::Validation`], whatever terminal consumer the chain ends
    /// with.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pipeguard::{pipe, ErrorKind};
    ///
    /// let err = pipe(150, |x: &i32| *x > 0)
    ///     .and_then(|x: &i32| *x < 100)
    ///     .and_then(|p| p.resolve())
    ///     .unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Validation);
    /// ```
    pub fn and_then<Q>(self, next: Q) -> Result<Pending<T, Q>, PipeError>
    where
        Q: Predicate<T>,
    {
        let value = self.resolve()?;
        Ok(Pending::new(value, next))
    }

    /// Evaluate and return the value, or a [`PipeError::Validation`].
    pub fn resolve(self) -> Result<T, PipeError> {
        self.finish(|message| PipeError::validation(message).traced())
    }

    /// Evaluate and return the value, or a [`PipeError::InvalidOperation`].
    pub fn or_invalid_operation(self) -> Result<T, PipeError> {
        self.finish(|message| PipeError::invalid_operation(message).traced())
    }

    /// Evaluate and return the value, or a [`PipeError::Null`] tagged with
    /// `param_name`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pipeguard::{pipe, ErrorKind};
    ///
    /// let err = pipe(-1, |x: &i32| *x >= 0).or_null(Some("value")).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Null);
    /// assert_eq!(err.param_name(), Some("value"));
    /// ```
    pub fn or_null(self, param_name: Option<&str>) -> Result<T, PipeError> {
        self.finish(|message| PipeError::null(param_name, message).traced())
    }

    /// Evaluate and return the value, or exactly the error built by `factory`.
    ///
    /// The link's message and source text are ignored.
    pub fn or_error<E, F>(self, factory: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        if self.predicate.check(&self.value) {
            Ok(self.value)
        } else {
            Err(factory())
        }
    }

    /// Evaluate and return the value, or the error `factory` builds from the
    /// link's diagnostic message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pipeguard::pipe;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct ConfigError(String);
    ///
    /// let err = pipe(0, |x: &u16| *x != 0)
    ///     .with_message("port must be set")
    ///     .or_error_with(ConfigError)
    ///     .unwrap_err();
    /// assert_eq!(err, ConfigError("port must be set".to_string()));
    /// ```
    pub fn or_error_with<E, F>(self, factory: F) -> Result<T, E>
    where
        F: FnOnce(String) -> E,
    {
        self.finish(factory)
    }

    /// Evaluate and return the value, or `E::default()`.
    pub fn or_default_error<E: Default>(self) -> Result<T, E> {
        self.or_error(E::default)
    }

    fn failure_message(&self) -> String {
        condition_message(self.message.as_deref(), self.source)
    }

    fn finish<E, F>(self, make_error: F) -> Result<T, E>
    where
        F: FnOnce(String) -> E,
    {
        if self.predicate.check(&self.value) {
            Ok(self.value)
        } else {
            Err(make_error(self.failure_message()))
        }
    }
}

impl<T, P> From<Pending<T, P>> for Result<T, PipeError>
where
    P: Predicate<T>,
{
    fn from(pending: Pending<T, P>) -> Self {
        pending.resolve()
    }
}

impl<T: fmt::Debug, P> fmt::Debug for Pending<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pending")
            .field("value", &self.value)
            .field("message", &self.message)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Check `value` now, returning it or a [`PipeError::Validation`].
///
/// # Example
///
/// ```rust
/// use pipeguard::ensure;
///
/// assert_eq!(ensure(5, |x: &i32| *x > 0), Ok(5));
/// assert_eq!(
///     ensure(-5, |x: &i32| *x > 0).unwrap_err().message(),
///     "Condition not met"
/// );
/// ```
pub fn ensure<T, P>(value: T, predicate: P) -> Result<T, PipeError>
where
    P: Predicate<T>,
{
    Pending::new(value, predicate).resolve()
}

/// Like [`ensure`], with an explicit failure message.
pub fn ensure_with<T, P>(
    value: T,
    predicate: P,
    message: impl Into<Cow<'static, str>>,
) -> Result<T, PipeError>
where
    P: Predicate<T>,
{
    Pending::new(value, predicate)
        .with_message(message)
        .resolve()
}

/// Check `value` now, returning it or the error built by `factory`.
pub fn ensure_or<T, P, E, F>(value: T, predicate: P, factory: F) -> Result<T, E>
where
    P: Predicate<T>,
    F: FnOnce() -> E,
{
    Pending::new(value, predicate).or_error(factory)
}

/// Chain and check methods available on every value.
///
/// # Example
///
/// ```rust
/// use pipeguard::PipeExt;
///
/// let name = String::from("ada");
/// assert_eq!(name.ensure(|s: &String| !s.is_empty()).as_deref(), Ok("ada"));
///
/// let age = 42.pipe(|x: &i32| *x >= 18).resolve();
/// assert_eq!(age, Ok(42));
/// ```
pub trait PipeExt: Sized {
    /// Start a chain over `self`. See [`pipe`].
    fn pipe<P: Predicate<Self>>(self, predicate: P) -> Pending<Self, P> {
        Pending::new(self, predicate)
    }

    /// Check `self` now. See [`ensure`].
    fn ensure<P: Predicate<Self>>(self, predicate: P) -> Result<Self, PipeError> {
        ensure(self, predicate)
    }

    /// Check `self` now with an explicit message. See [`ensure_with`].
    fn ensure_with<P: Predicate<Self>>(
        self,
        predicate: P,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<Self, PipeError> {
        ensure_with(self, predicate, message)
    }

    /// Check `self` now, failing with the caller's error. See [`ensure_or`].
    fn ensure_or<P, E, F>(self, predicate: P, factory: F) -> Result<Self, E>
    where
        P: Predicate<Self>,
        F: FnOnce() -> E,
    {
        ensure_or(self, predicate, factory)
    }
}

impl<T> PipeExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_new_does_not_evaluate() {
        let calls = AtomicUsize::new(0);
        let pending = pipe(1, |_: &i32| {
            calls.fetch_add(1, Ordering::SeqCst);
            false
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(pending.resolve().is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_single_threaded_predicate_state() {
        use std::cell::{Cell, RefCell};
        use std::rc::Rc;

        let calls = Cell::new(0_usize);
        let err = pipe(-1, |x: &i32| {
            calls.set(calls.get() + 1);
            *x >= 0
        })
        .resolve()
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(calls.get(), 1);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let result = pipe(3, move |x: &i32| {
            log.borrow_mut().push(*x);
            *x > 0
        })
        .or_invalid_operation();
        assert_eq!(result, Ok(3));
        assert_eq!(*seen.borrow(), vec![3]);
    }

    #[test]
    fn test_resolve_success_returns_value() {
        assert_eq!(pipe(5, |x: &i32| *x > 0).resolve(), Ok(5));
    }

    #[test]
    fn test_resolve_failure_fallback_message() {
        let err = pipe(-1, |x: &i32| *x >= 0).resolve().unwrap_err();
        assert_eq!(err, PipeError::validation("Condition not met"));
    }

    #[test]
    fn test_resolve_uses_source_text() {
        let err = pipe(-1, |x: &i32| *x >= 0)
            .with_source("|x| *x >= 0")
            .resolve()
            .unwrap_err();
        assert_eq!(err.message(), "Condition not met: |x| *x >= 0");
    }

    #[test]
    fn test_message_beats_source() {
        let err = pipe(-1, |x: &i32| *x >= 0)
            .with_source("|x| *x >= 0")
            .with_message("must be non-negative")
            .resolve()
            .unwrap_err();
        assert_eq!(err.message(), "must be non-negative");
    }

    #[test]
    fn test_owned_message() {
        let limit = 10;
        let err = pipe(11, move |x: &i32| *x <= limit)
            .with_message(format!("must be at most {}", limit))
            .resolve()
            .unwrap_err();
        assert_eq!(err.message(), "must be at most 10");
    }

    #[test]
    fn test_and_then_passes_value_along() {
        let run = || -> Result<i32, PipeError> {
            pipe(50, |x: &i32| *x > 0)
                .and_then(|x: &i32| *x < 100)?
                .and_then(|x: &i32| x % 2 == 0)?
                .resolve()
        };
        assert_eq!(run(), Ok(50));
    }

    #[test]
    fn test_and_then_drops_previous_metadata() {
        let next = pipe(1, |x: &i32| *x > 0)
            .with_message("first")
            .with_source("first source")
            .and_then(|x: &i32| *x > 5)
            .unwrap();
        assert_eq!(next.message(), None);
        assert_eq!(next.source(), None);
        assert_eq!(next.resolve().unwrap_err().message(), "Condition not met");
    }

    #[test]
    fn test_and_then_failure_uses_earlier_message() {
        let err = pipe(-1, |x: &i32| *x > 0)
            .with_message("first failed")
            .and_then(|x: &i32| *x > 5)
            .unwrap_err();
        assert_eq!(err, PipeError::validation("first failed"));
    }

    #[test]
    fn test_or_invalid_operation() {
        let err = pipe(-1, |x: &i32| *x >= 0)
            .or_invalid_operation()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOperation);
        assert_eq!(err.message(), "Condition not met");
    }

    #[test]
    fn test_or_null_without_param_name() {
        let err = pipe(-1, |x: &i32| *x >= 0).or_null(None).unwrap_err();
        assert_eq!(err, PipeError::null(None, "Condition not met"));
    }

    #[test]
    fn test_or_error_ignores_message() {
        let err = pipe(-1, |x: &i32| *x >= 0)
            .with_message("ignored")
            .or_error(|| "Custom error")
            .unwrap_err();
        assert_eq!(err, "Custom error");
    }

    #[test]
    fn test_or_error_factory_not_called_on_success() {
        let result: Result<i32, String> =
            pipe(1, |x: &i32| *x > 0).or_error(|| -> String { panic!("factory must not run") });
        assert_eq!(result, Ok(1));
    }

    #[test]
    fn test_or_error_with_receives_message() {
        let err = pipe("", |s: &&str| !s.is_empty())
            .with_message("name required")
            .or_error_with(|m| format!("config: {}", m))
            .unwrap_err();
        assert_eq!(err, "config: name required");
    }

    #[test]
    fn test_or_default_error() {
        #[derive(Debug, Default, PartialEq)]
        struct Rejected;

        let err = pipe(0, |x: &i32| *x != 0)
            .or_default_error::<Rejected>()
            .unwrap_err();
        assert_eq!(err, Rejected);
    }

    #[test]
    fn test_into_result() {
        let result: Result<i32, PipeError> = pipe(3, |x: &i32| *x == 3).into();
        assert_eq!(result, Ok(3));
    }

    #[test]
    fn test_reference_identity_preserved() {
        let list = vec![1, 2, 3];
        let out = pipe(&list, |l: &&Vec<i32>| !l.is_empty()).resolve().unwrap();
        assert!(std::ptr::eq(out, &list));
    }

    #[test]
    fn test_ensure_functions() {
        assert_eq!(ensure(5, |x: &i32| *x > 0), Ok(5));
        assert_eq!(
            ensure_with(-5, |x: &i32| *x > 0, "must be positive"),
            Err(PipeError::validation("must be positive"))
        );
        assert_eq!(ensure_or(-5, |x: &i32| *x > 0, || 7_u8), Err(7));
    }

    #[test]
    fn test_pipe_ext_methods() {
        assert_eq!(5.ensure(|x: &i32| *x > 0), Ok(5));
        assert_eq!(
            5.ensure_with(|x: &i32| *x > 10, "too small")
                .unwrap_err()
                .message(),
            "too small"
        );
        assert_eq!(5.ensure_or(|x: &i32| *x > 10, || "nope"), Err("nope"));
        assert_eq!(5.pipe(|x: &i32| *x > 0).or_invalid_operation(), Ok(5));
    }

    #[test]
    fn test_debug_shows_metadata() {
        let pending = pipe(9, |x: &i32| *x > 0).with_message("positive");
        let out = format!("{:?}", pending);
        assert!(out.contains("value: 9"));
        assert!(out.contains("positive"));
    }

    #[test]
    fn test_pending_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        let pending = pipe(1_u64, |x: &u64| *x > 0);
        assert_send_sync(&pending);
    }
}
