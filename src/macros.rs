//! Macros that capture the predicate's source text
//!
//! The plain functions produce `"Condition not met"` when a check fails
//! without a message. These macros record the predicate expression with
//! `stringify!`, so the same failure reads
//! `"Condition not met: |x: &i32| *x >= 0"`.

/// Start a chain, recording the predicate's source text.
///
/// `pipe!(value, predicate)` or `pipe!(value, predicate, message)`.
///
/// # Example
///
/// ```rust
/// use pipeguard::pipe;
///
/// let err = pipe!(-5, |x: &i32| *x >= 0).resolve().unwrap_err();
/// assert!(err.message().starts_with("Condition not met: "));
/// assert!(err.message().contains(">= 0"));
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr, $predicate:expr $(,)?) => {
        $crate::Pending::new($value, $predicate).with_source(::core::stringify!($predicate))
    };
    ($value:expr, $predicate:expr, $message:expr $(,)?) => {
        $crate::Pending::new($value, $predicate)
            .with_source(::core::stringify!($predicate))
            .with_message($message)
    };
}

/// Continue a chain, recording the next predicate's source text.
///
/// Expands to [`Pending::and_then`](crate::Pending::and_then), so it
/// evaluates the current link and yields a `Result` holding the next one.
///
/// # Example
///
/// ```rust
/// use pipeguard::{chain, pipe, PipeError};
///
/// fn check(x: i32) -> Result<i32, PipeError> {
///     let first = pipe!(x, |x: &i32| *x > 0);
///     chain!(first, |x: &i32| *x < 100, "must be below 100")?.resolve()
/// }
///
/// assert_eq!(check(50), Ok(50));
/// assert_eq!(check(150).unwrap_err().message(), "must be below 100");
/// ```
#[macro_export]
macro_rules! chain {
    ($pending:expr, $predicate:expr $(,)?) => {
        $pending
            .and_then($predicate)
            .map(|next| next.with_source(::core::stringify!($predicate)))
    };
    ($pending:expr, $predicate:expr, $message:expr $(,)?) => {
        $pending.and_then($predicate).map(|next| {
            next.with_source(::core::stringify!($predicate))
                .with_message($message)
        })
    };
}

/// Check a value now, recording the predicate's source text.
///
/// Returns `Result<T, PipeError>` with a [`PipeError::Validation`](crate::PipeError::Validation)
/// on failure.
///
/// # Example
///
/// ```rust
/// use pipeguard::ensure;
///
/// assert_eq!(ensure!(3, |x: &i32| *x > 0), Ok(3));
/// let err = ensure!(3, |x: &i32| *x > 5, "need more than five").unwrap_err();
/// assert_eq!(err.message(), "need more than five");
/// ```
#[macro_export]
macro_rules! ensure {
    ($value:expr, $predicate:expr $(,)?) => {
        $crate::pipe!($value, $predicate).resolve()
    };
    ($value:expr, $predicate:expr, $message:expr $(,)?) => {
        $crate::pipe!($value, $predicate, $message).resolve()
    };
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::PipeError;

    #[test]
    fn test_pipe_captures_source() {
        let pending = pipe!(1, |x: &i32| *x > 0);
        let source = pending.source().unwrap();
        assert!(source.contains("> 0"));
        assert_eq!(pending.message(), None);
    }

    #[test]
    fn test_pipe_with_message() {
        let err = pipe!(-1, |x: &i32| *x > 0, "positive please")
            .resolve()
            .unwrap_err();
        assert_eq!(err.message(), "positive please");
    }

    #[test]
    fn test_pipe_accepts_factory_predicates() {
        use crate::predicate::positive;

        let err = pipe!(0, positive::<i32>()).resolve().unwrap_err();
        assert!(err.message().starts_with("Condition not met: "));
        assert!(err.message().contains("positive"));
    }

    #[test]
    fn test_chain_recaptures_source() {
        let run = || -> Result<i32, PipeError> {
            let first = pipe!(150, |x: &i32| *x > 0);
            chain!(first, |x: &i32| *x < 100)?.resolve()
        };
        let err = run().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.message().starts_with("Condition not met: "));
        assert!(err.message().contains("< 100"));
    }

    #[test]
    fn test_chain_failure_reports_earlier_link() {
        let first = pipe!(-3, |x: &i32| *x > 0);
        let err = chain!(first, |x: &i32| *x < 100).unwrap_err();
        assert!(err.message().contains("> 0"));
    }

    #[test]
    fn test_ensure_macro() {
        assert_eq!(ensure!("abc", |s: &&str| s.len() == 3), Ok("abc"));
        let err = ensure!(0_u8, |x: &u8| *x > 0).unwrap_err();
        assert!(err.message().starts_with("Condition not met: "));
    }

    #[test]
    fn test_trailing_commas() {
        assert_eq!(ensure!(1, |x: &i32| *x == 1,), Ok(1));
        assert_eq!(pipe!(1, |x: &i32| *x == 1, "one",).resolve(), Ok(1));
    }
}
