//! Boundary adapters that turn panics, fallible calls, futures and optional
//! values into [`Outcome`]s.
//!
//! - [`attempt`]: run a closure, capturing a panic as a failure
//! - [`attempt_result`]: run a closure returning `Result`, capturing both its
//!   error and a panic
//! - [`settle`], [`settle_result`], [`attempt_async`]: the same for futures
//!   (requires the `async` feature)
//! - [`from_option`], [`from_option_with`]: treat `None` as a failure
//!
//! Every captured fault is normalized into a [`CapturedError`]. The adapters
//! themselves never panic.
//!
//! # Examples
//!
//! ```rust
//! use railway::adapter::{attempt, from_option};
//! use railway::outcome::Outcome;
//!
//! let parsed = attempt(|| "7".parse::<i32>().unwrap());
//! assert_eq!(parsed.ok(), Some(7));
//!
//! let lookup: Outcome<i32, &str> = from_option(None, "not found");
//! assert_eq!(lookup, Outcome::Err("not found"));
//! ```

mod captured;
#[cfg(feature = "async")]
mod future;

pub use captured::CapturedError;
#[cfg(feature = "async")]
pub use future::{Settle, SettleResult, attempt_async, settle, settle_result};

use std::error::Error;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::outcome::Outcome;

/// Runs `computation`, turning a panic into a failure.
///
/// # Examples
///
/// ```rust
/// use railway::adapter::attempt;
///
/// let outcome = attempt(|| 6 * 7);
/// assert_eq!(outcome.ok(), Some(42));
///
/// let outcome = attempt(|| -> i32 { panic!("exploded") });
/// assert_eq!(outcome.unwrap_err().message(), "exploded");
/// ```
pub fn attempt<T, F>(computation: F) -> Outcome<T, CapturedError>
where
    F: FnOnce() -> T,
{
    match catch_unwind(AssertUnwindSafe(computation)) {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => Outcome::Err(CapturedError::from_panic(payload)),
    }
}

/// Runs a fallible `computation`, turning both its error and a panic into a failure.
///
/// The returned error passes through [`CapturedError::from_error`], so it stays
/// reachable with [`CapturedError::downcast_ref`].
///
/// # Examples
///
/// ```rust
/// use railway::adapter::attempt_result;
///
/// let outcome = attempt_result(|| "x".parse::<i32>());
/// let error = outcome.unwrap_err();
/// assert!(error.downcast_ref::<std::num::ParseIntError>().is_some());
/// ```
pub fn attempt_result<T, E, F>(computation: F) -> Outcome<T, CapturedError>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<Box<dyn Error + Send + Sync + 'static>>,
{
    attempt(computation).flat_map(|result| Outcome::from(result).map_err(CapturedError::from_error))
}

/// Returns `Ok(value)` if present, otherwise `Err(error)`.
///
/// Presence is `Some`; values such as `0`, `""` or `false` are present.
///
/// # Examples
///
/// ```rust
/// use railway::adapter::from_option;
/// use railway::outcome::Outcome;
///
/// assert_eq!(from_option(Some(0), "absent"), Outcome::Ok(0));
/// assert_eq!(from_option(None::<i32>, "absent"), Outcome::Err("absent"));
/// ```
pub fn from_option<T, E>(value: Option<T>, error: E) -> Outcome<T, E> {
    value.map_or_else(|| Outcome::Err(error), Outcome::Ok)
}

/// Like [`from_option`], but builds the error only when the value is absent.
pub fn from_option_with<T, E, F>(value: Option<T>, error: F) -> Outcome<T, E>
where
    F: FnOnce() -> E,
{
    value.map_or_else(|| Outcome::Err(error()), Outcome::Ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_attempt_returns_value() {
        assert_eq!(attempt(|| "done").ok(), Some("done"));
    }

    #[rstest]
    fn test_attempt_captures_formatted_panic() {
        let outcome = attempt(|| -> u8 { panic!("code {}", 7) });
        assert_eq!(outcome.err().map(|error| error.message()), Some("code 7".to_string()));
    }

    #[rstest]
    fn test_attempt_result_passes_error_through() {
        let outcome = attempt_result(|| -> Result<(), std::io::Error> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
        });
        let error = outcome.err().unwrap();
        assert_eq!(error.message(), "gone");
        assert_eq!(
            error.downcast_ref::<std::io::Error>().map(std::io::Error::kind),
            Some(std::io::ErrorKind::NotFound)
        );
    }

    #[rstest]
    fn test_attempt_result_captures_panic() {
        let outcome = attempt_result(|| -> Result<(), String> { panic!("inside") });
        assert_eq!(outcome.err().map(|error| error.message()), Some("inside".to_string()));
    }

    #[rstest]
    fn test_from_option_with_is_lazy() {
        let outcome: Outcome<i32, String> =
            from_option_with(Some(1), || unreachable!("error built for a present value"));
        assert_eq!(outcome, Outcome::Ok(1));
    }

    #[rstest]
    #[case(Some(false))]
    #[case(Some(true))]
    fn test_from_option_treats_false_as_present(#[case] value: Option<bool>) {
        assert!(from_option(value, "absent").is_ok());
    }
}
