//! Outcome type - a computation that either succeeded or failed.
//!
//! This module provides the `Outcome<T, E>` type, which is either `Ok(T)` or
//! `Err(E)`. Every combinator consumes the receiver and returns a new value,
//! so an outcome never changes variant once constructed.
//!
//! Failures flow through `map`, `flat_map` and friends untouched, which lets a
//! pipeline of fallible steps be written as a straight chain: the first failing
//! step short-circuits to the end of the chain where it is matched or unwrapped.
//!
//! # Examples
//!
//! ```rust
//! use railway::outcome::Outcome;
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input
//!         .parse::<i32>()
//!         .map_err(|error| error.to_string())
//!         .into()
//! }
//!
//! fn non_negative(value: i32) -> Outcome<i32, String> {
//!     if value < 0 {
//!         Outcome::failure(format!("{value} is negative"))
//!     } else {
//!         Outcome::success(value)
//!     }
//! }
//!
//! let doubled = parse("21").flat_map(non_negative).map(|value| value * 2);
//! assert_eq!(doubled, Outcome::Ok(42));
//!
//! let rejected = parse("-1").flat_map(non_negative).map(|value| value * 2);
//! assert_eq!(rejected, Outcome::Err("-1 is negative".to_string()));
//! ```

mod tagged;
mod unwrap_error;

pub use tagged::Tagged;
pub use unwrap_error::UnwrapError;

use std::fmt;

/// The result of a computation that either succeeded with a `T` or failed with an `E`.
///
/// # Type Parameters
///
/// * `T` - The type of the success payload
/// * `E` - The type of the failure payload
///
/// # Examples
///
/// ```rust
/// use railway::outcome::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::success(42);
/// let failure: Outcome<i32, String> = Outcome::failure("boom".to_string());
///
/// assert_eq!(success.map(|x| x + 1), Outcome::Ok(43));
/// assert_eq!(failure.map(|x| x + 1), Outcome::Err("boom".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "this `Outcome` may be a failure, which should be handled"]
pub enum Outcome<T, E> {
    /// The success variant.
    Ok(T),
    /// The failure variant.
    Err(E),
}

static_assertions::assert_impl_all!(Outcome<i32, String>: Send, Sync);
static_assertions::assert_not_impl_any!(Outcome<std::rc::Rc<i32>, String>: Send, Sync);

/// Creates a successful outcome.
///
/// # Examples
///
/// ```rust
/// use railway::outcome::{Outcome, success};
///
/// let outcome: Outcome<i32, String> = success(42);
/// assert!(outcome.is_ok());
/// ```
#[inline]
pub const fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Creates a failed outcome.
///
/// # Examples
///
/// ```rust
/// use railway::outcome::{Outcome, failure};
///
/// let outcome: Outcome<i32, &str> = failure("boom");
/// assert!(outcome.is_err());
/// ```
#[inline]
pub const fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

/// A pair of handlers for [`Outcome::matching`].
///
/// Exactly one of the two is invoked.
#[derive(Debug, Clone, Copy)]
pub struct Handlers<F, G> {
    /// Invoked with the success payload.
    pub on_ok: F,
    /// Invoked with the failure payload.
    pub on_err: G,
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an `Ok` outcome holding `value`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Ok(value)
    }

    /// Creates an `Err` outcome holding `error`.
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Err(error)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Ok(1);
    /// assert!(outcome.is_ok());
    /// ```
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Err("boom");
    /// assert!(outcome.is_err());
    /// ```
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns `true` if this is `Ok` and the value satisfies `predicate`.
    #[inline]
    pub fn is_ok_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if this is `Err` and the error satisfies `predicate`.
    #[inline]
    pub fn is_err_and<F>(self, predicate: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => predicate(error),
        }
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts into `Option<T>`, discarding a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Ok(42);
    /// assert_eq!(outcome.ok(), Some(42));
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Err("boom");
    /// assert_eq!(outcome.ok(), None);
    /// ```
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Converts into `Option<E>`, discarding a success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Err("boom");
    /// assert_eq!(outcome.err(), Some("boom"));
    /// ```
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Converts into the standard library `Result`.
    ///
    /// Useful at a boundary where the `?` operator should take over.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// fn halve(value: i32) -> Result<i32, String> {
    ///     let even: Outcome<i32, String> = if value % 2 == 0 {
    ///         Outcome::Ok(value)
    ///     } else {
    ///         Outcome::Err(format!("{value} is odd"))
    ///     };
    ///     Ok(even.into_result()? / 2)
    /// }
    ///
    /// assert_eq!(halve(4), Ok(2));
    /// assert_eq!(halve(3), Err("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }

    // =========================================================================
    // Reference Access (Non-consuming)
    // =========================================================================

    /// Borrows both payloads, producing an `Outcome<&T, &E>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<String, i32> = Outcome::Ok("hello".to_string());
    /// assert_eq!(outcome.as_ref().map(|text| text.len()), Outcome::Ok(5));
    /// assert!(outcome.is_ok());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns an iterator over the success payload, yielding nothing on failure.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().ok().into_iter()
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the success payload.
    ///
    /// A failure is returned unchanged and `function` is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Ok(21);
    /// assert_eq!(outcome.map(|x| x * 2), Outcome::Ok(42));
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Err("boom");
    /// assert_eq!(outcome.map(|x| x * 2), Outcome::Err("boom"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Applies `function` to the failure payload.
    ///
    /// A success is returned unchanged and `function` is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Err("boom");
    /// assert_eq!(outcome.map_err(str::len), Outcome::Err(4));
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Ok(1);
    /// assert_eq!(outcome.map_err(str::len), Outcome::Ok(1));
    /// ```
    #[inline]
    pub fn map_err<F, G>(self, function: G) -> Outcome<T, F>
    where
        G: FnOnce(E) -> F,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(function(error)),
        }
    }

    /// Applies one of two functions depending on the variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Err("boom");
    /// assert_eq!(outcome.map_both(|x| x * 2, str::len), Outcome::Err(4));
    /// ```
    #[inline]
    pub fn map_both<U, F, G, H>(self, ok_function: G, err_function: H) -> Outcome<U, F>
    where
        G: FnOnce(T) -> U,
        H: FnOnce(E) -> F,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(ok_function(value)),
            Self::Err(error) => Outcome::Err(err_function(error)),
        }
    }

    /// Sequences a fallible step after this one.
    ///
    /// If this is `Ok(v)`, returns `function(v)` as is, so a failure produced by
    /// the step terminates the chain. If this is `Err(e)`, returns `Err(e)`
    /// without invoking `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// fn reciprocal(value: f64) -> Outcome<f64, String> {
    ///     if value == 0.0 {
    ///         Outcome::Err("division by zero".to_string())
    ///     } else {
    ///         Outcome::Ok(1.0 / value)
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::Ok(4.0).flat_map(reciprocal), Outcome::Ok(0.25));
    /// assert_eq!(
    ///     Outcome::Ok(0.0).flat_map(reciprocal),
    ///     Outcome::Err("division by zero".to_string())
    /// );
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Alias for [`Outcome::flat_map`].
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        self.flat_map(function)
    }

    /// Recovers from a failure by running `function` on the error.
    ///
    /// A success is returned unchanged and `function` is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Err("missing");
    /// let recovered: Outcome<i32, ()> = outcome.or_else(|_| Outcome::Ok(0));
    /// assert_eq!(recovered, Outcome::Ok(0));
    /// ```
    #[inline]
    pub fn or_else<F, G>(self, function: G) -> Outcome<T, F>
    where
        G: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => function(error),
        }
    }

    /// Calls `function` with a reference to the success payload, then returns `self`.
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            function(value);
        }
        self
    }

    /// Calls `function` with a reference to the failure payload, then returns `self`.
    #[inline]
    pub fn inspect_err<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(error) = &self {
            function(error);
        }
        self
    }

    // =========================================================================
    // Termination
    // =========================================================================

    /// Eliminates the outcome by applying exactly one of two functions.
    ///
    /// `on_ok` runs iff this is a success, `on_err` iff it is a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Ok(42);
    /// let text = outcome.fold(|x| format!("value {x}"), |e| format!("error {e}"));
    /// assert_eq!(text, "value 42");
    /// ```
    #[inline]
    pub fn fold<A, F, G>(self, on_ok: F, on_err: G) -> A
    where
        F: FnOnce(T) -> A,
        G: FnOnce(E) -> A,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(error) => on_err(error),
        }
    }

    /// Eliminates the outcome with a named pair of handlers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::{Handlers, Outcome};
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Err("boom");
    /// let length = outcome.matching(Handlers {
    ///     on_ok: |_| 0,
    ///     on_err: str::len,
    /// });
    /// assert_eq!(length, 4);
    /// ```
    #[inline]
    pub fn matching<A, F, G>(self, handlers: Handlers<F, G>) -> A
    where
        F: FnOnce(T) -> A,
        G: FnOnce(E) -> A,
    {
        self.fold(handlers.on_ok, handlers.on_err)
    }

    /// Returns the success payload, or an [`UnwrapError`] carrying the failure payload.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError::CalledOnFailure`] if this is an `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::{Outcome, UnwrapError};
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Err("boom");
    /// assert_eq!(outcome.try_unwrap(), Err(UnwrapError::CalledOnFailure("boom")));
    /// ```
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError<E>> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(error) => Err(UnwrapError::CalledOnFailure(error)),
        }
    }

    /// Returns the failure payload, or an [`UnwrapError`] carrying the success payload.
    ///
    /// # Errors
    ///
    /// Returns [`UnwrapError::CalledOnSuccess`] if this is an `Ok`.
    #[inline]
    pub fn try_unwrap_err(self) -> Result<E, UnwrapError<T>> {
        match self {
            Self::Ok(value) => Err(UnwrapError::CalledOnSuccess(value)),
            Self::Err(error) => Ok(error),
        }
    }

    /// Returns the success payload, or `fallback` on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Err("boom");
    /// assert_eq!(outcome.unwrap_or(7), 7);
    /// ```
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => fallback,
        }
    }

    /// Returns the success payload, or `function(error)` on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<usize, &str> = Outcome::Err("boom");
    /// assert_eq!(outcome.unwrap_or_else(str::len), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => function(error),
        }
    }
}

impl<T: Default, E> Outcome<T, E> {
    /// Returns the success payload, or `T::default()` on failure.
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }
}

impl<T, E: fmt::Debug> Outcome<T, E> {
    /// Returns the success payload.
    ///
    /// This turns a value-level failure into a panic and belongs only at a
    /// boundary where no further recovery is possible.
    ///
    /// # Panics
    ///
    /// Panics with the text of [`UnwrapError::CalledOnFailure`] if this is an `Err`.
    /// The panic payload is that text as a `String`; the failure payload itself
    /// is dropped. Use [`Outcome::try_unwrap`] to keep it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Ok(42);
    /// assert_eq!(outcome.unwrap(), 42);
    /// ```
    ///
    /// ```rust,should_panic
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Err("boom");
    /// outcome.unwrap();
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with `message` followed by the failure payload if this is an `Err`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => panic!("{message}: {error:?}"),
        }
    }
}

impl<T: fmt::Debug, E> Outcome<T, E> {
    /// Returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with the text of [`UnwrapError::CalledOnSuccess`] if this is an `Ok`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let outcome: Outcome<i32, &str> = Outcome::Err("boom");
    /// assert_eq!(outcome.unwrap_err(), "boom");
    /// ```
    #[inline]
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self.try_unwrap_err() {
            Ok(error) => error,
            Err(unwrap_error) => panic!("{unwrap_error}"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Converts a `Result` into an `Outcome`, keeping the variant.
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    /// Converts an `Outcome` into a `Result`, keeping the variant.
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_success_construction() {
        let outcome: Outcome<i32, String> = Outcome::success(42);
        assert!(outcome.is_ok());
        assert!(!outcome.is_err());
    }

    #[rstest]
    fn test_failure_construction() {
        let outcome: Outcome<i32, String> = failure("boom".to_string());
        assert!(outcome.is_err());
        assert!(!outcome.is_ok());
    }

    #[rstest]
    fn test_map_does_not_invoke_function_on_failure() {
        let calls = Cell::new(0);
        let outcome: Outcome<i32, &str> = Outcome::Err("boom");
        let mapped = outcome.map(|x| {
            calls.set(calls.get() + 1);
            x + 1
        });
        assert_eq!(mapped, Outcome::Err("boom"));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_map_err_does_not_invoke_function_on_success() {
        let calls = Cell::new(0);
        let outcome: Outcome<i32, &str> = Outcome::Ok(1);
        let mapped = outcome.map_err(|error| {
            calls.set(calls.get() + 1);
            error.len()
        });
        assert_eq!(mapped, Outcome::Ok(1));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_inspect_observes_only_its_variant() {
        let seen = Cell::new(0);
        let outcome: Outcome<i32, i32> = Outcome::Ok(5);
        let outcome = outcome
            .inspect(|value| seen.set(seen.get() + value))
            .inspect_err(|error| seen.set(seen.get() + error * 100));
        assert_eq!(outcome, Outcome::Ok(5));
        assert_eq!(seen.get(), 5);
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let outcome: Outcome<i32, String> = ok.into();
        assert_eq!(outcome.into_result(), Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let outcome: Outcome<i32, String> = err.into();
        assert_eq!(outcome.into_result(), Err("error".to_string()));
    }

    #[rstest]
    fn test_debug_format() {
        let ok: Outcome<i32, &str> = Outcome::Ok(1);
        let err: Outcome<i32, &str> = Outcome::Err("x");
        assert_eq!(format!("{ok:?}"), "Ok(1)");
        assert_eq!(format!("{err:?}"), "Err(\"x\")");
    }

    #[rstest]
    #[should_panic(expected = "called `Outcome::unwrap()` on an `Err` value: \"boom\"")]
    fn test_unwrap_on_failure_panics_with_payload() {
        let outcome: Outcome<i32, &str> = Outcome::Err("boom");
        let _ = outcome.unwrap();
    }

    #[rstest]
    fn test_unwrap_panic_payload_is_text_only() {
        let outcome: Outcome<i32, std::io::Error> = Outcome::Err(std::io::Error::other("disk"));
        let payload = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || outcome.unwrap()))
            .unwrap_err();
        assert!(!payload.is::<std::io::Error>());
        let text = payload.downcast_ref::<String>().unwrap();
        assert!(text.starts_with("called `Outcome::unwrap()` on an `Err` value:"));
        assert!(text.contains("disk"));
    }

    #[rstest]
    #[should_panic(expected = "called `Outcome::unwrap_err()` on an `Ok` value: 7")]
    fn test_unwrap_err_on_success_panics_with_payload() {
        let outcome: Outcome<i32, &str> = Outcome::Ok(7);
        let _ = outcome.unwrap_err();
    }

    #[rstest]
    #[should_panic(expected = "config missing: \"path\"")]
    fn test_expect_on_failure_panics_with_message() {
        let outcome: Outcome<i32, &str> = Outcome::Err("path");
        let _ = outcome.expect("config missing");
    }

    #[rstest]
    fn test_iteration_yields_success_only() {
        let ok: Outcome<i32, &str> = Outcome::Ok(3);
        let err: Outcome<i32, &str> = Outcome::Err("x");
        assert_eq!(ok.iter().copied().collect::<Vec<_>>(), vec![3]);
        assert_eq!(err.into_iter().count(), 0);
    }
}
