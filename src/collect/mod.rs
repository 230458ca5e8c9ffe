//! Combinators that lift many outcomes into one.
//!
//! - [`all`]: every outcome must succeed; the first failure wins
//! - [`all_tuple`]: [`all`] over a fixed tuple of differently typed outcomes
//! - [`any`]: one success is enough; if none succeeds, the last failure wins
//! - [`partition`]: split successes from failures
//!
//! The scanning combinators pull from their input lazily and stop at the
//! element that decides the result, so elements after it are never produced.
//!
//! # Examples
//!
//! ```rust
//! use railway::collect::{all, any, partition};
//! use railway::outcome::Outcome;
//!
//! let outcomes: Vec<Outcome<i32, &str>> = vec![Outcome::Ok(1), Outcome::Err("a"), Outcome::Ok(2)];
//!
//! assert_eq!(all(outcomes.clone()), Outcome::Err("a"));
//! assert_eq!(any(outcomes.clone()).ok(), Some(1));
//! assert_eq!(partition(outcomes), (vec![1, 2], vec!["a"]));
//! ```

mod tuple;

pub use tuple::{AllTuple, all_tuple};

use std::fmt;

use crate::outcome::Outcome;

/// The failure produced by [`any`].
///
/// An empty input has no failure to report, so `any` synthesizes
/// [`AnyError::Empty`] instead of inventing an `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyError<E> {
    /// The input contained no outcomes.
    Empty,
    /// Every outcome failed; holds the failure of the last one.
    Failed(E),
}

impl<E> AnyError<E> {
    /// Returns the last failure, or `None` for an empty input.
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Empty => None,
            Self::Failed(error) => Some(error),
        }
    }
}

impl<E: fmt::Display> fmt::Display for AnyError<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => formatter.write_str("empty input to any()"),
            Self::Failed(error) => write!(formatter, "all outcomes failed; last failure: {error}"),
        }
    }
}

impl<E> std::error::Error for AnyError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::Failed(error) => Some(error),
        }
    }
}

// =============================================================================
// FromIterator
// =============================================================================

impl<T, E, C> FromIterator<Outcome<T, E>> for Outcome<C, E>
where
    C: FromIterator<T>,
{
    /// Collects successes into `C`, stopping at the first failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::outcome::Outcome;
    ///
    /// let collected: Outcome<Vec<i32>, &str> =
    ///     vec![Outcome::Ok(1), Outcome::Ok(2)].into_iter().collect();
    /// assert_eq!(collected, Outcome::Ok(vec![1, 2]));
    /// ```
    fn from_iter<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        let mut first_failure = None;
        let collected = iterable
            .into_iter()
            .map_while(|outcome| match outcome {
                Outcome::Ok(value) => Some(value),
                Outcome::Err(error) => {
                    first_failure = Some(error);
                    None
                }
            })
            .collect();

        first_failure.map_or_else(|| Self::Ok(collected), Self::Err)
    }
}

// =============================================================================
// Scanning Combinators
// =============================================================================

/// Returns all success payloads in input order, or the first failure.
///
/// An empty input yields `Ok(vec![])`.
///
/// # Examples
///
/// ```rust
/// use railway::collect::all;
/// use railway::outcome::Outcome;
///
/// let outcomes: Vec<Outcome<i32, &str>> = vec![Outcome::Ok(1), Outcome::Ok(2), Outcome::Ok(3)];
/// assert_eq!(all(outcomes), Outcome::Ok(vec![1, 2, 3]));
///
/// let outcomes = vec![Outcome::Ok(1), Outcome::Err("x"), Outcome::Err("y")];
/// assert_eq!(all(outcomes), Outcome::Err("x"));
/// ```
pub fn all<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes.into_iter().collect()
}

/// Returns the first success, or the failure of the last outcome.
///
/// An empty input yields [`AnyError::Empty`].
///
/// # Examples
///
/// ```rust
/// use railway::collect::{AnyError, any};
/// use railway::outcome::Outcome;
///
/// let outcomes = vec![Outcome::Err("a"), Outcome::Ok(42), Outcome::Ok(99)];
/// assert_eq!(any(outcomes), Outcome::Ok(42));
///
/// let outcomes: Vec<Outcome<i32, &str>> = vec![Outcome::Err("a"), Outcome::Err("c")];
/// assert_eq!(any(outcomes), Outcome::Err(AnyError::Failed("c")));
///
/// let outcomes: Vec<Outcome<i32, &str>> = Vec::new();
/// assert_eq!(any(outcomes), Outcome::Err(AnyError::Empty));
/// ```
pub fn any<T, E, I>(outcomes: I) -> Outcome<T, AnyError<E>>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut last_failure = None;
    for outcome in outcomes {
        match outcome {
            Outcome::Ok(value) => return Outcome::Ok(value),
            Outcome::Err(error) => last_failure = Some(error),
        }
    }

    Outcome::Err(last_failure.map_or(AnyError::Empty, AnyError::Failed))
}

/// Like [`any`], but asks `on_empty` for the failure when the input is empty.
///
/// `on_empty` is invoked only for an empty input.
///
/// # Examples
///
/// ```rust
/// use railway::collect::any_or_else;
/// use railway::outcome::Outcome;
///
/// let outcomes: Vec<Outcome<i32, String>> = Vec::new();
/// let outcome = any_or_else(outcomes, || "no candidates".to_string());
/// assert_eq!(outcome, Outcome::Err("no candidates".to_string()));
/// ```
pub fn any_or_else<T, E, I, F>(outcomes: I, on_empty: F) -> Outcome<T, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
    F: FnOnce() -> E,
{
    any(outcomes).map_err(|error| match error {
        AnyError::Empty => on_empty(),
        AnyError::Failed(error) => error,
    })
}

/// Splits outcomes into success payloads and failure payloads.
///
/// Both outputs keep input order. Never fails.
///
/// # Examples
///
/// ```rust
/// use railway::collect::partition;
/// use railway::outcome::Outcome;
///
/// let outcomes = vec![Outcome::Ok(1), Outcome::Err("a"), Outcome::Ok(2), Outcome::Err("b")];
/// assert_eq!(partition(outcomes), (vec![1, 2], vec!["a", "b"]));
/// ```
pub fn partition<T, E, I>(outcomes: I) -> (Vec<T>, Vec<E>)
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let iterator = outcomes.into_iter();
    let (lower_bound, _) = iterator.size_hint();
    let mut successes = Vec::with_capacity(lower_bound);
    let mut failures = Vec::new();

    for outcome in iterator {
        match outcome {
            Outcome::Ok(value) => successes.push(value),
            Outcome::Err(error) => failures.push(error),
        }
    }

    (successes, failures)
}
