//! The error raised when an outcome is unwrapped on the wrong variant.

use std::fmt;

/// Represents an attempt to extract the payload of the variant an outcome does not hold.
///
/// The error carries the payload that was found instead, so the cause is never
/// lost: [`UnwrapError::message`] renders it as text and
/// [`UnwrapError::into_payload`] hands it back.
///
/// # Examples
///
/// ```rust
/// use railway::outcome::{Outcome, UnwrapError};
///
/// let outcome: Outcome<i32, &str> = Outcome::Err("disk full");
/// let error = outcome.try_unwrap().unwrap_err();
///
/// assert_eq!(error, UnwrapError::CalledOnFailure("disk full"));
/// assert_eq!(
///     error.to_string(),
///     "called `Outcome::unwrap()` on an `Err` value: \"disk full\""
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnwrapError<P> {
    /// `unwrap` was called on a failure; holds the failure payload.
    CalledOnFailure(P),
    /// `unwrap_err` was called on a success; holds the success payload.
    CalledOnSuccess(P),
}

impl<P> UnwrapError<P> {
    /// Returns a reference to the payload that was found.
    pub const fn payload(&self) -> &P {
        match self {
            Self::CalledOnFailure(payload) | Self::CalledOnSuccess(payload) => payload,
        }
    }

    /// Consumes the error and returns the payload that was found.
    pub fn into_payload(self) -> P {
        match self {
            Self::CalledOnFailure(payload) | Self::CalledOnSuccess(payload) => payload,
        }
    }
}

impl<P: fmt::Debug> UnwrapError<P> {
    /// Returns the textual form of the payload.
    pub fn message(&self) -> String {
        format!("{:?}", self.payload())
    }
}

impl<P: fmt::Debug> fmt::Display for UnwrapError<P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CalledOnFailure(error) => write!(
                formatter,
                "called `Outcome::unwrap()` on an `Err` value: {error:?}"
            ),
            Self::CalledOnSuccess(value) => write!(
                formatter,
                "called `Outcome::unwrap_err()` on an `Ok` value: {value:?}"
            ),
        }
    }
}

impl<P: fmt::Debug> std::error::Error for UnwrapError<P> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_called_on_failure_display() {
        let error = UnwrapError::CalledOnFailure("boom");
        assert_eq!(
            format!("{error}"),
            "called `Outcome::unwrap()` on an `Err` value: \"boom\""
        );
    }

    #[rstest]
    fn test_called_on_success_display() {
        let error = UnwrapError::CalledOnSuccess(42);
        assert_eq!(
            format!("{error}"),
            "called `Outcome::unwrap_err()` on an `Ok` value: 42"
        );
    }

    #[rstest]
    fn test_message_renders_payload() {
        let error = UnwrapError::CalledOnFailure(std::io::ErrorKind::NotFound);
        assert_eq!(error.message(), "NotFound");
    }

    #[rstest]
    fn test_into_payload_returns_original() {
        let error = UnwrapError::CalledOnFailure(vec![1, 2, 3]);
        assert_eq!(error.payload(), &vec![1, 2, 3]);
        assert_eq!(error.into_payload(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_unwrap_error_is_error() {
        use std::error::Error;

        let error = UnwrapError::CalledOnSuccess("value");
        let dynamic: &dyn Error = &error;
        assert!(dynamic.source().is_none());
    }
}
