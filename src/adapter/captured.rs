//! The normalized error produced by the adapters.

use std::any::Any;
use std::error::Error;
use std::fmt;

type BoxedError = Box<dyn Error + Send + Sync + 'static>;

/// A fault captured at an adapter boundary.
///
/// A fault that is already an error passes through unchanged and can be
/// recovered with [`CapturedError::downcast_ref`] or
/// [`CapturedError::into_inner`]. Any other fault is reduced to its textual
/// form.
///
/// # Examples
///
/// ```rust
/// use railway::adapter::CapturedError;
///
/// let io = std::io::Error::other("disk full");
/// let captured = CapturedError::from_error(io);
/// assert_eq!(captured.to_string(), "disk full");
/// assert!(captured.downcast_ref::<std::io::Error>().is_some());
///
/// let captured = CapturedError::new("plain text");
/// assert_eq!(captured.message(), "plain text");
/// assert!(captured.into_inner().is_none());
/// ```
#[derive(Debug)]
pub struct CapturedError {
    repr: Repr,
}

#[derive(Debug)]
enum Repr {
    Error(BoxedError),
    Message(String),
}

static_assertions::assert_impl_all!(CapturedError: Send, Sync);

impl CapturedError {
    /// Wraps a textual description of a fault.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            repr: Repr::Message(message.into()),
        }
    }

    /// Passes an error through.
    ///
    /// A boxed `CapturedError` is unboxed rather than nested.
    #[must_use]
    pub fn from_error<E>(error: E) -> Self
    where
        E: Into<BoxedError>,
    {
        let boxed: BoxedError = error.into();
        match boxed.downcast::<Self>() {
            Ok(captured) => *captured,
            Err(other) => Self {
                repr: Repr::Error(other),
            },
        }
    }

    /// Normalizes a panic payload.
    ///
    /// Payloads that are already errors pass through. Text payloads keep their
    /// text, and primitive numbers, `bool` and `char` are rendered with their
    /// `Display`. A payload that cannot be rendered becomes `"unknown panic"`.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let payload = match payload.downcast::<Self>() {
            Ok(captured) => return *captured,
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<BoxedError>() {
            Ok(error) => return Self::from_error(*error),
            Err(payload) => payload,
        };
        render_payload(payload.as_ref()).map_or_else(|| Self::new("unknown panic"), Self::new)
    }

    /// Returns the textual form of the fault.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns `true` if an error was passed through rather than wrapped as text.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.repr, Repr::Error(_))
    }

    /// Returns a reference to the passed-through error if it is of type `E`.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        match &self.repr {
            Repr::Error(error) => error.downcast_ref::<E>(),
            Repr::Message(_) => None,
        }
    }

    /// Returns the passed-through error, or `None` for a textual fault.
    #[must_use]
    pub fn into_inner(self) -> Option<BoxedError> {
        match self.repr {
            Repr::Error(error) => Some(error),
            Repr::Message(_) => None,
        }
    }
}

macro_rules! render_as {
    ($payload:expr; $($ty:ty),+ $(,)?) => {
        $(
            if let Some(value) = $payload.downcast_ref::<$ty>() {
                return Some(value.to_string());
            }
        )+
    };
}

/// Renders a text or primitive panic payload.
fn render_payload(payload: &(dyn Any + Send)) -> Option<String> {
    render_as!(payload; &'static str, String);
    render_as!(payload; i8, i16, i32, i64, i128, isize);
    render_as!(payload; u8, u16, u32, u64, u128, usize);
    render_as!(payload; f32, f64, bool, char);
    None
}

impl fmt::Display for CapturedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Error(error) => fmt::Display::fmt(error, formatter),
            Repr::Message(message) => formatter.write_str(message),
        }
    }
}

impl Error for CapturedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.repr {
            Repr::Error(error) => error.source(),
            Repr::Message(_) => None,
        }
    }
}

impl From<String> for CapturedError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for CapturedError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
