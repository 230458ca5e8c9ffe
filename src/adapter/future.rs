//! Asynchronous adapters.
//!
//! [`Settle`] wraps a future and resolves to an [`Outcome`], capturing a panic
//! raised while the future is polled. It never waits on anything besides the
//! wrapped future: cancellation is dropping it, exactly as for the inner one.

use std::error::Error;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::FutureExt;
use futures::future::CatchUnwind;
use pin_project_lite::pin_project;

use super::{CapturedError, attempt};
use crate::outcome::Outcome;

pin_project! {
    /// A future that resolves to `Ok(output)` or to the panic its inner future raised.
    ///
    /// Created by [`settle`].
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct Settle<F> {
        #[pin]
        inner: CatchUnwind<AssertUnwindSafe<F>>,
    }
}

impl<F: Future> Future for Settle<F> {
    type Output = Outcome<F::Output, CapturedError>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.project()
            .inner
            .poll(context)
            .map(|result| match result {
                Ok(value) => Outcome::Ok(value),
                Err(payload) => Outcome::Err(CapturedError::from_panic(payload)),
            })
    }
}

pin_project! {
    /// A future that resolves a `Result`-producing future into an [`Outcome`].
    ///
    /// Created by [`settle_result`].
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct SettleResult<F> {
        #[pin]
        inner: Settle<F>,
    }
}

impl<F, T, E> Future for SettleResult<F>
where
    F: Future<Output = Result<T, E>>,
    E: Into<Box<dyn Error + Send + Sync + 'static>>,
{
    type Output = Outcome<T, CapturedError>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().inner.poll(context).map(|outcome| {
            outcome.flat_map(|result| Outcome::from(result).map_err(CapturedError::from_error))
        })
    }
}

/// Awaits `future`, resolving to `Ok(output)` or to the captured panic.
///
/// # Examples
///
/// ```rust
/// use railway::adapter::settle;
///
/// async fn rejected() -> i32 {
///     panic!("rejected")
/// }
///
/// # futures::executor::block_on(async {
/// let outcome = settle(async { 42 }).await;
/// assert_eq!(outcome.ok(), Some(42));
///
/// let outcome = settle(rejected()).await;
/// let error: Option<String> = outcome.err().map(|error| error.message());
/// assert_eq!(error.as_deref(), Some("rejected"));
/// # });
/// ```
pub fn settle<F>(future: F) -> Settle<F>
where
    F: Future,
{
    Settle {
        inner: AssertUnwindSafe(future).catch_unwind(),
    }
}

/// Awaits a future producing `Result`, capturing its error and any panic.
///
/// # Examples
///
/// ```rust
/// use railway::adapter::settle_result;
///
/// # futures::executor::block_on(async {
/// let outcome = settle_result(async { "x".parse::<u8>() }).await;
/// assert!(outcome.is_err());
/// # });
/// ```
pub fn settle_result<F, T, E>(future: F) -> SettleResult<F>
where
    F: Future<Output = Result<T, E>>,
    E: Into<Box<dyn Error + Send + Sync + 'static>>,
{
    SettleResult {
        inner: settle(future),
    }
}

/// Calls `thunk` to obtain a future and awaits it.
///
/// A panic raised by `thunk` itself, before any future exists, is captured the
/// same way as one raised while polling.
///
/// # Examples
///
/// ```rust
/// use railway::adapter::attempt_async;
///
/// # futures::executor::block_on(async {
/// let outcome = attempt_async(|| async { 1 + 1 }).await;
/// assert_eq!(outcome.ok(), Some(2));
/// # });
/// ```
pub async fn attempt_async<T, Fut, F>(thunk: F) -> Outcome<T, CapturedError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    match attempt(thunk) {
        Outcome::Ok(future) => settle(future).await,
        Outcome::Err(error) => Outcome::Err(error),
    }
}
