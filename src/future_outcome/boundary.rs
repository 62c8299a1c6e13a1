//! Conversions between raw futures and futures of outcomes.
//!
//! A raw future leaves the algebra in one of two ways: it resolves to `Err`,
//! or it panics while being polled. `from_future`, `from_future_with` and
//! `force_outcome` absorb both into `Outcome::Failed` and never propagate a
//! panic. `to_future` is the one deliberate exit: it turns a failure back
//! into an `Err`.

use std::fmt;
use std::future::{Future, IntoFuture};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::error::Rejection;
use crate::types::{Outcome, PanicPayload};

/// Future adapter that turns a panic during `poll` into an `Err`.
#[derive(Debug)]
pub struct CatchUnwind<F>(Pin<Box<F>>);

impl<F: Future> CatchUnwind<F> {
    /// Wraps `future`.
    pub fn new(future: F) -> Self {
        Self(Box::pin(future))
    }
}

impl<F: Future> Future for CatchUnwind<F> {
    type Output = Result<F::Output, PanicPayload>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let inner = self.0.as_mut();
        match catch_unwind(AssertUnwindSafe(|| inner.poll(cx))) {
            Ok(Poll::Pending) => Poll::Pending,
            Ok(Poll::Ready(v)) => Poll::Ready(Ok(v)),
            Err(payload) => Poll::Ready(Err(PanicPayload::from_unwind(payload.as_ref()))),
        }
    }
}

/// Awaits a raw future; `Err` and panics become `Failed` with a message.
///
/// The message is the `Display` of the error, or `panic: <message>` for a
/// panic. The returned future never panics on behalf of `future`.
pub async fn from_future<F, T, X>(future: F) -> Outcome<T, String>
where
    F: IntoFuture<Output = Result<T, X>>,
    X: fmt::Display,
{
    from_future_with(future, |rejection| rejection.to_string()).await
}

/// Like [`from_future`], passing the rejection through `mapper`.
pub async fn from_future_with<F, T, X, E, M>(future: F, mapper: M) -> Outcome<T, E>
where
    F: IntoFuture<Output = Result<T, X>>,
    M: FnOnce(Rejection<X>) -> E,
{
    match CatchUnwind::new(future.into_future()).await {
        Ok(Ok(value)) => Outcome::Succeeded(value),
        Ok(Err(err)) => Outcome::Failed(mapper(Rejection::Error(err))),
        Err(payload) => {
            tracing::warn!(panic = %payload.message(), "wrapped future panicked");
            Outcome::Failed(mapper(Rejection::Panicked(payload)))
        }
    }
}

/// Leaves the algebra: a failure becomes `Err` with the failure payload.
pub async fn to_future<F, T, E>(future: F) -> Result<T, E>
where
    F: IntoFuture<Output = Outcome<T, E>>,
{
    future.await.into_result()
}

/// Awaits a future of an outcome that might panic, and never panics itself.
///
/// An outcome is passed through unchanged. A panic is captured and converted
/// into the failure type. This is the guard for a process entry point.
pub async fn force_outcome<F, T, E>(future: F) -> Outcome<T, E>
where
    F: IntoFuture<Output = Outcome<T, E>>,
    E: From<PanicPayload>,
{
    match CatchUnwind::new(future.into_future()).await {
        Ok(outcome) => outcome,
        Err(payload) => {
            tracing::warn!(panic = %payload.message(), "outcome future panicked");
            Outcome::Failed(E::from(payload))
        }
    }
}
