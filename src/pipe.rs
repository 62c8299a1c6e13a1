//! Value-threading helpers for writing combinator chains left to right.
//!
//! These carry no outcome-specific logic. They exist so a chain like
//! "parse, then validate, then enrich" reads in the order it runs.
//!
//! - [`pipe!`](crate::pipe!): thread a value through stages, synchronously
//! - [`pipe`] / [`Pipe`]: the fluent form, `pipe(v).pipe(f).pipe(g).end()`
//! - [`pipe_async!`](crate::pipe_async!): stages return futures (or outcomes)
//!   and each is awaited before the next runs
//! - [`pipe_async`] / [`PipeAsync`]: the fluent async form, mixing
//!   asynchronous `then` stages and synchronous `map` stages
//!
//! The fluent forms type each stage's argument from the previous stage, so
//! inline closures need no annotations.

use std::future::{self, Future, IntoFuture, Ready};

/// Threads a value through stages left to right.
///
/// ```
/// use resolute::pipe;
///
/// let n = pipe!(3, |x| x + 1, |x| x * 10);
/// assert_eq!(n, 40);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(, $stage:expr)* $(,)?) => {{
        let value = $value;
        $(
            let value = ($stage)(value);
        )*
        value
    }};
}

/// Threads a value through asynchronous stages left to right.
///
/// Each stage must return something `IntoFuture`: a future, an
/// [`Outcome`](crate::Outcome) or a [`Maybe`](crate::Maybe). Expands to a
/// single future of the final value.
#[macro_export]
macro_rules! pipe_async {
    ($value:expr $(, $stage:expr)* $(,)?) => {
        async move {
            let value = $value;
            $(
                let value = ($stage)(value).await;
            )*
            value
        }
    };
}

/// Fluent synchronous pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Pipe<T>(T);

/// Starts a fluent synchronous pipeline.
pub const fn pipe<T>(value: T) -> Pipe<T> {
    Pipe(value)
}

impl<T> Pipe<T> {
    /// Applies the next stage.
    pub fn pipe<U, F: FnOnce(T) -> U>(self, f: F) -> Pipe<U> {
        Pipe(f(self.0))
    }

    /// Ends the pipeline, returning the current value.
    pub fn end(self) -> T {
        self.0
    }
}

/// Fluent asynchronous pipeline.
///
/// Nothing runs until the pipeline is awaited.
#[must_use = "futures do nothing unless awaited"]
pub struct PipeAsync<Fut>(Fut);

/// Starts a fluent asynchronous pipeline.
pub fn pipe_async<T>(value: T) -> PipeAsync<Ready<T>> {
    PipeAsync(future::ready(value))
}

impl<Fut: Future> PipeAsync<Fut> {
    /// Applies an asynchronous stage and awaits it.
    pub fn then<G, F>(self, f: F) -> PipeAsync<impl Future<Output = G::Output>>
    where
        F: FnOnce(Fut::Output) -> G,
        G: IntoFuture,
    {
        let previous = self.0;
        PipeAsync(async move { f(previous.await).await })
    }

    /// Applies a synchronous stage.
    pub fn map<U, F>(self, f: F) -> PipeAsync<impl Future<Output = U>>
    where
        F: FnOnce(Fut::Output) -> U,
    {
        let previous = self.0;
        PipeAsync(async move { f(previous.await) })
    }

    /// Ends the pipeline, returning the future of the final value.
    pub fn end(self) -> Fut {
        self.0
    }
}

impl<Fut: Future> IntoFuture for PipeAsync<Fut> {
    type Output = Fut::Output;
    type IntoFuture = Fut;

    fn into_future(self) -> Self::IntoFuture {
        self.0
    }
}
