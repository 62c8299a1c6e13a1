//! Single-value combinators lifted onto futures of outcomes.
//!
//! Each function accepts a bare [`Outcome`] or any future of one, and
//! returns a future. `bind` and `gate` accept functions returning either an
//! outcome or a future of one, since both implement `IntoFuture`. The map
//! and tap lifts come in a synchronous form and an `_async` form.

use std::future::IntoFuture;

use crate::types::Outcome;

/// Async [`Outcome::bind`].
pub async fn bind<R, T, U, E, F, Fut>(input: R, f: F) -> Outcome<U, E>
where
    R: IntoFuture<Output = Outcome<T, E>>,
    F: FnOnce(T) -> Fut,
    Fut: IntoFuture<Output = Outcome<U, E>>,
{
    match input.await {
        Outcome::Succeeded(v) => f(v).await,
        Outcome::Failed(e) => Outcome::Failed(e),
    }
}

/// Async [`Outcome::map_success`] with a synchronous mapper.
pub async fn map_success<R, T, U, E, F>(input: R, f: F) -> Outcome<U, E>
where
    R: IntoFuture<Output = Outcome<T, E>>,
    F: FnOnce(T) -> U,
{
    input.await.map_success(f)
}

/// Async [`Outcome::map_success`] with an asynchronous mapper.
pub async fn map_success_async<R, T, U, E, F, Fut>(input: R, f: F) -> Outcome<U, E>
where
    R: IntoFuture<Output = Outcome<T, E>>,
    F: FnOnce(T) -> Fut,
    Fut: IntoFuture<Output = U>,
{
    match input.await {
        Outcome::Succeeded(v) => Outcome::Succeeded(f(v).await),
        Outcome::Failed(e) => Outcome::Failed(e),
    }
}

/// Async [`Outcome::map_error`] with a synchronous mapper.
pub async fn map_error<R, T, E, F2, G>(input: R, g: G) -> Outcome<T, F2>
where
    R: IntoFuture<Output = Outcome<T, E>>,
    G: FnOnce(E) -> F2,
{
    input.await.map_error(g)
}

/// Async [`Outcome::map_error`] with an asynchronous mapper.
pub async fn map_error_async<R, T, E, F2, G, Fut>(input: R, g: G) -> Outcome<T, F2>
where
    R: IntoFuture<Output = Outcome<T, E>>,
    G: FnOnce(E) -> Fut,
    Fut: IntoFuture<Output = F2>,
{
    match input.await {
        Outcome::Succeeded(v) => Outcome::Succeeded(v),
        Outcome::Failed(e) => Outcome::Failed(g(e).await),
    }
}

/// Async [`Outcome::gate`]: validate without replacing the value.
pub async fn gate<R, T, U, E, F, Fut>(input: R, f: F) -> Outcome<T, E>
where
    R: IntoFuture<Output = Outcome<T, E>>,
    F: FnOnce(&T) -> Fut,
    Fut: IntoFuture<Output = Outcome<U, E>>,
{
    match input.await {
        Outcome::Succeeded(v) => match f(&v).await {
            Outcome::Succeeded(_) => Outcome::Succeeded(v),
            Outcome::Failed(e) => Outcome::Failed(e),
        },
        Outcome::Failed(e) => Outcome::Failed(e),
    }
}

/// Async [`Outcome::tap_success`] with a synchronous side effect.
pub async fn tap_success<R, T, E, X, F>(input: R, f: F) -> Outcome<T, E>
where
    R: IntoFuture<Output = Outcome<T, E>>,
    F: FnOnce(&T) -> X,
{
    input.await.tap_success(f)
}

/// Async [`Outcome::tap_success`] with an asynchronous side effect.
///
/// The side effect is awaited before the original outcome is returned.
pub async fn tap_success_async<R, T, E, F, Fut>(input: R, f: F) -> Outcome<T, E>
where
    R: IntoFuture<Output = Outcome<T, E>>,
    F: FnOnce(&T) -> Fut,
    Fut: IntoFuture,
{
    let outcome = input.await;
    if let Outcome::Succeeded(v) = &outcome {
        let _ = f(v).await;
    }
    outcome
}

/// Async [`Outcome::tap_error`] with a synchronous side effect.
pub async fn tap_error<R, T, E, X, F>(input: R, f: F) -> Outcome<T, E>
where
    R: IntoFuture<Output = Outcome<T, E>>,
    F: FnOnce(&E) -> X,
{
    input.await.tap_error(f)
}

/// Async [`Outcome::tap_error`] with an asynchronous side effect.
pub async fn tap_error_async<R, T, E, F, Fut>(input: R, f: F) -> Outcome<T, E>
where
    R: IntoFuture<Output = Outcome<T, E>>,
    F: FnOnce(&E) -> Fut,
    Fut: IntoFuture,
{
    let outcome = input.await;
    if let Outcome::Failed(e) = &outcome {
        let _ = f(e).await;
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_lite::future::block_on;
    use std::cell::Cell;

    async fn double(v: i32) -> Outcome<i32, String> {
        Outcome::Succeeded(v * 2)
    }

    #[test]
    fn bind_accepts_sync_and_async_functions() {
        let sync = block_on(bind(Outcome::<i32, String>::Succeeded(2), |v| {
            Outcome::Succeeded(v + 1)
        }));
        assert_eq!(sync, Outcome::Succeeded(3));

        let chained = block_on(bind(double(2), double));
        assert_eq!(chained, Outcome::Succeeded(8));
    }

    #[test]
    fn bind_skips_on_failure() {
        let calls = Cell::new(0);
        let out = block_on(bind(Outcome::<i32, &str>::Failed("e"), |v| {
            calls.set(calls.get() + 1);
            Outcome::Succeeded(v)
        }));
        assert_eq!(out, Outcome::Failed("e"));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn map_variants() {
        let out = block_on(map_success(double(1), |v| v.to_string()));
        assert_eq!(out, Outcome::Succeeded("2".to_string()));

        let out = block_on(map_success_async(double(1), |v| async move { v + 100 }));
        assert_eq!(out, Outcome::Succeeded(102));

        let out = block_on(map_error(Outcome::<(), &str>::Failed("abc"), str::len));
        assert_eq!(out, Outcome::Failed(3));

        let out = block_on(map_error_async(Outcome::<(), &str>::Failed("abc"), |e| async move {
            e.to_uppercase()
        }));
        assert_eq!(out, Outcome::Failed("ABC".to_string()));
    }

    #[test]
    fn gate_keeps_original_value() {
        let out = block_on(gate(double(5), |v| {
            let v = *v;
            async move {
                if v < 50 {
                    Outcome::Succeeded(())
                } else {
                    Outcome::Failed("too large".to_string())
                }
            }
        }));
        assert_eq!(out, Outcome::Succeeded(10));

        let out = block_on(gate(double(30), |_| {
            Outcome::<(), String>::Failed("rejected".into())
        }));
        assert_eq!(out, Outcome::Failed("rejected".to_string()));
    }

    #[test]
    fn taps_return_original() {
        let seen = Cell::new(0);
        let out = block_on(tap_success(double(2), |v| seen.set(*v)));
        assert_eq!(out, Outcome::Succeeded(4));
        assert_eq!(seen.get(), 4);

        let out = block_on(tap_error_async(Outcome::<i32, i32>::Failed(9), |e| {
            seen.set(*e);
            async {}
        }));
        assert_eq!(out, Outcome::Failed(9));
        assert_eq!(seen.get(), 9);

        let out = block_on(tap_success_async(Outcome::<i32, i32>::Failed(1), |_| {
            seen.set(-1);
            async {}
        }));
        assert_eq!(out, Outcome::Failed(1));
        assert_eq!(seen.get(), 9);

        let out = block_on(tap_error(double(1), |_| seen.set(-2)));
        assert_eq!(out, Outcome::Succeeded(2));
        assert_eq!(seen.get(), 9);
    }
}
