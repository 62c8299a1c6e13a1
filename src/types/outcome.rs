//! Two-valued outcome type for operations that can fail.
//!
//! The outcome type represents the result of an operation:
//!
//! - `Succeeded(T)`: Success with value
//! - `Failed(E)`: Typed failure payload
//!
//! Exactly one variant is present, so `is_succeeded()` and `is_failed()` are
//! always opposite. Outcomes are never mutated by the combinators in this
//! crate; every combinator either passes its input through unchanged or
//! builds a new value.

use core::fmt;
use std::any::Any;
use std::future::{self, IntoFuture, Ready};

use serde::{Deserialize, Serialize};

use super::merge::Merge;

/// Payload from a caught panic.
///
/// This wraps the panic value so it can travel as an ordinary failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PanicPayload {
    message: String,
}

impl PanicPayload {
    /// Creates a new panic payload with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extracts the message from a payload returned by `catch_unwind`.
    #[must_use]
    pub fn from_unwind(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Self { message }
    }

    /// Returns the panic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for PanicPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panic: {}", self.message)
    }
}

impl std::error::Error for PanicPayload {}

/// Renders as `panic: <message>`, the same text `from_future` produces.
impl From<PanicPayload> for String {
    fn from(payload: PanicPayload) -> Self {
        payload.to_string()
    }
}

/// A failure tagged with the position of the operation that produced it.
///
/// `index` is the zero-based position in the original input collection,
/// never the order in which operations settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexedFailure<E> {
    /// Position of the failing operation in the input.
    pub index: usize,
    /// The failure payload.
    pub item: E,
}

impl<E> IndexedFailure<E> {
    /// Creates a new indexed failure.
    #[must_use]
    pub const fn new(index: usize, item: E) -> Self {
        Self { index, item }
    }

    /// Maps the failure payload, keeping the index.
    pub fn map_item<F2, G: FnOnce(E) -> F2>(self, g: G) -> IndexedFailure<F2> {
        IndexedFailure {
            index: self.index,
            item: g(self.item),
        }
    }
}

impl<E: fmt::Display> fmt::Display for IndexedFailure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}: {}", self.index, self.item)
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for IndexedFailure<E> {}

/// The two-valued outcome of an operation that can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outcome<T, E> {
    /// Success with a value.
    Succeeded(T),
    /// Failure with a typed payload.
    Failed(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns true if this outcome is `Succeeded`.
    #[must_use]
    pub const fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// Returns true if this outcome is `Failed`.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Borrows the success value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Succeeded(v) => Some(v),
            Self::Failed(_) => None,
        }
    }

    /// Borrows the failure payload, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Succeeded(_) => None,
            Self::Failed(e) => Some(e),
        }
    }

    /// Consumes the outcome, returning the success value if present.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Succeeded(v) => Some(v),
            Self::Failed(_) => None,
        }
    }

    /// Consumes the outcome, returning the failure payload if present.
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Succeeded(_) => None,
            Self::Failed(e) => Some(e),
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[must_use]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Succeeded(v) => Outcome::Succeeded(v),
            Self::Failed(e) => Outcome::Failed(e),
        }
    }

    /// Converts this outcome to a standard `Result`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Succeeded(v) => Ok(v),
            Self::Failed(e) => Err(e),
        }
    }

    /// Chains an operation that can itself fail.
    ///
    /// `f` is never invoked on a failed outcome; the failure is returned as is.
    /// The outcome produced by `f` is returned directly, not re-wrapped.
    pub fn bind<U, F: FnOnce(T) -> Outcome<U, E>>(self, f: F) -> Outcome<U, E> {
        match self {
            Self::Succeeded(v) => f(v),
            Self::Failed(e) => Outcome::Failed(e),
        }
    }

    /// Recovers from a failure. Dual of [`bind`](Self::bind).
    pub fn bind_error<F2, G: FnOnce(E) -> Outcome<T, F2>>(self, g: G) -> Outcome<T, F2> {
        match self {
            Self::Succeeded(v) => Outcome::Succeeded(v),
            Self::Failed(e) => g(e),
        }
    }

    /// Maps the success value using the provided function.
    pub fn map_success<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        match self {
            Self::Succeeded(v) => Outcome::Succeeded(f(v)),
            Self::Failed(e) => Outcome::Failed(e),
        }
    }

    /// Maps the failure payload using the provided function.
    pub fn map_error<F2, G: FnOnce(E) -> F2>(self, g: G) -> Outcome<T, F2> {
        match self {
            Self::Succeeded(v) => Outcome::Succeeded(v),
            Self::Failed(e) => Outcome::Failed(g(e)),
        }
    }

    /// Validates the success value without replacing it.
    ///
    /// If `f` fails, its failure is returned. If it succeeds, the original
    /// outcome is returned unchanged and the validator's value is dropped.
    pub fn gate<U, F: FnOnce(&T) -> Outcome<U, E>>(self, f: F) -> Self {
        match self {
            Self::Succeeded(v) => match f(&v) {
                Outcome::Succeeded(_) => Self::Succeeded(v),
                Outcome::Failed(e) => Self::Failed(e),
            },
            failed @ Self::Failed(_) => failed,
        }
    }

    /// Shallow-merges extra fields into the success value.
    ///
    /// Fields from `f`'s result override same-named fields of the original.
    /// A failure from `f` replaces the whole outcome.
    pub fn augment<P, F>(self, f: F) -> Self
    where
        T: Merge<P>,
        F: FnOnce(&T) -> Outcome<P, E>,
    {
        match self {
            Self::Succeeded(v) => match f(&v) {
                Outcome::Succeeded(extra) => Self::Succeeded(v.merge(extra)),
                Outcome::Failed(e) => Self::Failed(e),
            },
            failed @ Self::Failed(_) => failed,
        }
    }

    /// Runs `f` on the whole outcome for its side effect, returning `self`.
    pub fn tap<R, F: FnOnce(&Self) -> R>(self, f: F) -> Self {
        let _ = f(&self);
        self
    }

    /// Runs `f` on the success value for its side effect, returning `self`.
    pub fn tap_success<R, F: FnOnce(&T) -> R>(self, f: F) -> Self {
        if let Self::Succeeded(v) = &self {
            let _ = f(v);
        }
        self
    }

    /// Runs `f` on the failure payload for its side effect, returning `self`.
    pub fn tap_error<R, F: FnOnce(&E) -> R>(self, f: F) -> Self {
        if let Self::Failed(e) = &self {
            let _ = f(e);
        }
        self
    }

    /// Returns the success value or the given default.
    pub fn default_value(self, default: T) -> T {
        match self {
            Self::Succeeded(v) => v,
            Self::Failed(_) => default,
        }
    }

    /// Returns the success value or computes one. `f` runs only on failure.
    pub fn default_with<F: FnOnce() -> T>(self, f: F) -> T {
        match self {
            Self::Succeeded(v) => v,
            Self::Failed(_) => f(),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Self::Succeeded(v),
            Err(e) => Self::Failed(e),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

/// A bare outcome can be awaited wherever a future of one is accepted.
impl<T, E> IntoFuture for Outcome<T, E> {
    type Output = Self;
    type IntoFuture = Ready<Self>;

    fn into_future(self) -> Self::IntoFuture {
        future::ready(self)
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded(v) => write!(f, "Succeeded({v})"),
            Self::Failed(e) => write!(f, "Failed({e})"),
        }
    }
}
