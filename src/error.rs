//! Error types for crossing the edges of the outcome algebra.
//!
//! Inside the algebra, failures are values (`Outcome::Failed`) and are never
//! raised. This module defines the two types used where control flow leaves
//! or enters that world:
//!
//! - [`BoundaryError`]: produced by the `throw_if_*` converters when code
//!   outside the algebra wants an ordinary `Err` to propagate with `?`
//! - [`Rejection`]: what a wrapped future did instead of producing a value,
//!   handed to the mapper of `from_future_with`

use crate::types::PanicPayload;

/// Error raised by a boundary converter.
///
/// The `Display` output is exactly the message, whether it was supplied
/// literally or produced by a mapper from the unexpected payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{message}")]
pub struct BoundaryError {
    message: String,
}

impl BoundaryError {
    /// Creates a boundary error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// How a wrapped future failed to produce a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection<X> {
    /// The future resolved to `Err`.
    #[error("{0}")]
    Error(X),
    /// The future panicked while being polled.
    #[error("{0}")]
    Panicked(PanicPayload),
}

impl<X> Rejection<X> {
    /// Returns true if the rejection came from a panic.
    #[must_use]
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::Panicked(_))
    }
}
