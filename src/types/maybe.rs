//! Optional value type: `Some(T)` or `None`.
//!
//! `Maybe::None` is a unit variant, so every `None` is the same value and all
//! of them compare equal. [`Maybe::NONE`] names that value for callers that
//! want a shared constant.

use core::fmt;
use std::future::{self, IntoFuture, Ready};

use serde::{Deserialize, Serialize};

use super::merge::Merge;
use super::outcome::Outcome;

/// A present value or absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// No value.
    None,
}

impl<T> Maybe<T> {
    /// The shared absent value.
    pub const NONE: Self = Self::None;

    /// Returns true if a value is present.
    #[must_use]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns true if no value is present.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Borrows the value, if present.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Some(v) => Some(v),
            Self::None => None,
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[must_use]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(v) => Maybe::Some(v),
            Self::None => Maybe::None,
        }
    }

    /// Converts into a standard `Option`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(v) => Some(v),
            Self::None => None,
        }
    }

    /// Converts into an outcome, failing with `err` when absent.
    pub fn into_outcome<E>(self, err: E) -> Outcome<T, E> {
        match self {
            Self::Some(v) => Outcome::Succeeded(v),
            Self::None => Outcome::Failed(err),
        }
    }

    /// Chains an operation that may produce nothing.
    pub fn bind<U, F: FnOnce(T) -> Maybe<U>>(self, f: F) -> Maybe<U> {
        match self {
            Self::Some(v) => f(v),
            Self::None => Maybe::None,
        }
    }

    /// Supplies a replacement when absent. `f` takes no argument.
    pub fn bind_error<F: FnOnce() -> Self>(self, f: F) -> Self {
        match self {
            Self::Some(v) => Self::Some(v),
            Self::None => f(),
        }
    }

    /// Maps the present value.
    pub fn map_some<U, F: FnOnce(T) -> U>(self, f: F) -> Maybe<U> {
        match self {
            Self::Some(v) => Maybe::Some(f(v)),
            Self::None => Maybe::None,
        }
    }

    /// Shallow-merges extra fields into the present value.
    ///
    /// If `f` yields `None`, the whole result is `None`.
    pub fn augment<P, F>(self, f: F) -> Self
    where
        T: Merge<P>,
        F: FnOnce(&T) -> Maybe<P>,
    {
        match self {
            Self::Some(v) => match f(&v) {
                Maybe::Some(extra) => Self::Some(v.merge(extra)),
                Maybe::None => Self::None,
            },
            Self::None => Self::None,
        }
    }

    /// Returns the value or the given default.
    pub fn default_value(self, default: T) -> T {
        match self {
            Self::Some(v) => v,
            Self::None => default,
        }
    }

    /// Returns the value or computes one. `f` runs only when absent.
    pub fn default_with<F: FnOnce() -> T>(self, f: F) -> T {
        match self {
            Self::Some(v) => v,
            Self::None => f(),
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(v) => Self::Some(v),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoFuture for Maybe<T> {
    type Output = Self;
    type IntoFuture = Ready<Self>;

    fn into_future(self) -> Self::IntoFuture {
        future::ready(self)
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(v) => write!(f, "Some({v})"),
            Self::None => f.write_str("None"),
        }
    }
}
