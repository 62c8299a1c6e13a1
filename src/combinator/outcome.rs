//! Constructors and aggregations over [`Outcome`] values already in hand.
//!
//! Single-value combinators (`bind`, `map_success`, `gate`, ...) are
//! methods on [`Outcome`]. This module holds the free functions: converting
//! foreign representations into outcomes, projecting and splitting
//! sequences, the `all_*` aggregations, and the boundary converters that
//! leave the algebra.
//!
//! # Ordering
//!
//! Every sequence combinator scans its input strictly first to last. The
//! short-circuiting ones (`map_while_successful`, `all_array_m`, `all_obj`)
//! stop consuming the input at the first failure.

use serde::{Deserialize, Serialize};

use crate::error::BoundaryError;
use crate::types::{Maybe, OkFlag, Outcome, Truthy};

/// Converts a condition into an outcome carrying `value` when it holds.
pub fn from_bool<T>(condition: bool, value: T) -> Outcome<T, ()> {
    if condition {
        Outcome::Succeeded(value)
    } else {
        Outcome::Failed(())
    }
}

/// Converts a nullable value into an outcome.
pub fn from_nullable<T>(value: Option<T>) -> Outcome<T, ()> {
    match value {
        Some(v) => Outcome::Succeeded(v),
        None => Outcome::Failed(()),
    }
}

/// Converts a [`Maybe`] into an outcome, failing with `err` when absent.
pub fn from_option<T, E>(option: Maybe<T>, err: E) -> Outcome<T, E> {
    option.into_outcome(err)
}

/// Succeeds with `value` if it is truthy, else fails with `err`.
pub fn require_truthy<T: Truthy, E>(err: E, value: T) -> Outcome<T, E> {
    if value.is_truthy() {
        Outcome::Succeeded(value)
    } else {
        Outcome::Failed(err)
    }
}

/// Succeeds with `value` if it is falsy, else fails with `err`.
pub fn require_falsy<T: Truthy, E>(err: E, value: T) -> Outcome<T, E> {
    if value.is_truthy() {
        Outcome::Failed(err)
    } else {
        Outcome::Succeeded(value)
    }
}

/// Succeeds with `value` if its `ok` flag is set, else fails with `err`.
pub fn require_ok<T: OkFlag, E>(err: E, value: T) -> Outcome<T, E> {
    if value.ok_flag() {
        Outcome::Succeeded(value)
    } else {
        Outcome::Failed(err)
    }
}

/// Succeeds with `items` if there is at least one.
pub fn require_non_empty_array<T, E>(items: Vec<T>, err: E) -> Outcome<Vec<T>, E> {
    if items.is_empty() {
        Outcome::Failed(err)
    } else {
        Outcome::Succeeded(items)
    }
}

/// Succeeds with the only element. Fails on zero and on more than one.
pub fn require_one_element_array<T, E>(items: Vec<T>, err: E) -> Outcome<T, E> {
    if items.len() != 1 {
        return Outcome::Failed(err);
    }
    match items.into_iter().next() {
        Some(item) => Outcome::Succeeded(item),
        None => Outcome::Failed(err),
    }
}

/// Keeps only the success payloads, in order.
pub fn filter_successes<T, E, I>(outcomes: I) -> Vec<T>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes.into_iter().filter_map(Outcome::into_value).collect()
}

/// Keeps only the failure payloads, in order.
pub fn filter_errors<T, E, I>(outcomes: I) -> Vec<E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes.into_iter().filter_map(Outcome::into_error).collect()
}

/// Success and failure payloads split out of a sequence of outcomes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition<T, E> {
    /// Success payloads in input order.
    pub succeeded: Vec<T>,
    /// Failure payloads in input order.
    pub failed: Vec<E>,
}

impl<T, E> Partition<T, E> {
    /// Total number of outcomes partitioned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// Returns true if nothing was partitioned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.succeeded.is_empty() && self.failed.is_empty()
    }
}

impl<T, E> Default for Partition<T, E> {
    fn default() -> Self {
        Self {
            succeeded: Vec::new(),
            failed: Vec::new(),
        }
    }
}

/// Splits outcomes into success and failure buckets, keeping relative order.
pub fn partition<T, E, I>(outcomes: I) -> Partition<T, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let mut parts = Partition::default();
    for outcome in outcomes {
        match outcome {
            Outcome::Succeeded(v) => parts.succeeded.push(v),
            Outcome::Failed(e) => parts.failed.push(e),
        }
    }
    parts
}

/// Maps items in order, stopping at the first failure.
///
/// `f` is invoked for each item up to and including the first failing one;
/// later items are never visited.
pub fn map_while_successful<T, U, E, I, F>(items: I, mut f: F) -> Outcome<Vec<U>, E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Outcome<U, E>,
{
    let items = items.into_iter();
    let mut mapped = Vec::with_capacity(items.size_hint().0);
    for item in items {
        match f(item) {
            Outcome::Succeeded(v) => mapped.push(v),
            Outcome::Failed(e) => return Outcome::Failed(e),
        }
    }
    Outcome::Succeeded(mapped)
}

/// Collect-all: every failure payload, or every value.
///
/// Scans the whole input. Failures are reported in input order without
/// indices. Empty input succeeds with an empty vector.
pub fn all_array_a<T, E, I>(outcomes: I) -> Outcome<Vec<T>, Vec<E>>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    let parts = partition(outcomes);
    if parts.failed.is_empty() {
        Outcome::Succeeded(parts.succeeded)
    } else {
        Outcome::Failed(parts.failed)
    }
}

/// First-only: the first failure payload, or every value.
pub fn all_array_m<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes
        .into_iter()
        .map(Outcome::into_result)
        .collect::<Result<Vec<T>, E>>()
        .into()
}

/// Keyed "all": the first failure in iteration order, or a collection with
/// the same keys mapped to each value.
///
/// The output collection is chosen by the caller; key order is the input's
/// iteration order.
pub fn all_obj<K, T, E, I, C>(entries: I) -> Outcome<C, E>
where
    I: IntoIterator<Item = (K, Outcome<T, E>)>,
    C: FromIterator<(K, T)>,
{
    entries
        .into_iter()
        .map(|(key, outcome)| outcome.into_result().map(|v| (key, v)))
        .collect::<Result<C, E>>()
        .into()
}

/// Unwraps a success, or raises `message` as a [`BoundaryError`].
pub fn throw_if_failed<T, E>(
    message: impl Into<String>,
    outcome: Outcome<T, E>,
) -> Result<T, BoundaryError> {
    throw_if_failed_with(|_| message.into(), outcome)
}

/// Unwraps a success, or raises the message produced from the failure.
pub fn throw_if_failed_with<T, E, M>(mapper: M, outcome: Outcome<T, E>) -> Result<T, BoundaryError>
where
    M: FnOnce(E) -> String,
{
    match outcome {
        Outcome::Succeeded(v) => Ok(v),
        Outcome::Failed(e) => {
            let err = BoundaryError::new(mapper(e));
            tracing::debug!(message = %err, "outcome failed at boundary");
            Err(err)
        }
    }
}

/// Unwraps a failure, or raises `message` as a [`BoundaryError`].
pub fn throw_if_succeeded<T, E>(
    message: impl Into<String>,
    outcome: Outcome<T, E>,
) -> Result<E, BoundaryError> {
    throw_if_succeeded_with(|_| message.into(), outcome)
}

/// Unwraps a failure, or raises the message produced from the value.
pub fn throw_if_succeeded_with<T, E, M>(
    mapper: M,
    outcome: Outcome<T, E>,
) -> Result<E, BoundaryError>
where
    M: FnOnce(T) -> String,
{
    match outcome {
        Outcome::Failed(e) => Ok(e),
        Outcome::Succeeded(v) => {
            let err = BoundaryError::new(mapper(v));
            tracing::debug!(message = %err, "outcome unexpectedly succeeded at boundary");
            Err(err)
        }
    }
}
