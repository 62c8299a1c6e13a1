//! Constructors and aggregations over [`Maybe`] values.

use crate::error::BoundaryError;
use crate::types::Maybe;

/// Maps each element to a [`Maybe`] and keeps the present payloads.
pub fn choose<T, U, I, F>(items: I, f: F) -> Vec<U>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Maybe<U>,
{
    items.into_iter().map(f).filter_map(Maybe::into_option).collect()
}

/// `Some(value)` when the condition holds.
pub fn from_bool<T>(condition: bool, value: T) -> Maybe<T> {
    if condition {
        Maybe::Some(value)
    } else {
        Maybe::None
    }
}

/// Converts a nullable value.
pub fn from_nullable<T>(value: Option<T>) -> Maybe<T> {
    Maybe::from(value)
}

/// `Some(items)` if there is at least one.
pub fn require_non_empty_array<T>(items: Vec<T>) -> Maybe<Vec<T>> {
    if items.is_empty() {
        Maybe::None
    } else {
        Maybe::Some(items)
    }
}

/// `Some` of the only element; `None` on zero or several.
pub fn require_one_element_array<T>(items: Vec<T>) -> Maybe<T> {
    if items.len() != 1 {
        return Maybe::None;
    }
    from_nullable(items.into_iter().next())
}

/// The first `None` short-circuits; otherwise `Some` of every value.
pub fn all<T, I>(items: I) -> Maybe<Vec<T>>
where
    I: IntoIterator<Item = Maybe<T>>,
{
    items
        .into_iter()
        .map(Maybe::into_option)
        .collect::<Option<Vec<T>>>()
        .into()
}

/// Keyed [`all`]: the first `None` in iteration order short-circuits.
pub fn all_obj<K, T, I, C>(entries: I) -> Maybe<C>
where
    I: IntoIterator<Item = (K, Maybe<T>)>,
    C: FromIterator<(K, T)>,
{
    entries
        .into_iter()
        .map(|(key, value)| value.into_option().map(|v| (key, v)))
        .collect::<Option<C>>()
        .into()
}

/// Unwraps a present value, or raises `message` as a [`BoundaryError`].
pub fn throw_if_none<T>(message: impl Into<String>, value: Maybe<T>) -> Result<T, BoundaryError> {
    match value {
        Maybe::Some(v) => Ok(v),
        Maybe::None => {
            let err = BoundaryError::new(message);
            tracing::debug!(message = %err, "value absent at boundary");
            Err(err)
        }
    }
}
