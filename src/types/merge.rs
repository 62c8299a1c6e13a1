//! Shallow object merge used by `augment`.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use serde_json::{Map, Value};

/// Shallow merge where entries of `overrides` win over entries of `self`.
///
/// The result holds the union of keys. Values are replaced wholesale; nested
/// objects are not merged recursively.
pub trait Merge<Rhs = Self> {
    /// Merges `overrides` into `self`.
    #[must_use]
    fn merge(self, overrides: Rhs) -> Self;
}

impl<K: Ord, V> Merge for BTreeMap<K, V> {
    fn merge(mut self, overrides: Self) -> Self {
        self.extend(overrides);
        self
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> Merge for HashMap<K, V, S> {
    fn merge(mut self, overrides: Self) -> Self {
        self.extend(overrides);
        self
    }
}

impl Merge for Map<String, Value> {
    fn merge(mut self, overrides: Self) -> Self {
        self.extend(overrides);
        self
    }
}

impl Merge<Map<String, Value>> for Value {
    fn merge(self, overrides: Map<String, Value>) -> Self {
        <Self as Merge>::merge(self, Self::Object(overrides))
    }
}

/// Two objects merge key by key. `Null` overrides nothing; any other
/// non-object value replaces `self`.
impl Merge for Value {
    fn merge(self, overrides: Self) -> Self {
        match (self, overrides) {
            (Self::Object(base), Self::Object(extra)) => Self::Object(base.merge(extra)),
            (base, Self::Null) => base,
            (_, other) => other,
        }
    }
}
