use std::collections::BTreeMap;

use super::merge::Layer;
use super::types::Source;

/// Explicit key/value overrides; keys are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    entries: BTreeMap<String, String>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.entries.insert(key.as_ref().to_lowercase(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub(super) fn into_layer(self) -> Layer {
        Layer::new(Source::Override, self.entries)
    }
}

impl<K, V> FromIterator<(K, V)> for Overrides
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut overrides = Self::new();
        for (key, value) in iter {
            overrides.insert(key, value);
        }
        overrides
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Overrides
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
