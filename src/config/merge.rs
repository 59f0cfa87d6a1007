//! Precedence merge of raw key/value layers.
//!
//! Layers are folded lowest precedence first, so a key present in a later
//! layer replaces the earlier value together with its source.

use std::collections::BTreeMap;

use super::types::Source;

/// Raw string entries from one source, keys already normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    pub source: Source,
    pub entries: BTreeMap<String, String>,
}

impl Layer {
    pub fn new(source: Source, entries: BTreeMap<String, String>) -> Self {
        Self { source, entries }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedValue {
    pub value: String,
    pub source: Source,
}

pub type MergedValues = BTreeMap<String, SourcedValue>;

pub fn merge_layers(layers: impl IntoIterator<Item = Layer>) -> MergedValues {
    layers.into_iter().fold(MergedValues::new(), |mut merged, layer| {
        for (key, value) in layer.entries {
            merged.insert(
                key,
                SourcedValue {
                    value,
                    source: layer.source,
                },
            );
        }
        merged
    })
}
