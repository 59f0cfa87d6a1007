use std::collections::BTreeMap;
use std::env;

use tracing::{debug, warn};

use super::merge::Layer;
use super::types::Source;

/// Keep only keys starting with `prefix`; strip it and lower-case the rest.
pub fn prefixed_entries<I, K, V>(vars: I, prefix: &str) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    vars.into_iter()
        .filter_map(|(key, value)| {
            let stripped = key.as_ref().strip_prefix(prefix)?;
            if stripped.is_empty() {
                return None;
            }
            Some((stripped.to_lowercase(), value.into()))
        })
        .collect()
}

/// Snapshot the prefixed process environment as a layer.
pub fn from_process(prefix: &str) -> Layer {
    let vars = env::vars_os().filter_map(|(key, value)| {
        match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (Ok(key), Err(_)) => {
                if key.starts_with(prefix) {
                    warn!(key = %key, "skipping environment variable with non-UTF-8 value");
                }
                None
            }
            (Err(key), _) => {
                if key.as_encoded_bytes().starts_with(prefix.as_bytes()) {
                    warn!(
                        key = %key.to_string_lossy(),
                        "skipping environment variable with non-UTF-8 name"
                    );
                }
                None
            }
        }
    });

    let entries = prefixed_entries(vars, prefix);
    for key in entries.keys() {
        debug!(key = %key, "loaded setting from environment");
    }
    Layer::new(Source::Environment, entries)
}
