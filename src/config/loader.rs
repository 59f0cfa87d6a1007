use std::path::Path;

use tracing::debug;

use super::environment::prefixed_entries;
use super::error::{Result, SettingsError};
use super::merge::Layer;
use super::types::Source;

/// Read a dotenv file into a layer without touching the process environment.
///
/// A missing file yields `Ok(None)`; a file that exists but cannot be read
/// or parsed is an error.
pub fn load_env_file(path: &Path, prefix: &str) -> Result<Option<Layer>> {
    if !path.exists() {
        debug!(path = %path.display(), "env file not found, skipping");
        return Ok(None);
    }

    debug!(path = %path.display(), "loading env file");
    let to_error = |source| SettingsError::EnvFile {
        path: path.to_path_buf(),
        source,
    };

    let pairs = dotenvy::from_path_iter(path)
        .map_err(to_error)?
        .collect::<std::result::Result<Vec<(String, String)>, _>>()
        .map_err(to_error)?;

    let entries = prefixed_entries(pairs, prefix);
    for key in entries.keys() {
        debug!(key = %key, path = %path.display(), "loaded setting from env file");
    }
    Ok(Some(Layer::new(Source::EnvFile, entries)))
}
