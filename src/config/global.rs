//! Process-wide resolver for code that cannot take an injected one.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use super::error::Result;
use super::overrides::Overrides;
use super::resolver::SettingsResolver;
use super::types::Settings;

static GLOBAL: OnceLock<SettingsResolver> = OnceLock::new();

/// The shared resolver, created on first use with the default prefix.
pub fn global_resolver() -> &'static SettingsResolver {
    GLOBAL.get_or_init(SettingsResolver::default)
}

/// Resolve (or re-read) the process-wide settings.
///
/// ```no_run
/// use project_settings::{get_settings, Overrides};
///
/// let settings = get_settings(None, Overrides::from([("log_level", "debug")]))?;
/// println!("{}", settings.log_level());
/// # Ok::<(), project_settings::SettingsError>(())
/// ```
pub fn get_settings(env_file: Option<&Path>, overrides: Overrides) -> Result<Arc<Settings>> {
    global_resolver().resolve(env_file, overrides)
}

/// Drop the process-wide settings. Intended for tests only.
pub fn reset_settings() {
    global_resolver().reset();
}
