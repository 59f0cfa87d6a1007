//! Settings lifecycle: build once, read many, reset explicitly.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error};

use super::constants::{DEFAULT_ENV_FILE, DEFAULT_ENV_PREFIX};
use super::environment;
use super::error::{Result, SettingsError};
use super::loader::load_env_file;
use super::merge::merge_layers;
use super::overrides::Overrides;
use super::types::{SettingValue, Settings};
use super::validation::validate;

#[derive(Debug, Default)]
struct State {
    settings: Option<Arc<Settings>>,
    /// Even while uninitialized, odd while initialized.
    generation: u64,
}

/// Owns at most one resolved [`Settings`].
///
/// Construct one per process and hand it to consumers by reference. Precedence,
/// highest first: overrides, prefixed environment variables, the env file,
/// schema defaults.
#[derive(Debug)]
pub struct SettingsResolver {
    prefix: String,
    default_env_file: Option<PathBuf>,
    state: Mutex<State>,
    generation: AtomicU64,
}

impl Default for SettingsResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ENV_PREFIX)
    }
}

impl SettingsResolver {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            default_env_file: Some(PathBuf::from(DEFAULT_ENV_FILE)),
            state: Mutex::new(State::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Env file read when `resolve` is called without a path. `None` disables it.
    pub fn with_default_env_file(mut self, path: Option<PathBuf>) -> Self {
        self.default_env_file = path;
        self
    }

    /// Resolve settings, or return the existing instance.
    ///
    /// Once initialized, a call carrying overrides or an env file fails with
    /// [`SettingsError::AlreadyInitialized`]; a bare call returns the same
    /// `Arc`. A caller that raced the first initialization and lost receives
    /// the winner's instance.
    pub fn resolve(&self, env_file: Option<&Path>, overrides: Overrides) -> Result<Arc<Settings>> {
        self.resolve_observed(self.generation(), env_file, overrides)
    }

    /// `observed` is the generation sampled before taking the lock.
    pub(super) fn resolve_observed(
        &self,
        observed: u64,
        env_file: Option<&Path>,
        overrides: Overrides,
    ) -> Result<Arc<Settings>> {
        let mut state = self.lock();

        if let Some(existing) = &state.settings {
            let lost_first_race = observed % 2 == 0 && state.generation == observed + 1;
            if lost_first_race || (env_file.is_none() && overrides.is_empty()) {
                return Ok(Arc::clone(existing));
            }
            return Err(SettingsError::AlreadyInitialized);
        }

        debug!(prefix = %self.prefix, overrides = overrides.len(), "resolving settings");
        let settings = match self.build(env_file, overrides) {
            Ok(settings) => Arc::new(settings),
            Err(err) => {
                error!(error = %err, "failed to resolve settings");
                return Err(err);
            }
        };
        debug!(?settings, "settings resolved");

        state.settings = Some(Arc::clone(&settings));
        state.generation += 1;
        self.generation.store(state.generation, Ordering::Release);
        Ok(settings)
    }

    pub(super) fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    pub fn reset(&self) {
        let mut state = self.lock();
        if state.settings.take().is_some() {
            debug!("resetting settings");
            state.generation += 1;
            self.generation.store(state.generation, Ordering::Release);
        }
    }

    pub fn current(&self) -> Option<Arc<Settings>> {
        self.lock().settings.clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.lock().settings.is_some()
    }

    pub fn get(&self, name: &str) -> Result<SettingValue> {
        let settings = self.current().ok_or_else(|| {
            error!(field = %name, "settings accessed before initialization");
            SettingsError::NotInitialized
        })?;
        settings.get(name)
    }

    /// Resolved settings are read-only; this always fails and changes nothing.
    pub fn set(&self, name: &str, _value: impl Into<String>) -> Result<()> {
        Err(SettingsError::Immutable {
            field: name.to_string(),
        })
    }

    fn build(&self, env_file: Option<&Path>, overrides: Overrides) -> Result<Settings> {
        let mut layers = Vec::with_capacity(3);

        let env_path = env_file.or(self.default_env_file.as_deref());
        if let Some(path) = env_path {
            if let Some(layer) = load_env_file(path, &self.prefix)? {
                layers.push(layer);
            }
        }
        layers.push(environment::from_process(&self.prefix));
        layers.push(overrides.into_layer());

        validate(merge_layers(layers))
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
