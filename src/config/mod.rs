//! Layered settings resolution.
//!
//! This module provides:
//! - A fixed, typed schema with declared defaults
//! - Dotenv file and prefixed environment variable layers
//! - Explicit overrides with the highest precedence
//! - A resolver that builds one immutable [`Settings`] and refuses silent re-initialization

mod builder;
mod constants;
mod defaults;
mod environment;
mod error;
mod global;
mod loader;
mod merge;
mod overrides;
mod resolver;
mod types;
mod validation;

pub use constants::{DEFAULT_DATABASE_URL, DEFAULT_ENV_FILE, DEFAULT_ENV_PREFIX};
pub use error::{Result, SettingsError};
pub use global::{get_settings, global_resolver, reset_settings};
pub use overrides::Overrides;
pub use resolver::SettingsResolver;
pub use types::{Field, LogLevel, SettingValue, Settings, Source};
