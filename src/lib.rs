//! Layered, immutable project settings.
//!
//! Settings are merged from schema defaults, an optional dotenv file, prefixed
//! environment variables and explicit overrides, then frozen for the lifetime
//! of a [`SettingsResolver`].

pub mod config;
pub mod logging;

pub use config::{
    Field, LogLevel, Overrides, SettingValue, Settings, SettingsError, SettingsResolver, Source,
    get_settings, reset_settings,
};
