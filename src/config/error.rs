//! Error type shared by every settings operation.

use std::path::PathBuf;
use thiserror::Error;

use super::types::Source;

pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Debug, Error)]
pub enum SettingsError {
    /// A resolve request carried overrides or an env file after settings were built.
    #[error(
        "Settings already initialized. Cannot modify settings after initialization. \
         Call reset() first if you need a new settings instance."
    )]
    AlreadyInitialized,

    /// A merged value could not be coerced into the schema.
    #[error("Invalid value '{value}' for {field} (from {origin}): {reason}")]
    Validation {
        field: String,
        value: String,
        origin: Source,
        reason: String,
    },

    #[error("Settings not initialized")]
    NotInitialized,

    #[error("Settings are immutable. Can't modify '{field}'")]
    Immutable { field: String },

    #[error("Unknown setting '{field}'")]
    UnknownField { field: String },

    /// The env file exists but could not be read or parsed.
    #[error("Failed to load env file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

impl SettingsError {
    pub(crate) fn validation(
        field: impl Into<String>,
        value: impl Into<String>,
        origin: Source,
        reason: impl Into<String>,
    ) -> Self {
        Self::Validation {
            field: field.into(),
            value: value.into(),
            origin,
            reason: reason.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}
