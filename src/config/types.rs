use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::error::{Result, SettingsError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

/// Normalized (lower-case) spelling to level.
const LOG_LEVEL_TABLE: [(&str, LogLevel); 5] = [
    ("debug", LogLevel::Debug),
    ("info", LogLevel::Info),
    ("warning", LogLevel::Warning),
    ("error", LogLevel::Error),
    ("critical", LogLevel::Critical),
];

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    /// Case-insensitive lookup; `None` when the spelling is not a member.
    pub fn lookup(raw: &str) -> Option<Self> {
        let normalized = raw.to_ascii_lowercase();
        LOG_LEVEL_TABLE
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, level)| *level)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names of the schema fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    LogLevel,
    DatabaseUrl,
    Debug,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::LogLevel, Field::DatabaseUrl, Field::Debug];

    pub fn name(self) -> &'static str {
        match self {
            Field::LogLevel => "log_level",
            Field::DatabaseUrl => "database_url",
            Field::Debug => "debug",
        }
    }

    pub fn lookup(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|field| field.name() == normalized)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a resolved value came from, lowest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    Default,
    EnvFile,
    Environment,
    Override,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Default => write!(f, "default"),
            Source::EnvFile => write!(f, "env file"),
            Source::Environment => write!(f, "environment"),
            Source::Override => write!(f, "override"),
        }
    }
}

/// One field value read through the string-keyed interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    LogLevel(LogLevel),
    Text(String),
    Bool(bool),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::LogLevel(level) => write!(f, "{level}"),
            SettingValue::Text(text) => write!(f, "{text}"),
            SettingValue::Bool(flag) => write!(f, "{flag}"),
        }
    }
}

/// Resolved, read-only settings.
///
/// Instances only come out of a resolver, and no field can be reassigned:
///
/// ```compile_fail
/// use project_settings::{Overrides, SettingsResolver};
///
/// let resolver = SettingsResolver::new("DOC_").with_default_env_file(None);
/// let mut settings = (*resolver.resolve(None, Overrides::new()).unwrap()).clone();
/// settings.debug = true;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub(super) log_level: LogLevel,
    pub(super) database_url: String,
    pub(super) debug: bool,
    #[serde(skip)]
    pub(super) sources: BTreeMap<Field, Source>,
}

impl Settings {
    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn value(&self, field: Field) -> SettingValue {
        match field {
            Field::LogLevel => SettingValue::LogLevel(self.log_level),
            Field::DatabaseUrl => SettingValue::Text(self.database_url.clone()),
            Field::Debug => SettingValue::Bool(self.debug),
        }
    }

    pub fn get(&self, name: &str) -> Result<SettingValue> {
        let field = Field::lookup(name).ok_or_else(|| SettingsError::UnknownField {
            field: name.to_string(),
        })?;
        Ok(self.value(field))
    }

    pub fn source(&self, field: Field) -> Source {
        self.sources.get(&field).copied().unwrap_or(Source::Default)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, SettingValue, Source)> + '_ {
        Field::ALL
            .into_iter()
            .map(|field| (field, self.value(field), self.source(field)))
    }
}
