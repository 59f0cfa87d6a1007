use std::collections::BTreeMap;

use super::builder::SettingsBuilder;
use super::constants::{DEFAULT_DATABASE_URL, DEFAULT_DEBUG};
use super::types::LogLevel;

pub fn default_log_level() -> LogLevel {
    LogLevel::Info
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            debug: DEFAULT_DEBUG,
            sources: BTreeMap::new(),
        }
    }
}
