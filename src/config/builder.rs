use super::types::{Field, LogLevel, Settings, Source};
use std::collections::BTreeMap;

/// Typed staging area for one resolution. Starts at the schema defaults;
/// every setter records the layer the value came from.
#[derive(Debug)]
pub(super) struct SettingsBuilder {
    pub(super) log_level: LogLevel,
    pub(super) database_url: String,
    pub(super) debug: bool,
    pub(super) sources: BTreeMap<Field, Source>,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log_level(mut self, level: LogLevel, source: Source) -> Self {
        self.log_level = level;
        self.sources.insert(Field::LogLevel, source);
        self
    }

    pub fn with_database_url(mut self, url: String, source: Source) -> Self {
        self.database_url = url;
        self.sources.insert(Field::DatabaseUrl, source);
        self
    }

    pub fn with_debug(mut self, debug: bool, source: Source) -> Self {
        self.debug = debug;
        self.sources.insert(Field::Debug, source);
        self
    }

    pub fn build(self) -> Settings {
        Settings {
            log_level: self.log_level,
            database_url: self.database_url,
            debug: self.debug,
            sources: self.sources,
        }
    }
}
