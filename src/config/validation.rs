use tracing::{debug, warn};

use super::builder::SettingsBuilder;
use super::error::{Result, SettingsError};
use super::merge::{MergedValues, SourcedValue};
use super::types::{Field, LogLevel, Settings, Source};

const TRUE_SPELLINGS: [&str; 4] = ["true", "1", "yes", "on"];
const FALSE_SPELLINGS: [&str; 4] = ["false", "0", "no", "off"];

/// Coerce the merged mapping into the schema. Keys outside the schema are
/// dropped; the first value that fails coercion aborts the whole build.
pub(super) fn validate(merged: MergedValues) -> Result<Settings> {
    let mut builder = SettingsBuilder::new();

    for (key, SourcedValue { value, source }) in merged {
        let Some(field) = Field::lookup(&key) else {
            if source == Source::Override {
                warn!(key = %key, "ignoring override for unknown setting");
            } else {
                debug!(key = %key, %source, "ignoring unknown setting");
            }
            continue;
        };

        builder = match field {
            Field::LogLevel => builder.with_log_level(coerce_log_level(&value, source)?, source),
            Field::DatabaseUrl => {
                builder.with_database_url(coerce_database_url(&value, source)?, source)
            }
            Field::Debug => builder.with_debug(coerce_bool(field, &value, source)?, source),
        };
    }

    Ok(builder.build())
}

pub(super) fn coerce_log_level(raw: &str, source: Source) -> Result<LogLevel> {
    match LogLevel::lookup(raw) {
        Some(level) => Ok(level),
        None => {
            let options = LogLevel::ALL
                .iter()
                .map(|level| level.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            Err(SettingsError::validation(
                Field::LogLevel.name(),
                raw,
                source,
                format!("expected one of {options}"),
            ))
        }
    }
}

pub(super) fn coerce_bool(field: Field, raw: &str, source: Source) -> Result<bool> {
    let normalized = raw.to_ascii_lowercase();
    if TRUE_SPELLINGS.contains(&normalized.as_str()) {
        Ok(true)
    } else if FALSE_SPELLINGS.contains(&normalized.as_str()) {
        Ok(false)
    } else {
        Err(SettingsError::validation(
            field.name(),
            raw,
            source,
            "expected a boolean (true/false, 1/0, yes/no, on/off)",
        ))
    }
}

fn coerce_database_url(raw: &str, source: Source) -> Result<String> {
    if raw.trim().is_empty() {
        Err(SettingsError::validation(
            Field::DatabaseUrl.name(),
            raw,
            source,
            "must not be empty",
        ))
    } else {
        Ok(raw.to_string())
    }
}
