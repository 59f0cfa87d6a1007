//! Bridge from the settings log level to `tracing`.

use anyhow::{Context, Result};
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::LogLevel;

/// Convert a settings log level to a tracing level.
pub fn tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warning => Level::WARN,
        LogLevel::Error | LogLevel::Critical => Level::ERROR,
    }
}

/// Install a global stderr subscriber at `level`.
///
/// `RUST_LOG`, when set, takes over filtering.
pub fn init(level: LogLevel) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(LevelFilter::from_level(tracing_level(level)).into())
    });

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("A global tracing subscriber is already installed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_level_mapping() {
        assert_eq!(tracing_level(LogLevel::Debug), Level::DEBUG);
        assert_eq!(tracing_level(LogLevel::Info), Level::INFO);
        assert_eq!(tracing_level(LogLevel::Warning), Level::WARN);
        assert_eq!(tracing_level(LogLevel::Error), Level::ERROR);
        assert_eq!(tracing_level(LogLevel::Critical), Level::ERROR);
    }
}
