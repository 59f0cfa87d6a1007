use std::sync::Arc;

use anyhow::{Context, Result};
use colored::*;
use serde_json::{Map, Value, json};

use project_settings::config::{LogLevel, Settings, SettingsResolver, Source};
use project_settings::logging;

use super::args::{Cli, Command, GetArgs, ResolveArgs, ShowArgs};

pub(crate) fn run(cli: Cli) -> Result<()> {
    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warning
    };
    logging::init(level)?;

    match cli.command {
        Command::Show(args) => show(&args),
        Command::Get(args) => get(&args),
        Command::Check(args) => check(&args),
    }
}

fn resolve(args: &ResolveArgs) -> Result<Arc<Settings>> {
    let resolver = SettingsResolver::new(args.prefix.clone());
    resolver
        .resolve(args.env_file.as_deref(), args.overrides())
        .context("Failed to resolve settings")
}

fn show(args: &ShowArgs) -> Result<()> {
    let settings = resolve(&args.resolve)?;

    if args.json {
        let json = serde_json::to_string_pretty(&settings_json(&settings))
            .context("Failed to serialize settings to JSON")?;
        println!("{json}");
        return Ok(());
    }

    println!("📋 Settings (prefix {}):", args.resolve.prefix.bold());
    for (field, value, source) in settings.iter() {
        println!(
            "   {:<14} {:<32} {}",
            field.name().bold(),
            value.to_string(),
            format!("[{}]", source_label(source)).dimmed()
        );
    }
    Ok(())
}

fn get(args: &GetArgs) -> Result<()> {
    let settings = resolve(&args.resolve)?;
    let value = settings.get(&args.field)?;
    println!("{value}");
    Ok(())
}

fn check(args: &ResolveArgs) -> Result<()> {
    let settings = resolve(args)?;
    let overridden = settings
        .iter()
        .filter(|(_, _, source)| *source != Source::Default)
        .count();
    println!(
        "{} ({} of {} values set explicitly)",
        "✅ Settings are valid".green(),
        overridden,
        settings.iter().count()
    );
    Ok(())
}

fn source_label(source: Source) -> ColoredString {
    let label = source.to_string();
    match source {
        Source::Default => label.normal(),
        Source::EnvFile => label.cyan(),
        Source::Environment => label.yellow(),
        Source::Override => label.magenta(),
    }
}

pub(crate) fn settings_json(settings: &Settings) -> Value {
    let sources = settings
        .iter()
        .map(|(field, _, source)| (field.name().to_string(), json!(source)))
        .collect::<Map<String, Value>>();

    json!({
        "settings": settings,
        "sources": sources,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::parse_assignment;
    use project_settings::config::Overrides;

    #[test]
    fn parse_assignment_splits_on_first_equals() {
        assert_eq!(
            parse_assignment("database_url=postgres://u:p@h/db?x=1").unwrap(),
            (
                "database_url".to_string(),
                "postgres://u:p@h/db?x=1".to_string()
            )
        );
        assert_eq!(
            parse_assignment("debug=").unwrap(),
            ("debug".to_string(), String::new())
        );
        assert!(parse_assignment("debug").is_err());
        assert!(parse_assignment("=true").is_err());
    }

    #[test]
    fn settings_json_includes_values_and_sources() {
        let resolver = SettingsResolver::new("PSCLIJSON_").with_default_env_file(None);
        let settings = resolver
            .resolve(None, Overrides::from([("log_level", "debug")]))
            .unwrap();

        let value = settings_json(&settings);
        assert_eq!(value["settings"]["log_level"], "DEBUG");
        assert_eq!(value["settings"]["debug"], false);
        assert_eq!(value["sources"]["log_level"], "override");
        assert_eq!(value["sources"]["database_url"], "default");
    }
}
