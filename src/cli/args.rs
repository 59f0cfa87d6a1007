use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use project_settings::config::{DEFAULT_ENV_PREFIX, Overrides};

use super::commands;

/// Entry point for the `project-settings` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "project-settings",
    about = "Inspect layered project settings",
    version,
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log how each setting was resolved
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every setting together with the layer it came from.
    Show(ShowArgs),
    /// Print a single setting.
    Get(GetArgs),
    /// Resolve settings and report whether they are valid.
    Check(ResolveArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Dotenv file to read (defaults to ./.env when present)
    #[arg(long = "env-file", value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Override a setting; may be repeated
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,

    /// Prefix of environment and env-file keys
    #[arg(long, default_value = DEFAULT_ENV_PREFIX)]
    pub prefix: String,
}

impl ResolveArgs {
    pub fn overrides(&self) -> Overrides {
        self.set.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub resolve: ResolveArgs,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Setting name, e.g. `log_level`
    pub field: String,

    #[command(flatten)]
    pub resolve: ResolveArgs,
}

pub(crate) fn parse_assignment(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

impl Cli {
    pub fn run(self) -> Result<()> {
        commands::run(self)
    }
}
