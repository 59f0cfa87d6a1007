mod args;
mod commands;

pub use args::Cli;
