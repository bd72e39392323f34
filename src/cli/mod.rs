//! Command-line interface
//!
//! Argument definitions and the handlers behind each subcommand.

mod commands;
mod logging;
mod types;

pub use commands::run_command;
pub use logging::LogLevel;
pub use types::OutputFormat;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level arguments
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "evolucionar")]
#[command(author = "PAIML")]
#[command(version)]
#[command(about = "Configuration validation and run indexing for evolution-strategies training")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Validate a configuration document
    Validate(ValidateArgs),

    /// Print a validated configuration in a chosen format
    Info(InfoArgs),

    /// Index a training-run folder and report its contents
    Inspect(InspectArgs),
}

/// Arguments for `validate`
#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Configuration document (JSON, or YAML by extension)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Print a summary of the validated configuration
    #[arg(short, long)]
    pub detailed: bool,

    /// Additional environment ids to accept (repeatable)
    #[arg(long, value_name = "ID")]
    pub extra_env: Vec<String>,
}

/// Arguments for `info`
#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Configuration document (JSON, or YAML by extension)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output format: text, json, or yaml
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Additional environment ids to accept (repeatable)
    #[arg(long, value_name = "ID")]
    pub extra_env: Vec<String>,
}

/// Arguments for `inspect`
#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct InspectArgs {
    /// Training-run folder
    #[arg(value_name = "RUN_DIR")]
    pub run_dir: PathBuf,

    /// Additional environment ids to accept (repeatable)
    #[arg(long, value_name = "ID")]
    pub extra_env: Vec<String>,
}
