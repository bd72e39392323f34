//! Evolucionar CLI
//!
//! Configuration validation and run indexing for evolution-strategies
//! training.
//!
//! # Usage
//!
//! ```bash
//! # Validate a config document
//! evolucionar validate config.json
//!
//! # Validate with a summary and a custom environment
//! evolucionar validate config.yaml --detailed --extra-env MyEnv-v0
//!
//! # Print a validated config as JSON
//! evolucionar info config.yaml --format json
//!
//! # Index a training-run folder
//! evolucionar inspect runs/humanoid_01
//! ```

use clap::Parser;
use evolucionar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
