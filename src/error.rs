//! Crate-level error type
//!
//! Aggregates the per-module errors behind a single `Error` so callers
//! handle one type and match on the variant for the cause.

use crate::config::ConfigError;
use crate::runs::RunError;
use thiserror::Error;

/// Result alias for evolucionar operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the evolucionar library
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration document failed to build or validate
    #[error("Invalid training configuration: {0}")]
    Config(#[from] ConfigError),

    /// A training-run folder could not be indexed
    #[error("Run indexing failed: {0}")]
    Run(#[from] RunError),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
