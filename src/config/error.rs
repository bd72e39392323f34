//! Configuration error taxonomy
//!
//! Every way a configuration document can be rejected maps onto exactly one
//! variant here, so callers can branch on the kind without string matching.

use thiserror::Error;

/// Errors from building or validating a configuration document
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not a mapping of sections
    #[error("Unsupported input document: expected a mapping, got {0}")]
    UnsupportedInputKind(String),

    /// The document text could not be parsed at all
    #[error("Malformed document {path}: {reason}")]
    MalformedDocument { path: String, reason: String },

    /// One of the three required sections is absent
    #[error("Missing required section: {0}")]
    MissingSection(&'static str),

    /// A section does not have the shape of its record
    #[error("Section '{section}' does not match the {record} record: {reason}")]
    SchemaMismatch {
        record: &'static str,
        section: &'static str,
        reason: String,
    },

    /// Gradient optimizer requested but optimizer_args carries no stepsize
    #[error("Gradient optimizer requested but optimizer_args has no stepsize")]
    MissingStepsize,

    /// The environment id does not resolve against the registry
    #[error("Unknown environment id: {0}")]
    UnknownEnvironment(String),

    /// A field value violates a constraint
    #[error("Invalid value for {record}.{field}: {value} (expected {constraint})")]
    InvalidValue {
        record: &'static str,
        field: String,
        value: String,
        constraint: String,
    },
}
