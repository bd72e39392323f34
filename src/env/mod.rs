//! Environment registry
//!
//! Validation resolves `env_id` against a registry. The trait keeps the
//! lookup pluggable; `EnvCatalog` is the in-memory implementation.

mod catalog;

pub use catalog::EnvCatalog;

/// Resolves environment ids during validation
pub trait EnvRegistry {
    /// Whether `env_id` names a known environment
    fn resolve(&self, env_id: &str) -> bool;
}
