//! Configuration documents: schema, building, and validation
//!
//! A document enters as JSON or YAML, is built into the three typed
//! records, and is then validated against value constraints and an
//! environment registry. `load_config` runs the whole pipeline.

mod builder;
mod error;
mod schema;
mod validate;

pub use builder::{build_spec, ConfigSource};
pub use error::ConfigError;
pub use schema::{
    ModelStructure, Optimizations, Optimizer, ReturnProcMode, RunConfig, TrainSpec,
};
pub use validate::{active_rule_flags, validate_spec};

use crate::env::EnvRegistry;
use crate::error::Result;

/// Build and validate a configuration document in one step
///
/// # Errors
///
/// Returns the build error or the first validation failure.
pub fn load_config(source: impl Into<ConfigSource>, registry: &dyn EnvRegistry) -> Result<TrainSpec> {
    let spec = build_spec(source)?;
    validate_spec(&spec, registry)?;
    Ok(spec)
}
