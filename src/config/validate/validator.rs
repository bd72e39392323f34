//! Configuration validation logic
//!
//! Validates typed records for value correctness before a run is accepted.
//! Structural problems never reach this layer; the builder rejects them.

use crate::config::error::ConfigError;
use crate::config::schema::{ModelStructure, RunConfig, TrainSpec};
use crate::config::validate::rules::{run_rules, RuleScope};
use crate::env::EnvRegistry;

/// Validate a training specification against a registry of environments
///
/// Checks, in report order:
/// - Unconditional model structure constraints
/// - Conditional model structure rules armed by optimization switches
/// - Environment id resolution
/// - Unconditional run configuration constraints
/// - Conditional run configuration rules
pub fn validate_spec(spec: &TrainSpec, registry: &dyn EnvRegistry) -> Result<(), ConfigError> {
    check_model_structure(&spec.model_structure)?;
    run_rules(spec, RuleScope::ModelStructure)?;

    // Env resolution does not short-circuit the numeric checks; all three
    // run before the first failure is reported.
    let env = check_env_id(&spec.config, registry);
    let run = check_run_config(&spec.config);
    let conditional = run_rules(spec, RuleScope::RunConfig);
    env?;
    run?;
    conditional?;

    Ok(())
}

fn check_model_structure(model: &ModelStructure) -> Result<(), ConfigError> {
    if model.ac_noise_std < 0.0 {
        return Err(invalid_model_value(
            "ac_noise_std",
            model.ac_noise_std.to_string(),
            ">= 0",
        ));
    }

    if model.hidden_dims.is_empty() {
        return Err(invalid_model_value(
            "hidden_dims",
            "[]".to_string(),
            "at least one layer width",
        ));
    }

    for (i, dim) in model.hidden_dims.iter().enumerate() {
        match dim.as_i64() {
            Some(d) if d > 0 => {}
            _ => {
                return Err(ConfigError::InvalidValue {
                    record: "ModelStructure",
                    field: format!("hidden_dims[{i}]"),
                    value: dim.to_string(),
                    constraint: "a positive integer".to_string(),
                });
            }
        }
    }

    if model.nonlin_type.is_empty() {
        return Err(invalid_model_value(
            "nonlin_type",
            format!("{:?}", model.nonlin_type),
            "a non-empty activation name",
        ));
    }

    Ok(())
}

fn check_env_id(config: &RunConfig, registry: &dyn EnvRegistry) -> Result<(), ConfigError> {
    if !registry.resolve(&config.env_id) {
        return Err(ConfigError::UnknownEnvironment(config.env_id.clone()));
    }
    Ok(())
}

fn check_run_config(config: &RunConfig) -> Result<(), ConfigError> {
    check_positive_i64("population_size", config.population_size)?;
    check_positive_i64("timesteps_per_gen", config.timesteps_per_gen)?;
    check_positive_i64("num_workers", config.num_workers)?;

    if config.learning_rate <= 0.0 {
        return Err(invalid_run_value(
            "learning_rate",
            config.learning_rate.to_string(),
            "> 0",
        ));
    }

    if config.noise_stdev == 0.0 {
        return Err(invalid_run_value(
            "noise_stdev",
            config.noise_stdev.to_string(),
            "!= 0",
        ));
    }

    if config.snapshot_freq < 0 {
        return Err(invalid_run_value(
            "snapshot_freq",
            config.snapshot_freq.to_string(),
            ">= 0",
        ));
    }

    if config.eval_prob < 0.0 {
        return Err(invalid_run_value(
            "eval_prob",
            config.eval_prob.to_string(),
            ">= 0",
        ));
    }

    Ok(())
}

fn check_positive_i64(field: &str, value: i64) -> Result<(), ConfigError> {
    if value <= 0 {
        return Err(invalid_run_value(field, value.to_string(), "> 0"));
    }
    Ok(())
}

fn invalid_model_value(field: &str, value: String, constraint: &str) -> ConfigError {
    ConfigError::InvalidValue {
        record: "ModelStructure",
        field: field.to_string(),
        value,
        constraint: constraint.to_string(),
    }
}

fn invalid_run_value(field: &str, value: String, constraint: &str) -> ConfigError {
    ConfigError::InvalidValue {
        record: "RunConfig",
        field: field.to_string(),
        value,
        constraint: constraint.to_string(),
    }
}
