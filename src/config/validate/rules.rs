//! Conditional validation rules keyed on optimization switches
//!
//! Each rule names the switch that arms it, the record it constrains, and
//! the check to run. Disabled switches impose nothing: the fields they
//! would constrain may hold any schema-valid value.

use crate::config::error::ConfigError;
use crate::config::schema::{Optimizations, TrainSpec};

/// Key looked up in `optimizer_args` when the gradient optimizer is on
const STEPSIZE_KEY: &str = "stepsize";

/// Which record a conditional rule constrains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RuleScope {
    ModelStructure,
    RunConfig,
}

/// One switch-gated check
pub(crate) struct ConditionalRule {
    /// Name of the switch that arms this rule
    flag: &'static str,
    /// Whether the switch is on for the given flags
    active: fn(&Optimizations) -> bool,
    /// Record the check reads
    scope: RuleScope,
    /// The constraint itself
    check: fn(&TrainSpec) -> Result<(), ConfigError>,
}

/// All conditional rules, in report order within each scope
const CONDITIONAL_RULES: &[ConditionalRule] = &[
    ConditionalRule {
        flag: "gradient_optimizer",
        active: gradient_optimizer_on,
        scope: RuleScope::ModelStructure,
        check: check_stepsize,
    },
    ConditionalRule {
        flag: "discretize_actions",
        active: discretize_actions_on,
        scope: RuleScope::ModelStructure,
        check: check_ac_bins,
    },
    ConditionalRule {
        flag: "observation_normalization",
        active: observation_normalization_on,
        scope: RuleScope::RunConfig,
        check: check_calc_obstat_prob,
    },
    ConditionalRule {
        flag: "gradient_optimizer",
        active: gradient_optimizer_on,
        scope: RuleScope::RunConfig,
        check: check_l2coeff,
    },
];

fn gradient_optimizer_on(flags: &Optimizations) -> bool {
    flags.gradient_optimizer
}

fn discretize_actions_on(flags: &Optimizations) -> bool {
    flags.discretize_actions
}

fn observation_normalization_on(flags: &Optimizations) -> bool {
    flags.observation_normalization
}

/// Run every armed rule for one scope, reporting the first failure
pub(crate) fn run_rules(spec: &TrainSpec, scope: RuleScope) -> Result<(), ConfigError> {
    for rule in CONDITIONAL_RULES {
        if rule.scope == scope && (rule.active)(&spec.optimizations) {
            (rule.check)(spec)?;
        }
    }
    Ok(())
}

/// Names of the switches whose rules are armed, deduplicated
#[must_use]
pub fn active_rule_flags(flags: &Optimizations) -> Vec<&'static str> {
    let mut names = Vec::new();
    for rule in CONDITIONAL_RULES {
        if (rule.active)(flags) && !names.contains(&rule.flag) {
            names.push(rule.flag);
        }
    }
    names
}

/// stepsize must exist in optimizer_args and be a number > 0
fn check_stepsize(spec: &TrainSpec) -> Result<(), ConfigError> {
    let Some(value) = spec.model_structure.optimizer_args.get(STEPSIZE_KEY) else {
        return Err(ConfigError::MissingStepsize);
    };

    match value.as_f64() {
        Some(v) if v > 0.0 => Ok(()),
        _ => Err(ConfigError::InvalidValue {
            record: "ModelStructure",
            field: "optimizer_args.stepsize".to_string(),
            value: value.to_string(),
            constraint: "> 0".to_string(),
        }),
    }
}

fn check_ac_bins(spec: &TrainSpec) -> Result<(), ConfigError> {
    if spec.model_structure.ac_bins <= 0 {
        return Err(ConfigError::InvalidValue {
            record: "ModelStructure",
            field: "ac_bins".to_string(),
            value: spec.model_structure.ac_bins.to_string(),
            constraint: "> 0".to_string(),
        });
    }
    Ok(())
}

fn check_calc_obstat_prob(spec: &TrainSpec) -> Result<(), ConfigError> {
    if spec.config.calc_obstat_prob <= 0.0 {
        return Err(ConfigError::InvalidValue {
            record: "RunConfig",
            field: "calc_obstat_prob".to_string(),
            value: spec.config.calc_obstat_prob.to_string(),
            constraint: "> 0".to_string(),
        });
    }
    Ok(())
}

fn check_l2coeff(spec: &TrainSpec) -> Result<(), ConfigError> {
    if spec.config.l2coeff <= 0.0 {
        return Err(ConfigError::InvalidValue {
            record: "RunConfig",
            field: "l2coeff".to_string(),
            value: spec.config.l2coeff.to_string(),
            constraint: "> 0".to_string(),
        });
    }
    Ok(())
}
