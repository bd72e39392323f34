//! Property-based tests for configuration validation

use super::validator::validate_spec;
use crate::config::error::ConfigError;
use crate::config::schema::*;
use crate::env::EnvCatalog;
use proptest::prelude::*;
use serde_json::Number;
use std::collections::HashMap;

fn arb_valid_spec() -> impl Strategy<Value = TrainSpec> {
    (
        1i64..10_000,                                      // population_size
        1i64..1_000_000,                                   // timesteps_per_gen
        1i64..512,                                         // num_workers
        1e-6f64..1.0,                                      // learning_rate
        prop_oneof![0.001f64..10.0, -10.0f64..-0.001],     // noise_stdev
        0i64..100,                                         // snapshot_freq
    )
        .prop_map(
            |(population_size, timesteps_per_gen, num_workers, learning_rate, noise_stdev, snapshot_freq)| {
                TrainSpec {
                    optimizations: Optimizations::default(),
                    model_structure: ModelStructure {
                        ac_noise_std: 0.01,
                        ac_bins: 10,
                        hidden_dims: vec![Number::from(64), Number::from(64)],
                        nonlin_type: "tanh".to_string(),
                        optimizer: Optimizer::Adam,
                        optimizer_args: HashMap::new(),
                    },
                    config: RunConfig {
                        env_id: "CartPole-v1".to_string(),
                        population_size,
                        timesteps_per_gen,
                        num_workers,
                        learning_rate,
                        noise_stdev,
                        snapshot_freq,
                        return_proc_mode: ReturnProcMode::CenteredRank,
                        calc_obstat_prob: 0.01,
                        l2coeff: 0.005,
                        eval_prob: 0.003,
                    },
                }
            },
        )
}

/// stepsize values a disarmed gradient_optimizer rule must ignore
fn arb_irrelevant_stepsize() -> impl Strategy<Value = Option<serde_json::Value>> {
    prop_oneof![
        Just(None::<serde_json::Value>),
        Just(Some(serde_json::json!(0))),
        Just(Some(serde_json::json!(-1.5))),
        Just(Some(serde_json::json!("fast"))),
        (0.001f64..1.0).prop_map(|v| Some(serde_json::json!(v))),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_spec_passes(spec in arb_valid_spec()) {
        let registry = EnvCatalog::builtin();
        prop_assert!(validate_spec(&spec, &registry).is_ok());
    }

    #[test]
    fn prop_zero_noise_stdev_fails(spec in arb_valid_spec()) {
        let mut spec = spec;
        spec.config.noise_stdev = 0.0;
        let registry = EnvCatalog::builtin();
        prop_assert!(
            matches!(
                validate_spec(&spec, &registry),
                Err(ConfigError::InvalidValue { ref field, .. }) if field == "noise_stdev"
            ),
            "expected InvalidValue for noise_stdev"
        );
    }

    #[test]
    fn prop_nonpositive_population_fails(
        spec in arb_valid_spec(),
        population in -100i64..=0
    ) {
        let mut spec = spec;
        spec.config.population_size = population;
        let registry = EnvCatalog::builtin();
        prop_assert!(
            matches!(
                validate_spec(&spec, &registry),
                Err(ConfigError::InvalidValue { ref field, .. }) if field == "population_size"
            ),
            "expected InvalidValue for population_size"
        );
    }

    #[test]
    fn prop_nonpositive_hidden_dim_fails(
        spec in arb_valid_spec(),
        dim in -64i64..=0
    ) {
        let mut spec = spec;
        spec.model_structure.hidden_dims = vec![Number::from(64), Number::from(dim)];
        let registry = EnvCatalog::builtin();
        prop_assert!(
            matches!(
                validate_spec(&spec, &registry),
                Err(ConfigError::InvalidValue { ref field, .. }) if field == "hidden_dims[1]"
            ),
            "expected InvalidValue for hidden_dims[1]"
        );
    }

    #[test]
    fn prop_negative_snapshot_freq_fails(
        spec in arb_valid_spec(),
        freq in -100i64..0
    ) {
        let mut spec = spec;
        spec.config.snapshot_freq = freq;
        let registry = EnvCatalog::builtin();
        prop_assert!(
            matches!(
                validate_spec(&spec, &registry),
                Err(ConfigError::InvalidValue { ref field, .. }) if field == "snapshot_freq"
            ),
            "expected InvalidValue for snapshot_freq"
        );
    }

    #[test]
    fn prop_disarmed_stepsize_rule_ignores_value(
        spec in arb_valid_spec(),
        stepsize in arb_irrelevant_stepsize()
    ) {
        let mut spec = spec;
        if let Some(value) = stepsize {
            spec.model_structure.optimizer_args.insert("stepsize".to_string(), value);
        }
        let registry = EnvCatalog::builtin();
        prop_assert!(validate_spec(&spec, &registry).is_ok());
    }

    #[test]
    fn prop_armed_rule_rejects_missing_stepsize(spec in arb_valid_spec()) {
        let mut spec = spec;
        spec.optimizations.gradient_optimizer = true;
        let registry = EnvCatalog::builtin();
        prop_assert!(matches!(
            validate_spec(&spec, &registry),
            Err(ConfigError::MissingStepsize)
        ));
    }

    #[test]
    fn prop_armed_rule_accepts_positive_stepsize(
        spec in arb_valid_spec(),
        stepsize in 1e-6f64..1.0
    ) {
        let mut spec = spec;
        spec.optimizations.gradient_optimizer = true;
        spec.model_structure
            .optimizer_args
            .insert("stepsize".to_string(), serde_json::json!(stepsize));
        let registry = EnvCatalog::builtin();
        prop_assert!(validate_spec(&spec, &registry).is_ok());
    }

    #[test]
    fn prop_validation_is_idempotent(
        spec in arb_valid_spec(),
        noise_stdev in prop_oneof![Just(0.0f64), 0.001f64..1.0]
    ) {
        let mut spec = spec;
        spec.config.noise_stdev = noise_stdev;
        let registry = EnvCatalog::builtin();
        let first = validate_spec(&spec, &registry);
        let second = validate_spec(&spec, &registry);
        prop_assert_eq!(first.is_ok(), second.is_ok());
        if let (Err(a), Err(b)) = (first, second) {
            prop_assert_eq!(a.to_string(), b.to_string());
        }
    }
}
