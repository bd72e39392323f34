//! Record definitions for evolution-strategies training configuration
//!
//! A configuration document carries three sections, each constructed into
//! one of the records below. Unknown, missing, or mistyped keys fail at
//! construction; value constraints are the validator's job.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Gradient optimizer applied to the evolution gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Optimizer {
    Adam,
    Sgd,
}

impl Optimizer {
    /// Literal used in configuration documents
    pub fn as_str(self) -> &'static str {
        match self {
            Optimizer::Adam => "adam",
            Optimizer::Sgd => "sgd",
        }
    }
}

/// Shaping applied to episode returns before the gradient estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnProcMode {
    CenteredRank,
    Sign,
    CenteredSignRank,
}

impl ReturnProcMode {
    /// Literal used in configuration documents
    pub fn as_str(self) -> &'static str {
        match self {
            ReturnProcMode::CenteredRank => "centered_rank",
            ReturnProcMode::Sign => "sign",
            ReturnProcMode::CenteredSignRank => "centered_sign_rank",
        }
    }
}

/// Independent switches gating optional parts of the training procedure
///
/// The switches have no internal invariants; each one activates extra
/// constraints on the other two records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Optimizations {
    /// Sample parameter noise in mirrored pairs
    pub mirrored_sampling: bool,

    /// Rank-shape returns before computing the gradient
    pub fitness_shaping: bool,

    /// Decay parameters toward zero each generation
    pub weight_decay: bool,

    /// Map continuous action outputs onto discrete bins
    pub discretize_actions: bool,

    /// Apply a gradient optimizer instead of plain SGD steps
    pub gradient_optimizer: bool,

    /// Normalize observations with running statistics
    pub observation_normalization: bool,

    /// Divide the gradient estimate by the noise standard deviation
    pub divide_by_stdev: bool,
}

/// Policy network structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelStructure {
    /// Standard deviation of noise added to actions at sampling time
    pub ac_noise_std: f64,

    /// Number of action bins (meaningful when `discretize_actions` is set)
    pub ac_bins: i64,

    /// Hidden layer widths, kept as raw numbers until validation
    pub hidden_dims: Vec<serde_json::Number>,

    /// Activation function name
    pub nonlin_type: String,

    /// Gradient optimizer: "adam" | "sgd"
    pub optimizer: Optimizer,

    /// Optimizer-specific parameters (stepsize, beta1, momentum, etc.)
    pub optimizer_args: HashMap<String, serde_json::Value>,
}

/// Run-level hyperparameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Environment id, resolved against the registry
    pub env_id: String,

    /// Sampled candidates per generation
    pub population_size: i64,

    /// Environment steps per generation
    pub timesteps_per_gen: i64,

    /// Worker processes evaluating candidates
    pub num_workers: i64,

    /// Step size applied to the evolution gradient
    pub learning_rate: f64,

    /// Standard deviation of the parameter perturbations
    pub noise_stdev: f64,

    /// Generations between model snapshots (0 disables snapshots)
    pub snapshot_freq: i64,

    /// Return shaping mode
    pub return_proc_mode: ReturnProcMode,

    /// Probability of recording an observation into the running statistics
    pub calc_obstat_prob: f64,

    /// L2 regularization coefficient
    pub l2coeff: f64,

    /// Probability of running an evaluation episode
    pub eval_prob: f64,
}

/// Complete, structured configuration of one training run
///
/// Built as a unit by the record builder and never partially valid
/// outside of it. The `config` field carries the section of the same name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainSpec {
    /// Optimization switches
    pub optimizations: Optimizations,

    /// Policy network structure
    pub model_structure: ModelStructure,

    /// Run-level hyperparameters
    pub config: RunConfig,
}
