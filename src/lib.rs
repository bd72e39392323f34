//! Evolucionar: configuration validation for evolution-strategies training
//!
//! A training run is described by one JSON or YAML document with three
//! sections: `optimizations` (boolean switches), `model_structure` (the
//! policy network), and `config` (the run itself). This crate builds such
//! documents into typed records, validates their values against a registry
//! of known environments, and indexes the folders finished runs leave
//! behind.
//!
//! # Quick Start
//!
//! ```
//! use evolucionar::{load_config, EnvCatalog};
//!
//! let document = serde_json::json!({
//!     "optimizations": {
//!         "mirrored_sampling": true,
//!         "fitness_shaping": true,
//!         "weight_decay": false,
//!         "discretize_actions": false,
//!         "gradient_optimizer": false,
//!         "observation_normalization": false,
//!         "divide_by_stdev": false
//!     },
//!     "model_structure": {
//!         "ac_noise_std": 0.01,
//!         "ac_bins": 10,
//!         "hidden_dims": [64, 64],
//!         "nonlin_type": "tanh",
//!         "optimizer": "adam",
//!         "optimizer_args": {}
//!     },
//!     "config": {
//!         "env_id": "CartPole-v1",
//!         "population_size": 100,
//!         "timesteps_per_gen": 10000,
//!         "num_workers": 4,
//!         "learning_rate": 0.01,
//!         "noise_stdev": 0.02,
//!         "snapshot_freq": 5,
//!         "return_proc_mode": "centered_rank",
//!         "calc_obstat_prob": 0.01,
//!         "l2coeff": 0.005,
//!         "eval_prob": 0.003
//!     }
//! });
//!
//! let registry = EnvCatalog::builtin();
//! let spec = load_config(document, &registry)?;
//! assert_eq!(spec.config.env_id, "CartPole-v1");
//! # Ok::<(), evolucionar::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod env;
pub mod error;
pub mod runs;

pub use config::{
    build_spec, load_config, validate_spec, ConfigError, ConfigSource, TrainSpec,
};
pub use env::{EnvCatalog, EnvRegistry};
pub use error::{Error, Result};
pub use runs::{find_config_file, index_training_run, RunError, TrainingRun};
