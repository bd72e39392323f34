//! Info command implementation

use crate::cli::logging::log;
use crate::cli::{InfoArgs, LogLevel, OutputFormat};
use crate::config::load_config;

pub fn run_info(args: &InfoArgs, level: LogLevel) -> Result<(), String> {
    let registry = super::build_registry(&args.extra_env);
    let spec = load_config(args.config.as_path(), &registry).map_err(|e| e.to_string())?;

    match args.format {
        OutputFormat::Text => {
            log(level, LogLevel::Normal, "Configuration Info:");
            println!();
            println!("Environment: {}", spec.config.env_id);
            println!(
                "Population: {} across {} workers",
                spec.config.population_size, spec.config.num_workers
            );
            let dims: Vec<String> = spec
                .model_structure
                .hidden_dims
                .iter()
                .map(ToString::to_string)
                .collect();
            println!(
                "Policy: [{}] ({})",
                dims.join(", "),
                spec.model_structure.nonlin_type
            );
            println!(
                "Optimizer: {} (lr={})",
                spec.model_structure.optimizer.as_str(),
                spec.config.learning_rate
            );
            println!("Noise stdev: {}", spec.config.noise_stdev);

            if spec.optimizations.gradient_optimizer {
                println!("Gradient optimizer: enabled");
            }
            if spec.optimizations.observation_normalization {
                println!("Observation normalization: enabled");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&spec)
                .map_err(|e| format!("JSON serialization error: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&spec)
                .map_err(|e| format!("YAML serialization error: {e}"))?;
            println!("{yaml}");
        }
    }

    Ok(())
}
