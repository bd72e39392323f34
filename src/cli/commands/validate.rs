//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::{LogLevel, ValidateArgs};
use crate::config::{active_rule_flags, load_config, TrainSpec};

/// Format the enabled optimization switches as a string
pub fn format_flags_info(spec: &TrainSpec) -> String {
    let flags = &spec.optimizations;
    let enabled: Vec<&str> = [
        ("mirrored_sampling", flags.mirrored_sampling),
        ("fitness_shaping", flags.fitness_shaping),
        ("weight_decay", flags.weight_decay),
        ("discretize_actions", flags.discretize_actions),
        ("gradient_optimizer", flags.gradient_optimizer),
        ("observation_normalization", flags.observation_normalization),
        ("divide_by_stdev", flags.divide_by_stdev),
    ]
    .into_iter()
    .filter_map(|(name, on)| on.then_some(name))
    .collect();

    if enabled.is_empty() {
        "  Optimizations: none".to_string()
    } else {
        format!("  Optimizations: {}", enabled.join(", "))
    }
}

/// Format model structure as a string
pub fn format_model_info(spec: &TrainSpec) -> String {
    let model = &spec.model_structure;
    let dims: Vec<String> = model.hidden_dims.iter().map(ToString::to_string).collect();
    format!(
        "  Hidden dims: [{}]\n  Activation: {}\n  Optimizer: {}\n  Action noise std: {}\n  Action bins: {}",
        dims.join(", "),
        model.nonlin_type,
        model.optimizer.as_str(),
        model.ac_noise_std,
        model.ac_bins
    )
}

/// Format run configuration as a string
pub fn format_run_info(spec: &TrainSpec) -> String {
    let config = &spec.config;
    [
        format!("  Environment: {}", config.env_id),
        format!("  Population size: {}", config.population_size),
        format!("  Timesteps per generation: {}", config.timesteps_per_gen),
        format!("  Workers: {}", config.num_workers),
        format!("  Learning rate: {}", config.learning_rate),
        format!("  Noise stdev: {}", config.noise_stdev),
        format!("  Return processing: {}", config.return_proc_mode.as_str()),
    ]
    .join("\n")
}

/// Format the armed conditional checks, if any
pub fn format_active_checks(spec: &TrainSpec) -> Option<String> {
    let names = active_rule_flags(&spec.optimizations);
    if names.is_empty() {
        None
    } else {
        Some(format!("  Conditional checks: {}", names.join(", ")))
    }
}

/// Print detailed configuration summary
pub fn print_detailed_summary(spec: &TrainSpec) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_flags_info(spec));
    println!();
    println!("{}", format_model_info(spec));
    println!();
    println!("{}", format_run_info(spec));

    if let Some(checks) = format_active_checks(spec) {
        println!();
        println!("{checks}");
    }
}

pub fn run_validate(args: &ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let registry = super::build_registry(&args.extra_env);
    let spec = load_config(args.config.as_path(), &registry).map_err(|e| e.to_string())?;

    log(level, LogLevel::Normal, "Configuration is valid");

    if args.detailed {
        print_detailed_summary(&spec);
    }

    Ok(())
}
