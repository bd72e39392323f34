//! Inspect command implementation

use crate::cli::logging::log;
use crate::cli::{InspectArgs, LogLevel};
use crate::runs::{index_training_run, TrainingRun};
use std::path::Path;

/// Log the validated configuration behind the run
fn log_config_info(run: &TrainingRun, level: LogLevel) {
    log(
        level,
        LogLevel::Normal,
        &format!("  Config: {}", run.config_path.display()),
    );
    log(
        level,
        LogLevel::Normal,
        &format!("  Environment: {}", run.spec.config.env_id),
    );
    log(
        level,
        LogLevel::Normal,
        &format!("  Population size: {}", run.spec.config.population_size),
    );
}

/// Log snapshot counts, with names at verbose level
fn log_snapshot_info(run: &TrainingRun, level: LogLevel) {
    log(
        level,
        LogLevel::Normal,
        &format!("  Snapshots: {}", run.snapshots.len()),
    );

    if level != LogLevel::Verbose {
        return;
    }

    let names: Vec<&str> = run
        .snapshots
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
        .collect();
    for name in &names[..names.len().min(20)] {
        log(level, LogLevel::Verbose, &format!("    {name}"));
    }
    if names.len() > 20 {
        log(
            level,
            LogLevel::Verbose,
            &format!("    ... and {} more snapshots", names.len() - 20),
        );
    }
}

/// Log which optional artifacts the run left behind
fn log_artifact_info(run: &TrainingRun, level: LogLevel) {
    log(
        level,
        LogLevel::Normal,
        &format!("  Progress log: {}", presence(run.log.as_deref())),
    );
    log(
        level,
        LogLevel::Normal,
        &format!("  Evaluation returns: {}", presence(run.evaluation.as_deref())),
    );
    log(
        level,
        LogLevel::Normal,
        &format!("  Rollout video: {}", presence(run.video.as_deref())),
    );
}

fn presence(path: Option<&Path>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "none".to_string(),
    }
}

pub fn run_inspect(args: &InspectArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Inspecting run: {}", args.run_dir.display()),
    );

    let registry = super::build_registry(&args.extra_env);
    let run = index_training_run(&args.run_dir, &registry).map_err(|e| e.to_string())?;

    log_config_info(&run, level);
    log_snapshot_info(&run, level);
    log_artifact_info(&run, level);

    Ok(())
}
