//! Training-run folders
//!
//! A run folder holds one configuration document plus the artifacts a run
//! leaves behind: parameter snapshots, a progress log, evaluation returns,
//! and sometimes a rollout video. Indexing locates them and validates the
//! configuration in one pass.

use crate::config::{load_config, TrainSpec};
use crate::env::EnvRegistry;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file names probed inside a run folder, in order
const CONFIG_FILE_NAMES: &[&str] = &["config.json", "config.yaml", "config.yml"];

/// Errors from indexing a run folder
#[derive(Debug, Error)]
pub enum RunError {
    /// The given path is not a directory
    #[error("Not a training-run directory: {0}")]
    NotADirectory(String),

    /// The directory holds no configuration document
    #[error("No configuration document found in {0}")]
    ConfigNotFound(String),
}

/// An indexed run folder with its validated configuration
#[derive(Debug, Clone)]
pub struct TrainingRun {
    /// The run folder itself
    pub dir: PathBuf,
    /// The validated configuration
    pub spec: TrainSpec,
    /// The document the configuration was read from
    pub config_path: PathBuf,
    /// Parameter snapshots, sorted by file name
    pub snapshots: Vec<PathBuf>,
    /// Progress log, if the run wrote one
    pub log: Option<PathBuf>,
    /// Evaluation returns, if the run wrote them
    pub evaluation: Option<PathBuf>,
    /// Rollout video, if the run recorded one
    pub video: Option<PathBuf>,
}

/// Locate the configuration document inside `dir`
///
/// Probes `config.json`, then `config.yaml`, then `config.yml`.
#[must_use]
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    for name in CONFIG_FILE_NAMES {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

/// Index a run folder, validating its configuration
///
/// # Errors
///
/// Fails when the path is not a directory, no configuration document is
/// found, or the document does not build and validate.
pub fn index_training_run(dir: impl AsRef<Path>, registry: &dyn EnvRegistry) -> Result<TrainingRun> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(RunError::NotADirectory(dir.display().to_string()).into());
    }

    let config_path = find_config_file(dir)
        .ok_or_else(|| RunError::ConfigNotFound(dir.display().to_string()))?;

    let spec = load_config(config_path.as_path(), registry)?;

    let mut snapshots = Vec::new();
    let mut video = None;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        match path.extension().and_then(|e| e.to_str()) {
            Some("safetensors") => snapshots.push(path),
            Some("mp4") => video = Some(path),
            _ => {}
        }
    }
    snapshots.sort();

    Ok(TrainingRun {
        dir: dir.to_path_buf(),
        spec,
        config_path,
        snapshots,
        log: existing(dir.join("log.csv")),
        evaluation: existing(dir.join("evaluation.csv")),
        video,
    })
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}
