//! Record builder: raw configuration documents into typed records
//!
//! Parsing and structural checks live here; value constraints belong to
//! the validator. The builder only ever reads files, never writes.

use crate::config::error::ConfigError;
use crate::config::schema::TrainSpec;
use crate::error::Result;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Section names, in the order they are checked
const SECTION_OPTIMIZATIONS: &str = "optimizations";
const SECTION_MODEL_STRUCTURE: &str = "model_structure";
const SECTION_CONFIG: &str = "config";

/// Where a configuration document comes from
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// A document on disk, JSON by default, YAML by `.yaml`/`.yml` extension
    File(PathBuf),
    /// An already-parsed document held in memory
    Inline(Value),
}

impl From<PathBuf> for ConfigSource {
    fn from(path: PathBuf) -> Self {
        ConfigSource::File(path)
    }
}

impl From<&Path> for ConfigSource {
    fn from(path: &Path) -> Self {
        ConfigSource::File(path.to_path_buf())
    }
}

impl From<Value> for ConfigSource {
    fn from(document: Value) -> Self {
        ConfigSource::Inline(document)
    }
}

/// Build the three typed records from a configuration document
///
/// Steps:
/// 1. Read and parse the document (file sources only)
/// 2. Require a top-level mapping
/// 3. Extract the `optimizations`, `model_structure`, and `config` sections
///    in that order, constructing each into its record
///
/// Extra top-level keys are ignored; unknown keys inside a section are not.
pub fn build_spec(source: impl Into<ConfigSource>) -> Result<TrainSpec> {
    let document = match source.into() {
        ConfigSource::File(path) => read_document(&path)?,
        ConfigSource::Inline(document) => document,
    };

    let Some(sections) = document.as_object() else {
        return Err(ConfigError::UnsupportedInputKind(value_kind(&document).to_string()).into());
    };

    let optimizations = build_section(sections, SECTION_OPTIMIZATIONS, "Optimizations")?;
    let model_structure = build_section(sections, SECTION_MODEL_STRUCTURE, "ModelStructure")?;
    let config = build_section(sections, SECTION_CONFIG, "RunConfig")?;

    Ok(TrainSpec {
        optimizations,
        model_structure,
        config,
    })
}

/// Read a document from disk and parse it by extension
fn read_document(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)?;

    let malformed = |reason: String| ConfigError::MalformedDocument {
        path: path.display().to_string(),
        reason,
    };

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let document: Value = match extension {
        "yaml" | "yml" => serde_yaml::from_str(&text).map_err(|e| malformed(e.to_string()))?,
        _ => serde_json::from_str(&text).map_err(|e| malformed(e.to_string()))?,
    };

    Ok(document)
}

/// Extract one named section and construct its record
fn build_section<T: serde::de::DeserializeOwned>(
    sections: &Map<String, Value>,
    section: &'static str,
    record: &'static str,
) -> std::result::Result<T, ConfigError> {
    let value = sections
        .get(section)
        .ok_or(ConfigError::MissingSection(section))?;

    serde_json::from_value(value.clone()).map_err(|e| ConfigError::SchemaMismatch {
        record,
        section,
        reason: e.to_string(),
    })
}

/// Human-readable name of a document's top-level kind
fn value_kind(document: &Value) -> &'static str {
    match document {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}
