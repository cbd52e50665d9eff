//! TOML configuration and form preset files.
//!
//! ```toml
//! [logging]
//! level = "debug"
//! file = "compare.log"
//!
//! [defaults.investment]
//! initial_amount = "250000"
//! annual_return_rate = "0.08"
//! ```
//!
//! Every section and key is optional. `[defaults]` replaces the fallback values
//! used for blank form fields; its rates are fractions, unlike the form.

use std::{
    collections::BTreeMap,
    fmt, fs,
    path::{Path, PathBuf},
};

use scenario_core::ScenarioInputs;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::{FieldKeyError, FormField, ScenarioForm};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown input '{key}': {source}")]
    UnknownField {
        key: String,
        #[source]
        source: FieldKeyError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// EnvFilter directive, e.g. `info` or `scenario_ui=debug`.
    pub level: String,
    pub file: Option<PathBuf>,

    /// Ignored while the terminal UI is running.
    pub stdout: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            stdout: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub defaults: ScenarioInputs,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = read(path)?;
        let config = Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// A preset cell: text as typed, or a bare TOML number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PresetValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for PresetValue {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
        }
    }
}

type PresetTable = BTreeMap<String, BTreeMap<String, PresetValue>>;

/// Applies a preset of `[scenario] field = value` entries to `form`.
///
/// Values are form text: percentages as `10`, not `0.10`.
pub fn apply_preset_str(
    form: &ScenarioForm,
    contents: &str,
) -> Result<ScenarioForm, toml::de::Error> {
    let table: PresetTable = toml::from_str(contents)?;
    Ok(table
        .into_iter()
        .flat_map(|(scenario, fields)| {
            fields
                .into_iter()
                .map(move |(field, value)| (format!("{scenario}.{field}"), value.to_string()))
        })
        .fold(form.clone(), |form, (key, value)| match key.parse::<FormField>() {
            Ok(field) => form.update_field(field, value),
            Err(err) => {
                tracing::warn!(%key, "skipping preset entry: {err}");
                form
            }
        }))
}

pub fn load_preset(
    form: &ScenarioForm,
    path: &Path,
) -> Result<ScenarioForm, ConfigError> {
    let contents = read(path)?;
    apply_preset_str(form, &contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Applies one `KEY=VALUE` assignment, as given to `--set`.
pub fn apply_assignment(
    form: &ScenarioForm,
    assignment: &str,
) -> Result<ScenarioForm, ConfigError> {
    let (key, value) = assignment.split_once('=').unwrap_or((assignment, ""));
    let field = key
        .trim()
        .parse::<FormField>()
        .map_err(|source| ConfigError::UnknownField {
            key: key.trim().to_string(),
            source,
        })?;
    Ok(form.update_field(field, value.trim()))
}
