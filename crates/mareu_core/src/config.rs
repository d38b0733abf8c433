//! File-backed configuration.
//!
//! # Responsibility
//! - Load startup settings (logging, sample data, place catalog) from JSON.
//! - Reject settings that would fail later at bootstrap.
//!
//! # Invariants
//! - Every field has a default; an empty `{}` file is a valid config.
//! - Unknown keys are rejected so typos do not silently fall back.

use crate::logging::{default_log_level, normalize_level};
use crate::model::place::Place;
use crate::repo::catalog::{place_catalog, DEFAULT_PLACE_NAMES};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Startup configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute directory for rolling log files; stderr when absent.
    pub log_dir: Option<PathBuf>,
    /// Seed the store with sample meetings at startup.
    pub seed_sample_meetings: bool,
    /// Place catalog offered by the registration dialog.
    pub places: Vec<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            seed_sample_meetings: true,
            places: DEFAULT_PLACE_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }
}

/// Configuration load/validation error.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Invalid(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::Invalid(message) => write!(f, "invalid config: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl CoreConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(&self.log_level).map_err(|err| ConfigError::Invalid(err.to_string()))?;
        if let Some(dir) = &self.log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::Invalid(format!(
                    "log_dir must be an absolute path, got `{}`",
                    dir.display()
                )));
            }
        }
        self.place_catalog()?;
        Ok(())
    }

    /// Builds the sorted, de-duplicated place catalog.
    pub fn place_catalog(&self) -> Result<Vec<Place>, ConfigError> {
        place_catalog(&self.places)
            .map_err(|err| ConfigError::Invalid(format!("places: {err}")))
    }
}

/// Reads and validates a config file.
pub fn load_config(path: impl AsRef<Path>) -> Result<CoreConfig, ConfigError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    CoreConfig::from_json_str(&json)
}

#[cfg(test)]
mod tests {
    use super::{load_config, ConfigError, CoreConfig};
    use std::io::Write;

    #[test]
    fn empty_object_uses_defaults() {
        let config = CoreConfig::from_json_str("{}").unwrap();
        assert_eq!(config, CoreConfig::default());
        assert_eq!(config.place_catalog().unwrap().len(), 10);
    }

    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        assert!(matches!(
            CoreConfig::from_json_str(r#"{"log_levle": "info"}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            CoreConfig::from_json_str(r#"{"log_level": "loud"}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            CoreConfig::from_json_str(r#"{"log_dir": "relative/logs"}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            CoreConfig::from_json_str(r#"{"places": ["Mars", " "]}"#),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn load_config_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"log_level": "warn", "seed_sample_meetings": false, "places": ["Mars", "Venus"]}}"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.log_level, "warn");
        assert!(!config.seed_sample_meetings);
        let names: Vec<_> = config
            .place_catalog()
            .unwrap()
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(names, vec!["Mars", "Venus"]);
    }

    #[test]
    fn load_config_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
