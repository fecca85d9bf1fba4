//! # Configuration
//!
//! Configuration is read from an optional YAML file. Every key has a
//! default, so an empty file (or no file) behaves like:
//!
//! ```yaml
//! logger:
//!   enable: true
//!   level: info
//!   format: compact
//! ontology:
//!   base_iri: https://test.org/
//!   iterations: 15
//!   seed: ~
//! ```
//!
//! Command line flags take precedence over values read from the file.
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{logger, Error, Result};

/// Number of population rounds run by default.
pub const DEFAULT_ITERATIONS: usize = 15;
/// Namespace prefix the ontology name is appended to.
pub const DEFAULT_BASE_IRI: &str = "https://test.org/";

/// Main application configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub logger: Logger,
    pub ontology: OntologySettings,
}

/// Logger configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Logger {
    /// Enable log write to stderr
    pub enable: bool,

    /// Set the logger level.
    ///
    /// * options: `trace` | `debug` | `info` | `warn` | `error` | `off`
    pub level: logger::LogLevel,

    /// Set the logger format.
    ///
    /// * options: `compact` | `pretty` | `json`
    pub format: logger::Format,

    /// Override our custom tracing filter.
    ///
    /// Set this to your own filter if you want to see traces from internal
    /// libraries. See more [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html#directives)
    pub override_filter: Option<String>,
}

impl Default for Logger {
    fn default() -> Self {
        Self {
            enable: true,
            level: logger::LogLevel::default(),
            format: logger::Format::default(),
            override_filter: None,
        }
    }
}

/// Settings driving ontology population.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct OntologySettings {
    /// Prefix of the ontology IRI; the ontology name is appended verbatim.
    pub base_iri: String,
    /// Number of population rounds.
    pub iterations: usize,
    /// Seed for label generation. Unset means a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for OntologySettings {
    fn default() -> Self {
        Self {
            base_iri: DEFAULT_BASE_IRI.to_string(),
            iterations: DEFAULT_ITERATIONS,
            seed: None,
        }
    }
}

impl Config {
    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content).map_err(|source| Error::ConfigFile {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Parses a configuration document. Blank documents yield the defaults.
    ///
    /// # Errors
    ///
    /// Returns the YAML error when the document does not match the schema.
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_yaml("").expect("defaults");
        assert_eq!(config, Config::default());
        assert_eq!(config.ontology.iterations, DEFAULT_ITERATIONS);
        assert_eq!(config.ontology.base_iri, DEFAULT_BASE_IRI);
        assert!(config.logger.enable);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = Config::from_yaml(
            r"
ontology:
  seed: 42
logger:
  level: debug
  format: json
",
        )
        .expect("config");
        assert_eq!(config.ontology.seed, Some(42));
        assert_eq!(config.ontology.iterations, DEFAULT_ITERATIONS);
        assert_eq!(config.logger.level, logger::LogLevel::Debug);
        assert_eq!(config.logger.format, logger::Format::Json);
    }

    #[test]
    fn bundled_development_config_parses() {
        let config = Config::from_yaml(include_str!("../config/development.yaml")).expect("config");
        assert_eq!(config.logger.level, logger::LogLevel::Debug);
        assert_eq!(config.ontology.seed, Some(1234));
        assert_eq!(config.ontology.iterations, DEFAULT_ITERATIONS);
    }

    #[test]
    fn unknown_level_is_rejected() {
        assert!(Config::from_yaml("logger:\n  level: loud\n").is_err());
    }
}
