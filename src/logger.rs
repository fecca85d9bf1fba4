//! # Logger
//!
//! Installs a `tracing-subscriber` fmt layer writing to stderr. The level
//! comes from configuration and is overridden by `RUST_LOG` when present.
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing_subscriber::{
    fmt::MakeWriter, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::{config, Result};

// Crates whose events are shown at the configured level.
const MODULE_WHITELIST: &[&str] = &["menu_ontology", "menu_onto"];

#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub enum LogLevel {
    /// The "off" level.
    #[serde(rename = "off")]
    Off,
    /// The "trace" level.
    #[serde(rename = "trace")]
    Trace,
    /// The "debug" level.
    #[serde(rename = "debug")]
    Debug,
    /// The "info" level.
    #[serde(rename = "info")]
    #[default]
    Info,
    /// The "warn" level.
    #[serde(rename = "warn")]
    Warn,
    /// The "error" level.
    #[serde(rename = "error")]
    Error,
}

#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub enum Format {
    #[serde(rename = "compact")]
    #[default]
    Compact,
    #[serde(rename = "pretty")]
    Pretty,
    #[serde(rename = "json")]
    Json,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Off => "off",
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        })
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown log level `{other}`")),
        }
    }
}

/// Builds the filter directives for `config`.
///
/// `RUST_LOG` wins over everything, then `override_filter`, then the
/// configured level applied to this crate only.
#[must_use]
pub fn filter_directives(config: &config::Logger) -> String {
    directives(config, std::env::var("RUST_LOG").ok())
}

fn directives(config: &config::Logger, from_env: Option<String>) -> String {
    if let Some(from_env) = from_env {
        return from_env;
    }
    if let Some(filter) = &config.override_filter {
        return filter.clone();
    }
    MODULE_WHITELIST
        .iter()
        .map(|module| format!("{module}={}", config.level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the global tracing subscriber.
///
/// Does nothing when logging is disabled.
///
/// # Errors
///
/// Fails when a global subscriber is already installed.
pub fn init(config: &config::Logger) -> Result<()> {
    if !config.enable {
        return Ok(());
    }

    let layer = init_layer(std::io::stderr, &config.format);
    tracing_subscriber::registry()
        .with(layer)
        .with(EnvFilter::new(filter_directives(config)))
        .try_init()?;
    Ok(())
}

fn init_layer<W2>(make_writer: W2, format: &Format) -> Box<dyn Layer<Registry> + Sync + Send>
where
    W2: for<'writer> MakeWriter<'writer> + Sync + Send + 'static,
{
    match format {
        Format::Compact => tracing_subscriber::fmt::Layer::default()
            .with_writer(make_writer)
            .compact()
            .boxed(),
        Format::Pretty => tracing_subscriber::fmt::Layer::default()
            .with_writer(make_writer)
            .pretty()
            .boxed(),
        Format::Json => tracing_subscriber::fmt::Layer::default()
            .with_writer(make_writer)
            .json()
            .boxed(),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("info", LogLevel::Info)]
    #[case("DEBUG", LogLevel::Debug)]
    #[case("off", LogLevel::Off)]
    fn parses_levels(#[case] text: &str, #[case] expected: LogLevel) {
        assert_eq!(text.parse::<LogLevel>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_level() {
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn override_filter_is_used_verbatim() {
        let config = config::Logger {
            override_filter: Some("trace".to_string()),
            ..config::Logger::default()
        };
        assert_eq!(directives(&config, None), "trace");
    }

    #[test]
    fn level_applies_to_own_crates() {
        let config = config::Logger {
            level: LogLevel::Debug,
            ..config::Logger::default()
        };
        assert_eq!(
            directives(&config, None),
            "menu_ontology=debug,menu_onto=debug"
        );
    }

    #[test]
    fn rust_log_wins_over_config() {
        let config = config::Logger {
            level: LogLevel::Debug,
            override_filter: Some("trace".to_string()),
            ..config::Logger::default()
        };
        assert_eq!(
            directives(&config, Some("oxrdfxml=warn".to_string())),
            "oxrdfxml=warn"
        );
    }

    #[test]
    fn disabled_logger_installs_nothing() {
        let config = config::Logger {
            enable: false,
            ..config::Logger::default()
        };
        assert!(init(&config).is_ok());
        assert!(init(&config).is_ok());
        assert!(!tracing::dispatcher::has_been_set());
    }
}
