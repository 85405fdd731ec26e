//! Run configuration.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

use daa_core::prelude::{GenericError, Telemetry, TspStrategy};
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::str::FromStr;
use std::sync::Arc;

/// A run configuration. Every value is optional, command line arguments take precedence.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies TSP solver configuration.
    pub tsp: Option<TspConfig>,
    /// Specifies shortest path configuration.
    pub shortest_path: Option<ShortestPathConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
    /// Specifies output configuration.
    pub output: Option<OutputConfig>,
}

/// A TSP solver configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TspConfig {
    /// A search strategy: `descent`, `exhaustive` or `brute-force`.
    pub strategy: Option<TspStrategy>,
}

/// A shortest path configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ShortestPathConfig {
    /// A name of the source vertex. Default is the first vertex.
    pub source: Option<String>,
}

/// A telemetry configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TelemetryConfig {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled.
    pub enabled: bool,
}

/// An output configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// An output format.
    pub format: Option<OutputFormat>,
}

/// Specifies how results are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The plain text format of every problem.
    #[default]
    Text,
    /// Pretty printed JSON.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown output format: '{value}'")),
        }
    }
}

impl Config {
    /// Returns TSP strategy if specified.
    pub fn tsp_strategy(&self) -> Option<TspStrategy> {
        self.tsp.as_ref().and_then(|tsp| tsp.strategy)
    }

    /// Returns the source vertex name of the shortest path problem if specified.
    pub fn shortest_path_source(&self) -> Option<&str> {
        self.shortest_path.as_ref().and_then(|config| config.source.as_deref())
    }

    /// Returns true if logging is enabled.
    pub fn is_logging_enabled(&self) -> bool {
        self.telemetry.as_ref().and_then(|telemetry| telemetry.logging.as_ref()).is_some_and(|logging| logging.enabled)
    }

    /// Returns output format if specified.
    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|output| output.format)
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, GenericError> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates a telemetry which writes messages to stderr when enabled. Standard output is kept for
/// results only.
pub fn create_telemetry(is_enabled: bool) -> Telemetry {
    if is_enabled { Telemetry::with_logger(Arc::new(|msg: &str| eprintln!("{msg}"))) } else { Telemetry::default() }
}
