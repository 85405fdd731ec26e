//! A module which provides simple logging of engine progress.

#[cfg(test)]
#[path = "../../tests/unit/utils/telemetry_test.rs"]
mod telemetry_test;

use crate::utils::Timer;
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the engines.
pub type InfoLogger = Arc<dyn Fn(&str)>;

/// Specifies a telemetry mode.
#[derive(Clone, Default)]
pub enum TelemetryMode {
    /// No telemetry at all.
    #[default]
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
    },
}

/// Provides way to write information about engine progress into the log.
#[derive(Clone)]
pub struct Telemetry {
    mode: TelemetryMode,
    timer: Timer,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self::new(TelemetryMode::None)
    }
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { mode, timer: Timer::start() }
    }

    /// Creates a telemetry which only logs using given logger.
    pub fn with_logger(logger: InfoLogger) -> Self {
        Self::new(TelemetryMode::OnlyLogging { logger })
    }

    /// Writes message produced by `message_fn` prefixed with elapsed time. The closure is not
    /// evaluated when logging is disabled.
    pub fn log<F: FnOnce() -> String>(&self, message_fn: F) {
        if let TelemetryMode::OnlyLogging { logger } = &self.mode {
            (logger)(format!("[{}ms] {}", self.timer.elapsed_millis(), message_fn()).as_str());
        }
    }
}
