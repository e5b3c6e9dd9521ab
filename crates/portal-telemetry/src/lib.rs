//! # Portal Telemetry
//!
//! Structured logging for the portal services: an env-filtered `tracing`
//! subscriber with an optional JSON output layer for log shippers.

#![warn(missing_docs)]
#![warn(clippy::all)]

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Configuration for logging.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name, logged at startup.
    pub service_name: String,
    /// Default log level when `RUST_LOG` is unset.
    pub log_level: String,
    /// Emit JSON-formatted log lines.
    pub json_logs: bool,
}

impl TelemetryConfig {
    /// Creates a configuration with the default `info` level.
    #[must_use]
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            log_level: "info".to_string(),
            json_logs: false,
        }
    }

    /// Sets the default log level.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enables JSON logging.
    #[must_use]
    pub fn with_json_logs(mut self) -> Self {
        self.json_logs = true;
        self
    }
}

/// Initializes the global subscriber based on configuration.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &TelemetryConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .init();
    }

    tracing::info!(
        service = %config.service_name,
        level = %config.log_level,
        json = config.json_logs,
        "Logging initialized"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = TelemetryConfig::new("portal")
            .with_log_level("debug")
            .with_json_logs();

        assert_eq!(config.service_name, "portal");
        assert_eq!(config.log_level, "debug");
        assert!(config.json_logs);
    }
}
