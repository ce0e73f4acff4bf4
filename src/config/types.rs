use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings applied to every store created from this config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backlog of queued, not yet reduced actions at which a store logs a
    /// warning (default: 64). Actions past it are still queued.
    #[serde(default = "default_backlog_warning")]
    pub backlog_warning: usize,
}

/// Settings for the production counter service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Artificial delay added to every service call in milliseconds (default: 0).
    #[serde(default)]
    pub latency_ms: u64,
}

/// Logging output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Log file path. Logs go to stderr when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_backlog_warning() -> usize {
    64
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backlog_warning: default_backlog_warning(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}
