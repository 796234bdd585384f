//! Configuration System
//!
//! Monitor settings are loaded from a TOML file. Every section is optional
//! and falls back to its defaults.

use event_log::DEFAULT_LOG_FILE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "monitor.toml";

/// Shortest pause allowed between perception cycles
pub const MIN_INTERVAL: Duration = Duration::from_secs(1);

/// Errors that can occur during configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Complete monitor configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitorConfig {
    #[serde(default)]
    pub environment: EnvironmentConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub monitor: MonitorSettings,
    #[serde(default)]
    pub demo: DemoConfig,
}

impl MonitorConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Renders the configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Event generation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Seed for reproducible generation; unseeded when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Event log persistence settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// File the event log is written to
    pub destination: PathBuf,
    /// Rewrite the log file after every monitoring cycle
    pub persist_every_cycle: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            destination: PathBuf::from(DEFAULT_LOG_FILE),
            persist_every_cycle: true,
        }
    }
}

/// Monitoring loop cadence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorSettings {
    /// Pause between perception cycles
    pub interval_secs: u64,
    /// How long the monitor runs before stopping
    pub duration_secs: u64,
    /// Recent events shown with each status update
    pub recent_limit: usize,
}

impl MonitorSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs).max(MIN_INTERVAL)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            interval_secs: 2,
            duration_secs: 30,
            recent_limit: 3,
        }
    }
}

/// One-shot demonstration settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Number of events to generate
    pub events: usize,
    /// File the demo log is written to
    pub destination: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            events: 5,
            destination: PathBuf::from("lab2_event_logs.json"),
        }
    }
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Disaster Monitor Configuration

[environment]
# Uncomment for reproducible event generation
# seed = 42

[log]
destination = "event_logs.json"
persist_every_cycle = true

[monitor]
interval_secs = 2
duration_secs = 30
recent_limit = 3

[demo]
events = 5
destination = "lab2_event_logs.json"
"#
    .to_string()
}
