//! Disaster environment simulation: event generation, running statistics,
//! and the monitoring driver that feeds an event log.
//!
//! The environment is an explicitly constructed value owned by whoever
//! drives it. There is no process-wide instance.

pub mod catalog;
pub mod config;
pub mod environment;
pub mod factory;
pub mod monitor;

pub use catalog::{generate_event_id, LOCATIONS};
pub use config::{
    default_config_toml, ConfigError, DemoConfig, EnvironmentConfig, LogConfig, MonitorConfig,
    MonitorSettings, DEFAULT_CONFIG_PATH, MIN_INTERVAL,
};
pub use environment::{Environment, EnvironmentAnalysis, ANALYSIS_RECENT_LIMIT};
pub use factory::{EventFactory, SimRng};
pub use monitor::{CycleReport, MonitorLoop};
