//! Event log: records disaster event snapshots, persists them, and derives
//! distribution reports.
//!
//! The log is a decoupled consumer. It never sees the environment that
//! produced its events, only [`EventRecord`] snapshots handed to it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   DisasterEvent    ┌───────────┐   event_logs.json
//! │ disaster-sim │ ────────────────▶  │ event-log │ ──────────────────▶
//! └──────────────┘                    └───────────┘
//! ```
//!
//! # Modules
//!
//! - [`recorder`]: the [`EventLog`] recorder and its persistence
//! - [`report`]: distribution reports over recorded events
//! - [`error`]: error types

pub mod error;
pub mod recorder;
pub mod report;

pub use error::LogError;
pub use recorder::{EventLog, DEFAULT_LOG_FILE};
pub use report::build_report;

pub use disaster_events::{EventRecord, EventReport, LogReport};
