//! Shared disaster event types and serialization for the monitoring workspace.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for all other crates in the workspace.

pub mod event;
pub mod record;
pub mod report;
pub mod timestamp;

#[cfg(feature = "test-fixtures")]
pub mod fixtures;

// Re-export event types
pub use event::{
    DisasterEvent, DisasterType, EventError, SeverityLevel, AFFECTED_POPULATION_RANGE,
    DAMAGE_PERCENT_RANGE,
};

// Re-export the serialized record form
pub use record::EventRecord;

// Re-export summary and report types
pub use report::{
    EnvironmentStatus, EnvironmentSummary, EventReport, LogReport, NO_EVENTS_LOGGED,
    UNSTABLE_SEVERITY_THRESHOLD,
};

// Re-export timestamp helpers
pub use timestamp::{format_timestamp, parse_timestamp};
