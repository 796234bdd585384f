//! Summary and Report Types
//!
//! Derived, disposable values computed on demand from an environment's
//! history or an event log's contents. Nothing here is cached.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

use crate::event::DisasterType;

/// Message carried by an empty-log report.
pub const NO_EVENTS_LOGGED: &str = "No events logged";

/// Mean severity above which the environment is considered unstable.
pub const UNSTABLE_SEVERITY_THRESHOLD: f64 = 3.0;

/// Overall state of the monitored environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvironmentStatus {
    Monitoring,
    Unstable,
}

impl EnvironmentStatus {
    /// Derives the status from a mean severity.
    pub fn from_average_severity(average: f64) -> Self {
        if average > UNSTABLE_SEVERITY_THRESHOLD {
            EnvironmentStatus::Unstable
        } else {
            EnvironmentStatus::Monitoring
        }
    }
}

impl fmt::Display for EnvironmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvironmentStatus::Monitoring => write!(f, "Monitoring"),
            EnvironmentStatus::Unstable => write!(f, "Unstable"),
        }
    }
}

/// Aggregate statistics over an environment's event history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentSummary {
    pub total_events: usize,
    /// Mean severity rounded to two decimals, 0 when there are no events
    pub average_severity: f64,
    pub total_affected_population: u64,
    /// Events with severity 5
    pub critical_events: usize,
    pub environmental_status: EnvironmentStatus,
}

impl EnvironmentSummary {
    /// Summary of an environment with no history.
    pub fn empty() -> Self {
        Self {
            total_events: 0,
            average_severity: 0.0,
            total_affected_population: 0,
            critical_events: 0,
            environmental_status: EnvironmentStatus::Monitoring,
        }
    }
}

/// Distribution report over the records held by an event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventReport {
    pub total_events: usize,
    /// Severity value -> occurrence count
    pub severity_distribution: BTreeMap<u8, usize>,
    /// Disaster type -> occurrence count
    pub disaster_distribution: BTreeMap<DisasterType, usize>,
    /// Persistence destination of the log the report was drawn from
    pub log_file: String,
    /// ISO-8601 instant of report generation
    pub report_generated: String,
}

/// Result of asking an event log for a report.
///
/// An empty log is a distinguished value rather than an error, and
/// serializes to exactly `{"error": "No events logged"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogReport {
    NoEvents,
    Ready(EventReport),
}

impl LogReport {
    pub fn is_empty(&self) -> bool {
        matches!(self, LogReport::NoEvents)
    }

    /// Returns the report, if any events were logged.
    pub fn report(&self) -> Option<&EventReport> {
        match self {
            LogReport::NoEvents => None,
            LogReport::Ready(report) => Some(report),
        }
    }

    pub fn into_report(self) -> Option<EventReport> {
        match self {
            LogReport::NoEvents => None,
            LogReport::Ready(report) => Some(report),
        }
    }
}

impl Serialize for LogReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LogReport::NoEvents => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", NO_EVENTS_LOGGED)?;
                map.end()
            }
            LogReport::Ready(report) => report.serialize(serializer),
        }
    }
}
