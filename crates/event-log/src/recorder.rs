//! Event Recorder
//!
//! In-memory event log with whole-document JSON persistence.

use disaster_events::{DisasterEvent, EventRecord, LogReport};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LogError;
use crate::report::build_report;

/// Default persistence destination
pub const DEFAULT_LOG_FILE: &str = "event_logs.json";

/// Records event snapshots and writes them to a single JSON document.
///
/// Persistence is best-effort: [`EventLog::persist`] makes exactly one
/// attempt per call and never retries. Callers that care about durability
/// call it again on their own schedule.
#[derive(Debug, Clone)]
pub struct EventLog {
    destination: PathBuf,
    records: Vec<EventRecord>,
}

impl EventLog {
    /// Create an empty log that persists to `destination`
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        let destination = destination.into();
        tracing::info!("EventLog initialized with log file: {}", destination.display());
        Self {
            destination,
            records: Vec::new(),
        }
    }

    /// Load a previously persisted log, keeping the same destination
    pub fn load(destination: impl Into<PathBuf>) -> Result<Self, LogError> {
        let destination = destination.into();
        let content =
            fs::read_to_string(&destination).map_err(|e| LogError::io(&destination, e))?;

        let records: Vec<EventRecord> = serde_json::from_str(&content)
            .map_err(|e| LogError::MalformedEvent(e.to_string()))?;
        for record in &records {
            DisasterEvent::try_from(record)?;
        }

        tracing::info!(
            "Loaded {} events from {}",
            records.len(),
            destination.display()
        );
        Ok(Self {
            destination,
            records,
        })
    }

    /// Record a snapshot of one event
    pub fn record(&mut self, event: &DisasterEvent) {
        let record = EventRecord::from(event);
        tracing::info!("Event logged: {}", record.event_id);
        self.records.push(record);
    }

    /// Record an already-rendered event record.
    ///
    /// The record is validated first; on failure the log is left untouched.
    pub fn record_checked(&mut self, record: EventRecord) -> Result<&EventRecord, LogError> {
        DisasterEvent::try_from(&record)?;

        tracing::info!("Event logged: {}", record.event_id);
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Record an event supplied as a JSON object.
    ///
    /// Fails fast on input that is not a complete, in-range event record;
    /// the log is left untouched in that case.
    pub fn record_json(&mut self, json: &str) -> Result<&EventRecord, LogError> {
        let record = EventRecord::from_json(json)
            .map_err(|e| LogError::MalformedEvent(e.to_string()))?;
        self.record_checked(record)
    }

    /// Write the full log to the destination, replacing its contents
    pub fn try_persist(&self) -> Result<(), LogError> {
        let json = serde_json::to_string_pretty(&self.records)?;
        fs::write(&self.destination, json).map_err(|e| LogError::io(&self.destination, e))?;
        tracing::info!(
            "Logs saved to {} ({} events)",
            self.destination.display(),
            self.records.len()
        );
        Ok(())
    }

    /// Write the full log once, reporting failure instead of propagating it.
    ///
    /// Returns `true` if the write succeeded.
    pub fn persist(&self) -> bool {
        match self.try_persist() {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Error saving logs: {}", e);
                false
            }
        }
    }

    /// Distribution report over the current contents
    pub fn generate_report(&self) -> LogReport {
        build_report(&self.records, &self.destination.display().to_string())
    }

    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}
