//! Serialized Event Records
//!
//! [`EventRecord`] is the only wire/display form of a [`DisasterEvent`].
//! Severity renders as its numeric value, the disaster type as its lowercase
//! name, damage with a trailing `%`, and the timestamp as ISO-8601.

use serde::{Deserialize, Serialize};

use crate::event::{DisasterEvent, DisasterType, EventError, SeverityLevel};
use crate::timestamp::{format_timestamp, parse_timestamp};

/// Snapshot of an event as written to the event log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub event_id: String,
    pub disaster_type: DisasterType,
    pub location: String,
    pub severity_level: SeverityLevel,
    /// Damage percentage rendered as `"<n>%"`
    pub damage_assessment: String,
    /// ISO-8601 instant
    pub timestamp: String,
    pub affected_population: u32,
}

impl EventRecord {
    /// Parses the numeric part of `damage_assessment`.
    ///
    /// Only the canonical rendering is accepted: decimal digits without sign,
    /// padding, or leading zeros, followed by `%`.
    pub fn damage_percent(&self) -> Result<u8, EventError> {
        let malformed = || EventError::MalformedDamage(self.damage_assessment.clone());
        let digits = self
            .damage_assessment
            .strip_suffix('%')
            .ok_or_else(malformed)?;
        if digits.is_empty()
            || !digits.bytes().all(|b| b.is_ascii_digit())
            || (digits.len() > 1 && digits.starts_with('0'))
        {
            return Err(malformed());
        }
        let value: u32 = digits.parse().map_err(|_| malformed())?;
        u8::try_from(value).map_err(|_| EventError::DamageOutOfRange(value))
    }

    /// Parses a record from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the record to a single-line JSON object.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<&DisasterEvent> for EventRecord {
    fn from(event: &DisasterEvent) -> Self {
        Self {
            event_id: event.event_id().to_string(),
            disaster_type: event.disaster_type(),
            location: event.location().to_string(),
            severity_level: event.severity(),
            damage_assessment: format!("{}%", event.damage_percent()),
            timestamp: format_timestamp(event.timestamp()),
            affected_population: event.affected_population(),
        }
    }
}

impl From<DisasterEvent> for EventRecord {
    fn from(event: DisasterEvent) -> Self {
        EventRecord::from(&event)
    }
}

impl TryFrom<&EventRecord> for DisasterEvent {
    type Error = EventError;

    fn try_from(record: &EventRecord) -> Result<Self, Self::Error> {
        DisasterEvent::new(
            record.event_id.clone(),
            record.disaster_type,
            record.location.clone(),
            record.severity_level,
            record.damage_percent()?,
            record.affected_population,
            parse_timestamp(&record.timestamp)?,
        )
    }
}

impl TryFrom<EventRecord> for DisasterEvent {
    type Error = EventError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        DisasterEvent::try_from(&record)
    }
}
