//! Event Types
//!
//! Disaster categories, the severity scale, and the immutable event record
//! produced by the environment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Inclusive bounds for `damage_percent`.
pub const DAMAGE_PERCENT_RANGE: RangeInclusive<u8> = 5..=100;

/// Inclusive bounds for `affected_population`.
pub const AFFECTED_POPULATION_RANGE: RangeInclusive<u32> = 50..=5000;

/// Errors raised when an event or record violates its invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventError {
    #[error("damage_percent {0} is outside 5..=100")]
    DamageOutOfRange(u32),

    #[error("affected_population {0} is outside 50..=5000")]
    PopulationOutOfRange(u32),

    #[error("severity_level {0} is outside 1..=5")]
    InvalidSeverity(u8),

    #[error("unknown disaster_type {0:?}")]
    UnknownDisasterType(String),

    #[error("damage_assessment {0:?} is not of the form \"<n>%\"")]
    MalformedDamage(String),

    #[error("timestamp {0:?} is not ISO-8601")]
    InvalidTimestamp(String),

    #[error("required field {0} is empty")]
    EmptyField(&'static str),
}

/// Category of disaster the environment can simulate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisasterType {
    Earthquake,
    Flood,
    Wildfire,
    Hurricane,
    Landslide,
}

impl DisasterType {
    /// Returns all disaster type variants in catalog order.
    pub fn all() -> &'static [DisasterType] {
        &[
            DisasterType::Earthquake,
            DisasterType::Flood,
            DisasterType::Wildfire,
            DisasterType::Hurricane,
            DisasterType::Landslide,
        ]
    }

    /// Wire name, as used in persisted records and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            DisasterType::Earthquake => "earthquake",
            DisasterType::Flood => "flood",
            DisasterType::Wildfire => "wildfire",
            DisasterType::Hurricane => "hurricane",
            DisasterType::Landslide => "landslide",
        }
    }
}

impl fmt::Display for DisasterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisasterType {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DisasterType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| EventError::UnknownDisasterType(s.to_string()))
    }
}

/// Ordinal severity scale, 1 (low) to 5 (critical).
///
/// Serializes as its bare numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SeverityLevel {
    Low = 1,
    Minor = 2,
    Moderate = 3,
    Severe = 4,
    Critical = 5,
}

impl SeverityLevel {
    /// Returns all severity levels, lowest first.
    pub fn all() -> &'static [SeverityLevel] {
        &[
            SeverityLevel::Low,
            SeverityLevel::Minor,
            SeverityLevel::Moderate,
            SeverityLevel::Severe,
            SeverityLevel::Critical,
        ]
    }

    /// Numeric value on the 1-5 scale.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            SeverityLevel::Low => "Low",
            SeverityLevel::Minor => "Minor",
            SeverityLevel::Moderate => "Moderate",
            SeverityLevel::Severe => "Severe",
            SeverityLevel::Critical => "Critical",
        }
    }

    pub fn is_critical(self) -> bool {
        matches!(self, SeverityLevel::Critical)
    }
}

impl TryFrom<u8> for SeverityLevel {
    type Error = EventError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(SeverityLevel::Low),
            2 => Ok(SeverityLevel::Minor),
            3 => Ok(SeverityLevel::Moderate),
            4 => Ok(SeverityLevel::Severe),
            5 => Ok(SeverityLevel::Critical),
            other => Err(EventError::InvalidSeverity(other)),
        }
    }
}

impl From<SeverityLevel> for u8 {
    fn from(level: SeverityLevel) -> Self {
        level.value()
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// One simulated disaster occurrence.
///
/// Fields are private so the numeric bounds checked by [`DisasterEvent::new`]
/// hold for the lifetime of the value.
#[derive(Debug, Clone, PartialEq)]
pub struct DisasterEvent {
    event_id: String,
    disaster_type: DisasterType,
    location: String,
    severity: SeverityLevel,
    damage_percent: u8,
    affected_population: u32,
    timestamp: DateTime<Utc>,
}

impl DisasterEvent {
    /// Creates a new event, validating ranges and required fields.
    pub fn new(
        event_id: impl Into<String>,
        disaster_type: DisasterType,
        location: impl Into<String>,
        severity: SeverityLevel,
        damage_percent: u8,
        affected_population: u32,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, EventError> {
        let event_id = event_id.into();
        let location = location.into();

        if event_id.trim().is_empty() {
            return Err(EventError::EmptyField("event_id"));
        }
        if location.trim().is_empty() {
            return Err(EventError::EmptyField("location"));
        }
        if !DAMAGE_PERCENT_RANGE.contains(&damage_percent) {
            return Err(EventError::DamageOutOfRange(u32::from(damage_percent)));
        }
        if !AFFECTED_POPULATION_RANGE.contains(&affected_population) {
            return Err(EventError::PopulationOutOfRange(affected_population));
        }

        Ok(Self {
            event_id,
            disaster_type,
            location,
            severity,
            damage_percent,
            affected_population,
            timestamp,
        })
    }

    pub fn event_id(&self) -> &str {
        &self.event_id
    }

    pub fn disaster_type(&self) -> DisasterType {
        self.disaster_type
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn severity(&self) -> SeverityLevel {
        self.severity
    }

    pub fn damage_percent(&self) -> u8 {
        self.damage_percent
    }

    pub fn affected_population(&self) -> u32 {
        self.affected_population
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
