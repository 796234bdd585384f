//! Sample data fixtures for testing.
//!
//! This module provides ready-made test data for other crates to use.
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // disaster-events = { path = "../disaster-events", features = ["test-fixtures"] }
//!
//! use disaster_events::fixtures;
//!
//! let events = fixtures::sample_events();
//! ```

use crate::{DisasterEvent, EventRecord};

/// Returns sample records from the fixtures file.
///
/// Contains 5 records:
/// - 2 critical events (earthquake, landslide) at the range maxima
/// - 2 floods, one at the range minima
/// - 1 severe wildfire
pub fn sample_records() -> Vec<EventRecord> {
    let json = include_str!("../tests/fixtures/sample_events.json");
    serde_json::from_str(json).expect("Failed to parse sample_events.json")
}

/// Returns the sample records as validated events.
pub fn sample_events() -> Vec<DisasterEvent> {
    sample_records()
        .iter()
        .map(|r| {
            DisasterEvent::try_from(r)
                .unwrap_or_else(|e| panic!("Invalid fixture {}: {}", r.event_id, e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeverityLevel;

    #[test]
    fn test_fixtures_load() {
        let events = sample_events();
        assert_eq!(events.len(), 5);
        assert_eq!(
            events.iter().filter(|e| e.severity() == SeverityLevel::Critical).count(),
            2
        );
    }
}
