//! Disaster Environment
//!
//! Owns the append-only event history and derives statistics from it on
//! demand.
//!
//! `generate_event` takes `&mut self`, so bumping the counter and appending
//! to the history happen as one step for any single owner. Drivers that want
//! to share an environment across tasks must serialize access themselves,
//! either through one owning task or behind a mutex around the whole call.

use chrono::Utc;
use disaster_events::{
    format_timestamp, DisasterEvent, EnvironmentStatus, EnvironmentSummary, EventRecord,
};
use serde::Serialize;

use crate::factory::{EventFactory, SimRng};

/// Number of recent events included in an [`EnvironmentAnalysis`]
pub const ANALYSIS_RECENT_LIMIT: usize = 3;

/// The simulated disaster area.
#[derive(Debug, Clone)]
pub struct Environment {
    events: Vec<DisasterEvent>,
    event_counter: u64,
    rng: SimRng,
    seed: Option<u64>,
}

/// Point-in-time view of the environment for display or forwarding.
#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentAnalysis {
    pub environment_summary: EnvironmentSummary,
    pub recent_events: Vec<EventRecord>,
    pub analysis_timestamp: String,
}

impl Environment {
    /// Create an environment with non-reproducible draws
    pub fn new() -> Self {
        Self::build(SimRng::from_entropy(), None)
    }

    /// Create an environment whose draws are reproducible for `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self::build(SimRng::seeded(seed), Some(seed))
    }

    /// Create a seeded environment if a seed is given, otherwise an unseeded one
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    fn build(rng: SimRng, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => tracing::info!(seed, "Disaster Environment initialized"),
            None => tracing::info!("Disaster Environment initialized"),
        }
        Self {
            events: Vec::new(),
            event_counter: 0,
            rng,
            seed,
        }
    }

    /// Generate the next event and append it to the history
    pub fn generate_event(&mut self) -> &DisasterEvent {
        self.event_counter += 1;
        let event = EventFactory::generate(&mut self.rng.0, self.event_counter, Utc::now());
        tracing::debug!(
            event_id = event.event_id(),
            disaster_type = %event.disaster_type(),
            severity = event.severity().value(),
            "Generated event"
        );
        self.events.push(event);
        &self.events[self.events.len() - 1]
    }

    /// Aggregate statistics over the full history
    pub fn summary(&self) -> EnvironmentSummary {
        let total_events = self.events.len();
        if total_events == 0 {
            return EnvironmentSummary::empty();
        }

        let severity_sum: u64 = self
            .events
            .iter()
            .map(|e| u64::from(e.severity().value()))
            .sum();
        let average = severity_sum as f64 / total_events as f64;

        EnvironmentSummary {
            total_events,
            average_severity: (average * 100.0).round() / 100.0,
            total_affected_population: self
                .events
                .iter()
                .map(|e| u64::from(e.affected_population()))
                .sum(),
            critical_events: self
                .events
                .iter()
                .filter(|e| e.severity().is_critical())
                .count(),
            environmental_status: EnvironmentStatus::from_average_severity(average),
        }
    }

    /// The last `limit` events in generation order.
    ///
    /// Returns the whole history when `limit` exceeds its length, and nothing
    /// when `limit` is zero.
    pub fn recent(&self, limit: usize) -> &[DisasterEvent] {
        let start = self.events.len().saturating_sub(limit);
        &self.events[start..]
    }

    /// Summary plus the most recent events rendered as records
    pub fn analyze(&self) -> EnvironmentAnalysis {
        EnvironmentAnalysis {
            environment_summary: self.summary(),
            recent_events: self
                .recent(ANALYSIS_RECENT_LIMIT)
                .iter()
                .map(EventRecord::from)
                .collect(),
            analysis_timestamp: format_timestamp(Utc::now()),
        }
    }

    /// Full history in generation order
    pub fn events(&self) -> &[DisasterEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Seed the environment was built with, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
