//! Event Factory
//!
//! Draws one random disaster event from the fixed catalogs.

use chrono::{DateTime, Utc};
use disaster_events::{
    DisasterEvent, DisasterType, SeverityLevel, AFFECTED_POPULATION_RANGE, DAMAGE_PERCENT_RANGE,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{generate_event_id, LOCATIONS};

/// Random number source for event generation.
///
/// Seeded instances replay the same draws for the same call sequence.
#[derive(Debug, Clone)]
pub struct SimRng(pub SmallRng);

impl SimRng {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(SmallRng::from_entropy())
    }
}

/// Produces disaster events from the type, severity, and location catalogs.
pub struct EventFactory;

impl EventFactory {
    /// Draw one event.
    ///
    /// Type, severity, and location are uniform over their catalogs; damage
    /// and affected population are uniform over their inclusive ranges.
    /// Draw order is fixed so seeded generation is reproducible.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        sequence: u64,
        timestamp: DateTime<Utc>,
    ) -> DisasterEvent {
        let types = DisasterType::all();
        let severities = SeverityLevel::all();

        let disaster_type = types[rng.gen_range(0..types.len())];
        let severity = severities[rng.gen_range(0..severities.len())];
        let location = LOCATIONS[rng.gen_range(0..LOCATIONS.len())];
        let damage = rng.gen_range(DAMAGE_PERCENT_RANGE);
        let affected = rng.gen_range(AFFECTED_POPULATION_RANGE);

        DisasterEvent::new(
            generate_event_id(sequence),
            disaster_type,
            location,
            severity,
            damage,
            affected,
            timestamp,
        )
        .expect("factory draws stay within event bounds")
    }
}
