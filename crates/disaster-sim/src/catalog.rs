//! Fixed catalogs the event factory draws from.

/// Locations in the simulated disaster area
pub const LOCATIONS: [&str; 8] = [
    "Downtown District",
    "Industrial Zone",
    "Residential Area",
    "Port District",
    "University Campus",
    "Hospital Area",
    "Shopping District",
    "Agricultural Region",
];

/// Generate an event ID from its 1-based sequence number
pub fn generate_event_id(sequence: u64) -> String {
    format!("EVT_{:04}", sequence)
}
