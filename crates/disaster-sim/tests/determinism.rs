//! Determinism verification tests
//!
//! Tests to ensure seeded environments produce identical event sequences.

use disaster_events::EventRecord;
use disaster_sim::{Environment, EventFactory, SimRng};

/// Render every event except its timestamp, which follows the wall clock.
fn fingerprint(env: &Environment) -> Vec<String> {
    env.events()
        .iter()
        .map(|e| {
            let mut record = EventRecord::from(e);
            record.timestamp.clear();
            record.to_json().unwrap()
        })
        .collect()
}

/// Test that two environments with the same seed generate identical events
#[test]
fn test_same_seed_same_events() {
    let seed = 42u64;

    let mut env1 = Environment::with_seed(seed);
    let mut env2 = Environment::with_seed(seed);
    for _ in 0..100 {
        env1.generate_event();
        env2.generate_event();
    }

    assert_eq!(
        fingerprint(&env1),
        fingerprint(&env2),
        "Event sequences should be identical with same seed"
    );
}

/// Interleaving reads between generations must not disturb the draws
#[test]
fn test_reads_do_not_consume_randomness() {
    let mut env1 = Environment::with_seed(7);
    let mut env2 = Environment::with_seed(7);

    for _ in 0..20 {
        env1.generate_event();
        let _ = env1.summary();
        let _ = env1.recent(3);
        let _ = env1.analyze();
        env2.generate_event();
    }

    assert_eq!(fingerprint(&env1), fingerprint(&env2));
}

/// Test that different seeds produce different sequences
#[test]
fn test_different_seeds() {
    let mut env1 = Environment::with_seed(42);
    let mut env2 = Environment::with_seed(43);
    for _ in 0..20 {
        env1.generate_event();
        env2.generate_event();
    }

    assert_ne!(
        fingerprint(&env1),
        fingerprint(&env2),
        "Different seeds should produce different sequences"
    );
}

/// The factory alone is reproducible given the same RNG state
#[test]
fn test_factory_determinism() {
    let mut rng1 = SimRng::seeded(12345);
    let mut rng2 = SimRng::seeded(12345);

    for seq in 1..=50 {
        let a = EventFactory::generate(&mut rng1.0, seq, chrono::Utc::now());
        let b = EventFactory::generate(&mut rng2.0, seq, chrono::Utc::now());
        assert_eq!(a.disaster_type(), b.disaster_type());
        assert_eq!(a.severity(), b.severity());
        assert_eq!(a.location(), b.location());
        assert_eq!(a.damage_percent(), b.damage_percent());
        assert_eq!(a.affected_population(), b.affected_population());
    }
}

/// Ids are minted in order regardless of seed
#[test]
fn test_ids_strictly_increase() {
    let mut env = Environment::new();
    for _ in 0..30 {
        env.generate_event();
    }

    let ids: Vec<&str> = env.events().iter().map(|e| e.event_id()).collect();
    let expected: Vec<String> = (1..=30).map(|n| format!("EVT_{:04}", n)).collect();
    assert_eq!(ids, expected);
}
