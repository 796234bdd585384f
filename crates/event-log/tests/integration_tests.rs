//! Integration tests for the event log.
//!
//! These exercise the recorder through its public API: recording, report
//! generation, and persistence to a real file.

use chrono::{TimeZone, Utc};
use disaster_events::{fixtures, DisasterEvent, DisasterType, SeverityLevel};
use event_log::{EventLog, LogReport};
use std::collections::BTreeMap;
use std::fs;
use tempfile::tempdir;

/// Build a valid event with the given id number and severity.
fn make_event(n: u32, severity: SeverityLevel, disaster_type: DisasterType) -> DisasterEvent {
    DisasterEvent::new(
        format!("EVT_{:04}", n),
        disaster_type,
        "Hospital Area",
        severity,
        10 + n as u8,
        100 * n,
        Utc.with_ymd_and_hms(2025, 9, 1, 12, 0, n).unwrap(),
    )
    .expect("valid event")
}

#[test]
fn test_empty_log_report_is_error_value() {
    let log = EventLog::new("event_logs.json");
    let report = log.generate_report();

    assert_eq!(report, LogReport::NoEvents);
    assert_eq!(
        serde_json::to_string(&report).unwrap(),
        r#"{"error":"No events logged"}"#
    );
}

#[test]
fn test_severity_distribution() {
    let mut log = EventLog::new("event_logs.json");
    let severities = [
        SeverityLevel::Critical,
        SeverityLevel::Critical,
        SeverityLevel::Moderate,
        SeverityLevel::Low,
    ];
    for (i, severity) in severities.iter().enumerate() {
        log.record(&make_event(i as u32 + 1, *severity, DisasterType::Flood));
    }

    let report = log.generate_report().into_report().expect("report");
    assert_eq!(report.total_events, 4);
    assert_eq!(
        report.severity_distribution,
        BTreeMap::from([(5, 2), (3, 1), (1, 1)])
    );
    assert_eq!(
        report.disaster_distribution,
        BTreeMap::from([(DisasterType::Flood, 4)])
    );
    assert_eq!(report.log_file, "event_logs.json");
}

/// Reports must reflect the log at the time of the call, regardless of how
/// many reports were requested before.
#[test]
fn test_interleaved_record_and_report() {
    let mut log = EventLog::new("event_logs.json");
    assert!(log.generate_report().is_empty());

    log.record(&make_event(1, SeverityLevel::Severe, DisasterType::Hurricane));
    let first = log.generate_report().into_report().unwrap();
    assert_eq!(first.total_events, 1);
    assert_eq!(first.severity_distribution, BTreeMap::from([(4, 1)]));

    // Asking twice must not double-count
    let again = log.generate_report().into_report().unwrap();
    assert_eq!(again.severity_distribution, first.severity_distribution);
    assert_eq!(again.disaster_distribution, first.disaster_distribution);

    log.record(&make_event(2, SeverityLevel::Severe, DisasterType::Landslide));
    log.record(&make_event(3, SeverityLevel::Minor, DisasterType::Hurricane));
    let third = log.generate_report().into_report().unwrap();
    assert_eq!(third.total_events, 3);
    assert_eq!(third.severity_distribution, BTreeMap::from([(4, 2), (2, 1)]));
    assert_eq!(
        third.disaster_distribution,
        BTreeMap::from([(DisasterType::Hurricane, 2), (DisasterType::Landslide, 1)])
    );
}

#[test]
fn test_persist_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("round_trip.json");
    let mut log = EventLog::new(&path);
    for event in fixtures::sample_events() {
        log.record(&event);
    }
    assert!(log.persist());

    // The document is a single JSON array of records
    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let array = raw.as_array().expect("top-level array");
    assert_eq!(array.len(), 5);
    assert_eq!(array[0]["severity_level"], 5);
    assert_eq!(array[0]["damage_assessment"], "87%");
    assert_eq!(array[0]["timestamp"], "2025-03-14T09:00:00.000000Z");
    assert_eq!(array[0]["disaster_type"], "earthquake");

    let reloaded = EventLog::load(&path).unwrap();
    assert_eq!(reloaded.len(), log.len());
    assert_eq!(reloaded.records(), log.records());
    assert_eq!(reloaded.destination(), path.as_path());
}

#[test]
fn test_write_failure_leaves_log_intact() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("events.json");
    let mut log = EventLog::new(&path);
    log.record(&make_event(1, SeverityLevel::Low, DisasterType::Wildfire));
    log.record(&make_event(2, SeverityLevel::Critical, DisasterType::Earthquake));

    let before = log.records().to_vec();
    assert!(!log.persist());
    assert!(!log.persist());
    assert_eq!(log.records(), before.as_slice());
    assert!(!path.exists());

    // The log keeps working after a failed write
    log.record(&make_event(3, SeverityLevel::Low, DisasterType::Wildfire));
    assert_eq!(log.len(), 3);
    assert_eq!(log.generate_report().into_report().unwrap().total_events, 3);
}

#[test]
fn test_persist_writes_current_state_each_call() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("growing.json");
    let mut log = EventLog::new(&path);

    log.record(&make_event(1, SeverityLevel::Low, DisasterType::Flood));
    assert!(log.persist());
    assert_eq!(EventLog::load(&path).unwrap().len(), 1);

    log.record(&make_event(2, SeverityLevel::Low, DisasterType::Flood));
    log.record(&make_event(3, SeverityLevel::Low, DisasterType::Flood));
    assert!(log.persist());
    assert_eq!(EventLog::load(&path).unwrap().len(), 3);
}
