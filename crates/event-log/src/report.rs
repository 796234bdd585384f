//! Report Generation
//!
//! Groups recorded events by severity and by disaster type. Reports are
//! recomputed from the full record list on every call.

use chrono::Utc;
use disaster_events::{format_timestamp, EventRecord, EventReport, LogReport};
use std::collections::BTreeMap;

/// Build a distribution report over `records`.
///
/// Returns [`LogReport::NoEvents`] when there is nothing to report.
pub fn build_report(records: &[EventRecord], log_file: &str) -> LogReport {
    if records.is_empty() {
        return LogReport::NoEvents;
    }

    let mut severity_distribution = BTreeMap::new();
    let mut disaster_distribution = BTreeMap::new();

    for record in records {
        *severity_distribution
            .entry(record.severity_level.value())
            .or_insert(0) += 1;
        *disaster_distribution.entry(record.disaster_type).or_insert(0) += 1;
    }

    LogReport::Ready(EventReport {
        total_events: records.len(),
        severity_distribution,
        disaster_distribution,
        log_file: log_file.to_string(),
        report_generated: format_timestamp(Utc::now()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use disaster_events::{fixtures, DisasterType};

    #[test]
    fn test_empty_records() {
        assert_eq!(build_report(&[], "event_logs.json"), LogReport::NoEvents);
    }

    #[test]
    fn test_distributions() {
        let records = fixtures::sample_records();
        let report = build_report(&records, "sample.json").into_report().unwrap();

        assert_eq!(report.total_events, 5);
        assert_eq!(
            report.severity_distribution,
            BTreeMap::from([(5, 2), (4, 1), (3, 1), (1, 1)])
        );
        assert_eq!(report.disaster_distribution[&DisasterType::Flood], 2);
        assert_eq!(report.disaster_distribution[&DisasterType::Earthquake], 1);
        assert!(!report.disaster_distribution.contains_key(&DisasterType::Hurricane));
        assert_eq!(report.log_file, "sample.json");
    }

    #[test]
    fn test_counts_sum_to_total() {
        let records = fixtures::sample_records();
        let report = build_report(&records, "sample.json").into_report().unwrap();

        let by_severity: usize = report.severity_distribution.values().sum();
        let by_type: usize = report.disaster_distribution.values().sum();
        assert_eq!(by_severity, report.total_events);
        assert_eq!(by_type, report.total_events);
    }
}
