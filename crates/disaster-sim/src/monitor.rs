//! Monitoring Loop
//!
//! Periodically asks the environment for a new event, forwards it to the
//! event log, and narrates what was perceived. The loop is the only part of
//! the workspace that suspends; every call it makes into the environment and
//! the log is synchronous.

use disaster_events::{DisasterEvent, DisasterType, EnvironmentSummary, SeverityLevel};
use event_log::EventLog;
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

use crate::config::{MonitorConfig, MIN_INTERVAL};
use crate::environment::Environment;

const RULE: &str = "======================================================================";

/// Outcome of one perception cycle.
#[derive(Debug, Clone)]
pub struct CycleReport {
    pub event: DisasterEvent,
    pub summary: EnvironmentSummary,
    /// `None` when the cycle did not attempt to persist
    pub persisted: Option<bool>,
}

/// Drives an environment and an event log on a fixed cadence.
#[derive(Debug)]
pub struct MonitorLoop {
    environment: Environment,
    event_log: EventLog,
    interval: Duration,
    recent_limit: usize,
    persist_every_cycle: bool,
    cycles: u64,
}

impl MonitorLoop {
    /// Create a loop; `interval` is raised to at least [`MIN_INTERVAL`]
    pub fn new(environment: Environment, event_log: EventLog, interval: Duration) -> Self {
        Self {
            environment,
            event_log,
            interval: interval.max(MIN_INTERVAL),
            recent_limit: 3,
            persist_every_cycle: true,
            cycles: 0,
        }
    }

    /// Build the environment, log, and cadence from configuration
    pub fn from_config(config: &MonitorConfig) -> Self {
        let environment = Environment::from_seed(config.environment.seed);
        let event_log = EventLog::new(&config.log.destination);
        Self::new(environment, event_log, config.monitor.interval())
            .with_recent_limit(config.monitor.recent_limit)
            .with_persist_every_cycle(config.log.persist_every_cycle)
    }

    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }

    pub fn with_persist_every_cycle(mut self, persist: bool) -> Self {
        self.persist_every_cycle = persist;
        self
    }

    /// Log the sensor configuration banner
    pub fn announce(&self) {
        let types: Vec<&str> = DisasterType::all().iter().map(|t| t.as_str()).collect();
        let severities: Vec<String> = SeverityLevel::all()
            .iter()
            .rev()
            .map(|s| format!("{} ({})", s.label(), s.value()))
            .collect();

        tracing::info!("{}", RULE);
        tracing::info!("Sensor Configuration:");
        tracing::info!("  - Type: Environmental Disaster Monitor");
        tracing::info!("  - Monitoring Interval: {} seconds", self.interval.as_secs());
        tracing::info!("  - Event Types: {}", types.join(", "));
        tracing::info!("  - Severity Levels: {}", severities.join(", "));
        tracing::info!("  - Event Log: {}", self.event_log.destination().display());
        tracing::info!("{}", RULE);
    }

    /// Run one perception cycle
    pub fn cycle(&mut self) -> CycleReport {
        let event = self.environment.generate_event().clone();
        self.event_log.record(&event);
        narrate_event(&event);

        let summary = self.environment.summary();
        narrate_summary(&summary);
        for recent in self.environment.recent(self.recent_limit) {
            tracing::debug!(
                "  recent: {} {} at {} (severity {})",
                recent.event_id(),
                recent.disaster_type(),
                recent.location(),
                recent.severity()
            );
        }

        let persisted = self.persist_every_cycle.then(|| self.event_log.persist());
        self.cycles += 1;

        CycleReport {
            event,
            summary,
            persisted,
        }
    }

    /// Run cycles until `stop` completes, then persist once.
    ///
    /// The first cycle runs immediately. Stopping only ceases future cycles;
    /// recorded history is left as is.
    pub async fn run_until<F: Future>(&mut self, stop: F) -> u64 {
        let started = self.cycles;
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(stop);

        loop {
            tokio::select! {
                biased;
                _ = &mut stop => break,
                _ = ticker.tick() => {
                    self.cycle();
                }
            }
        }

        self.event_log.persist();
        let ran = self.cycles - started;
        tracing::info!("Monitoring stopped after {} cycles", ran);
        ran
    }

    /// Run cycles for `duration`
    pub async fn run_for(&mut self, duration: Duration) -> u64 {
        tracing::info!("Monitoring environment for {} seconds...", duration.as_secs());
        self.run_until(tokio::time::sleep(duration)).await
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Pause between perception cycles
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Total cycles run so far
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn into_parts(self) -> (Environment, EventLog) {
        (self.environment, self.event_log)
    }
}

fn narrate_event(event: &DisasterEvent) {
    tracing::info!("{}", RULE);
    tracing::info!("SENSOR PERCEPTION - Event Detected: {}", event.event_id());
    tracing::info!("{}", RULE);
    tracing::info!(
        "  Disaster Type      : {}",
        event.disaster_type().as_str().to_uppercase()
    );
    tracing::info!("  Location           : {}", event.location());
    tracing::info!("  Severity Level     : {}/5", event.severity());
    tracing::info!("  Damage Assessment  : {}%", event.damage_percent());
    tracing::info!("  Affected Population: {} people", event.affected_population());
    tracing::info!(
        "  Timestamp          : {}",
        disaster_events::format_timestamp(event.timestamp())
    );
    tracing::info!("{}", RULE);
}

fn narrate_summary(summary: &EnvironmentSummary) {
    tracing::info!("ENVIRONMENTAL STATUS UPDATE:");
    tracing::info!("  Total Events Detected    : {}", summary.total_events);
    tracing::info!("  Average Severity Level   : {}/5", summary.average_severity);
    tracing::info!(
        "  Total Affected Population: {} people",
        summary.total_affected_population
    );
    tracing::info!("  Critical Events          : {}", summary.critical_events);
    tracing::info!("  Environment Status       : {}", summary.environmental_status);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet_loop(seed: u64) -> MonitorLoop {
        MonitorLoop::new(
            Environment::with_seed(seed),
            EventLog::new("unused.json"),
            Duration::from_secs(2),
        )
        .with_persist_every_cycle(false)
    }

    #[test]
    fn test_cycle_forwards_event_to_log() {
        let mut monitor = quiet_loop(10);
        let report = monitor.cycle();

        assert_eq!(report.persisted, None);
        assert_eq!(report.summary.total_events, 1);
        assert_eq!(monitor.event_log().len(), 1);
        assert_eq!(monitor.event_log().records()[0].event_id, report.event.event_id());
        assert_eq!(monitor.cycles(), 1);
    }

    #[test]
    fn test_environment_and_log_stay_in_step() {
        let mut monitor = quiet_loop(12);
        for _ in 0..6 {
            monitor.cycle();
        }

        let (environment, event_log) = monitor.into_parts();
        assert_eq!(environment.len(), 6);
        assert_eq!(event_log.len(), 6);
        for (event, record) in environment.events().iter().zip(event_log.records()) {
            assert_eq!(event.event_id(), record.event_id);
        }
    }
}
