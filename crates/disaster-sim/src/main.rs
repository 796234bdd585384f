//! Disaster Monitor
//!
//! Command-line host for the disaster environment: a one-shot demonstration
//! and a periodic monitoring loop that feeds the event log.

use clap::{Parser, Subcommand};
use disaster_sim::{
    default_config_toml, Environment, MonitorConfig, MonitorLoop, DEFAULT_CONFIG_PATH,
};
use event_log::EventLog;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Command line arguments for the monitor
#[derive(Parser, Debug)]
#[command(name = "disaster_monitor")]
#[command(about = "Simulated disaster environment with event logging")]
struct Args {
    /// TOML configuration file (defaults to monitor.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Random seed for reproducible event generation
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Event log destination
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a handful of events, save them, and print the analysis
    Demo {
        /// Number of events to generate
        #[arg(long)]
        events: Option<usize>,
    },
    /// Run the periodic sensor loop
    Monitor {
        /// Seconds between perception cycles
        #[arg(long)]
        interval: Option<u64>,

        /// Seconds to run before stopping
        #[arg(long)]
        duration: Option<u64>,
    },
    /// Print the default configuration file
    InitConfig,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => MonitorConfig::from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            MonitorConfig::from_file(Path::new(DEFAULT_CONFIG_PATH))?
        }
        None => MonitorConfig::default(),
    };
    if args.seed.is_some() {
        config.environment.seed = args.seed;
    }

    match args.command {
        Command::Demo { events } => {
            if let Some(events) = events {
                config.demo.events = events;
            }
            if let Some(log_file) = args.log_file {
                config.demo.destination = log_file;
            }
            run_demo(&config)
        }
        Command::Monitor { interval, duration } => {
            if let Some(interval) = interval {
                config.monitor.interval_secs = interval;
            }
            if let Some(duration) = duration {
                config.monitor.duration_secs = duration;
            }
            if let Some(log_file) = args.log_file {
                config.log.destination = log_file;
            }
            run_monitor(&config)
        }
        Command::InitConfig => {
            print!("{}", default_config_toml());
            Ok(())
        }
    }
}

fn run_demo(config: &MonitorConfig) -> Result<(), Box<dyn Error>> {
    tracing::info!("DISASTER ENVIRONMENT DEMONSTRATION");

    let mut environment = Environment::from_seed(config.environment.seed);
    let mut event_log = EventLog::new(&config.demo.destination);

    tracing::info!("--- Generating Disaster Events ---");
    for i in 0..config.demo.events {
        let event = environment.generate_event();
        event_log.record(event);

        tracing::info!("Event {}: {}", i + 1, event.event_id());
        tracing::info!("  Type: {}", event.disaster_type());
        tracing::info!("  Location: {}", event.location());
        tracing::info!("  Severity: {}/5", event.severity());
        tracing::info!("  Damage: {}%", event.damage_percent());
        tracing::info!("  Population Affected: {}", event.affected_population());
    }

    tracing::info!("--- Saving Event Logs ---");
    event_log.persist();

    tracing::info!("--- Environment Analysis Report ---");
    tracing::info!("{}", serde_json::to_string_pretty(&event_log.generate_report())?);

    tracing::info!("--- Current Environment State ---");
    tracing::info!("{}", serde_json::to_string_pretty(&environment.analyze())?);

    tracing::info!("DEMONSTRATION COMPLETE");
    Ok(())
}

fn run_monitor(config: &MonitorConfig) -> Result<(), Box<dyn Error>> {
    let runtime = tokio::runtime::Runtime::new()?;
    let mut monitor = MonitorLoop::from_config(config);
    monitor.announce();

    let duration = config.monitor.duration();
    tracing::info!("Monitoring environment for {} seconds...", duration.as_secs());
    runtime.block_on(async {
        monitor
            .run_until(async {
                tokio::select! {
                    _ = tokio::time::sleep(duration) => {}
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("Interrupted, stopping monitor");
                    }
                }
            })
            .await
    });

    tracing::info!(
        "{}",
        serde_json::to_string_pretty(&monitor.event_log().generate_report())?
    );
    Ok(())
}
