//! Birthday CLI - seeded birthday-paradox simulator.
//!
//! Single binary that provides:
//! - `birthday simulate` - sample a birthday distribution and count collisions
//! - `birthday stream` - dump the seeded random stream
//! - `birthday throttle` - replay event timestamps through the rate limiter

mod config;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use birthday_core::{
    generate_distribution, ManualClock, RateLimiter, Seed, SeededRandomStream, UnitSource,
};
use config::SimulationConfig;
use render::{SimulationReport, StreamDraw, ThrottleEvent, ThrottleReport};

#[derive(Parser)]
#[command(name = "birthday")]
#[command(about = "Seeded birthday problem simulator", version)]
struct Cli {
    /// Project root directory (config is read from .birthday/config.yaml)
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Place people on random days and count shared birthdays
    Simulate {
        /// Number of people
        #[arg(long)]
        people: Option<usize>,

        /// Number of days
        #[arg(long)]
        days: Option<usize>,

        /// Seed; defaults to the config seed, then the wall clock
        #[arg(long, allow_hyphen_values = true)]
        seed: Option<i64>,

        /// Advance the seed this many times before sampling
        #[arg(long, default_value_t = 0)]
        reroll: u32,
    },

    /// Print the first values of the seeded stream
    Stream {
        /// Seed; defaults to the config seed, then the wall clock
        #[arg(long, allow_hyphen_values = true)]
        seed: Option<i64>,

        /// Number of values to print
        #[arg(long, default_value_t = 10)]
        count: usize,
    },

    /// Replay event timestamps (milliseconds) through a throttle
    Throttle {
        /// Window size in milliseconds
        #[arg(long)]
        window_ms: Option<f64>,

        /// Event timestamps in milliseconds
        #[arg(required = true, allow_hyphen_values = true)]
        timestamps: Vec<i64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let project_root = match cli.project {
        Some(path) => path,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };
    let config = SimulationConfig::load_from_project(&project_root)?;
    let json = cli.json || config.json;

    match cli.command {
        Commands::Simulate {
            people,
            days,
            seed,
            reroll,
        } => simulate(&config, people, days, seed, reroll, json),
        Commands::Stream { seed, count } => stream(&config, seed, count, json),
        Commands::Throttle {
            window_ms,
            timestamps,
        } => throttle(&config, window_ms, &timestamps, json),
    }
}

fn resolve_seed(config: &SimulationConfig, flag: Option<i64>) -> Seed {
    flag.or(config.seed)
        .map(Seed::new)
        .unwrap_or_else(Seed::from_clock)
}

fn simulate(
    config: &SimulationConfig,
    people: Option<usize>,
    days: Option<usize>,
    seed: Option<i64>,
    reroll: u32,
    json: bool,
) -> Result<()> {
    let people = people.unwrap_or(config.people);
    let days = days.unwrap_or(config.days);
    let seed = (0..reroll).fold(resolve_seed(config, seed), |s, _| s.next());

    tracing::info!(%seed, people, days, "Running simulation");

    let mut stream = SeededRandomStream::from(seed);
    let histogram = generate_distribution(people, days, &mut stream)
        .context("Invalid simulation parameters")?;
    let report = SimulationReport::new(seed, people, histogram);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::simulation_text(&report));
    }
    Ok(())
}

fn stream(config: &SimulationConfig, seed: Option<i64>, count: usize, json: bool) -> Result<()> {
    let seed = resolve_seed(config, seed);
    let mut stream = SeededRandomStream::from(seed);

    let draws: Vec<StreamDraw> = (0..count)
        .map(|index| {
            let value = stream.next_unit();
            StreamDraw {
                index,
                state: stream.state(),
                value,
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&draws)?);
    } else {
        println!("seed {seed}");
        print!("{}", render::stream_text(&draws));
    }
    Ok(())
}

fn throttle(
    config: &SimulationConfig,
    window_ms: Option<f64>,
    timestamps: &[i64],
    json: bool,
) -> Result<()> {
    let report = replay_throttle(window_ms.unwrap_or(config.throttle.window_ms), timestamps)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::throttle_text(&report));
    }
    Ok(())
}

fn replay_throttle(window_ms: f64, timestamps: &[i64]) -> Result<ThrottleReport> {
    let clock = ManualClock::default();
    let mut limiter = RateLimiter::with_clock(|at: i64| at, window_ms, clock.clone())
        .context("Invalid throttle window")?;

    let events = timestamps
        .iter()
        .map(|&at_ms| {
            clock.set(at_ms);
            ThrottleEvent {
                at_ms,
                accepted: limiter.call(at_ms).is_some(),
            }
        })
        .collect();

    Ok(ThrottleReport {
        window_ms,
        events,
        stats: limiter.stats(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_matches_window_semantics() {
        let report = replay_throttle(100.0, &[0, 50, 150, 200, 250]).unwrap();
        let accepted: Vec<bool> = report.events.iter().map(|e| e.accepted).collect();
        assert_eq!(accepted, vec![true, false, true, false, true]);
        assert_eq!(report.stats.dropped, 2);
    }

    #[test]
    fn replay_rejects_negative_window() {
        assert!(replay_throttle(-1.0, &[0]).is_err());
    }

    #[test]
    fn explicit_seed_beats_config() {
        let config = SimulationConfig {
            seed: Some(5),
            ..SimulationConfig::default()
        };
        assert_eq!(resolve_seed(&config, Some(9)), Seed(9));
        assert_eq!(resolve_seed(&config, None), Seed(5));
    }

    #[test]
    fn every_argument_has_help_text() {
        use clap::CommandFactory;

        let cli = Cli::command();
        for sub in cli.get_subcommands() {
            for arg in sub.get_arguments() {
                if arg.get_id() == "help" || arg.is_global_set() {
                    continue;
                }
                assert!(
                    arg.get_help().is_some(),
                    "{} --{} has no help",
                    sub.get_name(),
                    arg.get_id()
                );
            }
        }
    }

    #[test]
    fn cli_parses_simulate_flags() {
        let cli = Cli::try_parse_from([
            "birthday", "simulate", "--people", "30", "--seed", "-4", "--reroll", "2",
        ])
        .unwrap();
        match cli.command {
            Commands::Simulate {
                people,
                seed,
                reroll,
                ..
            } => {
                assert_eq!(people, Some(30));
                assert_eq!(seed, Some(-4));
                assert_eq!(reroll, 2);
            }
            _ => panic!("expected simulate"),
        }
    }
}
