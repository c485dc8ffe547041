//! office — run the elevator bank of an office building over one working day.
//!
//! Without flags this simulates the default building (3 cars, 4 floors,
//! 09:00–20:00) under the default office traffic and prints one row per
//! minute.  Building parameters come from `--config <json>` and may be
//! overridden flag by flag; traffic comes from `--sequences <csv>`.
//!
//! ```text
//! office --sequences demos/office/data/office.csv --output ./out
//! office --config demos/office/data/building.json --single-call
//! ```
//!
//! Logging is controlled with `RUST_LOG` (default `office=info,lift_sim=info`).

mod table;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lift_core::{DispatchMode, SimConfig, Tick};
use lift_dispatch::Dispatcher;
use lift_output::{CsvWriter, OutputWriter, SimOutputObserver};
use lift_sim::{NoopObserver, ResultTable, Sim, SimBuilder};
use lift_traffic::{load_sequences_csv, SequenceSet};

#[derive(Parser, Debug)]
#[command(name = "office")]
#[command(about = "Simulate an office elevator bank second by second")]
struct Cli {
    /// JSON building configuration; missing fields take the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// CSV file of traffic sequences (default: the built-in office pattern)
    #[arg(long)]
    sequences: Option<PathBuf>,

    /// Number of elevators
    #[arg(long)]
    elevators: Option<u32>,

    /// Number of floors (ground floor is 0)
    #[arg(long)]
    floors: Option<u32>,

    /// Seconds to travel between adjacent floors
    #[arg(long)]
    travel_secs: Option<u32>,

    /// Seconds a car waits at the end of every leg
    #[arg(long)]
    floor_secs: Option<u32>,

    /// First simulated instant (HH:MM)
    #[arg(long)]
    start: Option<Tick>,

    /// Last simulated instant, inclusive (HH:MM)
    #[arg(long)]
    end: Option<Tick>,

    /// Assign calls one at a time instead of merging them into one route
    #[arg(long)]
    single_call: bool,

    /// Directory for elevator_positions.csv and dispatches.csv
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write output.db instead of the CSV files
    #[cfg(feature = "sqlite")]
    #[arg(long, requires = "output")]
    sqlite: bool,

    /// Do not print the result table
    #[arg(long)]
    quiet: bool,
}

impl Cli {
    /// JSON file (if any) first, then individual flags on top.
    fn sim_config(&self) -> Result<SimConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => SimConfig::default(),
        };

        if let Some(n) = self.elevators   { config.elevator_count = n; }
        if let Some(n) = self.floors      { config.floor_count    = n; }
        if let Some(s) = self.travel_secs { config.travel_secs    = s; }
        if let Some(s) = self.floor_secs  { config.floor_secs     = s; }
        if let Some(t) = self.start       { config.start          = t; }
        if let Some(t) = self.end         { config.end            = t; }
        if self.single_call {
            config.dispatch_mode = DispatchMode::SingleCall;
        }
        Ok(config)
    }

    fn sequence_set(&self) -> Result<SequenceSet> {
        match &self.sequences {
            Some(path) => load_sequences_csv(path)
                .with_context(|| format!("loading sequences from {}", path.display())),
            None => Ok(SequenceSet::default_office()),
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "office=info,lift_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.sim_config()?;
    let sequences = cli.sequence_set()?;
    info!(
        sequences = sequences.len(),
        "building: {} cars, {} floors, {}s/floor, {}s dwell",
        config.elevator_count, config.floor_count, config.travel_secs, config.floor_secs
    );

    let mut sim = SimBuilder::new(config).sequences(sequences).build()?;

    let t0 = Instant::now();
    let table = match &cli.output {
        Some(dir) => run_with_output(&mut sim, &cli, dir)?,
        None => sim.run(&mut NoopObserver)?,
    };
    let elapsed = t0.elapsed();

    if !cli.quiet {
        print!("{}", table::render(&table));
        println!();
    }

    let summary = sim.summary();
    info!(
        rows       = summary.rows,
        dispatches = summary.dispatches,
        calls      = summary.calls_generated,
        "done in {:.2?}",
        elapsed
    );
    if summary.calls_pending > 0 {
        warn!(dropped = summary.calls_pending, "calls left unserved at end of window");
    }
    for (name, distance) in &summary.distances {
        println!("{name}: {distance} floors travelled");
    }
    Ok(())
}

fn run_with_output<D: Dispatcher>(sim: &mut Sim<D>, cli: &Cli, dir: &Path) -> Result<ResultTable> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    #[cfg(feature = "sqlite")]
    {
        if cli.sqlite {
            let table = run_with_writer(sim, lift_output::SqliteWriter::new(dir)?)?;
            info!("output written to {}", dir.join("output.db").display());
            return Ok(table);
        }
    }
    #[cfg(not(feature = "sqlite"))]
    let _ = cli;

    let table = run_with_writer(sim, CsvWriter::new(dir)?)?;
    info!("output written to {}", dir.display());
    Ok(table)
}

fn run_with_writer<D: Dispatcher, W: OutputWriter>(sim: &mut Sim<D>, writer: W) -> Result<ResultTable> {
    let mut obs = SimOutputObserver::new(writer, &sim.fleet.names())?;
    let table = sim.run(&mut obs)?;
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing output");
    }
    Ok(table)
}
