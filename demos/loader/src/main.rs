//! rt-loader — the external collaborator around the simulation core:
//! parses a JSON topology file, wires up a running simulation over the
//! `rt-*` core crates, drains the `Event` stream into human-readable log
//! lines, and runs the optional operator command loop.
//!
//! None of this binary is "core" — the `rt-*` library crates have no
//! dependency on JSON, CLI parsing, or logging configuration.

mod dto;
mod error;
mod load;

#[cfg(test)]
mod tests;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use rt_output::{ChannelSink, EventKind, SharedSink};
use rt_sim::SimBuilder;

use error::RunError;
use load::LoadedSimulation;

#[derive(Parser, Debug)]
#[command(author, version, about = "Run a transport-network simulation from a JSON topology file")]
struct Args {
    /// Path to the topology JSON file.
    topology: PathBuf,

    /// RNG seed; defaults to a fixed value so runs are reproducible.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(err) => {
            tracing::error!(%err, "failed to start tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(args)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "run failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), RunError> {
    let LoadedSimulation { topology, config, trains, repair_vehicles } =
        load::load_from_path(&args.topology)?;

    let (sink, mut events) = ChannelSink::new();
    let sink: SharedSink = Arc::new(sink);

    let mut builder = SimBuilder::new(topology, config, args.seed).sink(sink);
    for train in trains {
        builder = builder.train(train);
    }
    for repair_vehicle in repair_vehicles {
        builder = builder.repair_vehicle(repair_vehicle);
    }
    let simulation = builder.build()?;

    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            log_event(&event.source, event.seq, &event.kind);
        }
    });

    operator_loop(&simulation).await;
    Ok(())
}

/// Drains the domain `Event` stream into a readable operational line.
/// Separate from `tracing`'s own per-actor debug/info lines — this is the
/// observable stream, rendered for humans.
fn log_event(source: &str, seq: u64, kind: &EventKind) {
    match kind {
        EventKind::LocationRequest { kind: request_kind, sender, accepted } => {
            tracing::info!(%source, seq, %sender, ?request_kind, accepted, "location request");
        }
        EventKind::LocationFailed => tracing::warn!(%source, seq, "location failed"),
        EventKind::LocationRepaired => tracing::info!(%source, seq, "location repaired"),
        EventKind::TrainFailed { train } => tracing::warn!(%source, seq, %train, "train failed"),
        EventKind::TrainRepaired { train } => tracing::info!(%source, seq, %train, "train repaired"),
        EventKind::EmergencyRaised { key } => tracing::warn!(%source, seq, key, "emergency raised"),
        EventKind::EmergencyCleared { key } => tracing::info!(%source, seq, key, "emergency cleared"),
        EventKind::TaskGenerated { worker_count, duration_hours } => {
            tracing::debug!(%source, seq, worker_count, duration_hours, "task generated");
        }
        EventKind::VehicleArrived { location } => {
            tracing::debug!(%source, seq, location, "vehicle arrived");
        }
    }
}

/// Reads `list`/`quit` lines from stdin, the optional operator surface.
/// Running non-interactively (no terminal attached, e.g. under a test
/// harness) the loop exits as soon as stdin closes rather than blocking
/// forever.
async fn operator_loop(simulation: &rt_sim::Simulation) {
    if !std::io::stdin().is_terminal() {
        tracing::info!("no terminal attached; skipping operator command loop");
        return;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => return,
            Err(err) => {
                tracing::warn!(%err, "reading operator command");
                return;
            }
        };
        match line.trim() {
            "list" => {
                for (vehicle, location) in simulation.vehicle_locations() {
                    println!("{vehicle}: {location}");
                }
            }
            "quit" => {
                println!("shutting down");
                std::process::exit(0);
            }
            "" => {}
            other => println!("unrecognised command: {other:?} (try \"list\" or \"quit\")"),
        }
    }
}
