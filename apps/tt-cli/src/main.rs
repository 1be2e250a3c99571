//! tt-cli — build a transit network from segment and schedule files.
//!
//! ```text
//! tt-cli --segments map_data.csv --schedules timetables.csv \
//!        --station Gare --after 07:30 --export out/
//! ```
//!
//! Prints headline counts for the built network, optionally the departure
//! board of one stop, and optionally writes the network as CSV.

mod config;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use serde::Serialize;

use tt_core::Clock;
use tt_network::{NetworkStats, TransitNetwork};
use tt_output::{CsvWriter, export_network};

use config::{CliArgs, RunConfig};

// ── Report ────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Report {
    stats:  NetworkStats,
    boards: Vec<Board>,
}

/// Departures at one station (one line family at the requested stop).
#[derive(Serialize)]
struct Board {
    station:    String,
    family:     String,
    departures: Vec<BoardEntry>,
}

#[derive(Serialize)]
struct BoardEntry {
    time: String,
    line: String,
}

fn boards(net: &TransitNetwork, name: &str, after: Clock, limit: usize) -> Vec<Board> {
    net.stations_named(name)
        .map(|station| Board {
            station:    station.name().to_owned(),
            family:     station.simple_line_name().to_owned(),
            departures: net
                .next_departures(station.id(), after, limit)
                .into_iter()
                .map(|d| BoardEntry {
                    time: d.time.to_string(),
                    line: net.line(d.line).name().to_owned(),
                })
                .collect(),
        })
        .collect()
}

fn print_text(report: &Report) {
    let s = &report.stats;
    println!("stations            {:>8}", s.stations);
    println!("  multi-line        {:>8}", s.multi_line_stations);
    println!("line-variants       {:>8}", s.lines);
    println!("travel edges        {:>8}", s.travel_edges);
    println!("transfer edges      {:>8}", s.transfer_edges);
    println!("start times         {:>8}", s.start_times);
    println!("timetable entries   {:>8}", s.schedule_entries);

    for board in &report.boards {
        println!();
        println!("{} (line {})", board.station, board.family);
        if board.departures.is_empty() {
            println!("  no departures");
        }
        for d in &board.departures {
            println!("  {}  {}", d.time, d.line);
        }
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn run(args: CliArgs) -> Result<()> {
    let cfg = RunConfig::resolve(&args)?;
    let after: Clock = args
        .after
        .parse()
        .with_context(|| format!("invalid --after time {:?}", args.after))?;

    let t0 = Instant::now();
    let net = tt_ingest::load_network(&cfg.load)?;
    info!("network built in {:.2?}", t0.elapsed());

    let mut report = Report { stats: net.stats(), boards: Vec::new() };
    if let Some(name) = &args.station {
        report.boards = boards(&net, name, after, args.limit);
        if report.boards.is_empty() {
            warn!("no station named {name:?}");
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_text(&report);
    }

    if let Some(dir) = &cfg.export_dir {
        let mut writer = CsvWriter::new(dir).with_context(|| format!("creating {}", dir.display()))?;
        export_network(&net, &mut writer)?;
        info!("exported network to {}", dir.display());
    }
    Ok(())
}

fn main() {
    let args = CliArgs::parse();
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(args) {
        error!("tt-cli failed: {e:#}");
        std::process::exit(1);
    }
}
