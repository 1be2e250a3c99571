//! Command-line arguments and the optional TOML run file.
//!
//! ```toml
//! [input]
//! segments_path  = "data/map_data.csv"
//! schedules_path = "data/timetables.csv"
//!
//! [output]
//! dir = "out"
//! ```
//!
//! Paths given on the command line take precedence over the file.  An
//! `[input]` table must name both paths.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::info;
use serde::Deserialize;

use tt_ingest::LoadConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Segment records (`from;lat,lon;to;lat,lon;line;MM:SS;distance`).
    #[arg(long)]
    pub segments: Option<PathBuf>,

    /// Schedule records (`line;terminus;HH:MM;variant`).
    #[arg(long)]
    pub schedules: Option<PathBuf>,

    /// TOML run file supplying any paths not given as arguments.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the departure board of every station with this name.
    #[arg(long)]
    pub station: Option<String>,

    /// Only list departures at or after this time (`HH:MM[:SS]`).
    #[arg(long, default_value = "00:00")]
    pub after: String,

    /// Maximum departures listed per station.
    #[arg(long, default_value_t = 10)]
    pub limit: usize,

    /// Write stations, lines, edges, and timetables as CSV into this directory.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Log at debug level (overridden by `RUST_LOG`).
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct RunFile {
    input:  Option<LoadConfig>,
    #[serde(default)]
    output: OutputSection,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct OutputSection {
    dir: Option<PathBuf>,
}

/// Everything one run needs, after merging arguments over the run file.
#[derive(Debug, PartialEq)]
pub struct RunConfig {
    pub load:       LoadConfig,
    pub export_dir: Option<PathBuf>,
}

impl RunConfig {
    pub fn resolve(args: &CliArgs) -> Result<Self> {
        let file = match &args.config {
            Some(path) => read_run_file(path)?,
            None => RunFile::default(),
        };
        Self::merge(args, file)
    }

    fn merge(args: &CliArgs, file: RunFile) -> Result<Self> {
        let (seg_file, sched_file) = match file.input {
            Some(input) => (Some(input.segments_path), Some(input.schedules_path)),
            None => (None, None),
        };
        let Some(segments) = args.segments.clone().or(seg_file) else {
            bail!("no segments input: pass --segments or set input.segments_path");
        };
        let Some(schedules) = args.schedules.clone().or(sched_file) else {
            bail!("no schedules input: pass --schedules or set input.schedules_path");
        };
        Ok(Self {
            load:       LoadConfig::new(segments, schedules),
            export_dir: args.export.clone().or(file.output.dir),
        })
    }
}

fn read_run_file(path: &Path) -> Result<RunFile> {
    info!("reading run file {}", path.display());
    let content = fs::read_to_string(path).with_context(|| format!("opening run file {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing run file {}", path.display()))
}
