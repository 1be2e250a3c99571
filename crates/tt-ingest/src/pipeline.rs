//! End-to-end build: open both streams, run the segment pass, the schedule
//! pass, and propagation.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use log::info;

use tt_network::{NetworkBuilder, TransitNetwork};

use crate::reader::{for_each_schedule, for_each_segment};
use crate::{IngestError, IngestResult, LoadConfig, Stream};

/// Build a [`TransitNetwork`] from the files named in `config`.
///
/// Both files are opened before either is read, so a missing input fails
/// with [`IngestError::MissingSource`] before any work is done.
pub fn load_network(config: &LoadConfig) -> IngestResult<TransitNetwork> {
    let segments = open_source(Stream::Segments, &config.segments_path)?;
    let schedules = open_source(Stream::Schedules, &config.schedules_path)?;

    info!(
        "loading segments from {} and schedules from {}",
        config.segments_path.display(),
        config.schedules_path.display(),
    );
    load_network_reader(segments, schedules)
}

/// Like [`load_network`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded data.
pub fn load_network_reader<S: Read, T: Read>(segments: S, schedules: T) -> IngestResult<TransitNetwork> {
    let mut builder = NetworkBuilder::new();
    let read = for_each_segment(segments, |line, record| {
        builder
            .add_segment(&record)
            .map_err(|source| IngestError::Rejected { stream: Stream::Segments, line, source })
    })?;
    info!("read {read} segment records");

    let mut schedule = builder.finish();
    let read = for_each_schedule(schedules, |line, record| {
        schedule
            .add_start(&record)
            .map_err(|source| IngestError::Rejected { stream: Stream::Schedules, line, source })
    })?;
    info!("read {read} schedule records");

    Ok(schedule.build()?)
}

fn open_source(what: Stream, path: &Path) -> IngestResult<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(IngestError::MissingSource {
            what,
            path: path.to_path_buf(),
        }),
        Err(e) => Err(IngestError::Io(e)),
    }
}
