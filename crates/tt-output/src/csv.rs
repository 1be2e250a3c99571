//! CSV output backend.
//!
//! Creates four files in the configured output directory:
//! - `stations.csv`
//! - `lines.csv`
//! - `edges.csv`
//! - `timetables.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{EdgeRow, LineRow, OutputResult, StationRow, VisitRow};
use crate::writer::OutputWriter;

/// Writes an exported network to four CSV files.
pub struct CsvWriter {
    stations: Writer<File>,
    lines:    Writer<File>,
    edges:    Writer<File>,
    visits:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the four CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut stations = Writer::from_path(dir.join("stations.csv"))?;
        stations.write_record(["station_id", "name", "line_family", "lat", "lon", "multi_line", "lines"])?;

        let mut lines = Writer::from_path(dir.join("lines.csv"))?;
        lines.write_record(["line_id", "name", "departure", "arrival", "stations", "start_times"])?;

        let mut edges = Writer::from_path(dir.join("edges.csv"))?;
        edges.write_record(["edge_id", "station_a", "station_b", "line", "duration_secs", "distance", "transfer"])?;

        let mut visits = Writer::from_path(dir.join("timetables.csv"))?;
        visits.write_record(["station_id", "station", "line_id", "line", "time"])?;

        Ok(Self {
            stations,
            lines,
            edges,
            visits,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_stations(&mut self, rows: &[StationRow]) -> OutputResult<()> {
        for row in rows {
            self.stations.write_record(&[
                row.station_id.to_string(),
                row.name.clone(),
                row.line_family.clone(),
                row.lat.to_string(),
                row.lon.to_string(),
                (row.multi_line as u8).to_string(),
                row.lines.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_lines(&mut self, rows: &[LineRow]) -> OutputResult<()> {
        for row in rows {
            self.lines.write_record(&[
                row.line_id.to_string(),
                row.name.clone(),
                row.departure.to_string(),
                row.arrival.to_string(),
                row.stations.clone(),
                row.start_times.clone(),
            ])?;
        }
        Ok(())
    }

    fn write_edges(&mut self, rows: &[EdgeRow]) -> OutputResult<()> {
        for row in rows {
            self.edges.write_record(&[
                row.edge_id.to_string(),
                row.station_a.to_string(),
                row.station_b.to_string(),
                row.line_name.clone(),
                row.duration_secs.to_string(),
                row.distance.to_string(),
                (row.transfer as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_visits(&mut self, rows: &[VisitRow]) -> OutputResult<()> {
        for row in rows {
            self.visits.write_record(&[
                row.station_id.to_string(),
                row.station_name.clone(),
                row.line_id.to_string(),
                row.line_name.clone(),
                row.time.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.stations.flush()?;
        self.lines.flush()?;
        self.edges.flush()?;
        self.visits.flush()?;
        Ok(())
    }
}
