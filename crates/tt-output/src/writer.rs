//! The `OutputWriter` trait implemented by all backend writers.

use crate::{EdgeRow, LineRow, OutputResult, StationRow, VisitRow};

/// Sink for the four row kinds of an exported network.
pub trait OutputWriter {
    fn write_stations(&mut self, rows: &[StationRow]) -> OutputResult<()>;

    fn write_lines(&mut self, rows: &[LineRow]) -> OutputResult<()>;

    fn write_edges(&mut self, rows: &[EdgeRow]) -> OutputResult<()>;

    /// Write a batch of scheduled visits.
    fn write_visits(&mut self, rows: &[VisitRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
