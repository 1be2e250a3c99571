//! `tt-output` — writers for the artifacts of a built `TransitNetwork`.
//!
//! | Backend | Files created                                                  |
//! |---------|----------------------------------------------------------------|
//! | CSV     | `stations.csv`, `lines.csv`, `edges.csv`, `timetables.csv`     |
//!
//! Backends implement [`OutputWriter`]; [`export_network`] flattens a
//! network into row types and drives any writer.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tt_output::{CsvWriter, export_network};
//!
//! let mut writer = CsvWriter::new(Path::new("./out"))?;
//! export_network(&network, &mut writer)?;
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod row;
pub mod writer;


pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use export::export_network;
pub use row::{EdgeRow, LineRow, StationRow, VisitRow};
pub use writer::OutputWriter;
