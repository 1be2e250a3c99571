//! `tt-ingest` — reading the segment and schedule streams and running the
//! two build passes.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`reader`]   | `read_segments`, `read_schedules`, record parsing          |
//! | [`pipeline`] | `load_network`, `load_network_reader`                      |
//! | [`config`]   | `LoadConfig`                                               |
//! | [`error`]    | `IngestError`, `MalformedRecord`, `IngestResult<T>`        |
//!
//! # Input format
//!
//! Both streams are `;`-delimited, headerless, one record per line.
//!
//! ```text
//! segments:   from;lat,lon;to;lat,lon;line variant;MM:SS;distance
//! schedules:  line;terminus;HH:MM;variant
//! ```
//!
//! Any defect aborts the build: there is no partially loaded network.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod reader;


pub use config::LoadConfig;
pub use error::{IngestError, IngestResult, MalformedRecord, Stream};
pub use pipeline::{load_network, load_network_reader};
pub use reader::{read_schedules, read_segments};
