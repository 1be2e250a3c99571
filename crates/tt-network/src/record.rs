//! Typed input records consumed by the two build passes.
//!
//! Text tokenizing lives in `tt-ingest`; by the time a record reaches this
//! crate every field has been parsed into its value type.

use tt_core::{Clock, GeoPoint, JourneyDuration};

use crate::line::variant_name;

/// One end of a segment: a stop name and the coordinates given for it on
/// this record.
#[derive(Clone, Debug, PartialEq)]
pub struct StopRef {
    pub name: String,
    pub pos:  GeoPoint,
}

impl StopRef {
    pub fn new(name: impl Into<String>, pos: GeoPoint) -> Self {
        Self { name: name.into(), pos }
    }
}

/// A timed hop between two consecutive stops of one line-variant.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentRecord {
    pub from:     StopRef,
    pub to:       StopRef,
    /// Full line-variant name, e.g. `"4 variant 2"`.
    pub line:     String,
    pub duration: JourneyDuration,
    pub distance: f32,
}

/// A departure from the origin terminus of one line-variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleRecord {
    /// Line name without the variant suffix, e.g. `"4"`.
    pub line:     String,
    pub terminus: String,
    pub start:    Clock,
    pub variant:  String,
}

impl ScheduleRecord {
    /// The full line-variant name this record refers to.
    pub fn variant_name(&self) -> String {
        variant_name(&self.line, &self.variant)
    }
}
