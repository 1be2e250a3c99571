//! Record tokenizing and parsing.
//!
//! # Segment records (7 fields)
//!
//! ```text
//! Lourmel;48.838,2.282;Boucicaut;48.841,2.287;8 variant 1;01:20;0.63
//! ```
//!
//! | # | Field       | Parsed as                                  |
//! |---|-------------|--------------------------------------------|
//! | 0 | from name   | trimmed string                             |
//! | 1 | from coords | `GeoPoint` from `"lat,lon"`                |
//! | 2 | to name     | trimmed string                             |
//! | 3 | to coords   | `GeoPoint` from `"lat,lon"`                |
//! | 4 | line        | full line-variant name                     |
//! | 5 | travel time | `JourneyDuration` from `"MM:SS"`           |
//! | 6 | distance    | `f32`                                      |
//!
//! # Schedule records (4 fields)
//!
//! ```text
//! 8;Balard;06:12;1
//! ```
//!
//! base line name, departure terminus, start time `"HH:MM"`, variant suffix.

use std::io::Read;

use serde::Deserialize;

use tt_core::{Clock, GeoPoint, JourneyDuration};
use tt_network::{ScheduleRecord, SegmentRecord, StopRef};

use crate::{IngestResult, MalformedRecord, Stream};

const SEGMENT_FIELDS: usize = 7;
const SCHEDULE_FIELDS: usize = 4;

// ── Row structs ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SegmentRow {
    from_name:   String,
    from_pos:    String,
    to_name:     String,
    to_pos:      String,
    line:        String,
    travel_time: String,
    distance:    f32,
}

#[derive(Deserialize)]
struct ScheduleRow {
    line:     String,
    terminus: String,
    start:    String,
    variant:  String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Parse every segment record of `reader`.
pub fn read_segments<R: Read>(reader: R) -> IngestResult<Vec<SegmentRecord>> {
    let mut out = Vec::new();
    for_each_segment(reader, |_, record| {
        out.push(record);
        Ok(())
    })?;
    Ok(out)
}

/// Parse every schedule record of `reader`.
pub fn read_schedules<R: Read>(reader: R) -> IngestResult<Vec<ScheduleRecord>> {
    let mut out = Vec::new();
    for_each_schedule(reader, |_, record| {
        out.push(record);
        Ok(())
    })?;
    Ok(out)
}

// ── Streaming ─────────────────────────────────────────────────────────────────

/// Call `f(line, record)` for each parsed segment, stopping at the first
/// error.  Returns the number of records seen.
pub(crate) fn for_each_segment<R, F>(reader: R, mut f: F) -> IngestResult<usize>
where
    R: Read,
    F: FnMut(u64, SegmentRecord) -> IngestResult<()>,
{
    for_each_record(reader, Stream::Segments, SEGMENT_FIELDS, |line, raw| {
        let record = parse_segment(raw).map_err(|reason| malformed(Stream::Segments, line, raw, reason))?;
        f(line, record)
    })
}

pub(crate) fn for_each_schedule<R, F>(reader: R, mut f: F) -> IngestResult<usize>
where
    R: Read,
    F: FnMut(u64, ScheduleRecord) -> IngestResult<()>,
{
    for_each_record(reader, Stream::Schedules, SCHEDULE_FIELDS, |line, raw| {
        let record = parse_schedule(raw).map_err(|reason| malformed(Stream::Schedules, line, raw, reason))?;
        f(line, record)
    })
}

fn for_each_record<R, F>(reader: R, stream: Stream, fields: usize, mut f: F) -> IngestResult<usize>
where
    R: Read,
    F: FnMut(u64, &csv::StringRecord) -> IngestResult<()>,
{
    // Records are split on `;` only; quotes and commas inside fields are
    // literal text.
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    // Read bytes so that a record with invalid UTF-8 is still reported with
    // its text and line.
    let mut bytes = csv::ByteRecord::new();
    let mut count = 0;
    while csv_reader.read_byte_record(&mut bytes)? {
        let line = bytes.position().map_or(0, |p| p.line());
        let mut raw = match csv::StringRecord::from_byte_record(bytes.clone()) {
            Ok(raw) => raw,
            Err(e) => {
                let field = e.utf8_error().field();
                return Err(MalformedRecord {
                    stream,
                    line,
                    record: lossy(&e.into_byte_record()),
                    reason: format!("invalid UTF-8 in field {field}"),
                }
                .into());
            }
        };
        raw.trim();
        if raw.len() != fields {
            return Err(malformed(
                stream,
                line,
                &raw,
                format!("expected {fields} fields, found {}", raw.len()),
            )
            .into());
        }
        f(line, &raw)?;
        count += 1;
    }
    Ok(count)
}

// ── Parsing ───────────────────────────────────────────────────────────────────

fn parse_segment(raw: &csv::StringRecord) -> Result<SegmentRecord, String> {
    let row: SegmentRow = raw.deserialize(None).map_err(|e| e.to_string())?;
    let from_pos: GeoPoint = row.from_pos.parse().map_err(|e| format!("{e}"))?;
    let to_pos: GeoPoint = row.to_pos.parse().map_err(|e| format!("{e}"))?;
    let duration: JourneyDuration = row.travel_time.parse().map_err(|e| format!("{e}"))?;

    if row.from_name.is_empty() || row.to_name.is_empty() {
        return Err("empty station name".to_owned());
    }
    if row.line.is_empty() {
        return Err("empty line name".to_owned());
    }
    if !row.distance.is_finite() {
        return Err(format!("invalid distance {}", row.distance));
    }

    Ok(SegmentRecord {
        from:     StopRef::new(row.from_name, from_pos),
        to:       StopRef::new(row.to_name, to_pos),
        line:     row.line,
        duration,
        distance: row.distance,
    })
}

fn parse_schedule(raw: &csv::StringRecord) -> Result<ScheduleRecord, String> {
    let row: ScheduleRow = raw.deserialize(None).map_err(|e| e.to_string())?;
    let start: Clock = row.start.parse().map_err(|e| format!("{e}"))?;

    if row.line.is_empty() || row.variant.is_empty() {
        return Err("empty line name or variant".to_owned());
    }

    Ok(ScheduleRecord {
        line:     row.line,
        terminus: row.terminus,
        start,
        variant:  row.variant,
    })
}

fn lossy(bytes: &csv::ByteRecord) -> String {
    bytes.iter().map(String::from_utf8_lossy).collect::<Vec<_>>().join(";")
}

fn malformed(stream: Stream, line: u64, raw: &csv::StringRecord, reason: String) -> MalformedRecord {
    MalformedRecord {
        stream,
        line,
        record: raw.iter().collect::<Vec<_>>().join(";"),
        reason,
    }
}
