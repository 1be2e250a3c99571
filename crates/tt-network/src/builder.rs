//! The two build passes.
//!
//! [`NetworkBuilder`] consumes segment records in stream order; its
//! [`finish`](NetworkBuilder::finish) hands over to a [`ScheduleBuilder`],
//! which consumes schedule records and finally propagates timetables in
//! [`build`](ScheduleBuilder::build).  The split makes it impossible to add
//! a start time before every line-variant has been finalized.
//!
//! # Example
//!
//! ```
//! use tt_core::{Clock, GeoPoint, JourneyDuration};
//! use tt_network::{NetworkBuilder, ScheduleRecord, SegmentRecord, StopRef};
//!
//! let stop = |name: &str| StopRef::new(name, GeoPoint::new(48.85, 2.35));
//! let mut b = NetworkBuilder::new();
//! b.add_segment(&SegmentRecord {
//!     from:     stop("A"),
//!     to:       stop("B"),
//!     line:     "1 variant 1".into(),
//!     duration: JourneyDuration::new(1, 30),
//!     distance: 0.8,
//! })?;
//!
//! let mut s = b.finish();
//! s.add_start(&ScheduleRecord {
//!     line:     "1".into(),
//!     terminus: "A".into(),
//!     start:    Clock::from_hms(8, 0, 0).unwrap(),
//!     variant:  "1".into(),
//! })?;
//! let net = s.build()?;
//! assert_eq!(net.stats().schedule_entries, 2);
//! # Ok::<(), tt_network::NetworkError>(())
//! ```

use log::{debug, info, warn};

use crate::graph::{EdgeKind, NetworkGraph};
use crate::line::{LineBuilder, LineRegistry};
use crate::network::TransitNetwork;
use crate::propagate::propagate_all;
use crate::record::{ScheduleRecord, SegmentRecord};
use crate::station::StationRegistry;
use crate::{NetworkError, NetworkResult};

// ── NetworkBuilder ────────────────────────────────────────────────────────────

/// Segment pass: stations, transfer edges, travel edges, and line-variants.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    stations:   StationRegistry,
    lines:      LineRegistry,
    graph:      NetworkGraph,
    current:    Option<LineBuilder>,
    segments:   usize,
    self_loops: usize,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest one segment record.
    ///
    /// A record whose line name differs from the previous record's starts a
    /// new line-variant departing from `record.from`; the previous variant
    /// is finalized with the arrival station of its last traversable
    /// segment.  A record whose two ends resolve to the same station adds
    /// no edge, no station, and no duration.
    pub fn add_segment(&mut self, record: &SegmentRecord) -> NetworkResult<()> {
        let from = self.stations.resolve_or_create(
            &record.from.name,
            &record.line,
            record.from.pos,
            &mut self.graph,
        )?;
        let to = self.stations.resolve_or_create(
            &record.to.name,
            &record.line,
            record.to.pos,
            &mut self.graph,
        )?;
        self.segments += 1;

        let mut line = match self.current.take() {
            Some(line) if line.name() == record.line => line,
            previous => {
                if let Some(previous) = previous {
                    self.finalize(previous);
                }
                if self.lines.find(&record.line).is_some() {
                    return Err(NetworkError::DuplicateLineVariant { line: record.line.clone() });
                }
                debug!("line variant {:?} starts at {:?}", record.line, record.from.name);
                LineBuilder::new(self.lines.next_id()?, record.line.clone(), from)
            }
        };

        if from == to {
            self.self_loops += 1;
            debug!("line {:?}: self-loop at {:?} ignored", record.line, record.from.name);
        } else {
            line.push_segment(from, to, record.duration);
            self.graph.add_edge(
                from,
                to,
                record.duration,
                record.distance,
                EdgeKind::Travel(line.id()),
                &record.line,
            )?;
        }

        self.current = Some(line);
        Ok(())
    }

    /// Finalize the last line-variant and move on to the schedule pass.
    pub fn finish(mut self) -> ScheduleBuilder {
        if let Some(line) = self.current.take() {
            self.finalize(line);
        }
        info!(
            "segment pass: {} records ({} self-loops) → {} stations, {} line variants, {} edges ({} transfers)",
            self.segments,
            self.self_loops,
            self.stations.len(),
            self.lines.len(),
            self.graph.edge_count(),
            self.graph.transfer_edges().count(),
        );
        ScheduleBuilder {
            stations:  self.stations,
            lines:     self.lines,
            graph:     self.graph,
            starts:    0,
            duplicate: 0,
        }
    }

    fn finalize(&mut self, line: LineBuilder) {
        let (line, durations) = line.finish();
        debug!(
            "line variant {:?} finalized: {} stations, {} durations",
            line.name(),
            line.stations().len(),
            durations.len(),
        );
        self.lines.insert(line, durations);
    }
}

// ── ScheduleBuilder ───────────────────────────────────────────────────────────

/// Schedule pass: validated start times, then propagation.
#[derive(Debug)]
pub struct ScheduleBuilder {
    stations:  StationRegistry,
    lines:     LineRegistry,
    graph:     NetworkGraph,
    starts:    usize,
    duplicate: usize,
}

impl ScheduleBuilder {
    /// Record a start time for the line-variant named by `record`.
    ///
    /// The variant must exist and depart from a station named
    /// `record.terminus`.  A start time the variant already has is ignored.
    pub fn add_start(&mut self, record: &ScheduleRecord) -> NetworkResult<()> {
        let name = record.variant_name();
        let id = self
            .lines
            .find(&name)
            .ok_or_else(|| NetworkError::UnknownLineReference { line: name.clone() })?;

        let departure = self.stations.get(self.lines.get(id).terminal_departure());
        if departure.name() != record.terminus {
            return Err(NetworkError::TerminusMismatch {
                line:     name,
                expected: departure.name().to_owned(),
                actual:   record.terminus.clone(),
            });
        }

        if self.lines.add_start(id, record.start) {
            self.starts += 1;
        } else {
            self.duplicate += 1;
            warn!("line {name:?}: duplicate start time {} ignored", record.start);
        }
        Ok(())
    }

    /// Propagate every line's start times and freeze the network.
    pub fn build(mut self) -> NetworkResult<TransitNetwork> {
        let entries = propagate_all(&self.lines, &mut self.stations)?;
        info!(
            "schedule pass: {} start times ({} duplicates ignored) → {} schedule entries",
            self.starts, self.duplicate, entries,
        );
        Ok(TransitNetwork::new(self.stations, self.lines, self.graph))
    }
}
