//! Line-variants and their registry.
//!
//! A line-variant is built in two phases.  While its segments are being read
//! it lives in a [`LineBuilder`], which does not yet know its arrival
//! terminus.  When the segment stream moves on to another variant (or ends)
//! the builder is finished into an immutable [`Line`] plus its ordered
//! duration list, and both are handed to the [`LineRegistry`].

use rustc_hash::FxHashMap;

use tt_core::{Clock, JourneyDuration, LineId, StationId};

use crate::NetworkResult;
use crate::error::next_id;

/// Full line-variant name for a base line name and a variant suffix.
///
/// ```
/// assert_eq!(tt_network::variant_name("4", "2"), "4 variant 2");
/// ```
pub fn variant_name(base: &str, suffix: &str) -> String {
    format!("{base} variant {suffix}")
}

// ── Line ──────────────────────────────────────────────────────────────────────

/// A finished line-variant.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub(crate) id:                 LineId,
    pub(crate) name:               String,
    pub(crate) stations:           Vec<StationId>,
    pub(crate) terminal_departure: StationId,
    pub(crate) terminal_arrival:   StationId,
    pub(crate) start_times:        Vec<Clock>,
}

impl Line {
    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stations in the order the segment stream first reached them.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    pub fn terminal_departure(&self) -> StationId {
        self.terminal_departure
    }

    pub fn terminal_arrival(&self) -> StationId {
        self.terminal_arrival
    }

    /// Start times at the departure terminus, in the order they were read.
    pub fn start_times(&self) -> &[Clock] {
        &self.start_times
    }
}

// ── LineBuilder ───────────────────────────────────────────────────────────────

/// A line-variant whose segments are still being read.
#[derive(Debug)]
pub(crate) struct LineBuilder {
    id:           LineId,
    name:         String,
    departure:    StationId,
    stations:     Vec<StationId>,
    durations:    Vec<JourneyDuration>,
    last_arrival: Option<StationId>,
}

impl LineBuilder {
    pub(crate) fn new(id: LineId, name: String, departure: StationId) -> Self {
        Self {
            id,
            name,
            departure,
            stations: Vec::new(),
            durations: Vec::new(),
            last_arrival: None,
        }
    }

    pub(crate) fn id(&self) -> LineId {
        self.id
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Record one traversable hop `from → to` taking `duration`.
    pub(crate) fn push_segment(&mut self, from: StationId, to: StationId, duration: JourneyDuration) {
        for station in [from, to] {
            if !self.stations.contains(&station) {
                self.stations.push(station);
            }
        }
        self.durations.push(duration);
        self.last_arrival = Some(to);
    }

    /// Fix the arrival terminus and split into the finished line and its
    /// duration list.
    pub(crate) fn finish(self) -> (Line, Vec<JourneyDuration>) {
        let line = Line {
            id:                 self.id,
            name:               self.name,
            stations:           self.stations,
            terminal_departure: self.departure,
            terminal_arrival:   self.last_arrival.unwrap_or(self.departure),
            start_times:        Vec::new(),
        };
        (line, self.durations)
    }
}

// ── LineRegistry ──────────────────────────────────────────────────────────────

/// Owns every finished line-variant and its ordered segment durations.
#[derive(Clone, Debug, Default)]
pub struct LineRegistry {
    lines:     Vec<Line>,
    durations: Vec<Vec<JourneyDuration>>,
    by_name:   FxHashMap<String, LineId>,
}

impl LineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The id the next inserted line will receive.
    pub(crate) fn next_id(&self) -> NetworkResult<LineId> {
        next_id(self.lines.len(), "line variants")
    }

    pub(crate) fn insert(&mut self, line: Line, durations: Vec<JourneyDuration>) {
        debug_assert_eq!(line.id.index(), self.lines.len());
        self.by_name.insert(line.name.clone(), line.id);
        self.lines.push(line);
        self.durations.push(durations);
    }

    /// # Panics
    /// Panics if `id` was not issued by this registry.
    #[inline]
    pub fn get(&self, id: LineId) -> &Line {
        &self.lines[id.index()]
    }

    pub fn as_slice(&self) -> &[Line] {
        &self.lines
    }

    pub fn find(&self, name: &str) -> Option<LineId> {
        self.by_name.get(name).copied()
    }

    /// Ordered segment durations of `id`; one fewer than its stations.
    pub fn durations(&self, id: LineId) -> &[JourneyDuration] {
        &self.durations[id.index()]
    }

    /// Add `start` to the line's start times.  Returns `false` (and records
    /// nothing) if the line already has that start time.
    pub(crate) fn add_start(&mut self, id: LineId, start: Clock) -> bool {
        let starts = &mut self.lines[id.index()].start_times;
        if starts.contains(&start) {
            return false;
        }
        starts.push(start);
        true
    }
}
