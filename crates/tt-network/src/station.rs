//! Stations and the name-keyed station registry.
//!
//! # Identity
//!
//! A station is identified by its name **and** its line family, the first
//! whitespace-delimited token of the line name that created it (`"4"` for
//! `"4 variant 2"`).  Two sightings of `"Châtelet"` on line 4 variants reuse
//! one `Station`; a sighting on line 1 creates a second `Station` with the
//! same name, and the two are joined by a transfer edge.

use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use rustc_hash::FxHashMap;

use tt_core::{Clock, GeoPoint, LineId, StationId};

use crate::NetworkResult;
use crate::error::next_id;
use crate::graph::{EdgeKind, NetworkGraph, TRANSFER_DISTANCE, TRANSFER_DURATION, TRANSFER_TAG};

// ── Station ───────────────────────────────────────────────────────────────────

/// One stop of one line family.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Station {
    id:         StationId,
    name:       String,
    family:     String,
    pos:        GeoPoint,
    multi_line: bool,
    line_names: BTreeSet<String>,
    schedules:  BTreeMap<LineId, Vec<Clock>>,
}

impl Station {
    fn new(id: StationId, name: &str, line_name: &str, pos: GeoPoint) -> Self {
        Self {
            id,
            name: name.to_owned(),
            family: line_family(line_name).to_owned(),
            pos,
            multi_line: false,
            line_names: BTreeSet::from([line_name.to_owned()]),
            schedules: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The line family this station belongs to (first token of the line
    /// name it was created for).
    pub fn simple_line_name(&self) -> &str {
        &self.family
    }

    /// Coordinates from the first record that mentioned this stop name.
    pub fn pos(&self) -> GeoPoint {
        self.pos
    }

    /// `true` when another line family has a station of the same name.
    pub fn is_multi_line(&self) -> bool {
        self.multi_line
    }

    /// Full names of every line-variant that visits this station, sorted.
    pub fn line_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.line_names.iter().map(String::as_str)
    }

    pub fn serves_line(&self, line_name: &str) -> bool {
        self.line_names.contains(line_name)
    }

    /// Visit times for `line`, in propagation order (one per start time).
    pub fn schedule(&self, line: LineId) -> &[Clock] {
        self.schedules.get(&line).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Visit times for `line`, sorted by time of day.
    pub fn sorted_schedule(&self, line: LineId) -> Vec<Clock> {
        let mut times = self.schedule(line).to_vec();
        times.sort_unstable();
        times
    }

    /// Every `(line, visit times)` pair recorded at this station, in line
    /// order.
    pub fn schedules(&self) -> impl Iterator<Item = (LineId, &[Clock])> + '_ {
        self.schedules.iter().map(|(&line, times)| (line, times.as_slice()))
    }

    pub(crate) fn push_visit(&mut self, line: LineId, time: Clock) {
        self.schedules.entry(line).or_default().push(time);
    }
}

/// First whitespace-delimited token of a line name.
pub(crate) fn line_family(line_name: &str) -> &str {
    line_name.split_whitespace().next().unwrap_or("")
}

// ── StationRegistry ───────────────────────────────────────────────────────────

/// Owns every `Station` created during one build, indexed by name.
#[derive(Clone, Debug, Default)]
pub struct StationRegistry {
    stations: Vec<Station>,
    by_name:  FxHashMap<String, Vec<StationId>>,
}

impl StationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// # Panics
    /// Panics if `id` was not issued by this registry.
    #[inline]
    pub fn get(&self, id: StationId) -> &Station {
        &self.stations[id.index()]
    }

    pub fn as_slice(&self) -> &[Station] {
        &self.stations
    }

    /// All stations sharing `name`, one per line family, in creation order.
    pub fn named(&self, name: &str) -> &[StationId] {
        self.by_name.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Return the station for (`name`, family of `line_name`), creating it
    /// if this is the family's first sighting of the stop.
    ///
    /// Creating a station for a name that other families already use marks
    /// every station involved as multi-line and links the new station to
    /// each existing one with a transfer edge in `graph`.  Coordinates are
    /// taken from the first station ever registered under `name`; later
    /// coordinates for the same name are discarded.
    pub fn resolve_or_create(
        &mut self,
        name:      &str,
        line_name: &str,
        pos:       GeoPoint,
        graph:     &mut NetworkGraph,
    ) -> NetworkResult<StationId> {
        let family = line_family(line_name);
        let candidates = self.named(name).to_vec();

        let pos = match candidates.first() {
            Some(&first) => {
                let known = self.get(first).pos;
                if known != pos {
                    debug!("station {name:?}: keeping first-seen coordinates {known}, ignoring {pos}");
                }
                known
            }
            None => pos,
        };

        if let Some(&same) = candidates.iter().find(|&&c| self.get(c).family == family) {
            self.stations[same.index()].line_names.insert(line_name.to_owned());
            return Ok(same);
        }

        let id: StationId = next_id(self.stations.len(), "stations")?;
        let mut station = Station::new(id, name, line_name, pos);

        for &other in &candidates {
            station.multi_line = true;
            self.stations[other.index()].multi_line = true;
            graph.add_edge(
                id,
                other,
                TRANSFER_DURATION,
                TRANSFER_DISTANCE,
                EdgeKind::Transfer,
                TRANSFER_TAG,
            )?;
        }

        self.stations.push(station);
        self.by_name.entry(name.to_owned()).or_default().push(id);
        Ok(id)
    }

    pub(crate) fn get_mut(&mut self, id: StationId) -> &mut Station {
        &mut self.stations[id.index()]
    }
}
