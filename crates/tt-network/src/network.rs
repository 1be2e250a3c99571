//! The finished, read-only transit network.

use tt_core::{Clock, EdgeId, JourneyDuration, LineId, StationId};

use crate::graph::{EdgeTransport, NetworkGraph};
use crate::line::{Line, LineRegistry};
use crate::station::{Station, StationRegistry};

/// Stations with their timetables, line-variants, and the edge graph.
///
/// Produced only by [`ScheduleBuilder::build`](crate::ScheduleBuilder::build);
/// exposes no mutation.  Ids handed out by one network index only that
/// network; accessors taking an id panic on a foreign one.
#[derive(Clone, Debug)]
pub struct TransitNetwork {
    stations: StationRegistry,
    lines:    LineRegistry,
    graph:    NetworkGraph,
}

/// One scheduled visit of a line at a station.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Departure {
    pub time: Clock,
    pub line: LineId,
}

/// Headline counts for a built network.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkStats {
    pub stations:            usize,
    pub multi_line_stations: usize,
    pub lines:               usize,
    pub travel_edges:        usize,
    pub transfer_edges:      usize,
    pub start_times:         usize,
    pub schedule_entries:    usize,
}

impl TransitNetwork {
    pub(crate) fn new(stations: StationRegistry, lines: LineRegistry, graph: NetworkGraph) -> Self {
        Self { stations, lines, graph }
    }

    // ── Stations ──────────────────────────────────────────────────────────

    pub fn stations(&self) -> &[Station] {
        self.stations.as_slice()
    }

    #[inline]
    pub fn station(&self, id: StationId) -> &Station {
        self.stations.get(id)
    }

    /// Every station called `name`, one per line family.
    pub fn stations_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Station> + 'a {
        self.stations.named(name).iter().map(|&id| self.stations.get(id))
    }

    // ── Lines ─────────────────────────────────────────────────────────────

    pub fn lines(&self) -> &[Line] {
        self.lines.as_slice()
    }

    #[inline]
    pub fn line(&self, id: LineId) -> &Line {
        self.lines.get(id)
    }

    pub fn line_by_name(&self, name: &str) -> Option<&Line> {
        self.lines.find(name).map(|id| self.lines.get(id))
    }

    /// Ordered segment durations of a line; `durations(l).len() + 1 ==
    /// line(l).stations().len()`.
    pub fn durations(&self, line: LineId) -> &[JourneyDuration] {
        self.lines.durations(line)
    }

    // ── Edges ─────────────────────────────────────────────────────────────

    pub fn edges(&self) -> &[EdgeTransport] {
        self.graph.edges()
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &EdgeTransport {
        self.graph.edge(id)
    }

    pub fn edges_between(&self, a: StationId, b: StationId) -> impl Iterator<Item = &EdgeTransport> + '_ {
        self.graph.edges_between(a, b)
    }

    pub fn edges_of(&self, station: StationId) -> impl Iterator<Item = &EdgeTransport> + '_ {
        self.graph.edges_of(station)
    }

    pub fn transfer_edges(&self) -> impl Iterator<Item = &EdgeTransport> + '_ {
        self.graph.transfer_edges()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Up to `limit` visits at `station`, across all of its lines, at or
    /// after `after`, ordered by time then line.  Does not wrap past
    /// midnight.
    pub fn next_departures(&self, station: StationId, after: Clock, limit: usize) -> Vec<Departure> {
        let mut out: Vec<Departure> = self
            .station(station)
            .schedules()
            .flat_map(|(line, times)| {
                times
                    .iter()
                    .filter(move |&&time| time >= after)
                    .map(move |&time| Departure { time, line })
            })
            .collect();
        out.sort_unstable();
        out.dedup();
        out.truncate(limit);
        out
    }

    pub fn stats(&self) -> NetworkStats {
        let stations = self.stations();
        let transfer_edges = self.graph.transfer_edges().count();
        NetworkStats {
            stations:            stations.len(),
            multi_line_stations: stations.iter().filter(|s| s.is_multi_line()).count(),
            lines:               self.lines.len(),
            travel_edges:        self.graph.edge_count() - transfer_edges,
            transfer_edges,
            start_times:         self.lines().iter().map(|l| l.start_times().len()).sum(),
            schedule_entries:    stations
                .iter()
                .flat_map(Station::schedules)
                .map(|(_, times)| times.len())
                .sum(),
        }
    }
}
