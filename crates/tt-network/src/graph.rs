//! Undirected multigraph of stations joined by timed edges.
//!
//! # Data layout
//!
//! Edges are stored once, in insertion order, and indexed by `EdgeId`.  Two
//! indexes sit on top:
//!
//! ```text
//! by_pair[(min(a,b), max(a,b))] → [EdgeId]   lookup by endpoint pair
//! adjacency[station]            → [EdgeId]   incident edges, for traversal
//! ```
//!
//! Several edges may join the same pair (e.g. two variants of one line both
//! running A–B), hence the `Vec` per key.

use rustc_hash::FxHashMap;

use tt_core::{EdgeId, JourneyDuration, LineId, StationId};

use crate::NetworkResult;
use crate::error::next_id;

/// Line tag carried by transfer edges.
pub const TRANSFER_TAG: &str = "CHANGE";

/// Fixed interchange penalty between co-located stations of different
/// line families.
pub const TRANSFER_DURATION: JourneyDuration = JourneyDuration::from_secs(2 * 60);

/// Placeholder distance of a transfer edge.
pub const TRANSFER_DISTANCE: f32 = 5.0;

// ── EdgeTransport ─────────────────────────────────────────────────────────────

/// What an edge represents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeKind {
    /// A scheduled hop of the given line-variant.
    Travel(LineId),
    /// A walking interchange between two stations sharing a name.
    Transfer,
}

/// A timed connection between two stations.
///
/// Stored undirected; `a` is the departure side of the record that created
/// it, which is the direction propagation applies the duration in.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeTransport {
    pub id:        EdgeId,
    pub a:         StationId,
    pub b:         StationId,
    pub duration:  JourneyDuration,
    pub distance:  f32,
    pub kind:      EdgeKind,
    /// Full line-variant name, or [`TRANSFER_TAG`].
    pub line_name: String,
}

impl EdgeTransport {
    pub fn is_transfer(&self) -> bool {
        self.kind == EdgeKind::Transfer
    }

    /// The endpoint opposite `station`, or `None` if `station` is not an
    /// endpoint.
    pub fn other(&self, station: StationId) -> Option<StationId> {
        if station == self.a {
            Some(self.b)
        } else if station == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

// ── NetworkGraph ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
pub struct NetworkGraph {
    edges:     Vec<EdgeTransport>,
    by_pair:   FxHashMap<(StationId, StationId), Vec<EdgeId>>,
    adjacency: Vec<Vec<EdgeId>>,
}

impl NetworkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[EdgeTransport] {
        &self.edges
    }

    /// # Panics
    /// Panics if `id` was not issued by this graph.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &EdgeTransport {
        &self.edges[id.index()]
    }

    /// Add an undirected edge and return its `EdgeId` (sequential from 0).
    pub fn add_edge(
        &mut self,
        a:         StationId,
        b:         StationId,
        duration:  JourneyDuration,
        distance:  f32,
        kind:      EdgeKind,
        line_name: &str,
    ) -> NetworkResult<EdgeId> {
        let id: EdgeId = next_id(self.edges.len(), "edges")?;
        self.edges.push(EdgeTransport {
            id,
            a,
            b,
            duration,
            distance,
            kind,
            line_name: line_name.to_owned(),
        });

        self.by_pair.entry(pair_key(a, b)).or_default().push(id);

        let needed = a.index().max(b.index()) + 1;
        if self.adjacency.len() < needed {
            self.adjacency.resize_with(needed, Vec::new);
        }
        self.adjacency[a.index()].push(id);
        if a != b {
            self.adjacency[b.index()].push(id);
        }
        Ok(id)
    }

    /// All edges joining `a` and `b`, in either direction.
    pub fn edges_between(&self, a: StationId, b: StationId) -> impl Iterator<Item = &EdgeTransport> + '_ {
        self.by_pair
            .get(&pair_key(a, b))
            .into_iter()
            .flatten()
            .map(|&id| self.edge(id))
    }

    /// All edges incident to `station`.
    pub fn edges_of(&self, station: StationId) -> impl Iterator<Item = &EdgeTransport> + '_ {
        self.adjacency
            .get(station.index())
            .into_iter()
            .flatten()
            .map(|&id| self.edge(id))
    }

    pub fn transfer_edges(&self) -> impl Iterator<Item = &EdgeTransport> + '_ {
        self.edges.iter().filter(|e| e.is_transfer())
    }
}

#[inline]
fn pair_key(a: StationId, b: StationId) -> (StationId, StationId) {
    if a <= b { (a, b) } else { (b, a) }
}
