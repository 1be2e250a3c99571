//! `tt-network` — station/line registries, the transit graph, and timetable
//! propagation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`record`]    | `SegmentRecord`, `ScheduleRecord`, `StopRef`              |
//! | [`station`]   | `Station`, `StationRegistry`                              |
//! | [`line`]      | `Line`, `LineRegistry` (+ the in-progress line builder)   |
//! | [`graph`]     | `EdgeTransport`, `EdgeKind`, `NetworkGraph`               |
//! | [`builder`]   | `NetworkBuilder` (segment pass), `ScheduleBuilder`        |
//! | [`propagate`] | `propagate_line`, `propagate_all`                         |
//! | [`network`]   | `TransitNetwork` (immutable snapshot), `NetworkStats`     |
//! | [`error`]     | `NetworkError`, `NetworkResult<T>`                        |
//!
//! # Build phases
//!
//! ```text
//! NetworkBuilder::add_segment  (record order; line-variant boundaries)
//!        │ finish()
//!        ▼
//! ScheduleBuilder::add_start   (validated start times per variant)
//!        │ build()  → propagation
//!        ▼
//! TransitNetwork               (read-only)
//! ```
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Propagates lines on Rayon's thread pool.                  |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |

pub mod builder;
pub mod error;
pub mod graph;
pub mod line;
pub mod network;
pub mod propagate;
pub mod record;
pub mod station;

#[cfg(test)]
mod tests;

pub use builder::{NetworkBuilder, ScheduleBuilder};
pub use error::{NetworkError, NetworkResult};
pub use graph::{EdgeKind, EdgeTransport, NetworkGraph, TRANSFER_DISTANCE, TRANSFER_DURATION, TRANSFER_TAG};
pub use line::{Line, LineRegistry, variant_name};
pub use network::{Departure, NetworkStats, TransitNetwork};
pub use propagate::{propagate_all, propagate_line};
pub use record::{ScheduleRecord, SegmentRecord, StopRef};
pub use station::{Station, StationRegistry};
