//! Schedule propagation: start times + segment durations → per-station
//! visit times.
//!
//! For a line with stations `S0..Sn` and durations `d0..d(n-1)`:
//!
//! ```text
//! t(S0) = start
//! t(Si) = t(S(i-1)) + d(i-1)      (on the wrapping 24 h dial)
//! ```
//!
//! Each line is propagated independently into its own output vector, and the
//! outputs are merged into station schedules in ascending `LineId` order.
//! With the `parallel` feature the per-line step runs on Rayon's pool; the
//! merge is always sequential, so the result does not depend on it.

use log::debug;

use tt_core::{Clock, JourneyDuration, StationId};

use crate::line::{Line, LineRegistry};
use crate::station::StationRegistry;
use crate::{NetworkError, NetworkResult};

/// Expand every start time of `line` into one `(station, time)` entry per
/// station, start time by start time.
///
/// Fails with [`NetworkError::StructuralInconsistency`] unless the line has
/// exactly one more station than `durations`; the check runs before any
/// start time is expanded, so it also applies to lines with no start times.
pub fn propagate_line(
    line:      &Line,
    durations: &[JourneyDuration],
) -> NetworkResult<Vec<(StationId, Clock)>> {
    let stations = line.stations();
    if stations.len() != durations.len() + 1 {
        return Err(NetworkError::StructuralInconsistency {
            line:      line.name().to_owned(),
            stations:  stations.len(),
            durations: durations.len(),
        });
    }

    let mut out = Vec::with_capacity(stations.len() * line.start_times().len());
    for &start in line.start_times() {
        let mut current = start;
        for (&station, &duration) in stations.iter().zip(durations) {
            out.push((station, current));
            current += duration;
        }
        out.push((stations[durations.len()], current));
    }
    Ok(out)
}

/// Propagate every line of `lines` and append the results to the schedules
/// of `stations`.  Returns the number of schedule entries written.
///
/// Nothing is written unless every line passes the structural check.
pub fn propagate_all(lines: &LineRegistry, stations: &mut StationRegistry) -> NetworkResult<usize> {
    let per_line = propagate_lines(lines.as_slice(), lines)?;

    let mut written = 0;
    for (line, visits) in lines.as_slice().iter().zip(per_line) {
        debug!("line {:?}: {} schedule entries", line.name(), visits.len());
        written += visits.len();
        for (station, time) in visits {
            stations.get_mut(station).push_visit(line.id(), time);
        }
    }
    Ok(written)
}

#[cfg(not(feature = "parallel"))]
fn propagate_lines(
    lines:    &[Line],
    registry: &LineRegistry,
) -> NetworkResult<Vec<Vec<(StationId, Clock)>>> {
    lines
        .iter()
        .map(|line| propagate_line(line, registry.durations(line.id())))
        .collect()
}

#[cfg(feature = "parallel")]
fn propagate_lines(
    lines:    &[Line],
    registry: &LineRegistry,
) -> NetworkResult<Vec<Vec<(StationId, Clock)>>> {
    use rayon::prelude::*;

    lines
        .par_iter()
        .map(|line| propagate_line(line, registry.durations(line.id())))
        .collect()
}
