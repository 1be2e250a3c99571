//! Flattening a `TransitNetwork` into output rows.

use tt_network::{EdgeKind, TransitNetwork};

use crate::{EdgeRow, LineRow, OutputResult, OutputWriter, StationRow, VisitRow};

/// Write every station, line, edge, and scheduled visit of `network` to
/// `writer`, then finish it.
///
/// Visits are grouped by station, then line, and sorted by time within each
/// group.
pub fn export_network<W: OutputWriter>(network: &TransitNetwork, writer: &mut W) -> OutputResult<()> {
    let stations: Vec<StationRow> = network
        .stations()
        .iter()
        .map(|s| StationRow {
            station_id:  s.id().0,
            name:        s.name().to_owned(),
            line_family: s.simple_line_name().to_owned(),
            lat:         s.pos().lat,
            lon:         s.pos().lon,
            multi_line:  s.is_multi_line(),
            lines:       s.line_names().collect::<Vec<_>>().join("|"),
        })
        .collect();
    writer.write_stations(&stations)?;

    let lines: Vec<LineRow> = network
        .lines()
        .iter()
        .map(|l| LineRow {
            line_id:     l.id().0,
            name:        l.name().to_owned(),
            departure:   l.terminal_departure().0,
            arrival:     l.terminal_arrival().0,
            stations:    join(l.stations().iter().map(|s| s.0)),
            start_times: join(l.start_times()),
        })
        .collect();
    writer.write_lines(&lines)?;

    let edges: Vec<EdgeRow> = network
        .edges()
        .iter()
        .map(|e| EdgeRow {
            edge_id:       e.id.0,
            station_a:     e.a.0,
            station_b:     e.b.0,
            line_name:     e.line_name.clone(),
            duration_secs: e.duration.total_secs(),
            distance:      e.distance,
            transfer:      e.kind == EdgeKind::Transfer,
        })
        .collect();
    writer.write_edges(&edges)?;

    // One batch per station keeps memory flat on large networks.
    for station in network.stations() {
        let mut batch = Vec::new();
        for (line, _) in station.schedules() {
            let line_name = network.line(line).name();
            for time in station.sorted_schedule(line) {
                batch.push(VisitRow {
                    station_id:   station.id().0,
                    station_name: station.name().to_owned(),
                    line_id:      line.0,
                    line_name:    line_name.to_owned(),
                    time:         time.to_string(),
                });
            }
        }
        writer.write_visits(&batch)?;
    }

    writer.finish()
}

fn join<T: ToString>(items: impl IntoIterator<Item = T>) -> String {
    items.into_iter().map(|i| i.to_string()).collect::<Vec<_>>().join("|")
}
