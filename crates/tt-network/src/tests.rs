//! Unit tests for tt-network.
//!
//! All tests use hand-written record streams; no files are read.

#[cfg(test)]
mod helpers {
    use tt_core::{Clock, GeoPoint, JourneyDuration};

    use crate::{NetworkBuilder, NetworkResult, ScheduleRecord, SegmentRecord, StopRef, TransitNetwork};

    pub fn at(name: &str) -> StopRef {
        StopRef::new(name, GeoPoint::new(48.0, 2.0))
    }

    pub fn seg(from: &str, to: &str, line: &str, minutes: u32, seconds: u32) -> SegmentRecord {
        SegmentRecord {
            from:     at(from),
            to:       at(to),
            line:     line.to_owned(),
            duration: JourneyDuration::new(minutes, seconds),
            distance: 1.0,
        }
    }

    pub fn start(line: &str, terminus: &str, time: &str, variant: &str) -> ScheduleRecord {
        ScheduleRecord {
            line:     line.to_owned(),
            terminus: terminus.to_owned(),
            start:    time.parse().unwrap(),
            variant:  variant.to_owned(),
        }
    }

    pub fn hms(h: u32, m: u32, s: u32) -> Clock {
        Clock::from_hms(h, m, s).unwrap()
    }

    pub fn build(
        segments:  &[SegmentRecord],
        schedules: &[ScheduleRecord],
    ) -> NetworkResult<TransitNetwork> {
        let mut b = NetworkBuilder::new();
        for s in segments {
            b.add_segment(s)?;
        }
        let mut s = b.finish();
        for r in schedules {
            s.add_start(r)?;
        }
        s.build()
    }
}

// ── Station registry ───────────────────────────────────────────────────────────

#[cfg(test)]
mod stations {
    use tt_core::{GeoPoint, JourneyDuration, StationId};

    use super::helpers::{build, seg};
    use crate::{NetworkGraph, SegmentRecord, StationRegistry, StopRef, TRANSFER_TAG};

    #[test]
    fn same_family_reuses_station() {
        let net = build(
            &[seg("A", "B", "1 variant 1", 1, 0), seg("B", "A", "1 variant 2", 1, 0)],
            &[],
        )
        .unwrap();

        let bs: Vec<_> = net.stations_named("B").collect();
        assert_eq!(bs.len(), 1);
        let lines: Vec<_> = bs[0].line_names().collect();
        assert_eq!(lines, ["1 variant 1", "1 variant 2"]);
        assert!(!bs[0].is_multi_line());
        assert_eq!(net.transfer_edges().count(), 0);
    }

    #[test]
    fn different_family_creates_transfer() {
        let net = build(
            &[seg("A", "B", "1 variant 1", 1, 0), seg("B", "C", "2 variant 1", 1, 0)],
            &[],
        )
        .unwrap();

        let bs: Vec<_> = net.stations_named("B").collect();
        assert_eq!(bs.len(), 2);
        assert_eq!(bs[0].simple_line_name(), "1");
        assert_eq!(bs[1].simple_line_name(), "2");
        assert!(bs.iter().all(|s| s.is_multi_line()));

        let transfers: Vec<_> = net.transfer_edges().collect();
        assert_eq!(transfers.len(), 1);
        assert_eq!(transfers[0].duration, JourneyDuration::new(2, 0));
        assert_eq!(transfers[0].line_name, TRANSFER_TAG);
        assert_eq!(net.edges_between(bs[0].id(), bs[1].id()).count(), 1);

        // Stations nobody else shares stay single-line.
        assert!(!net.stations_named("A").next().unwrap().is_multi_line());
    }

    #[test]
    fn third_family_links_to_every_existing_station() {
        let mut graph = NetworkGraph::new();
        let mut reg = StationRegistry::new();
        let p = GeoPoint::new(1.0, 1.0);
        let a = reg.resolve_or_create("Hub", "1 variant 1", p, &mut graph).unwrap();
        let b = reg.resolve_or_create("Hub", "2 variant 1", p, &mut graph).unwrap();
        let c = reg.resolve_or_create("Hub", "3 variant 1", p, &mut graph).unwrap();

        assert_eq!(reg.named("Hub"), &[a, b, c]);
        assert_eq!(graph.transfer_edges().count(), 3);
        assert_eq!(graph.edges_between(c, a).count(), 1);
        assert_eq!(graph.edges_between(c, b).count(), 1);
        assert_eq!(graph.edges_of(c).count(), 2);
    }

    #[test]
    fn first_sighting_coordinates_win() {
        let first = GeoPoint::new(10.0, 20.0);
        let drifted = GeoPoint::new(10.001, 20.001);

        let mut graph = NetworkGraph::new();
        let mut reg = StationRegistry::new();
        let a = reg.resolve_or_create("Stop", "1 variant 1", first, &mut graph).unwrap();
        let b = reg.resolve_or_create("Stop", "7 variant 1", drifted, &mut graph).unwrap();
        let again = reg.resolve_or_create("Stop", "1 variant 3", drifted, &mut graph).unwrap();

        assert_eq!(again, a);
        assert_eq!(reg.get(a).pos(), first);
        assert_eq!(reg.get(b).pos(), first);
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn ids_are_sequential() {
        let mut graph = NetworkGraph::new();
        let mut reg = StationRegistry::new();
        let p = GeoPoint::default();
        assert_eq!(reg.resolve_or_create("A", "1", p, &mut graph).unwrap(), StationId(0));
        assert_eq!(reg.resolve_or_create("B", "1", p, &mut graph).unwrap(), StationId(1));
        assert_eq!(reg.resolve_or_create("A", "1", p, &mut graph).unwrap(), StationId(0));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn ids_past_u32_are_rejected() {
        use crate::NetworkError;
        use crate::error::next_id;

        let last = u32::MAX as usize;
        assert_eq!(next_id::<StationId>(last, "stations"), Ok(StationId(u32::MAX)));
        assert_eq!(
            next_id::<StationId>(last + 1, "stations"),
            Err(NetworkError::CapacityExceeded { what: "stations" })
        );
    }

    #[test]
    fn builder_keeps_first_coordinates_across_records() {
        let mut later = seg("B", "C", "2 variant 1", 1, 0);
        later.from = StopRef::new("B", GeoPoint::new(0.0, 0.0));
        let first = SegmentRecord {
            from: StopRef::new("A", GeoPoint::new(5.0, 5.0)),
            to:   StopRef::new("B", GeoPoint::new(6.0, 6.0)),
            ..seg("A", "B", "1 variant 1", 1, 0)
        };
        let net = build(&[first, later], &[]).unwrap();
        for b in net.stations_named("B") {
            assert_eq!(b.pos(), GeoPoint::new(6.0, 6.0));
        }
    }
}

// ── Line-variants ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod lines {
    use tt_core::JourneyDuration;

    use super::helpers::{build, seg};
    use crate::{EdgeKind, NetworkError};

    #[test]
    fn boundary_splits_variants() {
        let net = build(
            &[
                seg("A", "B", "1 variant 1", 1, 0),
                seg("B", "C", "1 variant 1", 2, 0),
                seg("C", "D", "1 variant 2", 3, 0),
            ],
            &[],
        )
        .unwrap();

        assert_eq!(net.lines().len(), 2);
        let x = net.line_by_name("1 variant 1").unwrap();
        let y = net.line_by_name("1 variant 2").unwrap();

        let name = |id| net.station(id).name();
        assert_eq!(name(x.terminal_departure()), "A");
        assert_eq!(name(x.terminal_arrival()), "C");
        assert_eq!(name(y.terminal_departure()), "C");
        assert_eq!(name(y.terminal_arrival()), "D");

        let x_stations: Vec<_> = x.stations().iter().map(|&s| name(s)).collect();
        assert_eq!(x_stations, ["A", "B", "C"]);
        assert_eq!(
            net.durations(x.id()),
            &[JourneyDuration::new(1, 0), JourneyDuration::new(2, 0)]
        );
        assert_eq!(net.durations(y.id()), &[JourneyDuration::new(3, 0)]);
    }

    #[test]
    fn durations_are_one_fewer_than_stations() {
        let net = build(
            &[
                seg("A", "B", "3 variant 1", 1, 0),
                seg("B", "C", "3 variant 1", 1, 0),
                seg("C", "D", "3 variant 1", 1, 0),
                seg("D", "C", "3 variant 2", 1, 0),
                seg("C", "B", "3 variant 2", 1, 0),
            ],
            &[],
        )
        .unwrap();
        for line in net.lines() {
            assert_eq!(line.stations().len(), net.durations(line.id()).len() + 1);
        }
    }

    #[test]
    fn self_loop_adds_nothing() {
        let net = build(
            &[
                seg("A", "B", "1 variant 1", 1, 0),
                seg("B", "B", "1 variant 1", 9, 0),
                seg("B", "C", "1 variant 1", 2, 0),
            ],
            &[],
        )
        .unwrap();

        let line = net.line_by_name("1 variant 1").unwrap();
        assert_eq!(line.stations().len(), 3);
        assert_eq!(net.durations(line.id()).len(), 2);
        assert_eq!(net.edges().len(), 2);
    }

    #[test]
    fn self_loop_at_variant_boundary() {
        let net = build(
            &[
                seg("A", "B", "1 variant 1", 1, 0),
                seg("B", "B", "1 variant 2", 5, 0),
                seg("B", "A", "1 variant 2", 1, 0),
            ],
            &[],
        )
        .unwrap();

        let x = net.line_by_name("1 variant 1").unwrap();
        let y = net.line_by_name("1 variant 2").unwrap();
        assert_eq!(net.station(x.terminal_arrival()).name(), "B");
        assert_eq!(net.station(y.terminal_departure()).name(), "B");
        assert_eq!(net.durations(y.id()), &[JourneyDuration::new(1, 0)]);
    }

    #[test]
    fn travel_edges_carry_their_line() {
        let net = build(&[seg("A", "B", "5 variant 1", 4, 0)], &[]).unwrap();
        let line = net.line_by_name("5 variant 1").unwrap();
        let edge = &net.edges()[0];
        assert_eq!(edge.kind, EdgeKind::Travel(line.id()));
        assert_eq!(edge.line_name, "5 variant 1");
        assert!(!edge.is_transfer());
        assert_eq!(edge.other(edge.a), Some(edge.b));
    }

    #[test]
    fn parallel_variants_share_a_pair() {
        let net = build(
            &[seg("A", "B", "1 variant 1", 1, 0), seg("A", "B", "1 variant 2", 1, 10)],
            &[],
        )
        .unwrap();
        let a = net.stations_named("A").next().unwrap().id();
        let b = net.stations_named("B").next().unwrap().id();
        assert_eq!(net.edges_between(b, a).count(), 2);
    }

    #[test]
    fn reappearing_variant_is_rejected() {
        let err = build(
            &[
                seg("A", "B", "1 variant 1", 1, 0),
                seg("C", "D", "2 variant 1", 1, 0),
                seg("B", "E", "1 variant 1", 1, 0),
            ],
            &[],
        )
        .unwrap_err();
        assert_eq!(err, NetworkError::DuplicateLineVariant { line: "1 variant 1".into() });
    }

    #[test]
    fn empty_stream_builds_empty_network() {
        let net = build(&[], &[]).unwrap();
        assert!(net.stations().is_empty());
        assert!(net.lines().is_empty());
        assert!(net.edges().is_empty());
    }
}

// ── Schedule pass ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod schedules {
    use super::helpers::{build, hms, seg, start};
    use crate::NetworkError;

    fn segments() -> Vec<crate::SegmentRecord> {
        vec![seg("A", "B", "1 variant 1", 1, 0), seg("B", "C", "1 variant 1", 1, 0)]
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let err = build(&segments(), &[start("1", "A", "08:00", "9")]).unwrap_err();
        assert_eq!(err, NetworkError::UnknownLineReference { line: "1 variant 9".into() });
    }

    #[test]
    fn terminus_mismatch_carries_both_names() {
        let err = build(&segments(), &[start("1", "B", "08:00", "1")]).unwrap_err();
        assert_eq!(
            err,
            NetworkError::TerminusMismatch {
                line:     "1 variant 1".into(),
                expected: "A".into(),
                actual:   "B".into(),
            }
        );
        let msg = err.to_string();
        assert!(msg.contains("\"A\"") && msg.contains("\"B\""), "{msg}");
    }

    #[test]
    fn start_times_keep_read_order() {
        let net = build(
            &segments(),
            &[start("1", "A", "09:00", "1"), start("1", "A", "07:30", "1")],
        )
        .unwrap();
        let line = net.line_by_name("1 variant 1").unwrap();
        assert_eq!(line.start_times(), &[hms(9, 0, 0), hms(7, 30, 0)]);
    }

    #[test]
    fn duplicate_start_time_is_ignored() {
        let net = build(
            &segments(),
            &[start("1", "A", "08:00", "1"), start("1", "A", "08:00", "1")],
        )
        .unwrap();
        let line = net.line_by_name("1 variant 1").unwrap();
        assert_eq!(line.start_times().len(), 1);
        let a = net.station(line.terminal_departure());
        assert_eq!(a.schedule(line.id()), &[hms(8, 0, 0)]);
    }
}

// ── Propagation ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod propagation {
    use tt_core::{JourneyDuration, LineId, StationId};

    use super::helpers::{build, hms, seg, start};
    use crate::line::Line;
    use crate::{Departure, NetworkError, propagate_line};

    #[test]
    fn end_to_end_three_stations() {
        let net = build(
            &[seg("S0", "S1", "1 variant 1", 1, 30), seg("S1", "S2", "1 variant 1", 2, 0)],
            &[start("1", "S0", "08:00", "1")],
        )
        .unwrap();

        let line = net.line_by_name("1 variant 1").unwrap();
        let times: Vec<_> = line
            .stations()
            .iter()
            .map(|&s| net.station(s).schedule(line.id()).to_vec())
            .collect();
        assert_eq!(
            times,
            [vec![hms(8, 0, 0)], vec![hms(8, 1, 30)], vec![hms(8, 3, 30)]]
        );
    }

    #[test]
    fn propagation_wraps_midnight() {
        let net = build(
            &[seg("A", "B", "N variant 1", 3, 30), seg("B", "C", "N variant 1", 10, 0)],
            &[start("N", "A", "23:58", "1")],
        )
        .unwrap();
        let line = net.line_by_name("N variant 1").unwrap();
        let c = net.station(line.terminal_arrival());
        assert_eq!(c.schedule(line.id()), &[hms(0, 11, 30)]);
    }

    #[test]
    fn one_entry_per_start_time() {
        let net = build(
            &[seg("A", "B", "1 variant 1", 5, 0)],
            &[start("1", "A", "10:00", "1"), start("1", "A", "06:00", "1")],
        )
        .unwrap();
        let line = net.line_by_name("1 variant 1").unwrap();
        let b = net.station(line.terminal_arrival());
        assert_eq!(b.schedule(line.id()), &[hms(10, 5, 0), hms(6, 5, 0)]);
        assert_eq!(b.sorted_schedule(line.id()), vec![hms(6, 5, 0), hms(10, 5, 0)]);
    }

    #[test]
    fn schedules_are_per_line() {
        let net = build(
            &[seg("A", "B", "1 variant 1", 1, 0), seg("B", "A", "1 variant 2", 1, 0)],
            &[start("1", "A", "08:00", "1"), start("1", "B", "09:00", "2")],
        )
        .unwrap();
        let v1 = net.line_by_name("1 variant 1").unwrap().id();
        let v2 = net.line_by_name("1 variant 2").unwrap().id();
        let a = net.stations_named("A").next().unwrap();
        assert_eq!(a.schedule(v1), &[hms(8, 0, 0)]);
        assert_eq!(a.schedule(v2), &[hms(9, 1, 0)]);
    }

    #[test]
    fn mismatched_line_is_structural_inconsistency() {
        let line = Line {
            id:                 LineId(0),
            name:               "broken".into(),
            stations:           vec![StationId(0), StationId(1)],
            terminal_departure: StationId(0),
            terminal_arrival:   StationId(1),
            start_times:        vec![hms(8, 0, 0)],
        };
        let durations = [JourneyDuration::new(1, 0), JourneyDuration::new(1, 0)];
        let err = propagate_line(&line, &durations).unwrap_err();
        assert_eq!(
            err,
            NetworkError::StructuralInconsistency {
                line:      "broken".into(),
                stations:  2,
                durations: 2,
            }
        );
    }

    #[test]
    fn line_without_starts_is_still_checked() {
        let line = Line {
            id:                 LineId(0),
            name:               "empty".into(),
            stations:           vec![],
            terminal_departure: StationId(0),
            terminal_arrival:   StationId(0),
            start_times:        vec![],
        };
        assert!(matches!(
            propagate_line(&line, &[]),
            Err(NetworkError::StructuralInconsistency { stations: 0, durations: 0, .. })
        ));
    }

    #[test]
    fn variant_of_only_self_loops_fails_at_build() {
        let err = build(&[seg("A", "A", "1 variant 1", 1, 0)], &[]).unwrap_err();
        assert!(matches!(err, NetworkError::StructuralInconsistency { .. }));
    }

    #[test]
    fn next_departures_merge_lines() {
        let net = build(
            &[
                seg("A", "Hub", "1 variant 1", 5, 0),
                seg("B", "Hub", "1 variant 2", 2, 0),
            ],
            &[
                start("1", "A", "08:00", "1"),
                start("1", "A", "09:00", "1"),
                start("1", "B", "08:01", "2"),
            ],
        )
        .unwrap();
        let v1 = net.line_by_name("1 variant 1").unwrap().id();
        let v2 = net.line_by_name("1 variant 2").unwrap().id();
        let hub = net.stations_named("Hub").next().unwrap().id();

        let board = net.next_departures(hub, hms(8, 0, 0), 10);
        assert_eq!(
            board,
            [
                Departure { time: hms(8, 3, 0), line: v2 },
                Departure { time: hms(8, 5, 0), line: v1 },
                Departure { time: hms(9, 5, 0), line: v1 },
            ]
        );
        assert_eq!(net.next_departures(hub, hms(8, 4, 0), 1).len(), 1);
        assert!(net.next_departures(hub, hms(23, 0, 0), 10).is_empty());
    }

    #[test]
    fn stats_count_everything() {
        let net = build(
            &[
                seg("A", "B", "1 variant 1", 1, 0),
                seg("B", "C", "1 variant 1", 1, 0),
                seg("B", "D", "2 variant 1", 1, 0),
            ],
            &[start("1", "A", "08:00", "1"), start("2", "B", "08:00", "1")],
        )
        .unwrap();
        let stats = net.stats();
        assert_eq!(stats.stations, 5);
        assert_eq!(stats.multi_line_stations, 2);
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.travel_edges, 3);
        assert_eq!(stats.transfer_edges, 1);
        assert_eq!(stats.start_times, 2);
        assert_eq!(stats.schedule_entries, 3 + 2);
    }
}
