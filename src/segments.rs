//! Turns per-station schedule records into per-train dwell and travel segments.

use indexmap::IndexMap;
use crate::error::DiagramError;
use crate::models::{ScheduleRecord, Segment};
use crate::time::cmp_missing_last;

/// Build the segment list for every train found in `records`
///
/// Records are grouped by train (trains emitted in id order) and each train's
/// stops are ordered by arrival time. A missing arrival sorts after every
/// recorded one; ties fall back to departure time and then station name, so the
/// result does not depend on the order of `records`.
///
/// Per stop, a dwell segment is emitted when both times are present, and a
/// travel segment to the next stop is emitted for every stop but the last, even
/// when one of its endpoints is missing. Such segments are left for the
/// renderer to skip.
///
/// # Errors
///
/// Returns [`DiagramError::EmptyInput`] if there are no records or if no
/// segment can be formed from them.
pub fn build_segments(records: &[ScheduleRecord]) -> Result<Vec<Segment>, DiagramError> {
    if records.is_empty() {
        return Err(DiagramError::EmptyInput("no schedule records"));
    }

    let mut segments = Vec::new();

    for (train_id, stops) in group_by_train(records) {
        append_train_segments(&mut segments, train_id, &stops);
    }

    if segments.is_empty() {
        return Err(DiagramError::EmptyInput("no train has a dwell or a second stop"));
    }

    crate::log!("Built {} segments from {} records", segments.len(), records.len());
    Ok(segments)
}

/// Each train's stops in calling order, trains ordered by id
fn group_by_train(records: &[ScheduleRecord]) -> IndexMap<&str, Vec<&ScheduleRecord>> {
    let mut trains: IndexMap<&str, Vec<&ScheduleRecord>> = IndexMap::new();
    for record in records {
        trains.entry(record.train_id.as_str()).or_default().push(record);
    }
    trains.sort_keys();

    for stops in trains.values_mut() {
        stops.sort_by(|a, b| {
            cmp_missing_last(a.arrival, b.arrival)
                .then_with(|| cmp_missing_last(a.departure, b.departure))
                .then_with(|| a.station.cmp(&b.station))
        });
    }

    trains
}

fn append_train_segments(segments: &mut Vec<Segment>, train_id: &str, stops: &[&ScheduleRecord]) {
    for (i, stop) in stops.iter().enumerate() {
        if let (Some(arrival), Some(departure)) = (stop.arrival, stop.departure) {
            segments.push(Segment::dwell(arrival, departure, &stop.station, train_id));
        }

        if let Some(next) = stops.get(i + 1) {
            segments.push(Segment::travel(
                stop.departure,
                next.arrival,
                &stop.station,
                &next.station,
                train_id,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SegmentKind;
    use chrono::NaiveTime;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
    }

    fn record(station: &str, train: &str, arrival: Option<NaiveTime>, departure: Option<NaiveTime>) -> ScheduleRecord {
        ScheduleRecord::new(station, train, arrival, departure)
    }

    fn g308_records() -> Vec<ScheduleRecord> {
        vec![
            record("StationY", "G308", Some(hm(11, 20)), Some(hm(11, 22))),
            record("StationZ", "G308", Some(hm(11, 39)), None),
            record("StationX", "G308", Some(hm(10, 47)), Some(hm(10, 56))),
        ]
    }

    #[test]
    fn test_single_train_end_to_end() {
        let segments = build_segments(&g308_records()).expect("segments");

        assert_eq!(
            segments,
            vec![
                Segment::dwell(hm(10, 47), hm(10, 56), "StationX", "G308"),
                Segment::travel(Some(hm(10, 56)), Some(hm(11, 20)), "StationX", "StationY", "G308"),
                Segment::dwell(hm(11, 20), hm(11, 22), "StationY", "G308"),
                Segment::travel(Some(hm(11, 22)), Some(hm(11, 39)), "StationY", "StationZ", "G308"),
            ]
        );
        assert!(segments.iter().all(|s| s.color.is_none()));
    }

    #[test]
    fn test_travel_segment_emitted_with_missing_endpoint() {
        let records = vec![
            record("A", "K1", None, Some(hm(8, 0))),
            record("B", "K1", Some(hm(8, 30)), None),
            record("C", "K1", None, None),
        ];
        let segments = build_segments(&records).expect("segments");

        // B is the only stop with an arrival; A and C follow, ordered by departure
        assert_eq!(
            segments,
            vec![
                Segment::travel(None, None, "B", "A", "K1"),
                Segment::travel(Some(hm(8, 0)), None, "A", "C", "K1"),
            ]
        );
    }

    #[test]
    fn test_missing_arrival_sorts_last() {
        let records = vec![
            record("Origin", "T9", None, Some(hm(9, 0))),
            record("Middle", "T9", Some(hm(9, 30)), Some(hm(9, 32))),
        ];
        let segments = build_segments(&records).expect("segments");

        let travel: Vec<&Segment> = segments.iter().filter(|s| s.kind() == SegmentKind::Travel).collect();
        assert_eq!(travel.len(), 1);
        assert_eq!(travel[0].from_station, "Middle");
        assert_eq!(travel[0].to_station, "Origin");
        assert_eq!(travel[0].start, Some(hm(9, 32)));
        assert_eq!(travel[0].end, None);
    }

    #[test]
    fn test_dwell_and_travel_counts_per_train() {
        let mut records = g308_records();
        records.push(record("StationX", "D77", Some(hm(12, 0)), Some(hm(12, 1))));
        records.push(record("StationY", "D77", Some(hm(12, 30)), Some(hm(12, 35))));

        let segments = build_segments(&records).expect("segments");

        for (train, stops, dwells) in [("G308", 3, 2), ("D77", 2, 2)] {
            let of_train: Vec<&Segment> = segments.iter().filter(|s| s.train_id == train).collect();
            let travel = of_train.iter().filter(|s| s.kind() == SegmentKind::Travel).count();
            let dwell = of_train.iter().filter(|s| s.kind() == SegmentKind::Dwell).count();
            assert_eq!(travel, stops - 1, "travel segments of {train}");
            assert_eq!(dwell, dwells, "dwell segments of {train}");
        }
    }

    #[test]
    fn test_single_stop_train_has_no_travel() {
        let records = vec![record("A", "Solo", Some(hm(7, 0)), Some(hm(7, 5)))];
        let segments = build_segments(&records).expect("segments");
        assert_eq!(segments, vec![Segment::dwell(hm(7, 0), hm(7, 5), "A", "Solo")]);
    }

    #[test]
    fn test_segments_invariant_under_record_order() {
        let mut records = g308_records();
        records.push(record("StationX", "D77", Some(hm(12, 0)), Some(hm(12, 1))));
        records.push(record("StationY", "D77", Some(hm(12, 30)), None));

        let forward = build_segments(&records).expect("segments");
        records.reverse();
        let reversed = build_segments(&records).expect("segments");

        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_empty_records_fail() {
        assert_eq!(build_segments(&[]), Err(DiagramError::EmptyInput("no schedule records")));
    }

    #[test]
    fn test_no_usable_segment_fails() {
        let records = vec![record("A", "Ghost", None, None)];
        assert!(matches!(build_segments(&records), Err(DiagramError::EmptyInput(_))));
    }
}
