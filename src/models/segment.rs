use chrono::NaiveTime;
use crate::time::format_stop_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Train stationary at one station
    Dwell,
    /// Train running between two consecutive stations
    Travel,
}

/// A single interval of one train's run, drawn as one stroke on the diagram
///
/// `color` stays `None` until colors are assigned and is not changed afterwards;
/// assignment produces new segments instead of mutating these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub from_station: String,
    pub to_station: String,
    pub train_id: String,
    pub color: Option<String>,
}

impl Segment {
    #[must_use]
    pub fn dwell(arrival: NaiveTime, departure: NaiveTime, station: &str, train_id: &str) -> Self {
        Self {
            start: Some(arrival),
            end: Some(departure),
            from_station: station.to_string(),
            to_station: station.to_string(),
            train_id: train_id.to_string(),
            color: None,
        }
    }

    #[must_use]
    pub fn travel(
        departure: Option<NaiveTime>,
        arrival: Option<NaiveTime>,
        from_station: &str,
        to_station: &str,
        train_id: &str,
    ) -> Self {
        Self {
            start: departure,
            end: arrival,
            from_station: from_station.to_string(),
            to_station: to_station.to_string(),
            train_id: train_id.to_string(),
            color: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> SegmentKind {
        if self.from_station == self.to_station {
            SegmentKind::Dwell
        } else {
            SegmentKind::Travel
        }
    }

    /// Both endpoints carry a time, so the segment can be placed on the time axis
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Copy of this segment carrying `color`
    #[must_use]
    pub fn with_color(&self, color: &str) -> Self {
        Self {
            color: Some(color.to_string()),
            ..self.clone()
        }
    }

    /// Hover label, e.g. `成都东 → 德阳  10:56-11:20`
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "{} → {}  {}-{}",
            self.from_station,
            self.to_station,
            format_stop_time(self.start),
            format_stop_time(self.end)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
    }

    #[test]
    fn test_kind_follows_station_equality() {
        let dwell = Segment::dwell(hm(10, 47), hm(10, 56), "成都东", "G308");
        let travel = Segment::travel(Some(hm(10, 56)), Some(hm(11, 20)), "成都东", "德阳", "G308");
        assert_eq!(dwell.kind(), SegmentKind::Dwell);
        assert_eq!(travel.kind(), SegmentKind::Travel);
    }

    #[test]
    fn test_with_color_leaves_original_unassigned() {
        let segment = Segment::dwell(hm(10, 47), hm(10, 56), "成都东", "G308");
        let colored = segment.with_color("#1F77B4");
        assert_eq!(segment.color, None);
        assert_eq!(colored.color.as_deref(), Some("#1F77B4"));
        assert_eq!(colored.train_id, segment.train_id);
    }

    #[test]
    fn test_label_format() {
        let segment = Segment::travel(Some(hm(10, 56)), Some(hm(11, 20)), "StationX", "StationY", "G308");
        assert_eq!(segment.label(), "StationX → StationY  10:56-11:20");
    }

    #[test]
    fn test_label_with_missing_end() {
        let segment = Segment::travel(Some(hm(11, 39)), None, "绵阳", "江油", "G308");
        assert_eq!(segment.label(), "绵阳 → 江油  11:39---:--");
        assert!(!segment.is_complete());
    }
}
