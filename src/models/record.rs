use chrono::NaiveTime;

/// One train's call at one station, as read from a station timetable file
///
/// `None` times stand for the `--:--` sentinel: no recorded time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRecord {
    pub station: String,
    pub train_id: String,
    pub arrival: Option<NaiveTime>,
    pub departure: Option<NaiveTime>,
}

impl ScheduleRecord {
    #[must_use]
    pub fn new(
        station: impl Into<String>,
        train_id: impl Into<String>,
        arrival: Option<NaiveTime>,
        departure: Option<NaiveTime>,
    ) -> Self {
        Self {
            station: station.into(),
            train_id: train_id.into(),
            arrival,
            departure,
        }
    }
}
