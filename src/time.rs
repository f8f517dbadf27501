use chrono::{NaiveTime, Timelike};
use std::cmp::Ordering;
use crate::constants::{MINUTES_PER_DAY, MISSING_TIME};

/// Parse a timetable time field
///
/// Accepts `HH:MM`, `HH:MM:SS`, or the missing sentinel `--:--` which yields `None`.
///
/// # Errors
///
/// Returns an error if the field is neither the sentinel nor a valid time of day.
pub fn parse_stop_time(s: &str) -> Result<Option<NaiveTime>, chrono::ParseError> {
    let s = s.trim();
    if s == MISSING_TIME {
        return Ok(None);
    }

    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| parse_time_hms(s))
        .map(Some)
}

/// Parse a time string in HH:MM:SS format
///
/// # Errors
///
/// Returns an error if the string cannot be parsed as a valid time in HH:MM:SS format.
pub fn parse_time_hms(s: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
}

/// Format a stop time as `HH:MM`, or `--:--` when missing
#[must_use]
pub fn format_stop_time(time: Option<NaiveTime>) -> String {
    time.map_or_else(|| MISSING_TIME.to_string(), |t| t.format("%H:%M").to_string())
}

/// Minutes elapsed since midnight, seconds included as a fraction
#[must_use]
pub fn minutes_since_midnight(time: NaiveTime) -> f64 {
    f64::from(time.num_seconds_from_midnight()) / 60.0
}

/// Format an axis position (minutes since midnight) as `HH:MM`
///
/// Positions outside a single day wrap around, so padding below midnight
/// renders as the previous evening.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_minutes(minutes: f64) -> String {
    let wrapped = minutes.round().rem_euclid(MINUTES_PER_DAY) as u32;
    format!("{:02}:{:02}", wrapped / 60, wrapped % 60)
}

/// Order two stop times with missing values after every present one
#[must_use]
pub fn cmp_missing_last(a: Option<NaiveTime>, b: Option<NaiveTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
    }

    #[test]
    fn test_parse_stop_time_hhmm() {
        let result = parse_stop_time("10:47").expect("should parse");
        assert_eq!(result, Some(hm(10, 47)));
    }

    #[test]
    fn test_parse_stop_time_with_seconds() {
        let result = parse_stop_time("08:30:45").expect("should parse");
        let time = result.expect("present");
        assert_eq!(time.hour(), 8);
        assert_eq!(time.minute(), 30);
        assert_eq!(time.second(), 45);
    }

    #[test]
    fn test_parse_stop_time_missing_sentinel() {
        assert_eq!(parse_stop_time("--:--").expect("sentinel parses"), None);
        assert_eq!(parse_stop_time(" --:-- ").expect("sentinel parses"), None);
    }

    #[test]
    fn test_parse_stop_time_invalid() {
        assert!(parse_stop_time("25:00").is_err());
        assert!(parse_stop_time("12:60").is_err());
        assert!(parse_stop_time("noon").is_err());
        assert!(parse_stop_time("").is_err());
    }

    #[test]
    fn test_parse_time_hms_invalid_format() {
        assert!(parse_time_hms("08:30").is_err());
    }

    #[test]
    fn test_format_stop_time() {
        assert_eq!(format_stop_time(Some(hm(9, 5))), "09:05");
        assert_eq!(format_stop_time(None), "--:--");
    }

    #[test]
    fn test_minutes_since_midnight() {
        assert_eq!(minutes_since_midnight(hm(0, 0)), 0.0);
        assert_eq!(minutes_since_midnight(hm(10, 47)), 647.0);
        let with_seconds = NaiveTime::from_hms_opt(1, 0, 30).expect("valid time");
        assert_eq!(minutes_since_midnight(with_seconds), 60.5);
    }

    #[test]
    fn test_format_minutes_wraps_around_midnight() {
        assert_eq!(format_minutes(637.0), "10:37");
        assert_eq!(format_minutes(-5.0), "23:55");
        assert_eq!(format_minutes(1445.0), "00:05");
    }

    #[test]
    fn test_cmp_missing_last() {
        assert_eq!(cmp_missing_last(Some(hm(1, 0)), Some(hm(2, 0))), Ordering::Less);
        assert_eq!(cmp_missing_last(None, Some(hm(23, 59))), Ordering::Greater);
        assert_eq!(cmp_missing_last(Some(hm(0, 0)), None), Ordering::Less);
        assert_eq!(cmp_missing_last(None, None), Ordering::Equal);
    }
}
