//! Station rows and the time domain of a diagram.

use std::collections::HashMap;
use indexmap::IndexSet;
use crate::constants::DEFAULT_TIME_PADDING_MINUTES;
use crate::error::DiagramError;
use crate::models::{Segment, StationOrder};
use crate::time::minutes_since_midnight;

/// Visible time range, in minutes since midnight
///
/// Padding may push the bounds below 0 or past one day; they are not wrapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeDomain {
    pub start: f64,
    pub end: f64,
}

impl TimeDomain {
    /// Width of the domain, never zero
    #[must_use]
    pub fn span(&self) -> f64 {
        (self.end - self.start).max(1.0)
    }
}

/// Vertical station order and horizontal time range shared by every segment
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramLayout {
    /// Station of each row, row 0 first
    pub stations: Vec<String>,
    pub row_index: HashMap<String, usize>,
    pub time_domain: TimeDomain,
}

impl DiagramLayout {
    #[must_use]
    pub fn row_of(&self, station: &str) -> Option<usize> {
        self.row_index.get(station).copied()
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.stations.len()
    }
}

/// Lay out `segments` with the default time padding
///
/// # Errors
///
/// See [`layout_with_padding`].
pub fn layout(segments: &[Segment], hint: Option<&StationOrder>) -> Result<DiagramLayout, DiagramError> {
    layout_with_padding(segments, hint, chrono::Duration::minutes(DEFAULT_TIME_PADDING_MINUTES))
}

/// Assign every station a row and compute the padded time domain
///
/// Stations named in `hint` come first, in hint order, but only if some segment
/// touches them. Every other station follows in order of first appearance.
///
/// # Errors
///
/// Returns [`DiagramError::EmptyInput`] if there are no segments, or if none of
/// them carries a time.
pub fn layout_with_padding(
    segments: &[Segment],
    hint: Option<&StationOrder>,
    padding: chrono::Duration,
) -> Result<DiagramLayout, DiagramError> {
    if segments.is_empty() {
        return Err(DiagramError::EmptyInput("no segments to lay out"));
    }

    let stations = order_stations(segments, hint);
    let row_index = stations
        .iter()
        .enumerate()
        .map(|(row, station)| (station.clone(), row))
        .collect();

    let time_domain = time_domain(segments, padding)
        .ok_or(DiagramError::EmptyInput("no segment has a known time"))?;

    crate::log!(
        "Layout: {} stations, {:.0}..{:.0} min",
        stations.len(),
        time_domain.start,
        time_domain.end
    );

    Ok(DiagramLayout {
        stations,
        row_index,
        time_domain,
    })
}

fn order_stations(segments: &[Segment], hint: Option<&StationOrder>) -> Vec<String> {
    let present: IndexSet<&str> = segments
        .iter()
        .flat_map(|s| [s.from_station.as_str(), s.to_station.as_str()])
        .collect();

    let mut ordered: IndexSet<&str> = hint
        .into_iter()
        .flat_map(|order| order.iter())
        .filter(|station| present.contains(station))
        .collect();
    ordered.extend(present.iter().copied());

    ordered.into_iter().map(str::to_string).collect()
}

#[allow(clippy::cast_precision_loss)]
fn time_domain(segments: &[Segment], padding: chrono::Duration) -> Option<TimeDomain> {
    let times = || segments.iter().flat_map(|s| [s.start, s.end]).flatten();
    let earliest = times().min()?;
    let latest = times().max()?;

    let padding = padding.num_minutes() as f64;
    Some(TimeDomain {
        start: minutes_since_midnight(earliest) - padding,
        end: minutes_since_midnight(latest) + padding,
    })
}
