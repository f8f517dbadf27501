use crate::models::StationOrder;

/// Parse a station order file: one station name per line, top of the diagram first
///
/// Blank lines and repeated names are skipped; a byte order mark is ignored.
#[must_use]
pub fn parse_station_order(contents: &str) -> StationOrder {
    StationOrder::new(contents.trim_start_matches('\u{feff}').lines())
}
