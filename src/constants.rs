/// Literal used by timetable files for "no recorded time"
pub const MISSING_TIME: &str = "--:--";

/// File extension of per-station timetable files
pub const STATION_FILE_EXTENSION: &str = "txt";

/// Padding added on both sides of the time axis
pub const DEFAULT_TIME_PADDING_MINUTES: i64 = 10;

/// Maximum pointer distance (pixels) from a stroke for hover to resolve
pub const DEFAULT_HIT_TOLERANCE: f64 = 6.0;

/// Stroke width of segment lines in pixels
pub const DEFAULT_STROKE_WIDTH: f64 = 3.0;

/// Radius of the endpoint markers in pixels
pub const DEFAULT_MARKER_RADIUS: f64 = 3.0;

/// Minimum horizontal distance between two time axis labels
pub const MIN_TIME_TICK_SPACING: f64 = 80.0;

/// Number of colors in the categorical palette before switching to hue sampling
pub const CATEGORICAL_PALETTE_SIZE: usize = 20;

pub const MINUTES_PER_DAY: f64 = 1440.0;
