//! Axis tick placement.

use crate::constants::MIN_TIME_TICK_SPACING;
use crate::time::format_minutes;

/// Candidate label intervals on the time axis, in minutes
const TIME_STEPS: [f64; 13] = [
    1.0, 2.0, 5.0, 10.0, 15.0, 20.0, 30.0, 60.0, 120.0, 180.0, 240.0, 360.0, 720.0,
];

/// A labelled position along one axis, in canvas pixels
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// Smallest step whose labels end up at least [`MIN_TIME_TICK_SPACING`] apart
///
/// Falls back to the largest step when even that is too dense.
#[must_use]
pub fn time_step(pixels_per_minute: f64) -> f64 {
    TIME_STEPS
        .iter()
        .copied()
        .find(|step| step * pixels_per_minute >= MIN_TIME_TICK_SPACING)
        .unwrap_or(TIME_STEPS[TIME_STEPS.len() - 1])
}

/// Ticks for every step multiple between `visible_start` and `visible_end`
///
/// `to_x` maps minutes since midnight to a canvas x position.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn time_ticks(
    visible_start: f64,
    visible_end: f64,
    pixels_per_minute: f64,
    to_x: impl Fn(f64) -> f64,
) -> Vec<AxisTick> {
    if pixels_per_minute.is_nan() || pixels_per_minute <= 0.0 || visible_end < visible_start {
        return Vec::new();
    }

    let step = time_step(pixels_per_minute);
    let first = (visible_start / step).ceil() as i64;
    let last = (visible_end / step).floor() as i64;

    (first..=last)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let minutes = i as f64 * step;
            AxisTick {
                position: to_x(minutes),
                label: format_minutes(minutes),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_step_respects_spacing() {
        // 12 px per minute: 10 minutes is the first step reaching 80 px
        assert_eq!(time_step(12.0), 10.0);
        assert_eq!(time_step(80.0), 1.0);
        assert_eq!(time_step(1.0), 120.0);
        assert_eq!(time_step(0.01), 720.0);
    }

    #[test]
    fn test_time_ticks_labels_and_positions() {
        let ticks = time_ticks(637.0, 709.0, 12.0, |m| (m - 637.0) * 12.0);
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();

        assert_eq!(labels, vec!["10:40", "10:50", "11:00", "11:10", "11:20", "11:30", "11:40"]);
        assert_eq!(ticks[0].position, 36.0);
        for pair in ticks.windows(2) {
            assert!(pair[1].position - pair[0].position >= MIN_TIME_TICK_SPACING);
        }
    }

    #[test]
    fn test_ticks_before_midnight_wrap() {
        let ticks = time_ticks(-30.0, 0.0, 4.0, |m| m);
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["23:40", "00:00"]);
    }

    #[test]
    fn test_degenerate_range_has_no_ticks() {
        assert!(time_ticks(100.0, 50.0, 1.0, |m| m).is_empty());
        assert!(time_ticks(0.0, 100.0, 0.0, |m| m).is_empty());
    }
}
