use indexmap::{IndexMap, IndexSet};
use crate::constants::CATEGORICAL_PALETTE_SIZE;
use crate::models::Segment;

/// Twenty-color categorical palette ("tab20")
pub const TAB20: [&str; CATEGORICAL_PALETTE_SIZE] = [
    "#1F77B4", "#AEC7E8", "#FF7F0E", "#FFBB78", "#2CA02C",
    "#98DF8A", "#D62728", "#FF9896", "#9467BD", "#C5B0D5",
    "#8C564B", "#C49C94", "#E377C2", "#F7B6D2", "#7F7F7F",
    "#C7C7C7", "#BCBD22", "#DBDB8D", "#17BECF", "#9EDAE5",
];

/// Generate `n` mutually distinguishable colors as `#RRGGBB`
///
/// Up to twenty colors are sampled evenly across [`TAB20`]; beyond that the
/// hue wheel is divided into `n` equal steps at full saturation.
///
/// The hue wheel only has 1530 distinct `#RRGGBB` colors at full saturation and
/// value, so for more than 1530 trains some colors repeat.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn distinct_colors(n: usize) -> Vec<String> {
    if n <= CATEGORICAL_PALETTE_SIZE {
        let last = n.saturating_sub(1).max(1) as f64;
        (0..n)
            .map(|i| sample_categorical(i as f64 / last).to_string())
            .collect()
    } else {
        (0..n)
            .map(|i| hue_to_hex(i as f64 / n as f64))
            .collect()
    }
}

/// Pick the palette entry at `position` in `[0, 1]`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sample_categorical(position: f64) -> &'static str {
    let index = (position.clamp(0.0, 1.0) * CATEGORICAL_PALETTE_SIZE as f64) as usize;
    TAB20[index.min(CATEGORICAL_PALETTE_SIZE - 1)]
}

/// Fully saturated, full value color at `hue` in `[0, 1)`
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn hue_to_hex(hue: f64) -> String {
    let sector = hue.rem_euclid(1.0) * 6.0;
    let fraction = sector - sector.floor();
    let rising = fraction;
    let falling = 1.0 - fraction;

    let (red, green, blue) = match sector.floor() as u32 {
        0 => (1.0, rising, 0.0),
        1 => (falling, 1.0, 0.0),
        2 => (0.0, 1.0, rising),
        3 => (0.0, falling, 1.0),
        4 => (rising, 0.0, 1.0),
        _ => (1.0, 0.0, falling),
    };

    format!(
        "#{:02X}{:02X}{:02X}",
        (red * 255.0_f64).round() as u8,
        (green * 255.0_f64).round() as u8,
        (blue * 255.0_f64).round() as u8
    )
}

/// Color of each train, trains in order of first appearance
#[must_use]
pub fn train_colors(segments: &[Segment]) -> IndexMap<String, String> {
    let trains: IndexSet<&str> = segments.iter().map(|s| s.train_id.as_str()).collect();
    let colors = distinct_colors(trains.len());

    trains
        .into_iter()
        .map(str::to_string)
        .zip(colors)
        .collect()
}

/// Copy `segments`, giving every train its own color
///
/// The input is left untouched. The same sequence of trains always receives the
/// same colors.
#[must_use]
pub fn assign_colors(segments: &[Segment]) -> Vec<Segment> {
    let colors = train_colors(segments);

    segments
        .iter()
        .map(|segment| match colors.get(&segment.train_id) {
            Some(color) => segment.with_color(color),
            None => segment.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use std::collections::HashSet;

    fn segment_for(train: &str) -> Segment {
        let t = NaiveTime::from_hms_opt(8, 0, 0).expect("valid time");
        Segment::dwell(t, t, "A", train)
    }

    #[test]
    fn test_single_train_gets_first_palette_color() {
        assert_eq!(distinct_colors(1), vec!["#1F77B4".to_string()]);
        assert!(distinct_colors(0).is_empty());
    }

    #[test]
    fn test_two_trains_span_palette_ends() {
        assert_eq!(distinct_colors(2), vec!["#1F77B4".to_string(), "#9EDAE5".to_string()]);
    }

    #[test]
    fn test_categorical_colors_distinct_up_to_twenty() {
        for n in 1..=CATEGORICAL_PALETTE_SIZE {
            let colors = distinct_colors(n);
            let unique: HashSet<&String> = colors.iter().collect();
            assert_eq!(unique.len(), n, "duplicate color for n = {n}");
        }
        assert_eq!(distinct_colors(20), TAB20.map(str::to_string).to_vec());
    }

    #[test]
    fn test_hue_colors_distinct_up_to_wheel_resolution() {
        let colors = distinct_colors(1530);
        let unique: HashSet<&String> = colors.iter().collect();
        assert_eq!(unique.len(), 1530);
    }

    #[test]
    fn test_hue_sampling_beyond_twenty() {
        let colors = distinct_colors(50);
        let unique: HashSet<&String> = colors.iter().collect();
        assert_eq!(unique.len(), 50);
        assert_eq!(colors[0], "#FF0000");
    }

    #[test]
    fn test_hue_to_hex_primaries() {
        assert_eq!(hue_to_hex(0.0), "#FF0000");
        assert_eq!(hue_to_hex(1.0 / 3.0), "#00FF00");
        assert_eq!(hue_to_hex(2.0 / 3.0), "#0000FF");
    }

    #[test]
    fn test_assign_colors_is_copy_on_write() {
        let segments = vec![segment_for("G308"), segment_for("D77"), segment_for("G308")];
        let colored = assign_colors(&segments);

        assert!(segments.iter().all(|s| s.color.is_none()));
        assert_eq!(colored[0].color, colored[2].color);
        assert_ne!(colored[0].color, colored[1].color);
        assert_eq!(colored[0].color.as_deref(), Some("#1F77B4"));
    }

    #[test]
    fn test_assign_colors_is_deterministic() {
        let segments: Vec<Segment> = (0..30).map(|i| segment_for(&format!("T{i}"))).collect();
        assert_eq!(assign_colors(&segments), assign_colors(&segments));
    }

    #[test]
    fn test_train_colors_in_first_appearance_order() {
        let segments = vec![segment_for("B"), segment_for("A"), segment_for("B")];
        let colors = train_colors(&segments);
        assert_eq!(colors.keys().collect::<Vec<_>>(), vec!["B", "A"]);
    }
}
