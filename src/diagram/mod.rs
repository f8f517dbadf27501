//! Pure diagram pipeline: segments, colors and layout in, a paintable scene out.

mod scene;
pub mod ticks;
pub mod types;

pub use scene::{render, EndpointMarker, HoverInfo, RenderedDiagram, StrokeSegment, UNASSIGNED_COLOR};
pub use ticks::AxisTick;
pub use types::{DiagramDimensions, ViewportState};

use crate::colors::assign_colors;
use crate::error::DiagramError;
use crate::layout::{layout_with_padding, DiagramLayout};
use crate::models::{ScheduleRecord, Segment, StationOrder};
use crate::segments::build_segments;

/// Colored segments and their layout, ready to be rendered at any size
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramModel {
    pub segments: Vec<Segment>,
    pub layout: DiagramLayout,
}

impl DiagramModel {
    #[must_use]
    pub fn render(&self, dims: DiagramDimensions, viewport: ViewportState) -> RenderedDiagram {
        render(&self.segments, &self.layout, dims, viewport)
    }
}

/// Build segments from `records`, color them by train and lay them out
///
/// # Errors
///
/// Returns [`DiagramError::EmptyInput`] when there is nothing to draw, including
/// when every segment is missing an endpoint time.
pub fn prepare_diagram(
    records: &[ScheduleRecord],
    hint: Option<&StationOrder>,
    padding: chrono::Duration,
) -> Result<DiagramModel, DiagramError> {
    let segments = build_segments(records)?;
    if !segments.iter().any(Segment::is_complete) {
        return Err(DiagramError::EmptyInput("no segment has both times"));
    }

    let segments = assign_colors(&segments);
    let layout = layout_with_padding(&segments, hint, padding)?;

    Ok(DiagramModel { segments, layout })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time")
    }

    fn records() -> Vec<ScheduleRecord> {
        vec![
            ScheduleRecord::new("德阳", "G308", Some(hm(11, 20)), Some(hm(11, 22))),
            ScheduleRecord::new("成都东", "G308", Some(hm(10, 47)), Some(hm(10, 56))),
            ScheduleRecord::new("成都东", "D77", Some(hm(12, 0)), Some(hm(12, 3))),
            ScheduleRecord::new("德阳", "D77", Some(hm(12, 30)), None),
        ]
    }

    #[test]
    fn test_prepare_diagram_colors_and_orders() {
        let hint = StationOrder::new(["成都东", "德阳"]);
        let model = prepare_diagram(&records(), Some(&hint), chrono::Duration::minutes(10)).expect("diagram");

        assert_eq!(model.layout.stations, vec!["成都东", "德阳"]);
        assert!(model.segments.iter().all(|s| s.color.is_some()));
        assert_eq!(model.layout.time_domain.start, 637.0);
        assert_eq!(model.layout.time_domain.end, 760.0);
    }

    #[test]
    fn test_colors_do_not_depend_on_record_order() {
        let padding = chrono::Duration::minutes(10);
        let forward = prepare_diagram(&records(), None, padding).expect("diagram");

        let mut reversed_records = records();
        reversed_records.reverse();
        let reversed = prepare_diagram(&reversed_records, None, padding).expect("diagram");

        assert_eq!(forward.segments, reversed.segments);
    }

    #[test]
    fn test_empty_records_fail() {
        assert_eq!(
            prepare_diagram(&[], None, chrono::Duration::zero()),
            Err(DiagramError::EmptyInput("no schedule records"))
        );
    }

    #[test]
    fn test_no_complete_segment_fails() {
        let records = vec![
            ScheduleRecord::new("A", "K1", None, Some(hm(8, 0))),
            ScheduleRecord::new("B", "K1", None, None),
        ];
        assert_eq!(
            prepare_diagram(&records, None, chrono::Duration::minutes(10)),
            Err(DiagramError::EmptyInput("no segment has both times"))
        );
    }

    #[test]
    fn test_model_renders_at_any_size() {
        let model = prepare_diagram(&records(), None, chrono::Duration::minutes(10)).expect("diagram");
        let small = model.render(DiagramDimensions::new(400.0, 300.0), ViewportState::default());
        let large = model.render(DiagramDimensions::new(1600.0, 900.0), ViewportState::default());

        assert_eq!(small.strokes.len(), large.strokes.len());
        assert_eq!(small.warnings.len(), 0);
    }
}
