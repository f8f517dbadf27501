use crate::error::MissingTimeWarning;
use crate::geometry::point_to_line_segment_distance;
use crate::layout::DiagramLayout;
use crate::models::Segment;
use crate::time::minutes_since_midnight;
use super::ticks::{time_ticks, AxisTick};
use super::types::{DiagramDimensions, ViewportState};

/// Stroke color for segments that were never assigned one
pub const UNASSIGNED_COLOR: &str = "#7F7F7F";

/// One drawable line, in canvas pixels
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeSegment {
    /// Index into [`RenderedDiagram::segments`]
    pub segment_index: usize,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EndpointMarker {
    pub x: f64,
    pub y: f64,
    pub color: String,
}

/// Tooltip content for the segment under the pointer
#[derive(Debug, Clone, PartialEq)]
pub struct HoverInfo {
    pub segment: Segment,
    pub label: String,
    pub train_id: String,
    pub x: f64,
    pub y: f64,
}

/// Everything the canvas needs to paint one frame, plus what hover needs to query it
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDiagram {
    pub segments: Vec<Segment>,
    pub strokes: Vec<StrokeSegment>,
    pub markers: Vec<EndpointMarker>,
    pub station_ticks: Vec<AxisTick>,
    pub time_ticks: Vec<AxisTick>,
    pub warnings: Vec<MissingTimeWarning>,
    pub dims: DiagramDimensions,
}

/// Maps minutes and rows to canvas pixels for one layout, size and viewport
#[derive(Debug, Clone, Copy)]
struct Projection {
    dims: DiagramDimensions,
    viewport: ViewportState,
    domain_start: f64,
    domain_span: f64,
    row_height: f64,
}

impl Projection {
    #[allow(clippy::cast_precision_loss)]
    fn new(layout: &DiagramLayout, dims: DiagramDimensions, viewport: ViewportState) -> Self {
        Self {
            dims,
            viewport,
            domain_start: layout.time_domain.start,
            domain_span: layout.time_domain.span(),
            row_height: dims.graph_height / layout.row_count().max(1) as f64,
        }
    }

    fn pixels_per_minute(&self) -> f64 {
        self.dims.graph_width * self.viewport.time_zoom() / self.domain_span
    }

    fn x(&self, minutes: f64) -> f64 {
        self.dims.left_margin
            + self.viewport.pan_offset_x
            + (minutes - self.domain_start) * self.pixels_per_minute()
    }

    /// Inverse of [`Projection::x`]
    fn minutes_at(&self, x: f64) -> f64 {
        self.domain_start + (x - self.dims.left_margin - self.viewport.pan_offset_x) / self.pixels_per_minute()
    }

    #[allow(clippy::cast_precision_loss)]
    fn y(&self, row: usize) -> f64 {
        self.dims.top_margin
            + self.viewport.pan_offset_y
            + (row as f64 + 0.5) * self.row_height * self.viewport.zoom_level
    }
}

/// Project `segments` onto the canvas
///
/// Segments with a missing time are not drawn; each of them is reported in
/// [`RenderedDiagram::warnings`] instead. Neither input is modified.
#[must_use]
pub fn render(
    segments: &[Segment],
    layout: &DiagramLayout,
    dims: DiagramDimensions,
    viewport: ViewportState,
) -> RenderedDiagram {
    let projection = Projection::new(layout, dims, viewport);

    let mut strokes = Vec::with_capacity(segments.len());
    let mut markers = Vec::with_capacity(segments.len() * 2);
    let mut warnings = Vec::new();

    for (segment_index, segment) in segments.iter().enumerate() {
        let (Some(start), Some(end)) = (segment.start, segment.end) else {
            warnings.push(MissingTimeWarning {
                train_id: segment.train_id.clone(),
                from_station: segment.from_station.clone(),
                to_station: segment.to_station.clone(),
            });
            continue;
        };

        let (Some(from_row), Some(to_row)) = (layout.row_of(&segment.from_station), layout.row_of(&segment.to_station)) else {
            crate::log!("No row for segment {}, skipped", segment.label());
            continue;
        };

        let color = segment.color.as_deref().unwrap_or(UNASSIGNED_COLOR).to_string();
        let stroke = StrokeSegment {
            segment_index,
            x1: projection.x(minutes_since_midnight(start)),
            y1: projection.y(from_row),
            x2: projection.x(minutes_since_midnight(end)),
            y2: projection.y(to_row),
            color,
        };

        markers.push(EndpointMarker { x: stroke.x1, y: stroke.y1, color: stroke.color.clone() });
        markers.push(EndpointMarker { x: stroke.x2, y: stroke.y2, color: stroke.color.clone() });
        strokes.push(stroke);
    }

    let area = dims.graph_area();

    let station_ticks = layout
        .stations
        .iter()
        .enumerate()
        .map(|(row, station)| AxisTick {
            position: projection.y(row),
            label: station.clone(),
        })
        .filter(|tick| tick.position >= area.y && tick.position <= area.bottom())
        .collect();

    let time_ticks = time_ticks(
        projection.minutes_at(area.x),
        projection.minutes_at(area.right()),
        projection.pixels_per_minute(),
        |minutes| projection.x(minutes),
    );

    RenderedDiagram {
        segments: segments.to_vec(),
        strokes,
        markers,
        station_ticks,
        time_ticks,
        warnings,
        dims,
    }
}

impl RenderedDiagram {
    /// Segment drawn nearest to the pointer at (`x`, `y`)
    ///
    /// The pointer must lie inside the graph area and within `tolerance` pixels
    /// of a stroke. Distance is measured to the stroke itself, not its
    /// extension, so points past an end measure to that end.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64, tolerance: f64) -> Option<HoverInfo> {
        if !self.dims.graph_area().contains(x, y) {
            return None;
        }

        let (stroke, _) = self
            .strokes
            .iter()
            .map(|stroke| {
                let distance = point_to_line_segment_distance((x, y), (stroke.x1, stroke.y1), (stroke.x2, stroke.y2));
                (stroke, distance)
            })
            .filter(|(_, distance)| *distance <= tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1))?;

        let segment = self.segments.get(stroke.segment_index)?;
        Some(HoverInfo {
            segment: segment.clone(),
            label: segment.label(),
            train_id: segment.train_id.clone(),
            x,
            y,
        })
    }
}
