use crate::geometry::Rect;

// Layout constants for the diagram canvas
pub const LEFT_MARGIN: f64 = 120.0;
pub const TOP_MARGIN: f64 = 60.0;
pub const RIGHT_PADDING: f64 = 20.0;
pub const BOTTOM_PADDING: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramDimensions {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub left_margin: f64,
    pub top_margin: f64,
    pub graph_width: f64,
    pub graph_height: f64,
}

impl DiagramDimensions {
    #[must_use]
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            canvas_width,
            canvas_height,
            left_margin: LEFT_MARGIN,
            top_margin: TOP_MARGIN,
            graph_width: (canvas_width - LEFT_MARGIN - RIGHT_PADDING).max(0.0),
            graph_height: (canvas_height - TOP_MARGIN - BOTTOM_PADDING).max(0.0),
        }
    }

    /// Plot area, excluding the margins that hold labels
    #[must_use]
    pub fn graph_area(&self) -> Rect {
        Rect {
            x: self.left_margin,
            y: self.top_margin,
            width: self.graph_width,
            height: self.graph_height,
        }
    }
}

/// Zoom and pan applied on top of the fitted diagram
///
/// `zoom_level` scales both axes, `zoom_level_x` stretches the time axis only.
/// Pan offsets are in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub zoom_level: f64,
    pub zoom_level_x: f64,
    pub pan_offset_x: f64,
    pub pan_offset_y: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom_level: 1.0,
            zoom_level_x: 1.0,
            pan_offset_x: 0.0,
            pan_offset_y: 0.0,
        }
    }
}

impl ViewportState {
    /// Horizontal scale factor for the time axis
    #[must_use]
    pub fn time_zoom(&self) -> f64 {
        self.zoom_level * self.zoom_level_x
    }
}
