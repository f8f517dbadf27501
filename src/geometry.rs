/// Calculates the minimum distance from a point to a line segment.
///
/// The projection onto the segment is clamped to its endpoints, so points
/// beyond either end measure to the nearest endpoint. A zero-length segment
/// measures to its single point.
///
/// # Arguments
/// * `point` - The point to measure from
/// * `seg_start` - Starting point of the line segment
/// * `seg_end` - Ending point of the line segment
#[must_use]
pub fn point_to_line_segment_distance(point: (f64, f64), seg_start: (f64, f64), seg_end: (f64, f64)) -> f64 {
    let dx = seg_end.0 - seg_start.0;
    let dy = seg_end.1 - seg_start.1;
    let len_sq = dx * dx + dy * dy;

    if len_sq == 0.0 {
        return (point.0 - seg_start.0).hypot(point.1 - seg_start.1);
    }

    let t = ((point.0 - seg_start.0) * dx + (point.1 - seg_start.1) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    let closest_x = seg_start.0 + t * dx;
    let closest_y = seg_start.1 + t * dy;

    (point.0 - closest_x).hypot(point.1 - closest_y)
}

/// Axis-aligned rectangle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_perpendicular_to_horizontal_segment() {
        let d = point_to_line_segment_distance((5.0, 4.0), (0.0, 0.0), (10.0, 0.0));
        assert!((d - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_distance_beyond_segment_end_uses_endpoint() {
        let d = point_to_line_segment_distance((13.0, 4.0), (0.0, 0.0), (10.0, 0.0));
        assert!((d - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_distance_to_diagonal_segment() {
        let d = point_to_line_segment_distance((0.0, 10.0), (0.0, 0.0), (10.0, 10.0));
        assert!((d - 50.0_f64.sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_distance_to_degenerate_segment() {
        let d = point_to_line_segment_distance((3.0, 4.0), (0.0, 0.0), (0.0, 0.0));
        assert!((d - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect { x: 10.0, y: 20.0, width: 100.0, height: 50.0 };
        assert!(rect.contains(10.0, 20.0));
        assert!(rect.contains(110.0, 70.0));
        assert!(!rect.contains(9.9, 30.0));
        assert!(!rect.contains(50.0, 70.1));
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
    }
}
