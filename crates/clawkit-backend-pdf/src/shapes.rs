//! Path approximations for curved primitives
//!
//! PDF content streams only need straight segments at slide resolution, so
//! circles, wedges, and rounded corners are emitted as dense polygons. The
//! generators are pure point-list functions; the emitter wraps them into
//! printpdf paths.

/// Segments used for a full circle
pub const CIRCLE_SEGMENTS: u32 = 48;
/// Segments used per quarter-circle corner
pub const CORNER_SEGMENTS: u32 = 6;

/// Points of an arc around `(cx, cy)`, inclusive of both endpoints
///
/// Angles in degrees, counter-clockwise from the +x axis.
pub fn arc_points(
    cx: f32,
    cy: f32,
    radius: f32,
    start_deg: f32,
    sweep_deg: f32,
    segments: u32,
) -> Vec<(f32, f32)> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let t = start_deg + sweep_deg * i as f32 / segments as f32;
            let rad = t.to_radians();
            (cx + radius * rad.cos(), cy + radius * rad.sin())
        })
        .collect()
}

/// Closed polygon approximating a circle
pub fn circle_points(cx: f32, cy: f32, radius: f32) -> Vec<(f32, f32)> {
    let mut points = arc_points(cx, cy, radius, 0.0, 360.0, CIRCLE_SEGMENTS);
    // the final arc point duplicates the first; the ring closes itself
    points.pop();
    points
}

/// Closed polygon for a pie wedge: center, arc, back to center
pub fn wedge_points(
    cx: f32,
    cy: f32,
    radius: f32,
    start_deg: f32,
    sweep_deg: f32,
) -> Vec<(f32, f32)> {
    let arc_segments =
        ((sweep_deg.abs() / 360.0 * CIRCLE_SEGMENTS as f32).ceil() as u32).max(1);
    let mut points = vec![(cx, cy)];
    points.extend(arc_points(cx, cy, radius, start_deg, sweep_deg, arc_segments));
    points
}

/// Closed polygon for a rectangle with rounded corners
///
/// A non-positive radius degenerates to the plain four-corner rectangle.
pub fn rounded_rect_points(x: f32, y: f32, w: f32, h: f32, radius: f32) -> Vec<(f32, f32)> {
    let r = radius.min(w / 2.0).min(h / 2.0);
    if r <= 0.0 {
        return vec![(x, y), (x + w, y), (x + w, y + h), (x, y + h)];
    }

    let mut points = Vec::new();
    // corner centers, counter-clockwise from bottom-right
    let corners = [
        (x + w - r, y + r, 270.0),
        (x + w - r, y + h - r, 0.0),
        (x + r, y + h - r, 90.0),
        (x + r, y + r, 180.0),
    ];
    for (ccx, ccy, start) in corners {
        points.extend(arc_points(ccx, ccy, r, start, 90.0, CORNER_SEGMENTS));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(points: &[(f32, f32)]) -> (f32, f32, f32, f32) {
        let min_x = points.iter().map(|p| p.0).fold(f32::INFINITY, f32::min);
        let max_x = points.iter().map(|p| p.0).fold(f32::NEG_INFINITY, f32::max);
        let min_y = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
        let max_y = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);
        (min_x, min_y, max_x, max_y)
    }

    #[test]
    fn test_circle_point_count_and_radius() {
        let points = circle_points(10.0, 20.0, 5.0);
        assert_eq!(points.len(), CIRCLE_SEGMENTS as usize);
        for (px, py) in &points {
            let d = ((px - 10.0).powi(2) + (py - 20.0).powi(2)).sqrt();
            assert!((d - 5.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_wedge_starts_at_center() {
        let points = wedge_points(0.0, 0.0, 10.0, 0.0, 90.0);
        assert_eq!(points[0], (0.0, 0.0));
        // first arc point on +x axis, last on +y axis
        let first = points[1];
        let last = *points.last().unwrap();
        assert!((first.0 - 10.0).abs() < 1e-3 && first.1.abs() < 1e-3);
        assert!(last.0.abs() < 1e-3 && (last.1 - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_wedge_full_turn_segment_count() {
        let points = wedge_points(0.0, 0.0, 10.0, 0.0, 360.0);
        assert_eq!(points.len(), 1 + CIRCLE_SEGMENTS as usize + 1);
    }

    #[test]
    fn test_rounded_rect_stays_in_bbox() {
        let points = rounded_rect_points(10.0, 20.0, 100.0, 50.0, 8.0);
        let (min_x, min_y, max_x, max_y) = bounds(&points);
        assert!(min_x >= 10.0 - 1e-3 && max_x <= 110.0 + 1e-3);
        assert!(min_y >= 20.0 - 1e-3 && max_y <= 70.0 + 1e-3);
        // corner cut: no point exactly at the sharp corner
        assert!(!points.contains(&(10.0, 20.0)));
    }

    #[test]
    fn test_zero_radius_is_plain_rect() {
        let points = rounded_rect_points(0.0, 0.0, 4.0, 3.0, 0.0);
        assert_eq!(points, vec![(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]);
    }

    #[test]
    fn test_radius_clamped_to_half_extent() {
        // radius larger than half the height must not fold the path
        let points = rounded_rect_points(0.0, 0.0, 100.0, 10.0, 40.0);
        let (min_x, min_y, max_x, max_y) = bounds(&points);
        assert!(min_x >= -1e-3 && max_x <= 100.0 + 1e-3);
        assert!(min_y >= -1e-3 && max_y <= 10.0 + 1e-3);
    }
}
