use egui::{Pos2, Rect};

/// Distance from a point to a line segment
pub fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

/// Half-open box test: the left and top edges are inside, the right and bottom are not.
/// An empty box contains nothing.
pub fn rect_contains(rect: Rect, point: Pos2) -> bool {
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return false;
    }
    point.x >= rect.min.x && point.y >= rect.min.y && point.x < rect.max.x && point.y < rect.max.y
}

/// Strict containment in the ellipse inscribed in `rect`
pub fn ellipse_contains(rect: Rect, point: Pos2) -> bool {
    let w = rect.width();
    let h = rect.height();
    if w <= 0.0 || h <= 0.0 {
        return false;
    }
    let norm_x = (point.x - rect.min.x) / w - 0.5;
    let norm_y = (point.y - rect.min.y) / h - 0.5;
    norm_x * norm_x + norm_y * norm_y < 0.25
}

/// Even-odd containment for a closed polygon
pub fn polygon_contains(vertices: &[Pos2], point: Pos2) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[j];
        // Half-open in y so a vertex shared by two edges is counted once
        if (a.y > point.y) != (b.y > point.y) {
            let crossing_x = a.x + (point.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if point.x < crossing_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn segment_distance_clamps_to_endpoints() {
        let d = distance_to_line_segment(pos2(-3.0, 4.0), pos2(0.0, 0.0), pos2(10.0, 0.0));
        assert!((d - 5.0).abs() < 0.001);
    }

    #[test]
    fn degenerate_segment_is_a_point() {
        let d = distance_to_line_segment(pos2(3.0, 4.0), pos2(0.0, 0.0), pos2(0.0, 0.0));
        assert!((d - 5.0).abs() < 0.001);
    }

    #[test]
    fn rect_edges_are_half_open() {
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(10.0, 10.0));
        assert!(rect_contains(rect, pos2(0.0, 0.0)));
        assert!(!rect_contains(rect, pos2(10.0, 5.0)));
        assert!(!rect_contains(rect, pos2(5.0, 10.0)));
    }

    #[test]
    fn flat_rect_contains_nothing() {
        let rect = Rect::from_min_max(pos2(0.0, 5.0), pos2(10.0, 5.0));
        assert!(!rect_contains(rect, pos2(5.0, 5.0)));
        assert!(!ellipse_contains(rect, pos2(5.0, 5.0)));
    }

    #[test]
    fn ellipse_excludes_box_corners() {
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(20.0, 10.0));
        assert!(ellipse_contains(rect, pos2(10.0, 5.0)));
        assert!(!ellipse_contains(rect, pos2(1.0, 1.0)));
    }

    #[test]
    fn polygon_even_odd() {
        let triangle = [pos2(0.0, 10.0), pos2(5.0, 0.0), pos2(10.0, 10.0)];
        assert!(polygon_contains(&triangle, pos2(5.0, 7.0)));
        assert!(!polygon_contains(&triangle, pos2(1.0, 1.0)));
        assert!(!polygon_contains(&triangle[..2], pos2(5.0, 7.0)));
    }
}
