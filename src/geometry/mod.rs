//! Plain 2D helpers shared by shape hit testing and rasterization.

pub mod hit_testing;

use egui::{Pos2, Rect, pos2};

/// Number of vertices used to approximate an ellipse outline
pub const ELLIPSE_SEGMENTS: usize = 64;

/// The box spanned by two drag corners, normalized so `min <= max`
pub fn drag_box(start: Pos2, end: Pos2) -> Rect {
    Rect::from_two_pos(start, end)
}

/// Vertices of the ellipse inscribed in `rect`
pub fn ellipse_outline(rect: Rect) -> Vec<Pos2> {
    let center = rect.center();
    let rx = rect.width() / 2.0;
    let ry = rect.height() / 2.0;

    (0..ELLIPSE_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / ELLIPSE_SEGMENTS as f32 * std::f32::consts::TAU;
            pos2(center.x + rx * angle.cos(), center.y + ry * angle.sin())
        })
        .collect()
}

/// Axis-aligned bounds of a set of points grown by `padding` on every side
pub fn bounds(points: &[Pos2], padding: f32) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(
        pos2(min_x - padding, min_y - padding),
        pos2(max_x + padding, max_y + padding),
    )
}
