use egui::{Color32, Painter, Pos2, Rect, Shape as EguiShape, Stroke as EguiStroke, Vec2, pos2};

use crate::canvas::Canvas;
use crate::geometry::{self, hit_testing};

/// The vector shapes the toolbar can draw
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
pub enum ShapeKind {
    Line,
    Rectangle,
    Circle,
    Triangle,
}

/// A shape drawn by dragging from `start` to `end`
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    start: Pos2,
    end: Pos2,
    color: Color32,
    thickness: f32,
    kind: ShapeKind,
}

impl Shape {
    pub fn new(start: Pos2, end: Pos2, color: Color32, thickness: f32, kind: ShapeKind) -> Self {
        Self {
            start,
            end,
            color,
            thickness,
            kind,
        }
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The box spanned by the drag, used by rectangle and circle
    pub fn bounding_box(&self) -> Rect {
        geometry::drag_box(self.start, self.end)
    }

    /// Apex on the top edge at the horizontal midpoint, base along the bottom edge
    fn triangle_vertices(&self) -> [Pos2; 3] {
        let (x1, y1, x2, y2) = (self.start.x, self.start.y, self.end.x, self.end.y);
        [pos2(x1, y2), pos2((x1 + x2) / 2.0, y1), pos2(x2, y2)]
    }

    /// Outline vertices and whether the outline is closed
    pub fn outline(&self) -> (Vec<Pos2>, bool) {
        match self.kind {
            ShapeKind::Line => (vec![self.start, self.end], false),
            ShapeKind::Rectangle => {
                let rect = self.bounding_box();
                (
                    vec![
                        rect.left_top(),
                        rect.right_top(),
                        rect.right_bottom(),
                        rect.left_bottom(),
                    ],
                    true,
                )
            }
            ShapeKind::Circle => (geometry::ellipse_outline(self.bounding_box()), true),
            ShapeKind::Triangle => (self.triangle_vertices().to_vec(), true),
        }
    }

    /// Whether `pos` is on this shape. Lines are hit within half the thickness,
    /// the closed shapes anywhere inside their area.
    pub fn contains(&self, pos: Pos2) -> bool {
        match self.kind {
            ShapeKind::Line => {
                let distance = hit_testing::distance_to_line_segment(pos, self.start, self.end);
                distance <= self.thickness / 2.0
            }
            ShapeKind::Rectangle => hit_testing::rect_contains(self.bounding_box(), pos),
            ShapeKind::Circle => hit_testing::ellipse_contains(self.bounding_box(), pos),
            ShapeKind::Triangle => hit_testing::polygon_contains(&self.triangle_vertices(), pos),
        }
    }

    /// Bake the outline into a raster
    pub fn rasterize(&self, canvas: &mut Canvas) {
        let (points, closed) = self.outline();
        canvas.stroke_polyline(&points, closed, self.thickness, self.color);
    }

    /// Draw the outline with egui, with canvas coordinates shifted by `origin`
    pub fn paint(&self, painter: &Painter, origin: Vec2) {
        let (points, closed) = self.outline();
        let points: Vec<Pos2> = points.into_iter().map(|p| p + origin).collect();
        let stroke = EguiStroke::new(self.thickness, self.color);

        if closed {
            painter.add(EguiShape::closed_line(points, stroke));
        } else {
            painter.add(EguiShape::line(points, stroke));
        }
    }
}
