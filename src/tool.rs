use crate::shape::ShapeKind;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, serde::Deserialize, serde::Serialize)]
pub enum Tool {
    #[default]
    Brush,
    Eraser,
    Line,
    Rectangle,
    Circle,
    Triangle,
}

impl Tool {
    /// Every tool, brush first
    pub const ALL: [Tool; 6] = [
        Tool::Brush,
        Tool::Eraser,
        Tool::Line,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Triangle,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::Eraser => "Eraser",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Triangle => "Triangle",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tool::Brush => "🖌",
            Tool::Eraser => "⌫",
            Tool::Line => "╱",
            Tool::Rectangle => "▭",
            Tool::Circle => "○",
            Tool::Triangle => "△",
        }
    }

    /// The shape this tool creates on release, if any
    pub fn shape_kind(self) -> Option<ShapeKind> {
        match self {
            Tool::Line => Some(ShapeKind::Line),
            Tool::Rectangle => Some(ShapeKind::Rectangle),
            Tool::Circle => Some(ShapeKind::Circle),
            Tool::Triangle => Some(ShapeKind::Triangle),
            Tool::Brush | Tool::Eraser => None,
        }
    }

    /// Brush and eraser paint dabs while the pointer is dragged
    pub fn paints_on_drag(self) -> bool {
        matches!(self, Tool::Brush | Tool::Eraser)
    }
}
