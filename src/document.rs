use std::path::{Path, PathBuf};

use egui::{Color32, Pos2};
use image::RgbaImage;

use crate::brush::MAX_BRUSH_SIZE;
use crate::canvas::Canvas;
use crate::config::PaintConfig;
use crate::error::Result;
use crate::file_handler;
use crate::history::{CanvasSnapshot, History};
use crate::shape::Shape;
use crate::tool::Tool;

/// Eraser dabs paint the background color
pub const ERASER_COLOR: Color32 = Color32::WHITE;

#[derive(Debug, Clone, Copy)]
struct Drag {
    start: Pos2,
    last: Pos2,
}

/// The paint canvas model: raster, shapes, history and the current tool settings.
///
/// Pointer positions are canvas pixel coordinates.
#[derive(Debug)]
pub struct Document {
    canvas: Canvas,
    shapes: Vec<Shape>,
    history: History,
    color: Color32,
    brush_size: u32,
    active_tool: Tool,
    drag: Option<Drag>,
    version: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(&PaintConfig::default())
    }
}

impl Document {
    pub fn new(config: &PaintConfig) -> Self {
        Self {
            canvas: Canvas::new(config.canvas_width, config.canvas_height),
            shapes: Vec::new(),
            history: History::with_limit(config.history_limit),
            color: Color32::BLACK,
            brush_size: config.brush_size.clamp(1, MAX_BRUSH_SIZE),
            active_tool: Tool::default(),
            drag: None,
            version: 0,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    pub fn active_tool(&self) -> Tool {
        self.active_tool
    }

    /// Changes whenever something visible changes
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn set_color(&mut self, color: Color32) {
        self.color = color;
    }

    /// Sizes outside `1..=MAX_BRUSH_SIZE` are clamped
    pub fn set_brush_size(&mut self, size: u32) {
        self.brush_size = size.clamp(1, MAX_BRUSH_SIZE);
    }

    pub fn set_active_tool(&mut self, tool: Tool) {
        if tool != self.active_tool {
            log::info!("Tool changed: {} -> {}", self.active_tool.name(), tool.name());
        }
        self.active_tool = tool;
    }

    /// The brush button also resets the color to black
    pub fn select_brush(&mut self) {
        self.set_active_tool(Tool::Brush);
        self.color = Color32::BLACK;
    }

    fn touch(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    fn snapshot(&self) -> CanvasSnapshot {
        CanvasSnapshot::new(&self.canvas, &self.shapes)
    }

    fn restore(&mut self, snapshot: CanvasSnapshot) {
        self.canvas = snapshot.canvas;
        self.shapes = snapshot.shapes;
        self.drag = None;
        self.touch();
    }

    fn brush_diameter(&self) -> f32 {
        self.brush_size as f32
    }

    fn dab_color(&self) -> Color32 {
        if self.active_tool == Tool::Eraser {
            ERASER_COLOR
        } else {
            self.color
        }
    }

    /// Start an edit: the state before it goes onto the undo stack
    pub fn pointer_down(&mut self, pos: Pos2) {
        self.history.record(self.snapshot());
        self.drag = Some(Drag { start: pos, last: pos });

        if self.active_tool.paints_on_drag() {
            self.canvas.fill_circle(pos, self.brush_diameter(), self.dab_color());
            if self.active_tool == Tool::Eraser {
                self.erase_shapes_at(pos);
            }
        }
        self.touch();
    }

    pub fn pointer_drag(&mut self, pos: Pos2) {
        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        let from = drag.last;
        drag.last = pos;

        // Shape tools only move the preview end point; the raster is untouched
        if self.active_tool.paints_on_drag() {
            self.canvas.stamp_segment(from, pos, self.brush_diameter(), self.dab_color());
            if self.active_tool == Tool::Eraser {
                self.erase_shapes_at(pos);
            }
            self.touch();
        }
    }

    /// Finish an edit. Shape tools commit a shape from the drag start to `pos`.
    pub fn pointer_up(&mut self, pos: Pos2) {
        let Some(drag) = self.drag.take() else {
            return;
        };

        if let Some(kind) = self.active_tool.shape_kind() {
            let shape = Shape::new(drag.start, pos, self.color, self.brush_diameter(), kind);
            log::debug!("Added {:?} from {:?} to {:?}", kind, drag.start, pos);
            self.shapes.push(shape);
        }
        self.touch();
    }

    /// The shape that would be committed if the pointer were released now
    pub fn preview_shape(&self) -> Option<Shape> {
        let drag = self.drag?;
        let kind = self.active_tool.shape_kind()?;
        Some(Shape::new(drag.start, drag.last, self.color, self.brush_diameter(), kind))
    }

    /// Remove every shape under `pos`. Returns how many were removed.
    pub fn erase_shapes_at(&mut self, pos: Pos2) -> usize {
        let before = self.shapes.len();
        self.shapes.retain(|shape| !shape.contains(pos));
        let removed = before - self.shapes.len();
        if removed > 0 {
            log::debug!("Erased {} shape(s) at {:?}", removed, pos);
            self.touch();
        }
        removed
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.snapshot()) {
            Some(previous) => {
                self.restore(previous);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.snapshot()) {
            Some(next) => {
                self.restore(next);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Remove all shapes and paint the raster white. Undoable.
    pub fn clear(&mut self) {
        self.history.record(self.snapshot());
        self.shapes.clear();
        self.canvas.clear();
        self.drag = None;
        self.touch();
    }

    /// Grow the raster to at least the given size
    pub fn ensure_size(&mut self, width: u32, height: u32) {
        if self.canvas.ensure_size(width, height) {
            self.touch();
        }
    }

    /// Replace the raster with an image; the canvas takes the image's size.
    /// Shapes are kept. Undoable.
    pub fn open_image(&mut self, image: RgbaImage) {
        self.history.record(self.snapshot());
        self.canvas = Canvas::from_image(image);
        self.drag = None;
        self.touch();
    }

    /// Decode a file and open it. On error nothing changes.
    pub fn load_image(&mut self, path: &Path) -> Result<()> {
        let image = file_handler::load_image(path)?;
        self.open_image(image);
        Ok(())
    }

    /// The raster with every shape baked on top
    pub fn flatten(&self) -> Canvas {
        let mut flat = self.canvas.clone();
        for shape in &self.shapes {
            shape.rasterize(&mut flat);
        }
        flat
    }

    /// Write the flattened canvas as PNG. Returns the path actually written.
    pub fn save_image(&self, path: &Path) -> Result<PathBuf> {
        file_handler::save_png(path, self.flatten().image())
    }
}
