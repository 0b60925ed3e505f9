use crate::canvas::Canvas;
use crate::shape::Shape;

/// A deep copy of everything the user can see: the raster and the shape list
#[derive(Clone, Debug, PartialEq)]
pub struct CanvasSnapshot {
    pub canvas: Canvas,
    pub shapes: Vec<Shape>,
}

impl CanvasSnapshot {
    pub fn new(canvas: &Canvas, shapes: &[Shape]) -> Self {
        Self {
            canvas: canvas.clone(),
            shapes: shapes.to_vec(),
        }
    }
}

/// Undo/redo stacks of full-canvas snapshots
#[derive(Debug, Default)]
pub struct History {
    /// States that can be returned to with undo, newest last
    undo_stack: Vec<CanvasSnapshot>,
    /// States that can be returned to with redo, newest last
    redo_stack: Vec<CanvasSnapshot>,
    /// Maximum undo depth, `None` for unbounded
    limit: Option<usize>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history that keeps at most `limit` undo states.
    /// A limit of zero means unbounded.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: (limit > 0).then_some(limit),
            ..Self::default()
        }
    }

    /// Save the state before an edit. Starting a new edit discards the redo branch.
    pub fn record(&mut self, snapshot: CanvasSnapshot) {
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();

        if let Some(limit) = self.limit {
            if self.undo_stack.len() > limit {
                let excess = self.undo_stack.len() - limit;
                self.undo_stack.drain(..excess);
                log::debug!("Dropped {} oldest undo state(s)", excess);
            }
        }
    }

    /// Step back. `current` is kept for redo and the previous state is returned.
    /// Returns `None` and changes nothing when there is nothing to undo.
    pub fn undo(&mut self, current: CanvasSnapshot) -> Option<CanvasSnapshot> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        log::debug!("Undo: {} undo / {} redo", self.undo_stack.len(), self.redo_stack.len());
        Some(previous)
    }

    /// Step forward again. `current` is kept for undo.
    pub fn redo(&mut self, current: CanvasSnapshot) -> Option<CanvasSnapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        log::debug!("Redo: {} undo / {} redo", self.undo_stack.len(), self.redo_stack.len());
        Some(next)
    }

    /// Returns true if there are states that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are states that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear the history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
