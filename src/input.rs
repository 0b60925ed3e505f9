use egui::{Context, Key, KeyboardShortcut, Modifiers, PointerButton, Pos2, Rect, Response};

use crate::document::Document;

/// Canvas-level input, with positions already in canvas pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved while a press that started on the canvas is held
    PointerMove { position: Pos2 },
    /// Primary button released after a press on the canvas
    PointerUp { position: Pos2 },
    Undo,
    Redo,
}

const UNDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);
const REDO_SHIFT: KeyboardShortcut = KeyboardShortcut::new(
    Modifiers {
        shift: true,
        ..Modifiers::COMMAND
    },
    Key::Z,
);

/// Handles converting raw egui input into canvas events
#[derive(Debug, Default)]
pub struct InputHandler {
    /// A press started on the canvas and has not been released yet
    tracking: bool,
    last_position: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Translate this frame's input. `canvas_rect` is where the canvas is drawn
    /// and `response` is the canvas widget's response.
    pub fn process_input(
        &mut self,
        ctx: &Context,
        canvas_rect: Rect,
        response: &Response,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();

        // A focused text field owns the keyboard, including its own Cmd+Z
        if !ctx.wants_keyboard_input() {
            // Shift+Cmd+Z has to be consumed before Cmd+Z, which would also match it
            ctx.input_mut(|input| {
                if input.consume_shortcut(&REDO_SHIFT) || input.consume_shortcut(&REDO) {
                    events.push(InputEvent::Redo);
                } else if input.consume_shortcut(&UNDO) {
                    events.push(InputEvent::Undo);
                }
            });
        }

        let to_canvas = |pos: Pos2| Pos2::new(pos.x - canvas_rect.min.x, pos.y - canvas_rect.min.y);

        ctx.input(|input| {
            let pointer = &input.pointer;
            let position = pointer.interact_pos().map(to_canvas);

            if pointer.button_pressed(PointerButton::Primary) && response.hovered() {
                if let Some(position) = position {
                    self.tracking = true;
                    self.last_position = Some(position);
                    events.push(InputEvent::PointerDown { position });
                }
            } else if self.tracking {
                if let Some(position) = position {
                    if self.last_position != Some(position) {
                        self.last_position = Some(position);
                        events.push(InputEvent::PointerMove { position });
                    }
                }
            }

            if self.tracking && pointer.button_released(PointerButton::Primary) {
                let position = position.or(self.last_position).unwrap_or_default();
                self.tracking = false;
                self.last_position = None;
                events.push(InputEvent::PointerUp { position });
            }
        });

        events
    }

    /// End a press in progress without reading any input. Used while the canvas
    /// is blocked, so a drag that started before the block is not left open.
    pub fn release(&mut self) -> Vec<InputEvent> {
        if !std::mem::take(&mut self.tracking) {
            return Vec::new();
        }
        let position = self.last_position.take().unwrap_or_default();
        vec![InputEvent::PointerUp { position }]
    }
}

/// Feed events to the document. Returns true if anything happened.
pub fn apply_events(document: &mut Document, events: &[InputEvent]) -> bool {
    for event in events {
        match *event {
            InputEvent::PointerDown { position } => document.pointer_down(position),
            InputEvent::PointerMove { position } => document.pointer_drag(position),
            InputEvent::PointerUp { position } => document.pointer_up(position),
            InputEvent::Undo => {
                document.undo();
            }
            InputEvent::Redo => {
                document.redo();
            }
        }
    }
    !events.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::Tool;
    use egui::{Event, RawInput, Sense, pos2, vec2};

    /// Run three frames of a text field above a canvas and press Cmd+Z in the last
    /// one. Returns the canvas events of that frame.
    fn undo_key_events(focus_text_field: bool) -> Vec<InputEvent> {
        let ctx = Context::default();
        let mut handler = InputHandler::new();
        let mut text = String::from("20");
        let mut events = Vec::new();

        for frame in 0..3 {
            let mut raw_input = RawInput {
                screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(400.0, 400.0))),
                ..Default::default()
            };
            if frame == 2 {
                raw_input.modifiers = Modifiers::COMMAND;
                raw_input.events.push(Event::Key {
                    key: Key::Z,
                    physical_key: None,
                    pressed: true,
                    repeat: false,
                    modifiers: Modifiers::COMMAND,
                });
            }

            let _ = ctx.run(raw_input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let field = ui.text_edit_singleline(&mut text);
                    if frame == 0 && focus_text_field {
                        field.request_focus();
                    }
                    let (rect, response) =
                        ui.allocate_exact_size(vec2(100.0, 100.0), Sense::click_and_drag());
                    if frame == 2 {
                        events.extend(handler.process_input(ctx, rect, &response));
                    }
                });
            });
        }
        events
    }

    #[test]
    fn undo_shortcut_reaches_canvas() {
        assert_eq!(undo_key_events(false), vec![InputEvent::Undo]);
    }

    #[test]
    fn focused_text_field_keeps_undo_shortcut() {
        assert!(!undo_key_events(true).contains(&InputEvent::Undo));
    }

    #[test]
    fn release_ends_a_press_in_progress() {
        let mut handler = InputHandler {
            tracking: true,
            last_position: Some(pos2(12.0, 34.0)),
        };
        assert_eq!(
            handler.release(),
            vec![InputEvent::PointerUp { position: pos2(12.0, 34.0) }]
        );
        assert!(!handler.is_tracking());
        assert!(handler.release().is_empty());
    }

    #[test]
    fn events_drive_a_shape_drag() {
        let mut document = Document::default();
        document.set_active_tool(Tool::Rectangle);

        let events = [
            InputEvent::PointerDown { position: pos2(10.0, 10.0) },
            InputEvent::PointerMove { position: pos2(30.0, 20.0) },
            InputEvent::PointerUp { position: pos2(40.0, 30.0) },
        ];
        assert!(apply_events(&mut document, &events));

        assert_eq!(document.shapes().len(), 1);
        assert_eq!(document.shapes()[0].end(), pos2(40.0, 30.0));

        assert!(apply_events(&mut document, &[InputEvent::Undo]));
        assert!(document.shapes().is_empty());
        apply_events(&mut document, &[InputEvent::Redo]);
        assert_eq!(document.shapes().len(), 1);
    }

    #[test]
    fn no_events_is_no_change() {
        let mut document = Document::default();
        assert!(!apply_events(&mut document, &[]));
        assert_eq!(document.version(), 0);
    }
}
