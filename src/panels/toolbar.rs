use crate::PaintApp;
use crate::brush::PALETTE;
use crate::components::ToolButton;
use crate::tool::Tool;

pub fn toolbar(app: &mut PaintApp, ctx: &egui::Context) {
    let enabled = !app.is_modal_open();
    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.add_enabled_ui(enabled, |ui| {
            ui.horizontal_wrapped(|ui| {
                let size_field = ui.add(
                    egui::TextEdit::singleline(&mut app.brush_size_text)
                        .desired_width(32.0)
                        .hint_text("size"),
                );
                if size_field.lost_focus() {
                    app.commit_brush_size();
                } else if size_field.changed() {
                    // Apply valid sizes while typing; errors wait until the field is left
                    if let Ok(size) = crate::brush::parse_brush_size(&app.brush_size_text) {
                        app.document.set_brush_size(size);
                    }
                }

                tool_button(app, ui, Tool::Brush);
                tool_button(app, ui, Tool::Eraser);

                ui.separator();
                for color in PALETTE {
                    let swatch = egui::Button::new("")
                        .fill(color)
                        .min_size(egui::vec2(20.0, 20.0));
                    if ui.add(swatch).clicked() {
                        app.document.set_color(color);
                    }
                }
                let mut color = app.document.color();
                let picker = egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                );
                if picker.changed() {
                    app.document.set_color(color);
                }

                ui.separator();
                if ui.add_enabled(app.document.can_undo(), egui::Button::new("Undo")).clicked() {
                    app.document.undo();
                }
                if ui.add_enabled(app.document.can_redo(), egui::Button::new("Redo")).clicked() {
                    app.document.redo();
                }
                if ui.button("Clear").clicked() {
                    log::info!("Canvas cleared");
                    app.document.clear();
                }

                ui.separator();
                for tool in [Tool::Line, Tool::Rectangle, Tool::Circle, Tool::Triangle] {
                    tool_button(app, ui, tool);
                }
            });
        });
    });
}

fn tool_button(app: &mut PaintApp, ui: &mut egui::Ui, tool: Tool) {
    let selected = app.document.active_tool() == tool;
    if ToolButton::new(tool, selected).show(ui).clicked() {
        match tool {
            Tool::Brush => app.document.select_brush(),
            _ => app.document.set_active_tool(tool),
        }
    }
}
