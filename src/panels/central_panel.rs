use crate::PaintApp;
use crate::input;

pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    let blocked = app.is_modal_open();
    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(egui::Color32::from_gray(60)))
        .show(ctx, |ui| {
            egui::ScrollArea::both().drag_to_scroll(false).show(ui, |ui| {
                let PaintApp {
                    document,
                    renderer,
                    input: input_handler,
                    ..
                } = app;

                // The canvas grows to fill the viewport but never shrinks
                let available = ui.available_size();
                if !input_handler.is_tracking() {
                    document.ensure_size(available.x.max(0.0) as u32, available.y.max(0.0) as u32);
                }

                let [width, height] = document.canvas().size();
                let (rect, response) = ui.allocate_exact_size(
                    egui::vec2(width as f32, height as f32),
                    egui::Sense::click_and_drag(),
                );

                let events = if blocked {
                    input_handler.release()
                } else {
                    input_handler.process_input(ctx, rect, &response)
                };
                input::apply_events(document, &events);

                renderer.render(ctx, ui.painter(), rect, document);
            });
        });
}
