use crate::PaintApp;

pub fn menu_bar(app: &mut PaintApp, ctx: &egui::Context) {
    let enabled = !app.is_modal_open();
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        ui.add_enabled_ui(enabled, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open").clicked() {
                        ui.close_menu();
                        app.open_image();
                    }
                    if ui.button("Save").clicked() {
                        ui.close_menu();
                        app.save_image();
                    }
                    if ui.button("Exit").clicked() {
                        log::info!("Exit requested from menu");
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
    });
}
