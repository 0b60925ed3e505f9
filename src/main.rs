#![warn(clippy::all, rust_2018_idioms)]
// hide console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use raster_paint::{PaintApp, PaintConfig};

fn main() -> eframe::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = PaintConfig::from_env();
    log::info!(
        "Starting with a {}x{} canvas",
        config.canvas_width,
        config.canvas_height
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PaintApp")
            .with_inner_size([
                config.canvas_width as f32 + 40.0,
                config.canvas_height as f32 + 80.0,
            ])
            .with_min_inner_size([300.0, 220.0]),
        ..Default::default()
    };
    eframe::run_native(
        "PaintApp",
        native_options,
        Box::new(move |cc| Ok(Box::new(PaintApp::new(cc, &config)))),
    )
}
