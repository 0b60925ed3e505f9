use std::path::PathBuf;

use egui::Color32;

use crate::brush::{self, DEFAULT_BRUSH_SIZE};
use crate::config::PaintConfig;
use crate::document::Document;
use crate::file_handler::FileHandler;
use crate::input::InputHandler;
use crate::panels;
use crate::renderer::Renderer;
use crate::tool::Tool;

/// Toolbar state restored between runs.
/// We derive Deserialize/Serialize so we can persist it on shutdown.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Settings {
    pub brush_size: u32,
    pub color: Color32,
    pub tool: Tool,
    pub last_directory: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            brush_size: DEFAULT_BRUSH_SIZE,
            color: Color32::BLACK,
            tool: Tool::Brush,
            last_directory: None,
        }
    }
}

pub struct PaintApp {
    pub(crate) document: Document,
    pub(crate) renderer: Renderer,
    pub(crate) input: InputHandler,
    pub(crate) file_handler: FileHandler,
    /// Contents of the brush size field, which may be mid-edit and invalid
    pub(crate) brush_size_text: String,
    /// Message shown in a modal window until dismissed
    pub(crate) message: Option<String>,
    pub(crate) last_directory: Option<PathBuf>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self::with_config(&PaintConfig::default())
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &PaintConfig) -> Self {
        let mut app = Self::with_config(config);

        if let Some(storage) = cc.storage {
            if let Some(settings) = eframe::get_value::<Settings>(storage, eframe::APP_KEY) {
                log::debug!("Restored settings: {:?}", settings);
                app.apply_settings(settings);
            }
        }

        app
    }

    pub fn with_config(config: &PaintConfig) -> Self {
        let document = Document::new(config);
        Self {
            brush_size_text: document.brush_size().to_string(),
            document,
            renderer: Renderer::new(),
            input: InputHandler::new(),
            file_handler: FileHandler::new(),
            message: None,
            last_directory: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn settings(&self) -> Settings {
        Settings {
            brush_size: self.document.brush_size(),
            color: self.document.color(),
            tool: self.document.active_tool(),
            last_directory: self.last_directory.clone(),
        }
    }

    pub fn apply_settings(&mut self, settings: Settings) {
        let brush_size = settings.brush_size.clamp(1, brush::MAX_BRUSH_SIZE);
        self.document.set_brush_size(brush_size);
        self.document.set_color(settings.color);
        self.document.set_active_tool(settings.tool);
        self.brush_size_text = brush_size.to_string();
        self.last_directory = settings.last_directory;
    }

    pub fn show_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    /// While a message is shown the menu, toolbar and canvas ignore input
    pub fn is_modal_open(&self) -> bool {
        self.message.is_some()
    }

    /// Apply the brush size field. Invalid text is reported and reset.
    pub fn commit_brush_size(&mut self) {
        match brush::parse_brush_size(&self.brush_size_text) {
            Ok(size) => self.document.set_brush_size(size),
            Err(err) => {
                log::warn!("Rejected brush size {:?}", self.brush_size_text);
                self.show_message(err.to_string());
                self.brush_size_text = self.document.brush_size().to_string();
            }
        }
    }

    /// File > Open
    pub fn open_image(&mut self) {
        let mut dialog =
            rfd::FileDialog::new().add_filter("JPG & PNG Images", &["jpg", "jpeg", "png"]);
        if let Some(dir) = &self.last_directory {
            dialog = dialog.set_directory(dir);
        }
        let Some(path) = dialog.pick_file() else {
            return;
        };

        self.remember_directory(&path);
        if let Err(err) = self.document.load_image(&path) {
            log::error!("{}", err);
            self.show_message(format!("Error opening image: {err}"));
        }
    }

    /// File > Save
    pub fn save_image(&mut self) {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Save Image")
            .add_filter("PNG Images (*.png)", &["png"])
            .set_file_name("image.png");
        if let Some(dir) = &self.last_directory {
            dialog = dialog.set_directory(dir);
        }
        let Some(path) = dialog.save_file() else {
            return;
        };

        self.remember_directory(&path);
        match self.document.save_image(&path) {
            Ok(written) => {
                self.show_message(format!("Image saved successfully to {}", written.display()));
            }
            Err(err) => {
                log::error!("{}", err);
                self.show_message(format!("Error saving image: {err}"));
            }
        }
    }

    fn remember_directory(&mut self, path: &std::path::Path) {
        self.last_directory = path.parent().map(|dir| dir.to_path_buf());
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        self.file_handler.preview_files_being_dropped(ctx);

        if !self.file_handler.check_for_dropped_files(ctx) {
            return;
        }
        match self.file_handler.take_dropped_image() {
            Some(Ok((path, image))) => {
                log::info!("Opening dropped image {}", path.display());
                self.document.open_image(image);
            }
            Some(Err(err)) => {
                log::error!("{}", err);
                self.show_message(format!("Error opening image: {err}"));
            }
            None => self.show_message("Dropped file is not a supported image"),
        }
    }

    fn message_window(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.message else {
            return;
        };

        let mut close = false;
        egui::Window::new("PaintApp")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(message.as_str());
                if ui.button("OK").clicked() {
                    close = true;
                }
            });

        if close {
            self.message = None;
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::menu_bar(self, ctx);
        panels::toolbar(self, ctx);
        panels::central_panel(self, ctx);

        self.handle_dropped_files(ctx);
        self.message_window(ctx);
    }
}
