#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod brush;
pub mod canvas;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod file_handler;
pub mod geometry;
pub mod history;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod shape;
pub mod tool;

pub use app::PaintApp;
pub use canvas::Canvas;
pub use config::PaintConfig;
pub use document::Document;
pub use error::{PaintError, Result};
pub use history::{CanvasSnapshot, History};
pub use renderer::Renderer;
pub use shape::{Shape, ShapeKind};
pub use tool::Tool;
