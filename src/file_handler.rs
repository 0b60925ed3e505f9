use std::path::{Path, PathBuf};

use eframe::egui;
use image::{ImageFormat, RgbaImage};

use crate::error::{PaintError, Result};

const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Check if a path looks like an image we can decode, by extension
pub fn is_image_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Append `.png` unless the file name already ends with it (any case)
pub fn with_png_extension(path: &Path) -> PathBuf {
    let has_png = path
        .file_name()
        .is_some_and(|name| name.to_string_lossy().to_lowercase().ends_with(".png"));

    if has_png {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".png");
        PathBuf::from(name)
    }
}

/// Decode an image file into RGBA pixels
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let bytes = std::fs::read(path).map_err(|source| PaintError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let image = decode_image(&bytes, path)?;
    log::info!("Loaded {} ({}x{})", path.display(), image.width(), image.height());
    Ok(image)
}

fn decode_image(bytes: &[u8], origin: &Path) -> Result<RgbaImage> {
    image::load_from_memory(bytes)
        .map(|img| img.to_rgba8())
        .map_err(|source| PaintError::Decode {
            path: origin.to_path_buf(),
            source,
        })
}

/// Write `image` as PNG. Returns the path actually written, which has the
/// `.png` extension appended when missing.
pub fn save_png(path: &Path, image: &RgbaImage) -> Result<PathBuf> {
    let path = with_png_extension(path);
    image
        .save_with_format(&path, ImageFormat::Png)
        .map_err(|source| PaintError::Encode {
            path: path.clone(),
            source,
        })?;
    log::info!("Saved {}x{} image to {}", image.width(), image.height(), path.display());
    Ok(path)
}

/// Turns files dropped onto the window into decoded images
#[derive(Default)]
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect newly dropped files from the UI context.
    /// Returns true if any files were dropped this frame.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                self.dropped_files = i.raw.dropped_files.clone();
            }
        });
        !self.dropped_files.is_empty()
    }

    /// Decode the first dropped image. Dropping several files opens only the first image.
    pub fn take_dropped_image(&mut self) -> Option<Result<(PathBuf, RgbaImage)>> {
        let files = std::mem::take(&mut self.dropped_files);

        for file in files {
            let name = match &file.path {
                Some(path) => path.clone(),
                None if !file.name.is_empty() => PathBuf::from(&file.name),
                None => PathBuf::from("unknown"),
            };

            let is_image = if file.mime.is_empty() {
                is_image_path(&name)
            } else {
                file.mime.starts_with("image/")
            };
            if !is_image {
                log::warn!("Dropped file is not a supported type: {}", name.display());
                continue;
            }

            let image = match (&file.bytes, &file.path) {
                (Some(bytes), _) => decode_image(bytes, &name),
                (None, Some(path)) => load_image(path),
                (None, None) => Err(PaintError::UnsupportedFile(name.clone())),
            };
            return Some(image.map(|image| (name, image)));
        }

        None
    }

    /// Preview files being dragged over the application
    pub fn preview_files_being_dropped(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, Id, LayerId, Order, TextStyle};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Open image:\n".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else {
                    text += "\n(Path not available)";
                }
            }
            text
        });

        let layer = LayerId::new(Order::Foreground, Id::new("file_drop_target"));
        let painter = ctx.layer_painter(layer);
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            TextStyle::Heading.resolve(&ctx.style()),
            Color32::WHITE,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use super::*;

    #[test]
    fn png_extension_is_appended_once() {
        let cases = [
            ("/tmp/image", "/tmp/image.png"),
            ("/tmp/image.png", "/tmp/image.png"),
            ("/tmp/image.PNG", "/tmp/image.PNG"),
            ("/tmp/image.jpg", "/tmp/image.jpg.png"),
        ];
        for (input, expected) in cases {
            assert_eq!(with_png_extension(Path::new(input)), PathBuf::from(expected));
        }
    }

    #[test]
    fn image_paths_by_extension() {
        assert!(is_image_path(Path::new("photo.JPG")));
        assert!(is_image_path(Path::new("a/b/c.webp")));
        assert!(!is_image_path(Path::new("notes.txt")));
        assert!(!is_image_path(Path::new("README")));
    }

    #[test]
    fn save_then_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let image = RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));

        let written = save_png(&dir.path().join("out"), &image).unwrap();
        assert_eq!(written, dir.path().join("out.png"));

        let loaded = load_image(&written).unwrap();
        assert_eq!(loaded, image);
    }

    #[test]
    fn loading_garbage_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(load_image(&path), Err(PaintError::Decode { .. })));
    }

    #[test]
    fn loading_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");
        assert!(matches!(load_image(&missing), Err(PaintError::Io { .. })));
    }

    fn png_bytes(image: &RgbaImage) -> Arc<[u8]> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes.into()
    }

    fn handler_with(files: Vec<egui::DroppedFile>) -> FileHandler {
        FileHandler {
            dropped_files: files,
        }
    }

    #[test]
    fn dropped_bytes_are_decoded() {
        let image = RgbaImage::from_pixel(4, 3, image::Rgba([200, 0, 0, 255]));
        let mut handler = handler_with(vec![egui::DroppedFile {
            name: "web.png".to_owned(),
            mime: "image/png".to_owned(),
            bytes: Some(png_bytes(&image)),
            ..Default::default()
        }]);

        let (name, decoded) = handler.take_dropped_image().unwrap().unwrap();
        assert_eq!(name, PathBuf::from("web.png"));
        assert_eq!(decoded, image);
        // The drop is consumed
        assert!(handler.take_dropped_image().is_none());
    }

    #[test]
    fn dropped_mime_wins_over_extension() {
        let image = RgbaImage::from_pixel(2, 2, image::Rgba([0, 0, 0, 255]));
        let mut handler = handler_with(vec![
            egui::DroppedFile {
                name: "looks_like.png".to_owned(),
                mime: "text/plain".to_owned(),
                bytes: Some(Arc::from(&b"hello"[..])),
                ..Default::default()
            },
            egui::DroppedFile {
                name: "blob.bin".to_owned(),
                mime: "image/png".to_owned(),
                bytes: Some(png_bytes(&image)),
                ..Default::default()
            },
        ]);

        let (name, decoded) = handler.take_dropped_image().unwrap().unwrap();
        assert_eq!(name, PathBuf::from("blob.bin"));
        assert_eq!(decoded, image);
    }

    #[test]
    fn dropped_path_is_loaded_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let image = RgbaImage::from_pixel(5, 1, image::Rgba([1, 2, 3, 255]));
        let path = save_png(&dir.path().join("on_disk.png"), &image).unwrap();

        let mut handler = handler_with(vec![
            egui::DroppedFile {
                path: Some(dir.path().join("notes.txt")),
                ..Default::default()
            },
            egui::DroppedFile {
                path: Some(path.clone()),
                ..Default::default()
            },
        ]);

        let (name, loaded) = handler.take_dropped_image().unwrap().unwrap();
        assert_eq!(name, path);
        assert_eq!(loaded, image);
    }

    #[test]
    fn dropped_image_without_content_is_unsupported() {
        let mut handler = handler_with(vec![egui::DroppedFile {
            mime: "image/png".to_owned(),
            ..Default::default()
        }]);

        let result = handler.take_dropped_image().unwrap();
        let Err(PaintError::UnsupportedFile(name)) = result else {
            panic!("expected an unsupported file error");
        };
        assert_eq!(name, PathBuf::from("unknown"));
    }

    #[test]
    fn only_non_images_dropped() {
        let mut handler = handler_with(vec![
            egui::DroppedFile {
                name: "notes.txt".to_owned(),
                ..Default::default()
            },
            egui::DroppedFile {
                name: "data.json".to_owned(),
                mime: "application/json".to_owned(),
                ..Default::default()
            },
        ]);
        assert!(handler.take_dropped_image().is_none());
    }
}
