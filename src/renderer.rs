use eframe::egui::{self, Color32, Rect, TextureHandle, TextureOptions, pos2};

use crate::document::Document;

/// Uploads the flattened canvas as a texture and draws it, plus the shape being dragged
#[derive(Default)]
pub struct Renderer {
    texture: Option<TextureHandle>,
    /// Document version the texture was built from
    texture_version: Option<u64>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the texture is stale for the given document
    pub fn needs_texture_update(&self, document: &Document) -> bool {
        self.texture.is_none() || self.texture_version != Some(document.version())
    }

    fn update_texture(&mut self, ctx: &egui::Context, document: &Document) {
        if !self.needs_texture_update(document) {
            return;
        }

        let image = document.flatten().to_color_image();
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("canvas", image, TextureOptions::NEAREST));
            }
        }
        self.texture_version = Some(document.version());
    }

    /// Draw the document with its top-left corner at `rect.min`
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        rect: Rect,
        document: &Document,
    ) {
        self.update_texture(ctx, document);

        if let Some(texture) = &self.texture {
            painter.image(
                texture.id(),
                rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }

        if let Some(shape) = document.preview_shape() {
            shape.paint(painter, rect.min.to_vec2());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    #[test]
    fn texture_tracks_document_version() {
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(600.0, 600.0));
        let painter = egui::Painter::new(ctx.clone(), egui::LayerId::background(), rect);

        let mut renderer = Renderer::new();
        let mut document = Document::default();
        assert!(renderer.needs_texture_update(&document));

        renderer.render(&ctx, &painter, rect, &document);
        assert!(!renderer.needs_texture_update(&document));

        document.pointer_down(pos2(10.0, 10.0));
        assert!(renderer.needs_texture_update(&document));
    }
}
