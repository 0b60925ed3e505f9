use egui::{Color32, ColorImage, Pos2, pos2};
use image::{Rgba, RgbaImage};

use crate::geometry::{self, hit_testing};

pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// The raster the user paints on.
///
/// Coordinates are canvas pixels with the origin at the top-left corner. A pixel
/// `(x, y)` is sampled at its center `(x + 0.5, y + 0.5)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba(color.to_srgba_unmultiplied())
}

impl Canvas {
    /// A white canvas of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, BACKGROUND),
        }
    }

    /// Adopt an already decoded image
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> [u32; 2] {
        [self.width(), self.height()]
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color32> {
        if x < self.width() && y < self.height() {
            let [r, g, b, a] = self.image.get_pixel(x, y).0;
            Some(Color32::from_rgba_unmultiplied(r, g, b, a))
        } else {
            None
        }
    }

    /// Refill the whole raster with the background color
    pub fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = BACKGROUND;
        }
    }

    /// Grow the raster so it is at least `width` x `height`, keeping its content
    /// at the origin. Never shrinks. Returns whether the raster changed.
    pub fn ensure_size(&mut self, width: u32, height: u32) -> bool {
        if self.width() >= width && self.height() >= height {
            return false;
        }

        let new_width = self.width().max(width);
        let new_height = self.height().max(height);
        let mut grown = RgbaImage::from_pixel(new_width, new_height, BACKGROUND);
        image::imageops::replace(&mut grown, &self.image, 0, 0);

        log::debug!(
            "Canvas grown from {}x{} to {}x{}",
            self.width(),
            self.height(),
            new_width,
            new_height
        );
        self.image = grown;
        true
    }

    /// Paint a filled circle of the given diameter centered on `center`.
    /// This is the brush and eraser dab.
    pub fn fill_circle(&mut self, center: Pos2, diameter: f32, color: Color32) {
        let radius = (diameter / 2.0).max(0.5);
        let rgba = to_rgba(color);

        let (min, max) = (center - egui::Vec2::splat(radius), center + egui::Vec2::splat(radius));
        let Some((x0, y0, x1, y1)) = self.clip(min.x, min.y, max.x, max.y) else {
            return;
        };

        let r2 = radius * radius;
        for y in y0..y1 {
            for x in x0..x1 {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                if dx * dx + dy * dy <= r2 {
                    self.image.put_pixel(x, y, rgba);
                }
            }
        }

        // The pixel under the pointer is always painted, even for tiny brushes
        if center.x >= 0.0 && center.y >= 0.0 {
            let (cx, cy) = (center.x as u32, center.y as u32);
            if cx < self.width() && cy < self.height() {
                self.image.put_pixel(cx, cy, rgba);
            }
        }
    }

    /// Place dabs along the segment `from -> to` so a fast drag leaves no gaps.
    /// The dab at `from` is not repeated.
    pub fn stamp_segment(&mut self, from: Pos2, to: Pos2, diameter: f32, color: Color32) {
        let length = (to - from).length();
        let spacing = (diameter / 4.0).max(1.0);
        let steps = (length / spacing).ceil().max(1.0) as usize;

        for step in 1..=steps {
            let t = step as f32 / steps as f32;
            self.fill_circle(from + (to - from) * t, diameter, color);
        }
    }

    /// Rasterize a thick outline through `points`. A pixel is painted when its
    /// center lies within `width / 2` of any segment.
    pub fn stroke_polyline(&mut self, points: &[Pos2], closed: bool, width: f32, color: Color32) {
        match points {
            [] => {}
            [single] => self.fill_circle(*single, width, color),
            _ => {
                let mut segments: Vec<(Pos2, Pos2)> =
                    points.windows(2).map(|w| (w[0], w[1])).collect();
                if closed && points.len() > 2 {
                    segments.push((points[points.len() - 1], points[0]));
                }
                for (a, b) in segments {
                    self.stroke_segment(a, b, width, color);
                }
            }
        }
    }

    fn stroke_segment(&mut self, a: Pos2, b: Pos2, width: f32, color: Color32) {
        let half = (width / 2.0).max(0.5);
        let rgba = to_rgba(color);
        let bounds = geometry::bounds(&[a, b], half);

        let Some((x0, y0, x1, y1)) =
            self.clip(bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y)
        else {
            return;
        };

        for y in y0..y1 {
            for x in x0..x1 {
                let center = pos2(x as f32 + 0.5, y as f32 + 0.5);
                if hit_testing::distance_to_line_segment(center, a, b) <= half {
                    self.image.put_pixel(x, y, rgba);
                }
            }
        }
    }

    /// Intersect a float box with the raster, as an exclusive pixel range
    fn clip(
        &self,
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
    ) -> Option<(u32, u32, u32, u32)> {
        let x0 = min_x.floor().max(0.0) as u32;
        let y0 = min_y.floor().max(0.0) as u32;
        let x1 = (max_x.ceil().max(0.0) as u32).min(self.width());
        let y1 = (max_y.ceil().max(0.0) as u32).min(self.height());
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }

    /// Convert to egui's texture format
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [self.width() as usize, self.height() as usize],
            self.image.as_raw(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_white() {
        let canvas = Canvas::new(4, 3);
        assert_eq!(canvas.size(), [4, 3]);
        assert_eq!(canvas.pixel(3, 2), Some(Color32::WHITE));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    #[test]
    fn fill_circle_paints_disc_only() {
        let mut canvas = Canvas::new(40, 40);
        canvas.fill_circle(pos2(20.0, 20.0), 10.0, Color32::RED);

        assert_eq!(canvas.pixel(20, 20), Some(Color32::RED));
        assert_eq!(canvas.pixel(16, 20), Some(Color32::RED));
        // Corner of the bounding box is outside the disc
        assert_eq!(canvas.pixel(15, 15), Some(Color32::WHITE));
        assert_eq!(canvas.pixel(30, 30), Some(Color32::WHITE));
    }

    #[test]
    fn fill_circle_clips_at_edges() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill_circle(pos2(-2.0, -2.0), 10.0, Color32::BLUE);
        assert_eq!(canvas.pixel(0, 0), Some(Color32::BLUE));

        canvas.fill_circle(pos2(100.0, 100.0), 10.0, Color32::BLUE);
        assert_eq!(canvas.pixel(9, 9), Some(Color32::WHITE));
    }

    #[test]
    fn tiny_brush_still_paints_pointer_pixel() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill_circle(pos2(5.0, 5.0), 1.0, Color32::BLACK);
        assert_eq!(canvas.pixel(5, 5), Some(Color32::BLACK));
    }

    #[test]
    fn stamp_segment_leaves_no_gaps() {
        let mut canvas = Canvas::new(100, 20);
        canvas.stamp_segment(pos2(5.0, 10.0), pos2(95.0, 10.0), 4.0, Color32::BLACK);
        for x in 6..94 {
            assert_eq!(canvas.pixel(x, 10), Some(Color32::BLACK), "gap at x = {x}");
        }
    }

    #[test]
    fn closed_polyline_draws_outline_not_interior() {
        let mut canvas = Canvas::new(40, 40);
        let square = [pos2(5.0, 5.0), pos2(35.0, 5.0), pos2(35.0, 35.0), pos2(5.0, 35.0)];
        canvas.stroke_polyline(&square, true, 2.0, Color32::GREEN);

        assert_eq!(canvas.pixel(20, 5), Some(Color32::GREEN));
        // Closing edge on the left side
        assert_eq!(canvas.pixel(5, 20), Some(Color32::GREEN));
        assert_eq!(canvas.pixel(20, 20), Some(Color32::WHITE));
    }

    #[test]
    fn ensure_size_grows_and_keeps_content() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill_circle(pos2(2.0, 2.0), 2.0, Color32::RED);

        assert!(canvas.ensure_size(20, 5));
        assert_eq!(canvas.size(), [20, 10]);
        assert_eq!(canvas.pixel(2, 2), Some(Color32::RED));
        assert_eq!(canvas.pixel(15, 5), Some(Color32::WHITE));

        assert!(!canvas.ensure_size(5, 5));
        assert_eq!(canvas.size(), [20, 10]);
    }

    #[test]
    fn clear_keeps_size() {
        let mut canvas = Canvas::new(8, 8);
        canvas.fill_circle(pos2(4.0, 4.0), 8.0, Color32::RED);
        canvas.clear();
        assert_eq!(canvas, Canvas::new(8, 8));
    }

    #[test]
    fn color_image_matches_size() {
        let canvas = Canvas::new(7, 3);
        let image = canvas.to_color_image();
        assert_eq!(image.size, [7, 3]);
        assert_eq!(image.pixels.len(), 21);
    }
}
