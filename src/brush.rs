use egui::Color32;

use crate::error::{PaintError, Result};

pub const DEFAULT_BRUSH_SIZE: u32 = 20;
pub const MAX_BRUSH_SIZE: u32 = 500;

/// Toolbar swatches
pub const PALETTE: [Color32; 6] = [
    Color32::BLACK,
    Color32::RED,
    Color32::BLUE,
    Color32::GREEN,
    Color32::YELLOW,
    Color32::ORANGE,
];

/// Parse the brush size text field. Surrounding whitespace is ignored.
pub fn parse_brush_size(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    match trimmed.parse::<u32>() {
        Ok(size) if (1..=MAX_BRUSH_SIZE).contains(&size) => Ok(size),
        _ => Err(PaintError::InvalidBrushSize(trimmed.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_numbers() {
        assert_eq!(parse_brush_size("20").unwrap(), 20);
        assert_eq!(parse_brush_size(" 7 ").unwrap(), 7);
        assert_eq!(parse_brush_size("500").unwrap(), MAX_BRUSH_SIZE);
    }

    #[test]
    fn rejects_garbage_and_out_of_range() {
        for text in ["", "abc", "12px", "-3", "0", "501", "2.5"] {
            let err = parse_brush_size(text).unwrap_err();
            assert!(matches!(err, PaintError::InvalidBrushSize(_)), "{text:?}");
            assert_eq!(err.to_string(), "Invalid brush size");
        }
    }
}
