use std::{fs, path::Path};

use ab_glyph::{FontArc, PxScale};
use font8x8::{UnicodeFonts, BASIC_FONTS};
use image::{Rgb, RgbImage};
use imageproc::{
    drawing::{draw_filled_rect_mut, draw_text_mut},
    rect::Rect,
};
use log::{info, warn};

const GLYPH_SIZE: u32 = 8;

/// Font used to burn text into the template.
///
/// `Builtin` is an 8x8 bitmap font scaled to the requested size; it is used
/// whenever the preferred TrueType font cannot be loaded.
#[derive(Clone, Debug)]
pub enum ReportFont {
    TrueType(FontArc),
    Builtin,
}

impl ReportFont {
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(
                    "Cannot read font {}, using built-in font: {}",
                    path.display(),
                    e
                );
                return ReportFont::Builtin;
            }
        };

        match FontArc::try_from_vec(bytes) {
            Ok(font) => {
                info!("Using font {}", path.display());
                ReportFont::TrueType(font)
            }
            Err(e) => {
                warn!(
                    "Cannot parse font {}, using built-in font: {}",
                    path.display(),
                    e
                );
                ReportFont::Builtin
            }
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, ReportFont::Builtin)
    }

    /// Draw a single line of text with its top left corner at (`x`, `y`).
    /// Pixels falling outside the canvas are clipped.
    pub fn draw_text(
        &self,
        canvas: &mut RgbImage,
        color: Rgb<u8>,
        x: i32,
        y: i32,
        size: f32,
        text: &str,
    ) {
        match self {
            ReportFont::TrueType(font) => {
                draw_text_mut(canvas, color, x, y, PxScale::from(size), font, text)
            }
            ReportFont::Builtin => draw_bitmap_text(canvas, color, x, y, size, text),
        }
    }
}

fn draw_bitmap_text(canvas: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, size: f32, text: &str) {
    // A glyph never needs to be taller than the canvas.
    let scale = ((size / GLYPH_SIZE as f32).round() as u32).clamp(1, canvas.height().max(1));
    let advance = i32::try_from(GLYPH_SIZE * scale).unwrap_or(i32::MAX);
    let offset = |cells: u32| i32::try_from(cells * scale).unwrap_or(i32::MAX);
    if y >= canvas.height() as i32 {
        return;
    }

    for (i, ch) in text.chars().enumerate() {
        let Some(glyph) = BASIC_FONTS.get(ch).or_else(|| BASIC_FONTS.get('?')) else {
            continue;
        };
        let origin_x = x.saturating_add((i as i32).saturating_mul(advance));
        if origin_x >= canvas.width() as i32 {
            break;
        }

        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                if *bits & (1u8 << col) == 0 {
                    continue;
                }
                let rect = Rect::at(
                    origin_x.saturating_add(offset(col)),
                    y.saturating_add(offset(row as u32)),
                )
                .of_size(scale, scale);
                draw_filled_rect_mut(canvas, rect, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn ink(canvas: &RgbImage) -> usize {
        canvas.pixels().filter(|p| **p == BLACK).count()
    }

    #[test]
    fn missing_font_falls_back_to_builtin() {
        let font = ReportFont::load_or_default("/nonexistent/arial.ttf");
        assert!(font.is_builtin());
    }

    #[test]
    fn unparsable_font_falls_back_to_builtin() {
        let path = std::env::temp_dir().join(format!(
            "obesity-report-{}-garbage.ttf",
            std::process::id()
        ));
        fs::write(&path, b"definitely not a truetype font").unwrap();
        let font = ReportFont::load_or_default(&path);
        fs::remove_file(&path).unwrap();
        assert!(font.is_builtin());
    }

    #[test]
    fn huge_sizes_and_positions_do_not_overflow() {
        let test_data = [
            (0, 0, 1.0e12),
            (i32::MAX, i32::MAX, 24.0),
            (i32::MIN, 0, 24.0),
            (0, 0, f32::NAN),
        ];

        for (i, (x, y, size)) in test_data.into_iter().enumerate() {
            let mut canvas = RgbImage::from_pixel(40, 40, WHITE);
            ReportFont::Builtin.draw_text(&mut canvas, BLACK, x, y, size, "Bike");
            assert_eq!(canvas.dimensions(), (40, 40), "Test case #{}", i);
        }
    }

    #[test]
    fn builtin_font_draws_ink() {
        let mut canvas = RgbImage::from_pixel(200, 40, WHITE);
        ReportFont::Builtin.draw_text(&mut canvas, BLACK, 2, 2, 16.0, "30 tahun");
        assert!(ink(&canvas) > 0);
    }

    #[test]
    fn builtin_font_scales_with_size() {
        let mut small = RgbImage::from_pixel(400, 80, WHITE);
        let mut large = RgbImage::from_pixel(400, 80, WHITE);
        ReportFont::Builtin.draw_text(&mut small, BLACK, 0, 0, 8.0, "kg");
        ReportFont::Builtin.draw_text(&mut large, BLACK, 0, 0, 24.0, "kg");
        assert_eq!(ink(&large), ink(&small) * 9);
    }

    #[test]
    fn text_outside_canvas_is_clipped() {
        let mut canvas = RgbImage::from_pixel(20, 20, WHITE);
        ReportFont::Builtin.draw_text(&mut canvas, BLACK, 15, 15, 24.0, "Walking");
        ReportFont::Builtin.draw_text(&mut canvas, BLACK, -100, 500, 24.0, "Walking");
        assert!(ink(&canvas) > 0);
    }

    #[test]
    fn whitespace_draws_nothing() {
        let mut canvas = RgbImage::from_pixel(100, 20, WHITE);
        ReportFont::Builtin.draw_text(&mut canvas, BLACK, 0, 0, 8.0, "   ");
        assert_eq!(ink(&canvas), 0);
    }
}
