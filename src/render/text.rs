//! Label text: width estimation and glyph rasterization onto the canvas.

use ab_glyph::{Font, FontRef, PxScale, ScaleFont, point};
use image::{Rgba, RgbaImage};
use log::warn;
use std::sync::OnceLock;

use super::blend::blend_pixel;

/// Label color.
pub const LABEL_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Bundled font, parsed once. `None` if the embedded bytes fail to parse.
static LABEL_FONT: OnceLock<Option<FontRef<'static>>> = OnceLock::new();

fn label_font() -> Option<&'static FontRef<'static>> {
    LABEL_FONT
        .get_or_init(|| {
            // Bundled so label rendering never depends on system fonts.
            match FontRef::try_from_slice(include_bytes!("../../assets/DejaVuSans.ttf")) {
                Ok(font) => Some(font),
                Err(e) => {
                    warn!("label font unavailable, labels will be skipped: {e}");
                    None
                }
            }
        })
        .as_ref()
}

/// Heuristic: estimate pixel width of text without shaping it.
pub fn estimate_text_width_px(text: &str, font_px: f32) -> u32 {
    ((text.chars().count() as f32) * font_px * 0.60).ceil() as u32
}

/// Left edge that roughly centers `text` inside a column of `column_width` starting at `column_x`.
pub fn centered_x(text: &str, font_px: f32, column_x: i64, column_width: u32) -> i64 {
    let est = i64::from(estimate_text_width_px(text, font_px));
    column_x + (i64::from(column_width) - est) / 2
}

/// [`centered_x`], shifted as needed so the estimated text box stays within `0..canvas_width`.
pub fn label_x(
    text: &str,
    font_px: f32,
    column_x: i64,
    column_width: u32,
    canvas_width: u32,
) -> i64 {
    let est = i64::from(estimate_text_width_px(text, font_px));
    let max_x = (i64::from(canvas_width) - est).max(0);
    centered_x(text, font_px, column_x, column_width).clamp(0, max_x)
}

/// Draw `text` with its top-left corner (ascender line) at `(x, y)`.
///
/// Returns `false` when no font is available and nothing was drawn.
pub fn draw_text(
    canvas: &mut RgbaImage,
    text: &str,
    x: i64,
    y: i64,
    font_px: f32,
    color: Rgba<u8>,
) -> bool {
    let Some(font) = label_font() else {
        return false;
    };
    let scaled = font.as_scaled(PxScale::from(font_px));
    let mut caret = point(x as f32, y as f32 + scaled.ascent());
    let mut prev = None;

    for ch in text.chars() {
        let mut glyph = scaled.scaled_glyph(ch);
        if let Some(prev_id) = prev {
            caret.x += scaled.kern(prev_id, glyph.id);
        }
        glyph.position = caret;
        caret.x += scaled.h_advance(glyph.id);
        prev = Some(glyph.id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            let (ox, oy) = (bounds.min.x as i64, bounds.min.y as i64);
            outlined.draw(|gx, gy, coverage| {
                if coverage > 0.0 {
                    blend_pixel(canvas, ox + i64::from(gx), oy + i64::from(gy), color, coverage);
                }
            });
        }
    }
    true
}
