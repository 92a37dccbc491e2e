//! Alpha compositing of sprites and shadow overlays onto the canvas.

use image::{Rgba, RgbaImage};

/// Source-over blend of one pixel, `src_a` in `0.0..=1.0`.
///
/// Channels are rounded, not truncated, so an opaque canvas stays at alpha 255.
#[inline]
fn over(dst: &mut Rgba<u8>, src: [u8; 3], src_a: f32) {
    if src_a <= 0.0 {
        return;
    }
    let dst_a = dst.0[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        *dst = Rgba([0, 0, 0, 0]);
        return;
    }
    for c in 0..3 {
        let s = src[c] as f32 * src_a;
        let d = dst.0[c] as f32 * dst_a * (1.0 - src_a);
        dst.0[c] = ((s + d) / out_a).round().clamp(0.0, 255.0) as u8;
    }
    dst.0[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
}

/// Visit every `(stamp_px, canvas_px)` pair of a `stamp` placed with its top-left at `(x, y)`.
/// Pixels falling outside the canvas are skipped.
fn for_each_overlap<F>(canvas: &mut RgbaImage, stamp: &RgbaImage, x: i64, y: i64, mut f: F)
where
    F: FnMut(&Rgba<u8>, &mut Rgba<u8>),
{
    let (cw, ch) = (i64::from(canvas.width()), i64::from(canvas.height()));
    for (sx, sy, src) in stamp.enumerate_pixels() {
        let cx = x + i64::from(sx);
        let cy = y + i64::from(sy);
        if cx < 0 || cy < 0 || cx >= cw || cy >= ch {
            continue;
        }
        f(src, canvas.get_pixel_mut(cx as u32, cy as u32));
    }
}

/// Composite `sprite` onto `canvas`, using the sprite's own alpha as the blend mask.
/// Fully transparent sprite pixels leave the canvas untouched.
pub fn composite(canvas: &mut RgbaImage, sprite: &RgbaImage, x: i64, y: i64) {
    for_each_overlap(canvas, sprite, x, y, |src, dst| {
        let a = src.0[3] as f32 / 255.0;
        over(dst, [src.0[0], src.0[1], src.0[2]], a);
    });
}

/// Darken the area covered by `mask` with black at `alpha`, scaled by the mask's own alpha.
pub fn composite_shadow(canvas: &mut RgbaImage, mask: &RgbaImage, x: i64, y: i64, alpha: u8) {
    if alpha == 0 {
        return;
    }
    let strength = alpha as f32 / 255.0;
    for_each_overlap(canvas, mask, x, y, |src, dst| {
        let a = strength * (src.0[3] as f32 / 255.0);
        over(dst, [0, 0, 0], a);
    });
}

/// Blend a single solid-color pixel with `coverage` in `0.0..=1.0`; used for glyph rendering.
pub fn blend_pixel(canvas: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= i64::from(canvas.width()) || y >= i64::from(canvas.height()) {
        return;
    }
    let a = coverage.clamp(0.0, 1.0) * (color.0[3] as f32 / 255.0);
    over(
        canvas.get_pixel_mut(x as u32, y as u32),
        [color.0[0], color.0[1], color.0[2]],
        a,
    );
}
