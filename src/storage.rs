use anyhow::{Context, Result};
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::Path;

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "result.png";

/// Formats whose encoders take no alpha channel; the opaque canvas is flattened to RGB for them.
fn lacks_alpha(format: ImageFormat) -> bool {
    matches!(format, ImageFormat::Jpeg | ImageFormat::Pnm)
}

/// Save the canvas; the format follows the file extension and defaults to PNG.
pub fn save_image<P: AsRef<Path>>(canvas: &RgbaImage, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    let written = if lacks_alpha(format) {
        DynamicImage::ImageRgba8(canvas.clone())
            .to_rgb8()
            .save_with_format(path, format)
    } else {
        canvas.save_with_format(path, format)
    };
    written.with_context(|| format!("failed to write image to {}", path.display()))?;
    Ok(())
}

/// Encode the canvas as PNG bytes in memory.
pub fn encode_png(canvas: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    canvas
        .write_to(&mut buf, ImageFormat::Png)
        .context("failed to encode PNG")?;
    Ok(buf.into_inner())
}
