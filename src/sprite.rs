//! Sprite acquisition: load the bill image from disk, or draw a placeholder.
//!
//! The source is any file named `<sprite_name>.<ext>` (case-insensitive) in a lookup
//! directory. When several files match, the lexicographically first one wins.
//! A missing or undecodable file is never fatal: [`acquire_sprite`] always returns a
//! usable sprite of exactly the configured size.

use crate::error::SpriteError;
use crate::models::Sprite;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use log::{debug, info, warn};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Fill color of the placeholder bill.
pub const PLACEHOLDER_FILL: Rgba<u8> = Rgba([100, 150, 100, 255]);
/// 1px border of the placeholder bill.
pub const PLACEHOLDER_BORDER: Rgba<u8> = Rgba([50, 80, 50, 255]);
/// Highlight line just below the top border (only on bills at least 4px tall).
pub const PLACEHOLDER_HIGHLIGHT: Rgba<u8> = Rgba([160, 200, 160, 255]);

/// Which path [`acquire_sprite`] took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpriteOrigin {
    /// Decoded from this file.
    File(PathBuf),
    /// Procedurally drawn placeholder.
    Placeholder,
}

/// Find the sprite source for `name` inside `dir`.
pub fn find_sprite_source(dir: &Path, name: &str) -> Result<PathBuf, SpriteError> {
    let pattern = format!(r"(?i)^{}\..+$", regex::escape(name));
    let re = Regex::new(&pattern).map_err(|_| SpriteError::NotFound {
        name: name.to_string(),
        dir: dir.to_path_buf(),
    })?;

    let entries = fs::read_dir(dir).map_err(|source| SpriteError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut all = Vec::new();
    let mut candidates = Vec::new();
    for entry in entries.flatten() {
        let file_name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();
        if re.is_match(&file_name) && path.is_file() {
            candidates.push(path);
        }
        all.push(file_name);
    }
    all.sort();
    debug!("files in {}: {:?}", dir.display(), all);

    candidates.sort();
    candidates
        .into_iter()
        .next()
        .ok_or_else(|| SpriteError::NotFound {
            name: name.to_string(),
            dir: dir.to_path_buf(),
        })
}

/// Decode image bytes and resample them to exactly `width` x `height`.
///
/// The x and y scale factors are independent, so the aspect ratio is not kept.
pub fn decode_sprite(bytes: &[u8], width: u32, height: u32) -> Result<Sprite, SpriteError> {
    if width == 0 || height == 0 {
        return Err(SpriteError::InvalidSize { width, height });
    }
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let resized = if rgba.dimensions() == (width, height) {
        rgba
    } else {
        imageops::resize(&rgba, width, height, FilterType::Lanczos3)
    };
    Ok(Sprite::new(resized))
}

/// Read and decode the sprite file at `path`.
pub fn load_sprite(path: &Path, width: u32, height: u32) -> Result<Sprite, SpriteError> {
    let bytes = fs::read(path).map_err(|source| SpriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_sprite(&bytes, width, height)
}

/// Draw the stand-in bill: solid green with a darker 1px border.
pub fn placeholder_sprite(width: u32, height: u32) -> Sprite {
    let mut img = RgbaImage::from_pixel(width, height, PLACEHOLDER_FILL);
    for (x, y, px) in img.enumerate_pixels_mut() {
        let on_border = x == 0 || y == 0 || x + 1 == width || y + 1 == height;
        if on_border {
            *px = PLACEHOLDER_BORDER;
        } else if y == 1 && height >= 4 {
            *px = PLACEHOLDER_HIGHLIGHT;
        }
    }
    Sprite::new(img)
}

/// Locate, decode and resize the sprite, falling back to [`placeholder_sprite`] on any failure.
pub fn acquire_sprite(dir: &Path, name: &str, width: u32, height: u32) -> (Sprite, SpriteOrigin) {
    let attempt = find_sprite_source(dir, name).and_then(|path| {
        info!("found sprite source {}", path.display());
        load_sprite(&path, width, height).map(|sprite| (sprite, path))
    });

    match attempt {
        Ok((sprite, path)) => {
            info!("sprite loaded and resized to {width}x{height}");
            (sprite, SpriteOrigin::File(path))
        }
        Err(err) => {
            warn!("{err}; using placeholder sprite");
            (placeholder_sprite(width, height), SpriteOrigin::Placeholder)
        }
    }
}
