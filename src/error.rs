//! Error types shared by the library modules.
//!
//! The library returns these typed errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while acquiring the bill sprite from its source file.
///
/// These never escape [`crate::sprite::acquire_sprite`]: every variant leads to the
/// placeholder sprite instead.
#[derive(Debug, Error)]
pub enum SpriteError {
    #[error("no file named '{name}.*' in {dir}")]
    NotFound { name: String, dir: PathBuf },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode sprite image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("invalid sprite size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Rejected chart input (raised before the compositor ever runs).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a whole number")]
    InvalidToken(String),
    #[error("'{0}' is negative; only counts >= 0 can be stacked")]
    Negative(String),
}

/// Invalid or unreadable chart configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("unknown profile '{0}' (expected classic, flat or bold)")]
    UnknownProfile(String),
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures of a render call.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("canvas of {width}x{height} pixels exceeds the supported size")]
    CanvasTooLarge { width: u64, height: u64 },
    #[error("sprite is {actual_w}x{actual_h} but the configuration expects {expected_w}x{expected_h}")]
    SpriteSize {
        expected_w: u32,
        expected_h: u32,
        actual_w: u32,
        actual_h: u32,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
