use crate::config::ChartConfig;
use crate::error::{InputError, RenderError};
use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Upper bound on canvas area (256 Mi pixels, 1 GiB of RGBA).
pub const MAX_CANVAS_PIXELS: u64 = 1 << 28;

/// One bill, stamped repeatedly onto the canvas. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite(RgbaImage);

impl Sprite {
    pub fn new(image: RgbaImage) -> Self {
        Self(image)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.0
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }
}

/// Canvas geometry derived from the whole input set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub bars_count: u32,
    pub max_count: u32,
    pub width: u32,
    pub height: u32,
    /// Top edge of the bottom sprite of every stack.
    pub base_y: i64,
    sprite_width: u32,
    gap: u32,
    vertical_step: u32,
}

impl Layout {
    /// Size the canvas so that the tallest stack and every label fit.
    pub fn compute(numbers: &[u32], cfg: &ChartConfig) -> Result<Self, RenderError> {
        let bars = numbers.len() as u64;
        let max_count = numbers.iter().copied().max().unwrap_or(0);

        let width = bars
            .saturating_mul(u64::from(cfg.sprite_width) + u64::from(cfg.gap))
            .saturating_add(u64::from(cfg.gap));
        let height = u64::from(max_count)
            .saturating_mul(u64::from(cfg.vertical_step))
            .saturating_add(u64::from(cfg.sprite_height) + u64::from(cfg.margin));

        let too_large = width > u64::from(u32::MAX)
            || height > u64::from(u32::MAX)
            || width.saturating_mul(height) > MAX_CANVAS_PIXELS;
        if too_large {
            return Err(RenderError::CanvasTooLarge { width, height });
        }

        Ok(Self {
            bars_count: bars as u32,
            max_count,
            width: width as u32,
            height: height as u32,
            base_y: height as i64 - i64::from(cfg.bottom_margin),
            sprite_width: cfg.sprite_width,
            gap: cfg.gap,
            vertical_step: cfg.vertical_step,
        })
    }

    /// Left edge of the sprite column for stack `s`.
    pub fn stack_x(&self, s: u32) -> i64 {
        i64::from(self.gap) + i64::from(s) * (i64::from(self.sprite_width) + i64::from(self.gap))
    }

    /// Top edge of the `i`-th sprite counted from the bottom of a stack.
    pub fn sprite_y(&self, i: u32) -> i64 {
        self.base_y - i64::from(i) * i64::from(self.vertical_step)
    }
}

/// Where one sprite copy lands, and how dark its overlay is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i64,
    pub y: i64,
    pub shadow_alpha: Option<u8>,
}

/// Parse a line such as `"10 50 20"` or `"3,4, 5"` into stack counts.
pub fn parse_numbers(line: &str) -> Result<Vec<u32>, InputError> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|tok| !tok.is_empty())
        .map(|tok| {
            tok.parse::<u32>().map_err(|_| match tok.parse::<i64>() {
                Ok(v) if v < 0 => InputError::Negative(tok.to_string()),
                _ => InputError::InvalidToken(tok.to_string()),
            })
        })
        .collect()
}
