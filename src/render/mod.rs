//! Stack compositor: turns a list of counts into a stacked-banknote chart.
//!
//! - One column per input value, left to right in input order
//! - Bills stacked bottom-up from a shared baseline, each nudged by a small random jitter
//! - Optional shadow that is darkest at the bottom and absent on the top bill
//! - The count printed under every column, including `0` for empty stacks

pub mod blend;
pub mod text;

use crate::config::ChartConfig;
use crate::error::RenderError;
use crate::jitter::JitterSource;
use crate::models::{Layout, Placement, Sprite};
use image::{Rgba, RgbaImage};
use log::{debug, info};

use blend::{composite, composite_shadow};
use text::{LABEL_COLOR, draw_text, label_x};

/// Canvas background.
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Bottom-to-top placements for a stack of `count` bills whose column starts at `stack_x`.
pub fn plan_stack(
    count: u32,
    stack_x: i64,
    layout: &Layout,
    cfg: &ChartConfig,
    jitter: &mut dyn JitterSource,
) -> Vec<Placement> {
    let bound = i32::try_from(cfg.jitter).unwrap_or(i32::MAX);
    (0..count)
        .map(|i| {
            let offset = jitter.next_in_range(-bound, bound);
            Placement {
                x: stack_x + i64::from(offset),
                y: layout.sprite_y(i),
                shadow_alpha: cfg.shadow_alpha(i, count),
            }
        })
        .collect()
}

/// Top edge of the label row.
pub fn label_y(layout: &Layout, cfg: &ChartConfig) -> i64 {
    layout.base_y + i64::from(cfg.sprite_height) + i64::from(cfg.label_offset)
}

/// Render one chart.
///
/// The sprite is only read, never modified. Empty input yields a blank
/// `gap` x `H + margin` canvas.
pub fn render(
    numbers: &[u32],
    sprite: &Sprite,
    cfg: &ChartConfig,
    jitter: &mut dyn JitterSource,
) -> Result<RgbaImage, RenderError> {
    cfg.validate()?;
    if sprite.width() != cfg.sprite_width || sprite.height() != cfg.sprite_height {
        return Err(RenderError::SpriteSize {
            expected_w: cfg.sprite_width,
            expected_h: cfg.sprite_height,
            actual_w: sprite.width(),
            actual_h: sprite.height(),
        });
    }

    let layout = Layout::compute(numbers, cfg)?;
    debug!("layout: {layout:?}");
    let mut canvas = RgbaImage::from_pixel(layout.width, layout.height, BACKGROUND);
    let label_top = label_y(&layout, cfg);

    for (s, &count) in numbers.iter().enumerate() {
        let x = layout.stack_x(s as u32);

        let label = count.to_string();
        let lx = label_x(&label, cfg.label_px, x, cfg.sprite_width, layout.width);
        draw_text(&mut canvas, &label, lx, label_top, cfg.label_px, LABEL_COLOR);

        for p in plan_stack(count, x, &layout, cfg, jitter) {
            composite(&mut canvas, sprite.image(), p.x, p.y);
            if let Some(alpha) = p.shadow_alpha {
                composite_shadow(&mut canvas, sprite.image(), p.x, p.y, alpha);
            }
        }
    }

    info!(
        "rendered {} stacks ({} bills) on a {}x{} canvas",
        layout.bars_count,
        numbers.iter().map(|&n| u64::from(n)).sum::<u64>(),
        layout.width,
        layout.height
    );
    Ok(canvas)
}
