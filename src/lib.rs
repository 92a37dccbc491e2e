//! billstack
//!
//! Draws "stacked banknote" bar charts: every input count becomes a pile of bill
//! sprites standing on a shared baseline, with the count printed underneath.
//! Pairs with the `billstack` CLI.
//!
//! ### Features
//! - Bill sprite loaded from `bill.*` (any extension, any case) or drawn as a placeholder
//! - Canvas sized from the input so the tallest pile and all labels fit
//! - Per-bill horizontal jitter from a pluggable random source
//! - Optional depth shadow that fades toward the top of each pile
//! - Presets (`classic`, `flat`, `bold`) or JSON configuration
//!
//! ### Example
//! ```no_run
//! use billstack::{ChartConfig, SeededJitter};
//!
//! let cfg = ChartConfig::default();
//! let (sprite, _origin) = billstack::sprite::acquire_sprite(
//!     std::path::Path::new("."),
//!     &cfg.sprite_name,
//!     cfg.sprite_width,
//!     cfg.sprite_height,
//! );
//! let canvas = billstack::render(&[10, 50, 20], &sprite, &cfg, &mut SeededJitter::from_seed(1))?;
//! billstack::storage::save_image(&canvas, "result.png")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod jitter;
pub mod models;
pub mod render;
pub mod sprite;
pub mod storage;

pub use config::{ChartConfig, Profile, ShadowConfig};
pub use jitter::{JitterSource, ScriptedJitter, SeededJitter, ZeroJitter};
pub use models::{Layout, Placement, Sprite, parse_numbers};
pub use render::render;
