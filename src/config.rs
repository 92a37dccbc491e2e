//! Chart configuration: sprite size, spacing, jitter, shadow and label settings.
//!
//! Every tunable lives in [`ChartConfig`]; named presets are available through [`Profile`].
//! Configurations can also be loaded from JSON, where missing fields fall back to the
//! `classic` defaults.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Darkening overlay applied to every sprite below the top of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    pub enabled: bool,
    /// Overlay alpha for the bottom sprite; fades linearly toward the top.
    pub max_alpha: u8,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_alpha: 40,
        }
    }
}

/// All layout and drawing parameters for one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Sprite width `W` in pixels.
    pub sprite_width: u32,
    /// Sprite height `H` in pixels.
    pub sprite_height: u32,
    /// Horizontal space between stacks, also used as left and right padding.
    pub gap: u32,
    /// Vertical distance between two consecutive sprites of a stack.
    pub vertical_step: u32,
    /// Extra canvas height on top of `max * vertical_step + H`.
    pub margin: u32,
    /// Distance from the canvas bottom edge up to the baseline (`height - base_y`).
    pub bottom_margin: u32,
    /// Jitter bound `J`; each placement is shifted by a value in `[-J, J]`.
    pub jitter: u32,
    pub shadow: ShadowConfig,
    /// Label font size in pixels.
    pub label_px: f32,
    /// Space between the bottom edge of the lowest sprite and the label.
    pub label_offset: u32,
    /// Base file name of the sprite source (`bill` matches `bill.png`, `BILL.JPG`, ...).
    pub sprite_name: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Profile::Classic.config()
    }
}

impl ChartConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: ChartConfig = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that the canvas produced with this configuration never clips a sprite or label.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sprite_width == 0 || self.sprite_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "sprite size must be non-zero, got {}x{}",
                self.sprite_width, self.sprite_height
            )));
        }
        if !self.label_px.is_finite() || self.label_px <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "label_px must be a positive number, got {}",
                self.label_px
            )));
        }
        let label_room = u64::from(self.sprite_height)
            + u64::from(self.label_offset)
            + self.label_px.ceil() as u64;
        if u64::from(self.bottom_margin) < label_room {
            return Err(ConfigError::Invalid(format!(
                "bottom_margin {} leaves no room for the label (needs {})",
                self.bottom_margin, label_room
            )));
        }
        if u64::from(self.bottom_margin) > u64::from(self.margin) + u64::from(self.sprite_height)
        {
            return Err(ConfigError::Invalid(format!(
                "bottom_margin {} exceeds margin + sprite height ({})",
                self.bottom_margin,
                u64::from(self.margin) + u64::from(self.sprite_height)
            )));
        }
        if self.jitter > self.gap / 2 {
            return Err(ConfigError::Invalid(format!(
                "jitter {} must not exceed half the gap ({})",
                self.jitter,
                self.gap / 2
            )));
        }
        Ok(())
    }

    /// Shadow alpha for placement `i` of a stack of `count`, or `None` when no overlay is drawn.
    ///
    /// The topmost sprite is never shadowed, and neither is any placement whose alpha rounds to 0.
    pub fn shadow_alpha(&self, i: u32, count: u32) -> Option<u8> {
        if !self.shadow.enabled || count == 0 || i + 1 >= count {
            return None;
        }
        let fade = 1.0 - f64::from(i) / f64::from(count);
        let alpha = (f64::from(self.shadow.max_alpha) * fade).round() as u8;
        (alpha > 0).then_some(alpha)
    }
}

/// Named presets matching the chart styles the tool ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Thin, tightly packed bills with a soft shadow.
    #[default]
    Classic,
    /// Thicker bills, wider jitter, no shadow.
    Flat,
    /// Tall bills with large steps and a strong shadow.
    Bold,
}

impl Profile {
    pub fn config(self) -> ChartConfig {
        let base = ChartConfig {
            sprite_width: 140,
            sprite_height: 5,
            gap: 60,
            vertical_step: 4,
            margin: 100,
            bottom_margin: 50,
            jitter: 1,
            shadow: ShadowConfig::default(),
            label_px: 14.0,
            label_offset: 8,
            sprite_name: "bill".into(),
        };
        match self {
            Profile::Classic => base,
            Profile::Flat => ChartConfig {
                sprite_width: 150,
                sprite_height: 10,
                gap: 50,
                vertical_step: 5,
                margin: 80,
                bottom_margin: 40,
                jitter: 2,
                shadow: ShadowConfig {
                    enabled: false,
                    ..ShadowConfig::default()
                },
                ..base
            },
            Profile::Bold => ChartConfig {
                sprite_width: 120,
                sprite_height: 30,
                vertical_step: 12,
                jitter: 2,
                shadow: ShadowConfig {
                    enabled: true,
                    max_alpha: 60,
                },
                label_px: 16.0,
                bottom_margin: 60,
                ..base
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Profile::Classic => "classic",
            Profile::Flat => "flat",
            Profile::Bold => "bold",
        }
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(Profile::Classic),
            "flat" => Ok(Profile::Flat),
            "bold" => Ok(Profile::Bold),
            other => Err(ConfigError::UnknownProfile(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_profiles_validate() {
        for p in [Profile::Classic, Profile::Flat, Profile::Bold] {
            p.config().validate().unwrap();
        }
    }

    #[test]
    fn profile_names_round_trip() {
        for p in [Profile::Classic, Profile::Flat, Profile::Bold] {
            assert_eq!(p.name().parse::<Profile>().unwrap(), p);
        }
        assert!("BOLD".parse::<Profile>().is_ok());
        assert!(matches!(
            "fancy".parse::<Profile>(),
            Err(ConfigError::UnknownProfile(_))
        ));
    }

    #[test]
    fn label_must_fit_below_baseline() {
        let cfg = ChartConfig {
            bottom_margin: 10,
            ..ChartConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn shadow_fades_toward_top() {
        let cfg = ChartConfig::default();
        assert_eq!(cfg.shadow_alpha(0, 10), Some(40));
        assert_eq!(cfg.shadow_alpha(5, 10), Some(20));
        assert_eq!(cfg.shadow_alpha(9, 10), None);
        assert_eq!(cfg.shadow_alpha(0, 1), None);
    }

    #[test]
    fn disabled_shadow_is_never_drawn() {
        let cfg = Profile::Flat.config();
        assert_eq!(cfg.shadow_alpha(0, 10), None);
    }
}
