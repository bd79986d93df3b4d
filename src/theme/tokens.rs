//! Tokens - Spacing, Radii, Shadows and Motion

use std::time::Duration;

use gpui::{BoxShadow, point, px};
use serde::{Deserialize, Serialize};

use super::colors::Color;

/// Spacing scale in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spacing {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    #[serde(rename = "2xl")]
    pub xxl: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            xs: 4.0,
            sm: 8.0,
            md: 12.0,
            lg: 16.0,
            xl: 20.0,
            xxl: 24.0,
        }
    }
}

/// Corner radii in pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Radii {
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub full: f32,
}

impl Default for Radii {
    fn default() -> Self {
        Self {
            sm: 4.0,
            md: 6.0,
            lg: 8.0,
            xl: 12.0,
            full: 9999.0,
        }
    }
}

/// A single drop shadow
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowPreset {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl ShadowPreset {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    /// Unblurred ring hugging the element edge
    pub fn ring(color: Color, width: f32) -> Self {
        Self::new(0.0, 0.0, 0.0, width, color)
    }

    pub fn to_box_shadow(self) -> BoxShadow {
        BoxShadow {
            color: self.color.to_hsla(),
            offset: point(px(self.offset_x), px(self.offset_y)),
            blur_radius: px(self.blur),
            spread_radius: px(self.spread),
        }
    }
}

/// Shadow presets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Shadows {
    pub sm: ShadowPreset,
    pub md: ShadowPreset,
    pub lg: ShadowPreset,
    /// Brand-tinted elevation used on hover
    pub purple: ShadowPreset,
    /// Soft brand glow for gradient-framed inputs
    pub glow: ShadowPreset,
    /// Spread of focus and validity rings
    pub ring_width: f32,
}

impl Default for Shadows {
    fn default() -> Self {
        Self {
            sm: ShadowPreset::new(0.0, 1.0, 2.0, 0.0, Color::rgba(0x0000000d)),
            md: ShadowPreset::new(0.0, 4.0, 6.0, -1.0, Color::rgba(0x0000001a)),
            lg: ShadowPreset::new(0.0, 10.0, 15.0, -3.0, Color::rgba(0x0000001a)),
            purple: ShadowPreset::new(0.0, 10.0, 25.0, -5.0, Color::rgba(0xa855f766)),
            glow: ShadowPreset::new(0.0, 4.0, 12.0, 0.0, Color::rgba(0xa855f726)),
            ring_width: 3.0,
        }
    }
}

/// Easing curves available to animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    Linear,
    EaseInOut,
    EaseOut,
}

impl Easing {
    /// Map linear progress `t` in `0.0..=1.0` through the curve
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => gpui::ease_in_out(t),
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Animation timing tokens (milliseconds)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Animations {
    pub fast_ms: u64,
    pub normal_ms: u64,
    pub slow_ms: u64,
    /// One full spinner revolution
    pub spinner_ms: u64,
    pub easing: Easing,
}

impl Animations {
    pub fn slow(&self) -> Duration {
        Duration::from_millis(self.slow_ms)
    }

    pub fn spinner(&self) -> Duration {
        Duration::from_millis(self.spinner_ms)
    }
}

impl Default for Animations {
    fn default() -> Self {
        Self {
            fast_ms: 150,
            normal_ms: 300,
            slow_ms: 500,
            spinner_ms: 1000,
            easing: Easing::EaseInOut,
        }
    }
}
