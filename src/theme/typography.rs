//! Typography - Font Family, Sizes and Weights

use gpui::{FontWeight, Pixels, SharedString, px};
use serde::{Deserialize, Serialize};

/// Typography tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    /// Base font family; `.SystemUIFont` resolves to the platform UI font
    pub font_family: String,
    /// Pixels per rem
    pub rem: f32,
    /// Weight used for control labels
    pub label_weight: u16,
}

impl Typography {
    pub const TEXT_XS: f32 = 0.75;
    pub const TEXT_SM: f32 = 0.875;
    pub const TEXT_BASE: f32 = 1.0;
    pub const TEXT_LG: f32 = 1.125;
    pub const TEXT_XL: f32 = 1.25;

    pub const FONT_SEMIBOLD: u16 = 600;

    /// Convert a rem length to pixels
    pub fn rem_px(&self, rem: f32) -> f32 {
        rem * self.rem
    }

    pub fn rem(&self, rem: f32) -> Pixels {
        px(self.rem_px(rem))
    }

    pub fn family(&self) -> SharedString {
        SharedString::from(self.font_family.clone())
    }

    pub fn label_font_weight(&self) -> FontWeight {
        FontWeight(self.label_weight as f32)
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: ".SystemUIFont".to_string(),
            rem: 16.0,
            label_weight: Self::FONT_SEMIBOLD,
        }
    }
}
