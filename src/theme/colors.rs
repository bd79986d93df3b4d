//! Colors - Palette Tokens
//!
//! Colors are stored as packed `0xRRGGBBAA` values and converted to GPUI
//! color types at render time. In theme files they are written as hex strings.

use std::fmt;
use std::str::FromStr;

use gpui::{Hsla, Rgba};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A packed RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(u32);

impl Color {
    pub const WHITE: Color = Color::rgb(0xffffff);
    pub const BLACK: Color = Color::rgb(0x000000);
    pub const TRANSPARENT: Color = Color::rgba(0x00000000);

    /// Opaque color from `0xRRGGBB`
    pub const fn rgb(hex: u32) -> Self {
        Self((hex << 8) | 0xff)
    }

    /// Color from `0xRRGGBBAA`
    pub const fn rgba(hex: u32) -> Self {
        Self(hex)
    }

    /// Packed `0xRRGGBBAA` value
    pub const fn packed(self) -> u32 {
        self.0
    }

    /// Same color with the alpha channel replaced
    pub fn with_alpha(self, alpha: f32) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u32;
        Self((self.0 & 0xffff_ff00) | a)
    }

    pub fn to_rgba(self) -> Rgba {
        gpui::rgba(self.0)
    }

    pub fn to_hsla(self) -> Hsla {
        Hsla::from(self.to_rgba())
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        color.to_rgba()
    }
}

impl From<Color> for Hsla {
    fn from(color: Color) -> Self {
        color.to_hsla()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 & 0xff == 0xff {
            write!(f, "#{:06x}", self.0 >> 8)
        } else {
            write!(f, "#{:08x}", self.0)
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor {
            value: s.to_string(),
        };

        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let packed = match hex.len() {
            3 => {
                // #rgb expands each nibble
                let short = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
                let r = (short >> 8) & 0xf;
                let g = (short >> 4) & 0xf;
                let b = short & 0xf;
                (r * 0x11) << 24 | (g * 0x11) << 16 | (b * 0x11) << 8 | 0xff
            }
            6 => (u32::from_str_radix(hex, 16).map_err(|_| invalid())? << 8) | 0xff,
            8 => u32::from_str_radix(hex, 16).map_err(|_| invalid())?,
            _ => return Err(invalid()),
        };

        Ok(Self(packed))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Shade key of a [`ColorScale`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
}

impl Shade {
    pub const ALL: [Shade; 10] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
    ];

    /// Key used in theme files
    pub fn name(self) -> &'static str {
        match self {
            Shade::S50 => "50",
            Shade::S100 => "100",
            Shade::S200 => "200",
            Shade::S300 => "300",
            Shade::S400 => "400",
            Shade::S500 => "500",
            Shade::S600 => "600",
            Shade::S700 => "700",
            Shade::S800 => "800",
            Shade::S900 => "900",
        }
    }
}

/// Ten-step color scale, lightest (50) to darkest (900)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    #[serde(rename = "50")]
    pub s50: Color,
    #[serde(rename = "100")]
    pub s100: Color,
    #[serde(rename = "200")]
    pub s200: Color,
    #[serde(rename = "300")]
    pub s300: Color,
    #[serde(rename = "400")]
    pub s400: Color,
    #[serde(rename = "500")]
    pub s500: Color,
    #[serde(rename = "600")]
    pub s600: Color,
    #[serde(rename = "700")]
    pub s700: Color,
    #[serde(rename = "800")]
    pub s800: Color,
    #[serde(rename = "900")]
    pub s900: Color,
}

impl ColorScale {
    /// Build a scale from ten `0xRRGGBB` values, 50 through 900
    pub const fn from_hex(hex: [u32; 10]) -> Self {
        Self {
            s50: Color::rgb(hex[0]),
            s100: Color::rgb(hex[1]),
            s200: Color::rgb(hex[2]),
            s300: Color::rgb(hex[3]),
            s400: Color::rgb(hex[4]),
            s500: Color::rgb(hex[5]),
            s600: Color::rgb(hex[6]),
            s700: Color::rgb(hex[7]),
            s800: Color::rgb(hex[8]),
            s900: Color::rgb(hex[9]),
        }
    }

    pub fn shade(&self, shade: Shade) -> Color {
        match shade {
            Shade::S50 => self.s50,
            Shade::S100 => self.s100,
            Shade::S200 => self.s200,
            Shade::S300 => self.s300,
            Shade::S400 => self.s400,
            Shade::S500 => self.s500,
            Shade::S600 => self.s600,
            Shade::S700 => self.s700,
            Shade::S800 => self.s800,
            Shade::S900 => self.s900,
        }
    }
}

/// A two-stop linear gradient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientSpec {
    /// Direction in degrees, CSS convention (90 = left to right)
    pub angle: f32,
    pub from: Color,
    pub to: Color,
}

impl GradientSpec {
    pub const fn new(angle: f32, from: Color, to: Color) -> Self {
        Self { angle, from, to }
    }

    pub fn to_background(self) -> gpui::Background {
        gpui::linear_gradient(
            self.angle,
            gpui::linear_color_stop(self.from.to_hsla(), 0.0),
            gpui::linear_color_stop(self.to.to_hsla(), 1.0),
        )
    }
}

/// Named gradients selectable by the `gradient` prop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gradients {
    pub primary: GradientSpec,
    pub secondary: GradientSpec,
    pub purple: GradientSpec,
    pub violet: GradientSpec,
    pub dark: GradientSpec,
}

impl Default for Gradients {
    fn default() -> Self {
        Self {
            primary: GradientSpec::new(135.0, Color::rgb(0xa855f7), Color::rgb(0x7c3aed)),
            secondary: GradientSpec::new(135.0, Color::rgb(0xec4899), Color::rgb(0x8b5cf6)),
            purple: GradientSpec::new(135.0, Color::rgb(0x667eea), Color::rgb(0x764ba2)),
            violet: GradientSpec::new(135.0, Color::rgb(0x8b5cf6), Color::rgb(0x6d28d9)),
            dark: GradientSpec::new(135.0, Color::rgb(0x1f2937), Color::rgb(0x4c1d95)),
        }
    }
}

/// Full color palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Purple brand scale
    pub primary: ColorScale,
    /// Slate scale for secondary surfaces
    pub secondary: ColorScale,
    /// Gray scale for text, borders and fills
    pub neutral: ColorScale,
    pub error: Color,
    pub success: Color,
    pub warning: Color,
    pub white: Color,
    pub gradients: Gradients,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: ColorScale::from_hex([
                0xfaf5ff, 0xf3e8ff, 0xe9d5ff, 0xd8b4fe, 0xc084fc, 0xa855f7, 0x9333ea, 0x7e22ce,
                0x6b21a8, 0x581c87,
            ]),
            secondary: ColorScale::from_hex([
                0xf8fafc, 0xf1f5f9, 0xe2e8f0, 0xcbd5e1, 0x94a3b8, 0x64748b, 0x475569, 0x334155,
                0x1e293b, 0x0f172a,
            ]),
            neutral: ColorScale::from_hex([
                0xf9fafb, 0xf3f4f6, 0xe5e7eb, 0xd1d5db, 0x9ca3af, 0x6b7280, 0x4b5563, 0x374151,
                0x1f2937, 0x111827,
            ]),
            error: Color::rgb(0xef4444),
            success: Color::rgb(0x10b981),
            warning: Color::rgb(0xf59e0b),
            white: Color::WHITE,
            gradients: Gradients::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_hex() {
        assert_eq!("#a855f7".parse::<Color>().ok(), Some(Color::rgb(0xa855f7)));
        assert_eq!("#fff".parse::<Color>().ok(), Some(Color::WHITE));
        assert_eq!(
            "#a855f780".parse::<Color>().ok(),
            Some(Color::rgba(0xa855f780))
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["a855f7", "#a855f", "#zzzzzz", "", "#", "#a855f7ff00"] {
            assert!(
                matches!(input.parse::<Color>(), Err(Error::InvalidColor { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_display_omits_opaque_alpha() {
        assert_eq!(Color::rgb(0x10b981).to_string(), "#10b981");
        assert_eq!(Color::rgba(0x10b9811a).to_string(), "#10b9811a");
    }

    #[test]
    fn test_with_alpha() {
        let ring = Color::rgb(0xa855f7).with_alpha(0.1);
        assert_eq!(ring.packed() >> 8, 0xa855f7);
        assert_eq!(ring.packed() & 0xff, 26);
    }

    #[test]
    fn test_shade_lookup() {
        let palette = Palette::default();
        assert_eq!(palette.primary.shade(Shade::S500), Color::rgb(0xa855f7));
        assert_eq!(palette.primary.shade(Shade::S600), palette.primary.s600);
        assert_eq!(Shade::ALL.map(Shade::name)[0], "50");
        assert_eq!(Shade::ALL.map(Shade::name)[9], "900");
    }
}
