//! Style Descriptors
//!
//! Plain-data results of resolving a component's props against the theme.
//! Components resolve first and paint second, so every visual decision can be
//! checked without a window.

use std::str::FromStr;

use gpui::{Styled, px};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::theme::Theme;
use crate::theme::colors::{Color, GradientSpec};
use crate::theme::tokens::ShadowPreset;
use crate::theme::typography::Typography;

/// Named gradient, applied only by the `gradient` variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientChoice {
    Primary,
    Secondary,
    #[default]
    Purple,
    Violet,
    Dark,
}

impl GradientChoice {
    pub const ALL: [GradientChoice; 5] = [
        GradientChoice::Primary,
        GradientChoice::Secondary,
        GradientChoice::Purple,
        GradientChoice::Violet,
        GradientChoice::Dark,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GradientChoice::Primary => "primary",
            GradientChoice::Secondary => "secondary",
            GradientChoice::Purple => "purple",
            GradientChoice::Violet => "violet",
            GradientChoice::Dark => "dark",
        }
    }

    pub fn spec(self, theme: &Theme) -> GradientSpec {
        let gradients = &theme.colors.gradients;
        match self {
            GradientChoice::Primary => gradients.primary,
            GradientChoice::Secondary => gradients.secondary,
            GradientChoice::Purple => gradients.purple,
            GradientChoice::Violet => gradients.violet,
            GradientChoice::Dark => gradients.dark,
        }
    }
}

impl FromStr for GradientChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_token("gradient", s, &Self::ALL, |g| g.name())
    }
}

/// Look up `value` among the names of a closed enumeration
pub(crate) fn parse_token<T: Copy>(
    kind: &'static str,
    value: &str,
    all: &[T],
    name: impl Fn(T) -> &'static str,
) -> Result<T> {
    all.iter()
        .copied()
        .find(|candidate| name(*candidate).eq_ignore_ascii_case(value.trim()))
        .ok_or_else(|| Error::UnknownToken {
            kind,
            value: value.to_string(),
        })
}

/// Background of a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Transparent,
    Solid(Color),
    Gradient(GradientSpec),
}

impl Paint {
    pub fn to_background(self) -> gpui::Background {
        match self {
            Paint::Transparent => Color::TRANSPARENT.to_hsla().into(),
            Paint::Solid(color) => color.to_hsla().into(),
            Paint::Gradient(gradient) => gradient.to_background(),
        }
    }
}

/// Border weights used by the controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderWidth {
    None,
    Thin,
    Thick,
}

/// Border of a surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: BorderWidth,
    pub color: Color,
}

impl Stroke {
    pub const NONE: Stroke = Stroke {
        width: BorderWidth::None,
        color: Color::TRANSPARENT,
    };

    pub const fn thin(color: Color) -> Self {
        Self {
            width: BorderWidth::Thin,
            color,
        }
    }

    pub const fn thick(color: Color) -> Self {
        Self {
            width: BorderWidth::Thick,
            color,
        }
    }
}

/// Background, border and foreground of a control in one state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub fill: Paint,
    pub text: Color,
    pub border: Stroke,
}

/// Changes applied while the pointer is over an interactive control
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoverEffect {
    pub fill: Option<Paint>,
    pub text: Option<Color>,
    pub border_color: Option<Color>,
    /// Upward shift in pixels
    pub lift: f32,
    pub shadow: Option<ShadowPreset>,
    /// Sweep a highlight band across the surface
    pub sweep: bool,
}

/// Padding, font size and minimum height for one size step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMetrics {
    pub padding_x: f32,
    pub padding_y: f32,
    pub font_size: f32,
    pub min_height: f32,
}

impl SizeMetrics {
    /// Metrics shared by the sm/md/lg/xl steps of every control
    pub(crate) fn step(theme: &Theme, step: SizeStep) -> Self {
        let s = &theme.spacing;
        let t = &theme.typography;
        let (padding_y, padding_x, font_rem, height_rem) = match step {
            SizeStep::Sm => (s.sm, s.md, Typography::TEXT_SM, 2.0),
            SizeStep::Md => (s.md, s.lg, Typography::TEXT_BASE, 2.5),
            SizeStep::Lg => (s.lg, s.xl, Typography::TEXT_LG, 3.0),
            SizeStep::Xl => (s.xl, s.xxl, Typography::TEXT_XL, 3.5),
        };
        Self {
            padding_x,
            padding_y,
            font_size: t.rem_px(font_rem),
            min_height: t.rem_px(height_rem),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SizeStep {
    Sm,
    Md,
    Lg,
    Xl,
}

/// Horizontal sizing of a control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WidthMode {
    /// Width follows content
    #[default]
    Intrinsic,
    /// Fill the containing element
    Fill,
}

impl WidthMode {
    pub fn from_full_width(full_width: bool) -> Self {
        if full_width {
            WidthMode::Fill
        } else {
            WidthMode::Intrinsic
        }
    }
}

/// Painting helpers shared by elements and style refinements
pub trait StyleExt: Styled + Sized {
    fn paint(self, paint: Paint) -> Self {
        self.bg(paint.to_background())
    }

    fn stroke(self, stroke: Stroke) -> Self {
        let this = match stroke.width {
            BorderWidth::None => self.border_0(),
            BorderWidth::Thin => self.border_1(),
            BorderWidth::Thick => self.border_2(),
        };
        this.border_color(stroke.color.to_rgba())
    }

    fn surface(self, surface: Surface) -> Self {
        self.paint(surface.fill)
            .stroke(surface.border)
            .text_color(surface.text.to_rgba())
    }

    fn metrics(self, metrics: SizeMetrics) -> Self {
        self.px(px(metrics.padding_x))
            .py(px(metrics.padding_y))
            .text_size(px(metrics.font_size))
            .min_h(px(metrics.min_height))
    }

    fn width_mode(self, mode: WidthMode) -> Self {
        match mode {
            WidthMode::Fill => self.w_full(),
            WidthMode::Intrinsic => self,
        }
    }

    fn drop_shadows(self, shadows: impl IntoIterator<Item = ShadowPreset>) -> Self {
        let shadows: Vec<_> = shadows.into_iter().map(ShadowPreset::to_box_shadow).collect();
        if shadows.is_empty() {
            self
        } else {
            self.shadow(shadows)
        }
    }

    fn hover_effect(self, effect: HoverEffect) -> Self {
        let this = match effect.fill {
            Some(fill) => self.paint(fill),
            None => self,
        };
        let this = match effect.text {
            Some(text) => this.text_color(text.to_rgba()),
            None => this,
        };
        let this = match effect.border_color {
            Some(color) => this.border_color(color.to_rgba()),
            None => this,
        };
        let this = if effect.lift > 0.0 {
            this.top(px(-effect.lift))
        } else {
            this
        };
        this.drop_shadows(effect.shadow)
    }

    fn label_weight(self, theme: &Theme) -> Self {
        self.font_weight(theme.typography.label_font_weight())
    }
}

impl<T: Styled> StyleExt for T {}
