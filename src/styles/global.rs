//! Global Style - Process-wide Baseline
//!
//! GPUI has no stylesheet cascade, so the baseline lives in a global that
//! the host installs at startup and applies through [`GlobalStyle::root`].
//! Installing also pushes the baseline into gpui-component's theme, which
//! paints scrollbars, text fields and placeholders.

use gpui::{App, Div, Global, SharedString, Styled, div, px};
use gpui_component::Theme as ComponentTheme;

use crate::theme::Theme;
use crate::theme::colors::{Color, GradientSpec};

/// Scrollbar appearance for scrollable regions
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollbarStyle {
    pub track: Color,
    pub thumb: GradientSpec,
    pub thumb_hover: GradientSpec,
}

/// Baseline applied to every window root
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalStyle {
    pub font_family: SharedString,
    pub font_size: f32,
    pub text_color: Color,
    pub background: Color,
    pub placeholder_color: Color,
    pub scrollbar: ScrollbarStyle,
}

impl Global for GlobalStyle {}

impl GlobalStyle {
    /// Derive the baseline from theme tokens
    pub fn from_theme(theme: &Theme) -> Self {
        let primary = &theme.colors.primary;
        Self {
            font_family: theme.typography.family(),
            font_size: theme.typography.rem_px(1.0),
            text_color: theme.colors.neutral.s900,
            background: theme.colors.white,
            placeholder_color: theme.colors.neutral.s400,
            scrollbar: ScrollbarStyle {
                track: Color::rgb(0xf1f1f1),
                thumb: GradientSpec::new(135.0, primary.s500, primary.s700),
                thumb_hover: GradientSpec::new(135.0, primary.s600, primary.s800),
            },
        }
    }

    /// Install the baseline for the current theme
    ///
    /// Calling again after a theme change rebuilds the baseline. Returns
    /// `true` when this call performed the first installation.
    pub fn install(cx: &mut App) -> bool {
        let style = Self::from_theme(Theme::global(cx));
        let first = !cx.has_global::<GlobalStyle>();
        if first {
            tracing::info!(font = %style.font_family, "Installing global style");
        } else {
            tracing::debug!(font = %style.font_family, "Refreshing global style");
        }

        if cx.has_global::<ComponentTheme>() {
            style.apply_to(ComponentTheme::global_mut(cx));
        } else {
            tracing::debug!("gpui-component theme missing; scrollbar tokens not applied");
        }

        cx.set_global(style);
        first
    }

    /// Copy the baseline tokens into gpui-component's theme
    ///
    /// Its scrollbars paint solid colors, so the thumb uses the first stop
    /// of each gradient.
    pub fn apply_to(&self, theme: &mut ComponentTheme) {
        theme.font_family = self.font_family.clone();
        theme.font_size = px(self.font_size);
        theme.colors.foreground = self.text_color.to_hsla();
        theme.colors.background = self.background.to_hsla();
        theme.colors.muted_foreground = self.placeholder_color.to_hsla();
        theme.colors.scrollbar = self.scrollbar.track.to_hsla();
        theme.colors.scrollbar_thumb = self.scrollbar.thumb.from.to_hsla();
        theme.colors.scrollbar_thumb_hover = self.scrollbar.thumb_hover.from.to_hsla();
    }

    /// The installed baseline, or one derived from the current theme
    pub fn current(cx: &App) -> GlobalStyle {
        cx.try_global::<GlobalStyle>()
            .cloned()
            .unwrap_or_else(|| Self::from_theme(Theme::global(cx)))
    }

    /// Root container carrying the baseline font, size and colors
    pub fn root(cx: &App) -> Div {
        let style = Self::current(cx);
        div()
            .size_full()
            .font_family(style.font_family)
            .text_size(px(style.font_size))
            .text_color(style.text_color.to_rgba())
            .bg(style.background.to_rgba())
    }
}
