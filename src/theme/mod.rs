//! Theme - Design Tokens
//!
//! A single immutable token table read by every component. The host installs
//! it once through [`crate::init_with_theme`]; components that render before
//! that fall back to [`Theme::default`].

pub mod colors;
mod loader;
pub mod tokens;
pub mod typography;

use std::sync::LazyLock;

use gpui::{App, Global};
use serde::{Deserialize, Serialize};

use self::colors::Palette;
use self::tokens::{Animations, Radii, Shadows, Spacing};
use self::typography::Typography;

static DEFAULT_THEME: LazyLock<Theme> = LazyLock::new(Theme::default);

/// The full design-token table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub colors: Palette,
    pub spacing: Spacing,
    pub radii: Radii,
    pub shadows: Shadows,
    pub animations: Animations,
    pub typography: Typography,
}

impl Global for Theme {}

impl Theme {
    /// The installed theme, or the built-in default when none is installed
    pub fn global(cx: &App) -> &Theme {
        cx.try_global::<Theme>().unwrap_or(&DEFAULT_THEME)
    }

    /// Install (or replace) the process-wide theme
    pub fn install(self, cx: &mut App) {
        tracing::info!(font = %self.typography.font_family, "Installing theme");
        cx.set_global(self);
    }
}
