//! Vivid UI
//!
//! Themeable Button and Input controls for GPUI, driven by a single table of
//! design tokens, plus the process-wide style baseline they sit on.
//!
//! ```ignore
//! Application::new().with_assets(vivid_ui::Assets).run(|cx| {
//!     vivid_ui::init(cx);
//!     // open windows rooted in `GlobalStyle::root(cx)`
//! });
//! ```

pub mod app;
pub mod assets;
pub mod components;
pub mod constants;
pub mod error;
pub mod helpers;
pub mod styles;
pub mod theme;

use gpui::App;

pub use assets::{Assets, StatusIconName};
pub use components::primitives::{
    Button, ButtonSize, ButtonVariant, Input, InputSize, InputVariant, Validity,
};
pub use components::style::GradientChoice;
pub use error::{Error, Result};
pub use styles::global::GlobalStyle;
pub use theme::Theme;

/// Install the default theme and the global style baseline
pub fn init(cx: &mut App) {
    init_with_theme(Theme::default(), cx);
}

/// Install `theme` and the global style baseline derived from it
///
/// Calling this again replaces the theme and rebuilds the baseline from it.
/// Open windows pick the change up on their next render.
pub fn init_with_theme(theme: Theme, cx: &mut App) {
    theme.install(cx);
    GlobalStyle::install(cx);
}
