//! Theme overrides from TOML
//!
//! Override files are partial: any table or field left out keeps its
//! built-in value. A color scale, when present, must list all ten shades.

use std::fs;
use std::path::{Path, PathBuf};

use super::Theme;
use crate::constants::{THEME_FILE_NAME, THEME_PATH_ENV};
use crate::error::Result;
use crate::helpers::config_dir;

impl Theme {
    /// Parse a partial TOML document on top of the default theme
    pub fn from_toml_str(source: &str) -> Result<Theme> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a theme override file
    pub fn load(path: impl AsRef<Path>) -> Result<Theme> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Where an override file is looked for, if anywhere
    ///
    /// `$VIVID_UI_THEME` wins; otherwise `theme.toml` in the config directory
    /// is used when it exists.
    pub fn override_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(THEME_PATH_ENV).filter(|p| !p.is_empty()) {
            return Some(PathBuf::from(path));
        }

        match config_dir() {
            Ok(dir) => {
                let path = dir.join(THEME_FILE_NAME);
                path.exists().then_some(path)
            }
            Err(e) => {
                tracing::debug!(error = %e, "No config directory for theme overrides");
                None
            }
        }
    }

    /// Load the override file if one exists, falling back to the default theme
    pub fn load_or_default() -> Theme {
        let Some(path) = Self::override_path() else {
            return Theme::default();
        };

        tracing::debug!(path = %path.display(), "Loading theme overrides");
        match Self::load(&path) {
            Ok(theme) => theme,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to load theme, using default");
                Theme::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::theme::colors::{Color, GradientSpec};
    use crate::theme::tokens::Easing;

    #[test]
    fn test_empty_document_is_default() {
        let theme = Theme::from_toml_str("").expect("empty theme");
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_partial_override_keeps_other_tokens() {
        let theme = Theme::from_toml_str(
            r##"
            [colors]
            error = "#dc2626"

            [spacing]
            md = 14.0

            [animations]
            easing = "ease-out"
            "##,
        )
        .expect("partial theme");

        let default = Theme::default();
        assert_eq!(theme.colors.error, Color::rgb(0xdc2626));
        assert_eq!(theme.colors.success, default.colors.success);
        assert_eq!(theme.colors.primary, default.colors.primary);
        assert_eq!(theme.spacing.md, 14.0);
        assert_eq!(theme.spacing.lg, default.spacing.lg);
        assert_eq!(theme.animations.easing, Easing::EaseOut);
        assert_eq!(theme.radii, default.radii);
    }

    #[test]
    fn test_gradient_override() {
        let theme = Theme::from_toml_str(
            r##"
            [colors.gradients.violet]
            angle = 90.0
            from = "#000"
            to = "#ffffff"
            "##,
        )
        .expect("gradient theme");

        assert_eq!(
            theme.colors.gradients.violet,
            GradientSpec::new(90.0, Color::BLACK, Color::WHITE)
        );
        assert_eq!(
            theme.colors.gradients.purple,
            Theme::default().colors.gradients.purple
        );
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let result = Theme::from_toml_str(
            r#"
            [colors]
            error = "red"
            "#,
        );
        assert!(matches!(result, Err(Error::TomlDe { .. })));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Theme::load("/definitely/not/here/theme.toml");
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
