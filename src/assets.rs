//! Embedded assets for Vivid UI
//!
//! Uses rust-embed to bundle the crate's own icons at compile time and falls
//! back to the gpui-component icon set (spinner and friends).

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Our own icons shadow component icons of the same path
        if let Some(f) = Self::get(path) {
            return Ok(Some(f.data));
        }
        ComponentAssets::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = Self::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            ComponentAssets::iter()
                .filter(|p| p.starts_with(path) && Self::get(p).is_none())
                .map(Into::into),
        );

        Ok(files)
    }
}

/// Validity glyphs drawn in the input's trailing slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIconName {
    /// Alert circle
    InputError,
    /// Check mark
    InputSuccess,
}

impl StatusIconName {
    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            StatusIconName::InputError => "icons/input-error.svg",
            StatusIconName::InputSuccess => "icons/input-success.svg",
        }
        .into()
    }
}

impl From<StatusIconName> for Icon {
    fn from(val: StatusIconName) -> Self {
        Icon::empty().path(val.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_icons_are_embedded() {
        for icon in [StatusIconName::InputError, StatusIconName::InputSuccess] {
            let path = icon.path();
            let data = Assets.load(&path).expect("load").expect("embedded icon");
            assert!(data.starts_with(b"<svg"));
        }
    }

    #[test]
    fn test_empty_path_loads_nothing() {
        assert!(Assets.load("").expect("load").is_none());
    }

    #[test]
    fn test_missing_asset_is_an_error() {
        assert!(Assets.load("icons/not-a-real-icon.svg").is_err());
    }

    #[test]
    fn test_list_includes_own_icons_once() {
        let files = Assets.list("icons/").expect("list");
        let own = files
            .iter()
            .filter(|f| f.as_ref() == "icons/input-error.svg")
            .count();
        assert_eq!(own, 1);
    }
}
