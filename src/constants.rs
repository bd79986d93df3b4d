//! Constants
//!
//! Centralized names and dimensions shared by the library and the gallery.

/// Project directory qualifier, organization and application name
pub const APP_QUALIFIER: &str = "dev";
pub const APP_ORGANIZATION: &str = "vivid";
pub const APP_NAME: &str = "vivid-ui";

/// Environment variable pointing at a theme override file
pub const THEME_PATH_ENV: &str = "VIVID_UI_THEME";

/// Theme override file name inside the platform config directory
pub const THEME_FILE_NAME: &str = "theme.toml";

/// Gallery window dimensions
pub const GALLERY_WINDOW_WIDTH: f32 = 1100.0;
pub const GALLERY_WINDOW_HEIGHT: f32 = 820.0;

/// Simulated submit delay in the gallery
pub const GALLERY_SUBMIT_DELAY_MS: u64 = 1500;

