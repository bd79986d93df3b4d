//! File System Utilities
//!
//! Configuration directory lookup.

use crate::constants::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Get the library's configuration directory without creating it
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/vivid-ui/` or `$XDG_CONFIG_HOME/vivid-ui/`
/// - **macOS**: `~/Library/Application Support/dev.vivid.vivid-ui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\vivid\vivid-ui\config\`
pub fn config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME) else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    Ok(project_dirs.config_dir().to_path_buf())
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}
