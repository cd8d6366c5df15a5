//! File System Utilities
//!
//! Configuration directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("dev", "layout-kit", "layout-kit").ok_or(Error::ConfigDirUnavailable {})
}

/// Get or create the configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/layout-kit/` or `$XDG_CONFIG_HOME/layout-kit/`
/// - **macOS**: `~/Library/Application Support/dev.layout-kit.layout-kit/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\layout-kit\layout-kit\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}
