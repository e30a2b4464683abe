//! Display settings
//!
//! Loaded from `settings.ron` in the platform config directory, falling
//! back to defaults when the file is missing or unreadable.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const SETTINGS_FILE: &str = "settings.ron";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// How item descriptions are presented
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Prefix each line with its priority, for content debugging
    pub show_priority: bool,
    /// Cap on lines per item
    pub max_lines: Option<usize>,
}

/// Get the settings file path
pub fn settings_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "itemdesc", "Itemdesc") {
        proj_dirs.config_dir().join(SETTINGS_FILE)
    } else {
        PathBuf::from(SETTINGS_FILE)
    }
}

/// Load settings from a RON file
pub fn load_settings(path: &Path) -> Result<DisplaySettings, SettingsError> {
    let content = fs::read_to_string(path)?;
    let settings = ron::from_str(&content)?;
    log::info!("Settings loaded from {:?}", path);
    Ok(settings)
}

/// Load settings from the default location, or defaults
pub fn load_settings_or_default() -> DisplaySettings {
    let path = settings_path();
    if !path.exists() {
        return DisplaySettings::default();
    }

    load_settings(&path).unwrap_or_else(|e| {
        log::warn!("{}, using defaults", e);
        DisplaySettings::default()
    })
}
