//! User settings
//!
//! Optional JSON file in the platform config directory. Anything missing or
//! broken falls back to defaults; settings never affect navigation.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default primary color (material blue 500)
pub const DEFAULT_PRIMARY: (u8, u8, u8) = (0x21, 0x96, 0xF3);

/// Settings file errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),
}

/// Settings as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Primary color as `#RRGGBB`
    pub primary_color: String,
    /// Show the key hint footer
    pub show_key_hints: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let (r, g, b) = DEFAULT_PRIMARY;
        Self {
            primary_color: format!("#{:02X}{:02X}{:02X}", r, g, b),
            show_key_hints: true,
        }
    }
}

impl Settings {
    /// Load settings from the default location, falling back to defaults
    pub fn load() -> Self {
        let path = settings_path();
        if !path.exists() {
            log::info!("No settings file at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(settings) => {
                log::info!("Settings loaded from {:?}", path);
                settings
            }
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Load and validate settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let data = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&data)?;
        settings.primary_rgb()?;
        Ok(settings)
    }

    /// Parsed primary color
    pub fn primary_rgb(&self) -> Result<(u8, u8, u8), SettingsError> {
        parse_hex_color(&self.primary_color)
    }
}

/// Parse `#RRGGBB` (the leading `#` is optional)
pub fn parse_hex_color(s: &str) -> Result<(u8, u8, u8), SettingsError> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(SettingsError::InvalidColor(s.to_string()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| SettingsError::InvalidColor(s.to_string()))
    };
    Ok((channel(0)?, channel(2)?, channel(4)?))
}

/// Get the settings file path
pub fn settings_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "component-tour", "ComponentTour") {
        let mut path = proj_dirs.config_dir().to_path_buf();
        path.push("settings.json");
        path
    } else {
        PathBuf::from("./settings.json")
    }
}
