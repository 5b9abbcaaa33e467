use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::app::domain::fonts::FontDisplay;
use crate::app::domain::theme::Theme;
use crate::app::infrastructure::error::AppError;
use crate::app::services::stylesheet::StylesheetOptions;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Theme used when nothing valid has been persisted yet
    #[serde(default)]
    pub default_theme: Theme,

    /// URL directory TrueType assets are served from
    #[serde(default = "default_font_root")]
    pub font_root: String,

    /// URL directory WOFF assets are served from
    #[serde(default = "default_woff_root")]
    pub woff_root: String,

    #[serde(default)]
    pub font_display: FontDisplay,

    /// Override for the key/value store file (defaults to the data dir)
    #[serde(default)]
    pub storage_path: Option<PathBuf>,
}

fn default_font_root() -> String {
    "/fonts".to_string()
}

fn default_woff_root() -> String {
    "/fonts/woff".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_theme: Theme::default(),
            font_root: default_font_root(),
            woff_root: default_woff_root(),
            font_display: FontDisplay::default(),
            storage_path: None,
        }
    }
}

impl AppSettings {
    pub fn stylesheet_options(&self) -> StylesheetOptions {
        StylesheetOptions {
            font_root: self.font_root.clone(),
            woff_root: self.woff_root.clone(),
            font_display: self.font_display,
        }
    }

    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    /// Load settings from an explicit path; same fallbacks as [`AppSettings::load`]
    pub fn load_from(config_path: &Path) -> Self {
        match Self::read_from(config_path) {
            Some(settings) => settings,
            None => {
                // File doesn't exist, use defaults
                let default = Self::default();
                // Try to save defaults for next time
                if let Err(e) = default.save_to(config_path) {
                    tracing::debug!("Could not write default settings: {}", e);
                }
                default
            }
        }
    }

    /// Read settings without ever writing to `config_path`. `None` when the
    /// file doesn't exist; unreadable or corrupt files yield defaults.
    pub fn read_from(config_path: &Path) -> Option<Self> {
        let contents = match fs::read_to_string(config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                tracing::warn!(
                    "Failed to read settings {}: {}. Using defaults.",
                    config_path.display(),
                    e
                );
                return Some(Self::default());
            }
        };
        match serde_json::from_str(&contents) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse settings {}: {}. Using defaults.",
                    config_path.display(),
                    e
                );
                Some(Self::default())
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<(), AppError> {
        if self.font_root.is_empty() || self.woff_root.is_empty() {
            return Err(AppError::Settings("font roots must not be empty".to_string()));
        }

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("mem8");
        path.push("settings.json");
        path
    }

    /// Path of the key/value store file the theme is persisted in
    pub fn storage_path(&self) -> PathBuf {
        self.storage_path.clone().unwrap_or_else(|| {
            let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
            path.push("mem8");
            path.push("storage.json");
            path
        })
    }
}
