//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - System types detected from browser signals
//! - Font profiles, roles and asset lists
//! - Themes and application settings

pub mod fonts;
pub mod settings;
pub mod system;
pub mod theme;

pub use fonts::{
    DEFAULT_FONT_ASSET, FontAssetList, FontDisplay, FontFormat, FontRole, SystemFontProfile,
};
pub use settings::AppSettings;
pub use system::SystemType;
pub use theme::{THEME_ATTRIBUTE, THEME_STORAGE_KEY, Theme};
