//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (SystemType, font profiles, Theme, Settings)
//! - `services/` - Business operations (detection, font mapping, stylesheet, theme store)
//! - `infrastructure/` - External integrations (storage, page bindings, platform, error)

pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use domain::{
    AppSettings, DEFAULT_FONT_ASSET, FontAssetList, FontDisplay, FontRole, SystemFontProfile,
    SystemType, Theme,
};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::page::{HeadlessPage, PageBinding};
pub use infrastructure::platform::{HostSignals, host_signals};
pub use infrastructure::storage::{FileStorage, KeyValueStore, MemoryStorage};
pub use services::detection::detect_system_type;
pub use services::font_assets::map_to_available_fonts;
pub use services::font_profiles::{font_profile, font_profile_for_id};
pub use services::messages::system_message;
pub use services::pipeline::{FontReport, apply_system_fonts, resolve_system_fonts};
pub use services::stylesheet::{StylesheetOptions, generate_font_face_rules, render_font_face_rules};
pub use services::theme_store::{SubscriptionId, ThemeStore};
