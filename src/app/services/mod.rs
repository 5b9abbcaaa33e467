//! Services layer - business operations.
//!
//! This module contains the font pipeline and the theme store:
//! - System detection from browser signals
//! - Font profile and asset resolution
//! - `@font-face` rendering
//! - Theme persistence

pub mod detection;
pub mod font_assets;
pub mod font_profiles;
pub mod messages;
pub mod pipeline;
pub mod stylesheet;
pub mod theme_store;
