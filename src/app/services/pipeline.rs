//! Detection → profile → assets → stylesheet, in one call.

use serde::Serialize;

use crate::app::domain::{FontAssetList, SystemFontProfile, SystemType};
use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::page::PageBinding;

use super::detection::detect_system_type;
use super::font_assets::map_to_available_fonts;
use super::font_profiles::font_profile;
use super::messages::system_message;
use super::stylesheet::{StylesheetOptions, render_font_face_rules};

/// Element id the font stylesheet is injected under
pub const SYSTEM_FONTS_STYLE_ID: &str = "system-fonts";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontReport {
    pub system: SystemType,
    pub profile: SystemFontProfile,
    pub assets: FontAssetList,
    pub message: &'static str,
    #[serde(skip)]
    pub stylesheet: String,
}

pub fn resolve_system_fonts(
    user_agent: &str,
    platform: &str,
    options: &StylesheetOptions,
) -> FontReport {
    let system = detect_system_type(user_agent, platform);
    let profile = font_profile(system);
    let assets = map_to_available_fonts(&profile);
    let stylesheet = render_font_face_rules(&assets, options);
    tracing::debug!(
        system = system.as_str(),
        assets = assets.len(),
        "resolved system fonts"
    );
    FontReport {
        system,
        profile,
        assets,
        message: system_message(system),
        stylesheet,
    }
}

/// Hand the rendered stylesheet to the page
pub fn apply_system_fonts(page: &mut dyn PageBinding, report: &FontReport) -> Result<()> {
    page.inject_stylesheet(SYSTEM_FONTS_STYLE_ID, &report.stylesheet)
}
