//! `@font-face` rule rendering for font asset lists.

use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use crate::app::domain::{FontAssetList, FontDisplay, FontFormat};

static FONT_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(woff|ttf)$").expect("font extension regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Where assets are served from and how the browser should load them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetOptions {
    pub font_root: String,
    pub woff_root: String,
    pub font_display: FontDisplay,
}

impl Default for StylesheetOptions {
    fn default() -> Self {
        Self {
            font_root: "/fonts".to_string(),
            woff_root: "/fonts/woff".to_string(),
            font_display: FontDisplay::Swap,
        }
    }
}

/// A single font registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFaceRule {
    pub family: String,
    pub url: String,
    pub format: FontFormat,
    pub display: FontDisplay,
}

impl FontFaceRule {
    pub fn for_asset(file_name: &str, options: &StylesheetOptions) -> Self {
        let format = FontFormat::from_file_name(file_name);
        let root = match format {
            FontFormat::TrueType => &options.font_root,
            FontFormat::Woff => &options.woff_root,
        };
        Self {
            family: font_family_name(file_name),
            url: format!("{}/{}", root.trim_end_matches('/'), file_name),
            format,
            display: options.font_display,
        }
    }
}

impl fmt::Display for FontFaceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\n@font-face {{\n  font-family: '{}';\n  src: url('{}') format('{}');\n  font-weight: normal;\n  font-style: normal;\n  font-display: {};\n}}",
            self.family,
            self.url,
            self.format.css_name(),
            self.display.as_str()
        )
    }
}

/// Family name registered for an asset: the file name without its font
/// extension, whitespace runs collapsed to `-`.
pub fn font_family_name(file_name: &str) -> String {
    let stem = FONT_EXTENSION.replace(file_name, "");
    WHITESPACE_RUN.replace_all(&stem, "-").into_owned()
}

/// Render one rule per distinct file name, newline separated, in input order
pub fn render_font_face_rules<I, S>(assets: I, options: &StylesheetOptions) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut rules = Vec::new();
    for asset in assets {
        let asset = asset.as_ref();
        if seen.insert(asset.to_string()) {
            rules.push(FontFaceRule::for_asset(asset, options).to_string());
        }
    }
    rules.join("\n")
}

/// Render the rules for a resolved asset list with default options
pub fn generate_font_face_rules(assets: &FontAssetList) -> String {
    render_font_face_rules(assets, &StylesheetOptions::default())
}
