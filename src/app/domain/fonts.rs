use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Retro font that is always registered, whatever the detected system
pub const DEFAULT_FONT_ASSET: &str = "LazenbyCompLiquid.ttf";

/// The three font slots a system profile fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontRole {
    Primary,
    Fallback,
    Monospace,
}

impl FontRole {
    /// Roles in the order their assets are collected
    pub fn all() -> &'static [FontRole] {
        &[Self::Primary, Self::Fallback, Self::Monospace]
    }
}

/// Font names associated with one system type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SystemFontProfile {
    pub primary: &'static str,
    pub fallback: &'static str,
    pub monospace: &'static str,
    pub description: &'static str,
}

impl SystemFontProfile {
    pub fn font(&self, role: FontRole) -> &'static str {
        match role {
            FontRole::Primary => self.primary,
            FontRole::Fallback => self.fallback,
            FontRole::Monospace => self.monospace,
        }
    }

    /// (role, font name) pairs in collection order
    pub fn roles(&self) -> impl Iterator<Item = (FontRole, &'static str)> + '_ {
        FontRole::all().iter().map(move |role| (*role, self.font(*role)))
    }
}

/// Ordered, duplicate-free list of font asset filenames.
///
/// Built only through [`FontAssetList::from_candidates`], which keeps the
/// first occurrence of every name and makes sure [`DEFAULT_FONT_ASSET`]
/// is present exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FontAssetList(Vec<String>);

impl FontAssetList {
    pub fn from_candidates<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut assets = Vec::new();
        for candidate in candidates {
            let candidate = candidate.as_ref();
            if seen.insert(candidate.to_string()) {
                assets.push(candidate.to_string());
            }
        }
        if !seen.contains(DEFAULT_FONT_ASSET) {
            assets.push(DEFAULT_FONT_ASSET.to_string());
        }
        Self(assets)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn contains(&self, asset: &str) -> bool {
        self.0.iter().any(|a| a == asset)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for lists built by `from_candidates`
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a FontAssetList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Transport format of a font asset, derived from its file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFormat {
    TrueType,
    Woff,
}

impl FontFormat {
    /// `.ttf` files are TrueType; everything else in the collection is WOFF
    pub fn from_file_name(file_name: &str) -> Self {
        if file_name.ends_with(".ttf") {
            Self::TrueType
        } else {
            Self::Woff
        }
    }

    /// Value for the `format()` hint of a `src` descriptor
    pub fn css_name(&self) -> &'static str {
        match self {
            Self::TrueType => "truetype",
            Self::Woff => "woff",
        }
    }
}

/// Load strategy hint emitted in every `@font-face` rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontDisplay {
    Auto,
    Block,
    #[default]
    Swap,
    Fallback,
    Optional,
}

impl FontDisplay {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Block => "block",
            Self::Swap => "swap",
            Self::Fallback => "fallback",
            Self::Optional => "optional",
        }
    }
}
