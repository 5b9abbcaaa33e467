use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::app::infrastructure::error::AppError;

/// Storage key the current theme is persisted under
pub const THEME_STORAGE_KEY: &str = "mem8-theme";

/// Root element attribute the stylesheet layer selects themes on
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Visual themes shipped with the front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    White,
    Dark,
    #[default]
    FullCrt,
    FakeCrt,
    Slate,
    Zinc,
    Emerald,
    Rose,
}

impl Theme {
    /// Get the identifier written to storage and to the page attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Dark => "dark",
            Self::FullCrt => "full-crt",
            Self::FakeCrt => "fake-crt",
            Self::Slate => "slate",
            Self::Zinc => "zinc",
            Self::Emerald => "emerald",
            Self::Rose => "rose",
        }
    }

    /// Get the display name for this theme
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Dark => "Dark",
            Self::FullCrt => "Full CRT",
            Self::FakeCrt => "Fake CRT",
            Self::Slate => "Slate",
            Self::Zinc => "Zinc",
            Self::Emerald => "Emerald",
            Self::Rose => "Rose",
        }
    }

    /// Get all available themes
    pub fn all() -> &'static [Theme] {
        &[
            Self::White,
            Self::Dark,
            Self::FullCrt,
            Self::FakeCrt,
            Self::Slate,
            Self::Zinc,
            Self::Emerald,
            Self::Rose,
        ]
    }
}

impl FromStr for Theme {
    type Err = AppError;

    /// Only exact identifiers are accepted; anything else is rejected
    /// rather than coerced to a default.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| AppError::UnknownTheme(s.to_string()))
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
