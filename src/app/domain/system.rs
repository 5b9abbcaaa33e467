use serde::{Deserialize, Serialize};
use std::fmt;

/// Operating system or device family detected from browser signals.
///
/// The set is closed: anything the detector cannot place ends up as
/// [`SystemType::Generic`], and parsing a foreign identifier does the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SystemType {
    #[serde(rename = "mac-classic")]
    MacClassic,
    #[serde(rename = "mac-modern")]
    MacModern,
    #[serde(rename = "win-95")]
    Win95,
    #[serde(rename = "win-98")]
    Win98,
    #[serde(rename = "win-2000")]
    Win2000,
    #[serde(rename = "win-xp")]
    WinXp,
    #[serde(rename = "win-legacy")]
    WinLegacy,
    #[serde(rename = "win-modern")]
    WinModern,
    #[serde(rename = "linux-ubuntu")]
    LinuxUbuntu,
    #[serde(rename = "linux-debian")]
    LinuxDebian,
    #[serde(rename = "linux-fedora")]
    LinuxFedora,
    #[serde(rename = "linux-arch")]
    LinuxArch,
    #[serde(rename = "linux-generic")]
    LinuxGeneric,
    #[serde(rename = "android")]
    Android,
    #[serde(rename = "ios")]
    Ios,
    #[serde(rename = "playstation")]
    PlayStation,
    #[serde(rename = "xbox")]
    Xbox,
    #[serde(rename = "nintendo")]
    Nintendo,
    #[serde(rename = "commodore-64")]
    Commodore64,
    #[serde(rename = "amiga")]
    Amiga,
    #[serde(rename = "atari")]
    Atari,
    #[default]
    #[serde(rename = "generic")]
    Generic,
}

impl SystemType {
    /// Identifier used in stylesheets, logs and the CLI
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MacClassic => "mac-classic",
            Self::MacModern => "mac-modern",
            Self::Win95 => "win-95",
            Self::Win98 => "win-98",
            Self::Win2000 => "win-2000",
            Self::WinXp => "win-xp",
            Self::WinLegacy => "win-legacy",
            Self::WinModern => "win-modern",
            Self::LinuxUbuntu => "linux-ubuntu",
            Self::LinuxDebian => "linux-debian",
            Self::LinuxFedora => "linux-fedora",
            Self::LinuxArch => "linux-arch",
            Self::LinuxGeneric => "linux-generic",
            Self::Android => "android",
            Self::Ios => "ios",
            Self::PlayStation => "playstation",
            Self::Xbox => "xbox",
            Self::Nintendo => "nintendo",
            Self::Commodore64 => "commodore-64",
            Self::Amiga => "amiga",
            Self::Atari => "atari",
            Self::Generic => "generic",
        }
    }

    /// Parse an identifier. Unknown identifiers map to `Generic`.
    pub fn from_id(id: &str) -> Self {
        let id = id.trim();
        Self::all()
            .iter()
            .copied()
            .find(|system| system.as_str().eq_ignore_ascii_case(id))
            .unwrap_or(Self::Generic)
    }

    /// Get all system types
    pub fn all() -> &'static [SystemType] {
        &[
            Self::MacClassic,
            Self::MacModern,
            Self::Win95,
            Self::Win98,
            Self::Win2000,
            Self::WinXp,
            Self::WinLegacy,
            Self::WinModern,
            Self::LinuxUbuntu,
            Self::LinuxDebian,
            Self::LinuxFedora,
            Self::LinuxArch,
            Self::LinuxGeneric,
            Self::Android,
            Self::Ios,
            Self::PlayStation,
            Self::Xbox,
            Self::Nintendo,
            Self::Commodore64,
            Self::Amiga,
            Self::Atari,
            Self::Generic,
        ]
    }
}

impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
