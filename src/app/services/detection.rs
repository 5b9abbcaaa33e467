//! System type detection from user-agent and platform strings.
//!
//! Detection walks [`DETECTION_RULES`] top to bottom and stops at the first
//! rule that matches. A rule only applies when its family gate passes, so
//! the last rule of each gated family acts as that family's catch-all.
//! Specific signatures must therefore come before general ones within a
//! family (`windows nt 5.0` before the bare Windows default, PowerPC before
//! modern Mac).

use crate::app::domain::SystemType;

/// Which of the two environment strings a probe inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    UserAgent(&'static [&'static str]),
    Platform(&'static [&'static str]),
}

impl Probe {
    fn matches(&self, signals: &EnvironmentSignals) -> bool {
        let (haystack, needles) = match self {
            Self::UserAgent(needles) => (&signals.user_agent, needles),
            Self::Platform(needles) => (&signals.platform, needles),
        };
        needles.iter().any(|needle| haystack.contains(needle))
    }
}

/// Platform family a rule belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Apple,
    Windows,
    Linux,
    Mobile,
    Console,
    Retro,
}

impl Family {
    /// Probes of which at least one must match before the family's rules
    /// are considered. Ungated families return an empty slice.
    pub fn gate(&self) -> &'static [Probe] {
        match self {
            Self::Apple => &[Probe::Platform(&["mac"]), Probe::UserAgent(&["macintosh"])],
            Self::Windows => &[Probe::Platform(&["win"])],
            Self::Linux => &[Probe::Platform(&["linux"]), Probe::UserAgent(&["x11"])],
            Self::Mobile | Self::Console | Self::Retro => &[],
        }
    }

    fn admits(&self, signals: &EnvironmentSignals) -> bool {
        let gate = self.gate();
        gate.is_empty() || gate.iter().any(|probe| probe.matches(signals))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetectionRule {
    pub family: Family,
    /// Any-of; an empty list matches whenever the family gate passes
    pub probes: &'static [Probe],
    pub system: SystemType,
}

impl DetectionRule {
    const fn new(family: Family, probes: &'static [Probe], system: SystemType) -> Self {
        Self {
            family,
            probes,
            system,
        }
    }

    pub fn matches(&self, signals: &EnvironmentSignals) -> bool {
        self.family.admits(signals)
            && (self.probes.is_empty() || self.probes.iter().any(|probe| probe.matches(signals)))
    }
}

/// Ordered detection rules. Order is significant: first match wins.
pub const DETECTION_RULES: &[DetectionRule] = &[
    // Apple
    DetectionRule::new(Family::Apple, &[Probe::UserAgent(&["powerpc", "ppc"])], SystemType::MacClassic),
    DetectionRule::new(Family::Apple, &[], SystemType::MacModern),
    // Windows, most specific version strings first
    DetectionRule::new(
        Family::Windows,
        &[Probe::UserAgent(&["windows nt 5.0", "windows 2000"])],
        SystemType::Win2000,
    ),
    DetectionRule::new(
        Family::Windows,
        &[Probe::UserAgent(&["windows nt 5.1", "windows xp"])],
        SystemType::WinXp,
    ),
    DetectionRule::new(Family::Windows, &[Probe::UserAgent(&["windows 95", "win95"])], SystemType::Win95),
    DetectionRule::new(Family::Windows, &[Probe::UserAgent(&["windows 98", "win98"])], SystemType::Win98),
    DetectionRule::new(
        Family::Windows,
        &[Probe::UserAgent(&["windows nt 6.", "windows 7", "windows 8"])],
        SystemType::WinLegacy,
    ),
    DetectionRule::new(Family::Windows, &[], SystemType::WinModern),
    // Linux
    DetectionRule::new(Family::Linux, &[Probe::UserAgent(&["ubuntu"])], SystemType::LinuxUbuntu),
    DetectionRule::new(Family::Linux, &[Probe::UserAgent(&["debian"])], SystemType::LinuxDebian),
    DetectionRule::new(Family::Linux, &[Probe::UserAgent(&["fedora"])], SystemType::LinuxFedora),
    DetectionRule::new(Family::Linux, &[Probe::UserAgent(&["arch"])], SystemType::LinuxArch),
    DetectionRule::new(Family::Linux, &[], SystemType::LinuxGeneric),
    // Mobile
    DetectionRule::new(Family::Mobile, &[Probe::UserAgent(&["android"])], SystemType::Android),
    DetectionRule::new(Family::Mobile, &[Probe::UserAgent(&["iphone", "ipad"])], SystemType::Ios),
    // Consoles
    DetectionRule::new(Family::Console, &[Probe::UserAgent(&["playstation"])], SystemType::PlayStation),
    DetectionRule::new(Family::Console, &[Probe::UserAgent(&["xbox"])], SystemType::Xbox),
    DetectionRule::new(Family::Console, &[Probe::UserAgent(&["nintendo"])], SystemType::Nintendo),
    // Emulated retro machines
    DetectionRule::new(Family::Retro, &[Probe::UserAgent(&["commodore", "c64"])], SystemType::Commodore64),
    DetectionRule::new(Family::Retro, &[Probe::UserAgent(&["amiga"])], SystemType::Amiga),
    DetectionRule::new(Family::Retro, &[Probe::UserAgent(&["atari"])], SystemType::Atari),
];

/// Lower-cased user-agent and platform strings
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnvironmentSignals {
    pub user_agent: String,
    pub platform: String,
}

impl EnvironmentSignals {
    pub fn new(user_agent: &str, platform: &str) -> Self {
        Self {
            user_agent: user_agent.to_lowercase(),
            platform: platform.to_lowercase(),
        }
    }
}

/// First rule in `rules` that matches, if any
pub fn matching_rule<'a>(
    signals: &EnvironmentSignals,
    rules: &'a [DetectionRule],
) -> Option<&'a DetectionRule> {
    rules.iter().find(|rule| rule.matches(signals))
}

/// Detect the system type. Never fails: no match yields `Generic`.
pub fn detect_system_type(user_agent: &str, platform: &str) -> SystemType {
    let signals = EnvironmentSignals::new(user_agent, platform);
    match matching_rule(&signals, DETECTION_RULES) {
        Some(rule) => {
            tracing::debug!(
                system = rule.system.as_str(),
                family = ?rule.family,
                "detection rule matched"
            );
            rule.system
        }
        None => {
            tracing::debug!("no detection rule matched, using generic");
            SystemType::Generic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_inputs_are_generic() {
        assert_eq!(detect_system_type("", ""), SystemType::Generic);
    }

    #[test]
    fn test_unrecognized_inputs_are_generic() {
        assert_eq!(detect_system_type("curl/8.5.0", "unknown"), SystemType::Generic);
        assert_eq!(detect_system_type("Lynx/2.8.9", "OS/2"), SystemType::Generic);
    }

    #[test]
    fn test_modern_windows() {
        assert_eq!(
            detect_system_type("mozilla/5.0 (windows nt 10.0; win64)", "win32"),
            SystemType::WinModern
        );
    }

    #[test]
    fn test_windows_versions() {
        let cases = [
            ("Mozilla/4.0 (compatible; MSIE 5.01; Windows NT 5.0)", SystemType::Win2000),
            ("Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1)", SystemType::WinXp),
            ("Mozilla/4.0 (compatible; MSIE 4.0; Windows 95)", SystemType::Win95),
            ("Mozilla/4.0 (compatible; MSIE 5.5; Windows 98; Win 9x 4.90)", SystemType::Win98),
            ("Mozilla/5.0 (Windows NT 6.1; WOW64; Trident/7.0)", SystemType::WinLegacy),
            ("Mozilla/5.0 (Windows NT 10.0; Win64; x64)", SystemType::WinModern),
        ];
        for (ua, expected) in cases {
            assert_eq!(detect_system_type(ua, "Win32"), expected, "ua: {ua}");
        }
    }

    #[test]
    fn test_windows_requires_platform_gate() {
        // The Windows family is gated on the platform string only
        assert_eq!(
            detect_system_type("Mozilla/4.0 (compatible; Windows NT 5.1)", ""),
            SystemType::Generic
        );
    }

    #[test]
    fn test_specific_windows_version_beats_later_rules() {
        // Contains both an NT 5.0 signature and "windows 98"; the earlier rule wins
        assert_eq!(
            detect_system_type("windows nt 5.0 (windows 98 compatibility)", "win32"),
            SystemType::Win2000
        );
    }

    #[test]
    fn test_mac_detection() {
        assert_eq!(
            detect_system_type("Mozilla/4.0 (compatible; MSIE 5.23; Mac_PowerPC)", "MacPPC"),
            SystemType::MacClassic
        );
        assert_eq!(
            detect_system_type("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)", "MacIntel"),
            SystemType::MacModern
        );
        // Gate passes on the user agent alone
        assert_eq!(
            detect_system_type("Mozilla/5.0 (Macintosh; Intel Mac OS X 14_0)", ""),
            SystemType::MacModern
        );
    }

    #[test]
    fn test_mac_family_precedes_windows() {
        // The Apple family is checked first, so a Mac platform wins even when
        // the user agent carries a Windows signature
        assert_eq!(
            detect_system_type("windows nt 5.1 emulation", "MacIntel"),
            SystemType::MacModern
        );
    }

    #[test]
    fn test_linux_distributions() {
        let cases = [
            ("Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:121.0)", SystemType::LinuxUbuntu),
            ("Mozilla/5.0 (X11; Debian; Linux x86_64)", SystemType::LinuxDebian),
            ("Mozilla/5.0 (X11; Fedora; Linux x86_64)", SystemType::LinuxFedora),
            ("Mozilla/5.0 (X11; Arch Linux; Linux x86_64)", SystemType::LinuxArch),
            ("Mozilla/5.0 (X11; Linux x86_64)", SystemType::LinuxGeneric),
        ];
        for (ua, expected) in cases {
            assert_eq!(detect_system_type(ua, "Linux x86_64"), expected, "ua: {ua}");
        }
    }

    #[test]
    fn test_android_reports_linux_platform() {
        // Android browsers report a Linux platform, so the Linux family claims them first
        assert_eq!(
            detect_system_type("Mozilla/5.0 (Linux; Android 14; Pixel 8)", "Linux armv8l"),
            SystemType::LinuxGeneric
        );
        assert_eq!(
            detect_system_type("Mozilla/5.0 (Linux; Android 14; Pixel 8)", ""),
            SystemType::Android
        );
    }

    #[test]
    fn test_ungated_families() {
        let cases = [
            ("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)", SystemType::Ios),
            ("Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X)", SystemType::Ios),
            ("Mozilla/5.0 (PlayStation; PlayStation 5/2.26)", SystemType::PlayStation),
            ("Mozilla/5.0 (Xbox One; Edge/44)", SystemType::Xbox),
            ("Mozilla/5.0 (Nintendo Switch; WifiWebAuthApplet)", SystemType::Nintendo),
            ("VICE C64 emulator", SystemType::Commodore64),
            ("AWeb/3.4 (Amiga; AmigaOS 3.1)", SystemType::Amiga),
            ("Atari ST browser", SystemType::Atari),
        ];
        for (ua, expected) in cases {
            assert_eq!(detect_system_type(ua, ""), expected, "ua: {ua}");
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(detect_system_type("XBOX", ""), SystemType::Xbox);
        assert_eq!(detect_system_type("", "WIN32"), SystemType::WinModern);
    }

    #[test]
    fn test_matching_rule_exposes_priority() {
        let signals = EnvironmentSignals::new("Mozilla/5.0 (Windows NT 5.1)", "Win32");
        let rule = matching_rule(&signals, DETECTION_RULES).unwrap();
        assert_eq!(rule.family, Family::Windows);
        assert_eq!(rule.system, SystemType::WinXp);

        let signals = EnvironmentSignals::new("", "");
        assert!(matching_rule(&signals, DETECTION_RULES).is_none());
    }

    #[test]
    fn test_gated_families_end_with_catch_all() {
        for family in [Family::Apple, Family::Windows, Family::Linux] {
            let last = DETECTION_RULES
                .iter()
                .filter(|rule| rule.family == family)
                .last()
                .unwrap();
            assert!(last.probes.is_empty(), "{family:?} has no catch-all");
        }
    }

    #[test]
    fn test_families_are_contiguous() {
        let mut seen: Vec<Family> = Vec::new();
        for rule in DETECTION_RULES {
            if seen.last() != Some(&rule.family) {
                assert!(!seen.contains(&rule.family), "{:?} split", rule.family);
                seen.push(rule.family);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_detection_is_total(ua in ".*", platform in ".*") {
            let system = detect_system_type(&ua, &platform);
            prop_assert!(SystemType::all().contains(&system));
        }

        #[test]
        fn prop_detection_ignores_case(ua in "[a-zA-Z0-9 ;()./]{0,40}", platform in "[a-zA-Z0-9 ]{0,12}") {
            prop_assert_eq!(
                detect_system_type(&ua, &platform),
                detect_system_type(&ua.to_uppercase(), &platform.to_uppercase())
            );
        }
    }
}
