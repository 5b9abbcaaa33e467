use crate::app::domain::{SystemFontProfile, SystemType};

const fn profile(
    primary: &'static str,
    fallback: &'static str,
    monospace: &'static str,
    description: &'static str,
) -> SystemFontProfile {
    SystemFontProfile {
        primary,
        fallback,
        monospace,
        description,
    }
}

/// Font profile for a system type. The match is exhaustive, so a new
/// `SystemType` variant cannot be added without a profile.
pub fn font_profile(system: SystemType) -> SystemFontProfile {
    match system {
        SystemType::MacClassic => profile("Chicago", "Geneva", "Monaco", "Classic Mac OS (System 7-9)"),
        SystemType::MacModern => profile("SF-Mono", "-apple-system", "Menlo", "Modern macOS"),
        SystemType::Win95 => profile("MS-Sans-Serif", "Fixedsys", "Terminal", "Windows 95"),
        SystemType::Win98 => profile("Tahoma", "MS-Sans-Serif", "Lucida-Console", "Windows 98"),
        SystemType::Win2000 => profile("Trebuchet-MS", "Tahoma", "Lucida-Console", "Windows 2000"),
        SystemType::WinXp => profile("Tahoma", "Franklin-Gothic", "Lucida-Console", "Windows XP"),
        SystemType::WinLegacy => profile("Segoe-UI", "Calibri", "Consolas", "Windows 7/8"),
        SystemType::WinModern => profile("Segoe-UI", "Calibri", "Cascadia-Code", "Windows 10/11"),
        SystemType::LinuxUbuntu => profile("Ubuntu", "Liberation-Sans", "Ubuntu-Mono", "Ubuntu Linux"),
        SystemType::LinuxDebian => {
            profile("DejaVu-Sans", "Liberation-Sans", "DejaVu-Sans-Mono", "Debian Linux")
        }
        SystemType::LinuxFedora => {
            profile("Cantarell", "Liberation-Sans", "Source-Code-Pro", "Fedora Linux")
        }
        SystemType::LinuxArch => profile("Noto-Sans", "DejaVu-Sans", "Hack", "Arch Linux (BTW)"),
        SystemType::LinuxGeneric => {
            profile("Liberation-Sans", "DejaVu-Sans", "Liberation-Mono", "Linux")
        }
        SystemType::Android => profile("Roboto", "Droid-Sans", "Droid-Sans-Mono", "Android"),
        SystemType::Ios => profile("SF-Pro", "-apple-system", "SF-Mono", "iOS"),
        SystemType::Commodore64 => profile("C64-Pro", "Pet-Me-64", "C64-Pro-Mono", "Commodore 64"),
        SystemType::Amiga => profile("Topaz", "AmigaTopaz", "TopazPlus", "Amiga"),
        SystemType::Atari => profile("Atari-Classic", "AtariST", "Atari-Classic", "Atari"),
        SystemType::PlayStation => profile("Zrnic", "SST", "Share-Tech-Mono", "PlayStation"),
        SystemType::Xbox => profile("Xbox", "Segoe-UI", "Consolas", "Xbox"),
        SystemType::Nintendo => profile("Nintendo-DS", "Pretendo", "NES-Chimera", "Nintendo"),
        SystemType::Generic => {
            profile("LazenbyCompLiquid", "Press Start 2P", "Share Tech Mono", "Generic System")
        }
    }
}

/// Font profile for a raw system identifier; unknown ids get the generic profile
pub fn font_profile_for_id(id: &str) -> SystemFontProfile {
    font_profile(SystemType::from_id(id))
}
