use crate::app::domain::SystemType;

/// Greeting shown once the system has been detected
pub fn system_message(system: SystemType) -> &'static str {
    match system {
        SystemType::MacClassic => "Ah, a classic Mac user! Let's party like it's System 7! 🍎",
        SystemType::MacModern => {
            "macOS detected. Preparing your artisanal, hand-crafted fonts... ☕"
        }
        SystemType::Win95 => {
            "Windows 95! Time to defrag your memories and surf the information superhighway! 💾"
        }
        SystemType::Win98 => "Windows 98 - The golden age of blue screens and dial-up! 📞",
        SystemType::WinXp => "Windows XP! Bliss.jpg has entered the chat! 🌄",
        SystemType::WinModern => "Modern Windows detected. Cortana can't help you here! 🪟",
        SystemType::LinuxUbuntu => "Ubuntu! I see you like your Linux user-friendly! 🐧",
        SystemType::LinuxArch => {
            "I use Arch BTW... and so do you! Here's your minimalist font selection! 🏗️"
        }
        SystemType::LinuxGeneric => "Linux detected! May the FOSS be with you! 🐧",
        SystemType::Commodore64 => "LOAD '*',8,1 - Welcome, retro computing enthusiast! 📼",
        SystemType::Amiga => "Amiga detected! Guru Meditation not included! 🎨",
        SystemType::Android => "Android user! These fonts are Material to your experience! 🤖",
        SystemType::Ios => {
            "iOS detected. These fonts have been carefully curated by Jony Ive's ghost! 📱"
        }
        SystemType::Win2000
        | SystemType::WinLegacy
        | SystemType::LinuxDebian
        | SystemType::LinuxFedora
        | SystemType::PlayStation
        | SystemType::Xbox
        | SystemType::Nintendo
        | SystemType::Atari
        | SystemType::Generic => {
            "Mystery system detected! Here's our universal retro font cocktail! 🎲"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedicated_messages() {
        assert!(system_message(SystemType::WinXp).contains("Bliss.jpg"));
        assert!(system_message(SystemType::Commodore64).starts_with("LOAD '*',8,1"));
    }

    #[test]
    fn test_systems_without_message_share_generic() {
        let generic = system_message(SystemType::Generic);
        assert_eq!(system_message(SystemType::Xbox), generic);
        assert_eq!(system_message(SystemType::LinuxFedora), generic);
        assert_ne!(system_message(SystemType::LinuxUbuntu), generic);
    }
}
