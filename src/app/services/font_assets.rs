use crate::app::domain::{FontAssetList, SystemFontProfile};

/// Bundled asset files standing in for a system font name.
/// Names without a bundled equivalent map to an empty slice.
pub fn assets_for_font(font_name: &str) -> &'static [&'static str] {
    match font_name {
        // Classic Mac
        "Chicago" => &["Web437_IBM_BIOS.woff", "Web437_IBM_CGA.woff"],
        "Geneva" => &["Web437_IBM_VGA_9x16.woff", "Web437_IBM_EGA_9x14.woff"],
        "Monaco" => &["Web437_IBM_VGA_8x16.woff", "Web437_IBM_MDA.woff"],

        // Windows classic
        "MS-Sans-Serif" => &["Web437_IBM_PS-55_re._A.woff", "Web437_Win95_LCD_1.woff"],
        "Fixedsys" => &["Web437_Kaypro2K_G.woff", "Web437_Kaypro2K.woff"],
        "Terminal" => &["Web437_DOS-V_re._JPN30.woff", "Web437_DOS-V_re._ANK24.woff"],
        "Tahoma" => &["Web437_TridentEarly_8x16.woff", "Web437_DTK_BIOS.woff"],
        "Lucida-Console" => &["Web437_Compaq_8x16.woff", "Web437_CompaqThin_8x16.woff"],

        // Retro machines
        "C64-Pro" => &["Web437_AmstradCPC.woff", "Web437_AmstradPC.woff"],
        "Pet-Me-64" => &["Web437_PET-64.woff", "Web437_Commodore64.woff"],
        "Topaz" => &["Web437_Amiga_1200.woff", "Web437_Amiga_500.woff"],
        "Atari-Classic" => &["Web437_Atari_8bit.woff", "Web437_AtariST_High.woff"],

        // Modern fonts mapped to retro equivalents
        "SF-Mono" => &["Web437_Phoenix_BIOS.woff", "Web437_PhoenixEGA_8x14.woff"],
        "Segoe-UI" => &["Web437_Win30_LCD_2.woff", "Web437_Win95_LCD_2.woff"],
        "Consolas" => &["Web437_Compaq_8x16.woff", "Web437_HP_100LX_10x11.woff"],
        "Ubuntu-Mono" => &["Web437_Verite_8x16.woff", "Web437_Verite_9x16.woff"],
        "DejaVu-Sans-Mono" => &["Web437_VGA_9x16.woff", "Web437_VGA_8x16.woff"],

        // Defaults
        "LazenbyCompLiquid" => &["LazenbyCompLiquid.ttf"],
        "Press Start 2P" => &["Web437_IBM_CGA.woff", "Web437_IBM_CGA-2y.woff"],
        "Share Tech Mono" => &["Web437_IBM_VGA_8x16.woff", "Web437_IBM_VGA_9x16.woff"],

        _ => &[],
    }
}

/// Collect the assets for a profile's primary, fallback and monospace fonts,
/// in that order, without duplicates and always ending up with the default
/// retro font somewhere in the list.
pub fn map_to_available_fonts(profile: &SystemFontProfile) -> FontAssetList {
    let candidates = profile.roles().flat_map(|(role, font_name)| {
        let assets = assets_for_font(font_name);
        if assets.is_empty() {
            tracing::debug!(?role, font_name, "no bundled asset for font");
        }
        assets.iter().copied()
    });
    FontAssetList::from_candidates(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::{DEFAULT_FONT_ASSET, SystemType};
    use crate::app::services::font_profiles::font_profile;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn custom_profile(primary: &'static str, fallback: &'static str, monospace: &'static str) -> SystemFontProfile {
        SystemFontProfile {
            primary,
            fallback,
            monospace,
            description: "custom",
        }
    }

    #[test]
    fn test_modern_windows_assets() {
        let assets = map_to_available_fonts(&font_profile(SystemType::WinModern));
        assert_eq!(
            assets.into_vec(),
            vec![
                "Web437_Win30_LCD_2.woff",
                "Web437_Win95_LCD_2.woff",
                DEFAULT_FONT_ASSET,
            ]
        );
    }

    #[test]
    fn test_generic_assets_lead_with_default() {
        let assets = map_to_available_fonts(&font_profile(SystemType::Generic));
        assert_eq!(
            assets.into_vec(),
            vec![
                DEFAULT_FONT_ASSET,
                "Web437_IBM_CGA.woff",
                "Web437_IBM_CGA-2y.woff",
                "Web437_IBM_VGA_8x16.woff",
                "Web437_IBM_VGA_9x16.woff",
            ]
        );
    }

    #[test]
    fn test_unmatched_profile_yields_only_default() {
        let assets = map_to_available_fonts(&custom_profile("Comic-Sans", "Papyrus", "Wingdings"));
        assert_eq!(assets.into_vec(), vec![DEFAULT_FONT_ASSET]);
    }

    #[test]
    fn test_repeated_font_is_deduplicated() {
        // Atari uses the same font for primary and monospace
        let assets = map_to_available_fonts(&font_profile(SystemType::Atari));
        assert_eq!(
            assets.into_vec(),
            vec![
                "Web437_Atari_8bit.woff",
                "Web437_AtariST_High.woff",
                DEFAULT_FONT_ASSET,
            ]
        );
    }

    #[test]
    fn test_overlapping_assets_keep_first_role_order() {
        // Monaco and Share Tech Mono both map to the VGA 8x16 face
        let assets = map_to_available_fonts(&custom_profile("Monaco", "Geneva", "Share Tech Mono"));
        assert_eq!(
            assets.into_vec(),
            vec![
                "Web437_IBM_VGA_8x16.woff",
                "Web437_IBM_MDA.woff",
                "Web437_IBM_VGA_9x16.woff",
                "Web437_IBM_EGA_9x14.woff",
                DEFAULT_FONT_ASSET,
            ]
        );
    }

    #[test]
    fn test_every_system_profile_maps_cleanly() {
        for system in SystemType::all() {
            let assets = map_to_available_fonts(&font_profile(*system));
            let distinct: HashSet<&String> = assets.iter().collect();
            assert_eq!(distinct.len(), assets.len(), "{system} has duplicates");
            assert_eq!(
                assets.iter().filter(|a| *a == DEFAULT_FONT_ASSET).count(),
                1,
                "{system}"
            );
        }
    }

    fn font_name() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec![
            "Chicago",
            "Monaco",
            "Tahoma",
            "Consolas",
            "Lucida-Console",
            "LazenbyCompLiquid",
            "Share Tech Mono",
            "Segoe-UI",
            "Calibri",
            "Not-A-Font",
        ])
    }

    proptest! {
        #[test]
        fn prop_default_present_once_and_no_duplicates(
            primary in font_name(),
            fallback in font_name(),
            monospace in font_name(),
        ) {
            let profile = custom_profile(primary, fallback, monospace);
            let assets = map_to_available_fonts(&profile);

            let distinct: HashSet<&String> = assets.iter().collect();
            prop_assert_eq!(distinct.len(), assets.len());
            prop_assert_eq!(assets.iter().filter(|a| *a == DEFAULT_FONT_ASSET).count(), 1);
        }

        #[test]
        fn prop_primary_assets_come_first(
            primary in font_name(),
            fallback in font_name(),
            monospace in font_name(),
        ) {
            let profile = custom_profile(primary, fallback, monospace);
            let assets = map_to_available_fonts(&profile);

            // The first asset of the primary font, when there is one, leads the list
            if let Some(first) = assets_for_font(primary).first() {
                prop_assert_eq!(assets.as_slice()[0].as_str(), *first);
            }
        }
    }
}
