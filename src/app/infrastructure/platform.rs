/// Browser-style (user agent, platform) strings for the host we run on.
///
/// Used when no browser supplied the signals, e.g. from the CLI. The strings
/// imitate what a browser on the same OS would report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostSignals {
    pub user_agent: String,
    pub platform: String,
}

#[allow(unreachable_code)]
pub fn host_signals() -> HostSignals {
    // macOS: browsers report MacIntel even on Apple silicon
    #[cfg(target_os = "macos")]
    {
        return HostSignals {
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)".to_string(),
            platform: "MacIntel".to_string(),
        };
    }

    // Windows: every current release identifies as NT 10.0
    #[cfg(target_os = "windows")]
    {
        return HostSignals {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64)".to_string(),
            platform: "Win32".to_string(),
        };
    }

    // Linux: include the distribution the way Firefox does on Ubuntu
    #[cfg(target_os = "linux")]
    {
        let arch = std::env::consts::ARCH;
        let user_agent = match linux_distribution() {
            Some(distro) => format!("Mozilla/5.0 (X11; {}; Linux {})", distro, arch),
            None => format!("Mozilla/5.0 (X11; Linux {})", arch),
        };
        return HostSignals {
            user_agent,
            platform: format!("Linux {}", arch),
        };
    }

    #[cfg(target_os = "android")]
    {
        return HostSignals {
            user_agent: "Mozilla/5.0 (Linux; Android)".to_string(),
            platform: String::new(),
        };
    }

    #[cfg(target_os = "ios")]
    {
        return HostSignals {
            user_agent: "Mozilla/5.0 (iPhone; CPU iPhone OS like Mac OS X)".to_string(),
            platform: "iPhone".to_string(),
        };
    }

    // Anything else is left for the detector to call generic
    HostSignals {
        user_agent: String::new(),
        platform: String::new(),
    }
}

/// Distribution name from /etc/os-release (`NAME`, falling back to `ID`)
#[cfg(target_os = "linux")]
fn linux_distribution() -> Option<String> {
    let contents = std::fs::read_to_string("/etc/os-release").ok()?;
    parse_os_release(&contents)
}

#[cfg(any(target_os = "linux", test))]
fn parse_os_release(contents: &str) -> Option<String> {
    let mut id = None;
    for line in contents.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().trim_matches('"').trim_matches('\'');
        if value.is_empty() {
            continue;
        }
        match key.trim() {
            "NAME" => return Some(value.to_string()),
            "ID" => id = Some(value.to_string()),
            _ => {}
        }
    }
    id
}
