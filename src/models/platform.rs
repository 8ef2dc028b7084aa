//! Visitor platform classification.

use std::fmt;

/// Operating system family of the visitor, derived from browser strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Os {
    Linux,
    MacOs,
    Windows,
    /// No browser environment, or nothing recognizable in it.
    #[default]
    Unknown,
}

impl Os {
    /// Classify a platform from `navigator.userAgent` and `navigator.platform`.
    ///
    /// Both inputs are matched case-insensitively and the first rule that
    /// fires wins: Windows, then macOS, then Linux. Missing values count as
    /// empty strings, so a non-browser context classifies as [`Os::Unknown`].
    pub fn classify(user_agent: Option<&str>, platform: Option<&str>) -> Self {
        let user_agent = user_agent.unwrap_or_default().to_lowercase();
        let platform = platform.unwrap_or_default().to_lowercase();
        let mentions = |needle: &str| user_agent.contains(needle) || platform.contains(needle);

        if mentions("win") {
            Self::Windows
        } else if mentions("mac") {
            Self::MacOs
        } else if mentions("linux") || mentions("x11") {
            Self::Linux
        } else {
            Self::Unknown
        }
    }

    /// Human-readable name used in install copy ("Get started on ...").
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Linux => "Linux",
            Self::MacOs => "macOS",
            Self::Windows => "Windows",
            Self::Unknown => "Your OS",
        }
    }

    /// Stable lowercase identifier, matching the catalog's `os` keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::MacOs => "macos",
            Self::Windows => "windows",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIREFOX_LINUX: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";
    const SAFARI_MAC: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
        AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Safari/605.1.15";
    const EDGE_WINDOWS: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
        AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36 Edg/126.0.0.0";

    #[test]
    fn test_classify_real_user_agents() {
        assert_eq!(Os::classify(Some(FIREFOX_LINUX), Some("Linux x86_64")), Os::Linux);
        assert_eq!(Os::classify(Some(SAFARI_MAC), Some("MacIntel")), Os::MacOs);
        assert_eq!(Os::classify(Some(EDGE_WINDOWS), Some("Win32")), Os::Windows);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(Os::classify(Some("WINDOWS"), None), Os::Windows);
        assert_eq!(Os::classify(None, Some("MACINTEL")), Os::MacOs);
        assert_eq!(Os::classify(Some("some X11 thing"), None), Os::Linux);
    }

    #[test]
    fn test_classify_precedence() {
        // Windows beats everything, macOS beats Linux.
        assert_eq!(Os::classify(Some("linux mac windows"), None), Os::Windows);
        assert_eq!(Os::classify(Some("linux"), Some("win32")), Os::Windows);
        assert_eq!(Os::classify(Some("x11"), Some("macintel")), Os::MacOs);
        assert_eq!(Os::classify(Some("linux; mac"), None), Os::MacOs);
    }

    #[test]
    fn test_classify_either_input() {
        for (ua, platform) in [(Some("win"), None), (None, Some("win")), (Some(""), Some("Win64"))] {
            assert_eq!(Os::classify(ua, platform), Os::Windows);
        }
        assert_eq!(Os::classify(None, Some("Linux armv8l")), Os::Linux);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(Os::classify(Some(""), Some("")), Os::Unknown);
        assert_eq!(Os::classify(None, None), Os::Unknown);
        assert_eq!(Os::classify(Some("Mozilla/5.0 (compatible)"), Some("FreeBSD amd64")), Os::Unknown);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Os::MacOs.display_name(), "macOS");
        assert_eq!(Os::Unknown.display_name(), "Your OS");
        assert_eq!(Os::Windows.to_string(), "windows");
    }
}
