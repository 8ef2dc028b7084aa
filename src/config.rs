//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets (docs markdown, install catalog) are loaded at compile time
//! using `include_str!`.

use std::sync::OnceLock;

use crate::core::InstallCatalog;
use crate::core::error::CatalogError;

// =============================================================================
// Site Metadata
// =============================================================================

/// Product name shown in the header, hero and page titles.
pub const APP_NAME: &str = "Chatuino";

/// Public origin, used for canonical URLs.
pub const SITE_URL: &str = "https://chatuino.net";

/// Hero tagline.
pub const APP_TAGLINE: &str = "A Twitch chat client that runs in your terminal";

// =============================================================================
// External Links
// =============================================================================

pub const GITHUB_URL: &str = "https://github.com/julez-dev/chatuino";
pub const RELEASES_URL: &str = "https://github.com/julez-dev/chatuino/releases";
pub const ISSUES_URL: &str = "https://github.com/julez-dev/chatuino/issues";

// =============================================================================
// UI Configuration
// =============================================================================

/// How long a copy button shows "Copied!" (milliseconds).
pub const COPY_FEEDBACK_MS: u32 = 2000;

/// Viewport at which the mobile menus give way to the desktop layout.
pub const DESKTOP_MEDIA_QUERY: &str = "(min-width: 768px)";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder
/// - `Lucide` - Minimal, thin strokes (default)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    Bootstrap,
    #[default]
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;

// =============================================================================
// Documentation Sources
// =============================================================================

/// Markdown sources for the documentation pages.
pub mod docs {
    pub const FEATURES: &str = include_str!("../assets/docs/features.md");
    pub const SETTINGS: &str = include_str!("../assets/docs/settings.md");
    pub const THEME: &str = include_str!("../assets/docs/theme.md");
    /// Follows the palette swatches on the theme page.
    pub const THEME_CUSTOM: &str = include_str!("../assets/docs/theme-custom.md");
    pub const SELF_HOST: &str = include_str!("../assets/docs/self-host.md");
}

// =============================================================================
// Install Catalog
// =============================================================================

/// Install catalog source, see `assets/install.toml`.
pub const INSTALL_CATALOG: &str = include_str!("../assets/install.toml");

static CATALOG: OnceLock<Result<InstallCatalog, CatalogError>> = OnceLock::new();

/// The validated install catalog, parsed on first use.
pub fn install_catalog() -> Result<&'static InstallCatalog, &'static CatalogError> {
    CATALOG
        .get_or_init(|| InstallCatalog::from_toml(INSTALL_CATALOG))
        .as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Os;

    #[test]
    fn test_shipped_catalog_is_valid() {
        let catalog = install_catalog().expect("assets/install.toml must validate");
        for os in [Os::Linux, Os::MacOs, Os::Windows] {
            assert!(catalog.select_primary(os).is_some(), "no primary for {os}");
        }
        assert_eq!(catalog.select_primary(Os::Unknown), None);
    }

    #[test]
    fn test_docs_are_embedded() {
        for source in [docs::FEATURES, docs::SETTINGS, docs::THEME, docs::THEME_CUSTOM, docs::SELF_HOST] {
            assert!(source.trim_start().starts_with('#'));
        }
    }
}
