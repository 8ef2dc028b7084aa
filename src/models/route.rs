//! Path-based routing for the site.

use crate::config::{APP_NAME, SITE_URL};

/// Root of the documentation subtree.
pub const DOCS_ROOT: &str = "/docs";

/// Application routes.
///
/// URL format: `/` for the landing page, `/docs/<page>` for documentation.
/// Anything else resolves to [`Route::NotFound`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Landing,
    Docs(DocPage),
    NotFound,
}

/// Documentation pages, in sidebar order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocPage {
    Features,
    Settings,
    Theme,
    SelfHost,
}

/// Piece of a documentation page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocSection {
    /// Markdown source, rendered to sanitized HTML.
    Markdown(&'static str),
    /// Nord palette swatches.
    Palette,
}

/// Document metadata applied on navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMeta {
    pub title: String,
    pub description: &'static str,
    pub canonical: Option<String>,
}

impl Route {
    /// Resolve a URL path into a route.
    ///
    /// Trailing slashes are ignored and `/docs` aliases the first doc page.
    pub fn resolve(path: &str) -> Self {
        let path = normalize_path(path);

        if path == "/" {
            return Self::Landing;
        }
        if path == DOCS_ROOT {
            return Self::Docs(DocPage::Features);
        }

        path.strip_prefix(DOCS_ROOT)
            .and_then(|rest| rest.strip_prefix('/'))
            .and_then(DocPage::from_slug)
            .map(Self::Docs)
            .unwrap_or(Self::NotFound)
    }

    /// Canonical URL path of this route. `None` for the not-found page.
    pub fn canonical_path(&self) -> Option<&'static str> {
        match self {
            Self::Landing => Some("/"),
            Self::Docs(page) => Some(page.path()),
            Self::NotFound => None,
        }
    }

    pub fn meta(&self) -> RouteMeta {
        let (title, description) = match self {
            Self::Landing => (
                format!("{APP_NAME} - Twitch chat in your terminal"),
                "Chatuino is a Twitch chat client that runs in your terminal. \
                 Multiple accounts, graphical emotes, 7TV and BTTV support.",
            ),
            Self::Docs(page) => (format!("{} - {APP_NAME}", page.label()), page.description()),
            Self::NotFound => (
                format!("Page not found - {APP_NAME}"),
                "The page you're looking for doesn't exist or has been moved.",
            ),
        };

        RouteMeta {
            title,
            description,
            canonical: self.canonical_path().map(|p| format!("{SITE_URL}{p}")),
        }
    }
}

impl DocPage {
    pub const ALL: [Self; 4] = [Self::Features, Self::Settings, Self::Theme, Self::SelfHost];

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|page| page.slug() == slug)
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Features => "features",
            Self::Settings => "settings",
            Self::Theme => "theme",
            Self::SelfHost => "self-host",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Features => "/docs/features",
            Self::Settings => "/docs/settings",
            Self::Theme => "/docs/theme",
            Self::SelfHost => "/docs/self-host",
        }
    }

    /// Sidebar label and page heading.
    pub fn label(self) -> &'static str {
        match self {
            Self::Features => "Features",
            Self::Settings => "Settings",
            Self::Theme => "Theme",
            Self::SelfHost => "Self-Host",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Features => {
                "Chatuino features: account management, state persistence, chat navigation, \
                 auto-completion, user inspection, graphical emotes and tab types."
            }
            Self::Settings => {
                "Configure Chatuino settings: YAML configuration, keybindings, filters, \
                 notification templates, and cache management."
            }
            Self::Theme => {
                "Customize Chatuino colors with theme.yaml. Nord color scheme by default, \
                 fully customizable."
            }
            Self::SelfHost => {
                "Run your own Chatuino server for Twitch authentication. Docker setup, \
                 environment configuration, and Twitch app registration."
            }
        }
    }

    pub fn sections(self) -> &'static [DocSection] {
        use crate::config::docs;

        match self {
            Self::Features => &[DocSection::Markdown(docs::FEATURES)],
            Self::Settings => &[DocSection::Markdown(docs::SETTINGS)],
            Self::Theme => &[
                DocSection::Markdown(docs::THEME),
                DocSection::Palette,
                DocSection::Markdown(docs::THEME_CUSTOM),
            ],
            Self::SelfHost => &[DocSection::Markdown(docs::SELF_HOST)],
        }
    }
}

/// Strip trailing slashes; an empty path becomes `/`.
pub fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::resolve("/"), Route::Landing);
        assert_eq!(Route::resolve(""), Route::Landing);
        assert_eq!(Route::resolve("/docs"), Route::Docs(DocPage::Features));
        assert_eq!(Route::resolve("/docs/"), Route::Docs(DocPage::Features));
        assert_eq!(Route::resolve("/docs/features"), Route::Docs(DocPage::Features));
        assert_eq!(Route::resolve("/docs/settings"), Route::Docs(DocPage::Settings));
        assert_eq!(Route::resolve("/docs/theme/"), Route::Docs(DocPage::Theme));
        assert_eq!(Route::resolve("/docs/self-host"), Route::Docs(DocPage::SelfHost));
    }

    #[test]
    fn test_unmatched_paths_are_not_found() {
        assert_eq!(Route::resolve("/docs/nonexistent"), Route::NotFound);
        assert_eq!(Route::resolve("/docs/settings/extra"), Route::NotFound);
        assert_eq!(Route::resolve("/docsettings"), Route::NotFound);
        assert_eq!(Route::resolve("/install"), Route::NotFound);
    }

    #[test]
    fn test_canonical_path_round_trips() {
        for page in DocPage::ALL {
            let route = Route::Docs(page);
            assert_eq!(Route::resolve(route.canonical_path().unwrap()), route);
        }
        assert_eq!(Route::resolve("/docs").canonical_path(), Some("/docs/features"));
        assert_eq!(Route::NotFound.canonical_path(), None);
    }

    #[test]
    fn test_route_meta() {
        let meta = Route::Docs(DocPage::SelfHost).meta();
        assert_eq!(meta.title, "Self-Host - Chatuino");
        assert_eq!(
            meta.canonical.as_deref(),
            Some("https://chatuino.net/docs/self-host")
        );
        assert_eq!(Route::NotFound.meta().canonical, None);
    }

    #[test]
    fn test_theme_page_embeds_palette() {
        assert!(DocPage::Theme.sections().contains(&DocSection::Palette));
        assert!(!DocPage::Settings.sections().contains(&DocSection::Palette));
    }
}
