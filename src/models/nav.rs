//! Navigation links and active-link matching.

use super::route::{DOCS_ROOT, DocPage, normalize_path};

/// How a link decides whether it is the "current" one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Active only on exactly the target path.
    Exact,
    /// Active on the target path and everything below it.
    Prefix,
}

/// Whether a link to `target` is active while the browser is at `current`.
///
/// Prefix matching respects path segments: `/docs` covers `/docs/theme` but
/// not `/docsearch`.
pub fn is_active(current: &str, target: &str, policy: MatchPolicy) -> bool {
    let current = normalize_path(current);
    let target = normalize_path(target);

    match policy {
        MatchPolicy::Exact => current == target,
        MatchPolicy::Prefix => {
            current == target
                || target == "/"
                || current
                    .strip_prefix(target)
                    .is_some_and(|rest| rest.starts_with('/'))
        }
    }
}

/// An internal navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// Where clicking goes.
    pub href: &'static str,
    /// What the active check compares against (may differ from `href`).
    pub match_path: &'static str,
    pub policy: MatchPolicy,
}

impl NavItem {
    pub fn is_active(&self, current: &str) -> bool {
        is_active(current, self.match_path, self.policy)
    }
}

/// Header links. "Documentation" opens the first doc page but stays
/// highlighted across the whole docs subtree.
pub const HEADER_LINKS: [NavItem; 2] = [
    NavItem {
        label: "Home",
        href: "/",
        match_path: "/",
        policy: MatchPolicy::Exact,
    },
    NavItem {
        label: "Documentation",
        href: "/docs/features",
        match_path: DOCS_ROOT,
        policy: MatchPolicy::Prefix,
    },
];

/// Sidebar links, one per doc page.
pub fn sidebar_links() -> impl Iterator<Item = NavItem> {
    DocPage::ALL.into_iter().map(|page| NavItem {
        label: page.label(),
        href: page.path(),
        match_path: page.path(),
        policy: MatchPolicy::Exact,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Route;

    #[test]
    fn test_prefix_policy() {
        assert!(is_active("/docs/theme", "/docs", MatchPolicy::Prefix));
        assert!(is_active("/docs", "/docs", MatchPolicy::Prefix));
        assert!(is_active("/docs/", "/docs", MatchPolicy::Prefix));
        assert!(!is_active("/", "/docs", MatchPolicy::Prefix));
        assert!(!is_active("/docsearch", "/docs", MatchPolicy::Prefix));
    }

    #[test]
    fn test_root_link_is_exact() {
        let home = HEADER_LINKS[0];
        assert!(home.is_active("/"));
        assert!(!home.is_active("/docs/features"));
        assert!(!home.is_active("/nope"));
    }

    #[test]
    fn test_documentation_link_covers_subtree() {
        let docs = HEADER_LINKS[1];
        for page in DocPage::ALL {
            assert!(docs.is_active(page.path()));
        }
        assert!(docs.is_active("/docs/nonexistent"));
        assert!(!docs.is_active("/"));
    }

    #[test]
    fn test_settings_sidebar_entry_active_on_settings_page() {
        let path = "/docs/settings";
        assert_eq!(Route::resolve(path), Route::Docs(DocPage::Settings));

        let active: Vec<_> = sidebar_links()
            .filter(|item| item.is_active(path))
            .map(|item| item.label)
            .collect();
        assert_eq!(active, vec!["Settings"]);
    }

    #[test]
    fn test_sidebar_order() {
        let labels: Vec<_> = sidebar_links().map(|item| item.label).collect();
        assert_eq!(labels, vec!["Features", "Settings", "Theme", "Self-Host"]);
    }
}
