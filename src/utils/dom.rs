//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Every accessor degrades
//! to a no-op or `None` when there is no browser window.

use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlElement, Window};

use crate::models::RouteMeta;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

#[inline]
fn body() -> Option<HtmlElement> {
    document()?.body()
}

// =============================================================================
// Environment
// =============================================================================

/// `navigator.userAgent` and `navigator.platform`, where available.
pub fn navigator_strings() -> (Option<String>, Option<String>) {
    let Some(navigator) = window().map(|w| w.navigator()) else {
        return (None, None);
    };
    (navigator.user_agent().ok(), navigator.platform().ok())
}

// =============================================================================
// Scroll Lock
// =============================================================================

/// Current inline `overflow` style of the document body.
pub fn body_overflow() -> Option<String> {
    body()?.style().get_property_value("overflow").ok()
}

/// Set the body's inline `overflow`; an empty value removes the property.
pub fn set_body_overflow(value: &str) {
    let Some(body) = body() else {
        return;
    };
    let style = body.style();
    let _ = if value.is_empty() {
        style.remove_property("overflow").map(|_| ())
    } else {
        style.set_property("overflow", value)
    };
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Current `location.pathname`, `/` outside a browser.
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| "/".to_string())
}

/// Push a new history entry for `path`.
pub fn push_path(path: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

/// Replace the current history entry without adding to the back stack.
///
/// Used for alias redirects that shouldn't appear in back button history.
pub fn replace_path(path: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

// =============================================================================
// Document Metadata
// =============================================================================

/// Apply title, description and canonical link for the current page.
///
/// The `<meta name="description">` and `<link rel="canonical">` tags come
/// from `index.html`; missing tags are skipped.
pub fn set_document_meta(meta: &RouteMeta) {
    let Some(document) = document() else {
        return;
    };
    document.set_title(&meta.title);

    if let Ok(Some(tag)) = document.query_selector(r#"meta[name="description"]"#) {
        let _ = tag.set_attribute("content", meta.description);
    }
    if let Ok(Some(link)) = document.query_selector(r#"link[rel="canonical"]"#) {
        match &meta.canonical {
            Some(href) => {
                let _ = link.set_attribute("href", href);
            }
            None => {
                let _ = link.remove_attribute("href");
            }
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::models::ScrollLock;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_navigator_strings_present_in_browser() {
        let (user_agent, _) = navigator_strings();
        assert!(user_agent.is_some_and(|ua| !ua.is_empty()));
    }

    #[wasm_bindgen_test]
    fn test_body_scroll_lock_round_trip() {
        set_body_overflow("auto");
        let mut lock = ScrollLock::default();

        for _ in 0..3 {
            if lock.engage(&body_overflow().unwrap_or_default()) {
                set_body_overflow("hidden");
            }
        }
        assert_eq!(body_overflow().as_deref(), Some("hidden"));

        if let Some(previous) = lock.release() {
            set_body_overflow(&previous);
        }
        assert_eq!(body_overflow().as_deref(), Some("auto"));
        set_body_overflow("");
    }
}
