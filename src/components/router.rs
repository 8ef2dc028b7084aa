//! Application router component.
//!
//! Handles URL-based routing with the History API.
//! Uses native popstate events instead of leptos_router; the route table is
//! small and static (see [`Route::resolve`]).
//!
//! # Architecture
//!
//! - **`location.pathname` is the source of truth**: the route is derived from it
//! - **Layout never re-renders on navigation**: header and footer stay mounted
//! - **Internal links push history entries**: see [`Link`]
//! - **popstate events**: Browser back/forward buttons work automatically

use leptos::ev::MouseEvent;
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::docs::DocsLayout;
use crate::components::landing::Landing;
use crate::components::layout::{Footer, Header};
use crate::components::not_found::NotFound;
use crate::components::preview::{ImagePreviewModal, use_preview};
use crate::models::{Route, normalize_path};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/router.module.css");

// ============================================================================
// Router Context
// ============================================================================

/// Navigation state shared with every component below the router.
#[derive(Clone, Copy)]
pub struct RouterContext {
    /// Normalized current path.
    pub path: RwSignal<String>,
    /// Route resolved from `path`.
    pub route: Memo<Route>,
}

impl RouterContext {
    /// Navigate to an internal path, adding a history entry.
    pub fn navigate(&self, path: &str) {
        let path = normalize_path(path);
        if self.path.with_untracked(|current| current == path) {
            dom::scroll_to_top();
            return;
        }
        dom::push_path(path);
        self.path.set(path.to_string());
    }

    /// Re-read the path from the address bar (back/forward).
    pub fn sync_from_location(&self) {
        self.path.set(normalize_path(&dom::current_path()).to_string());
    }
}

/// Get the router context. Must be called below [`AppRouter`].
pub fn use_router() -> RouterContext {
    use_context::<RouterContext>().expect("RouterContext must be provided by AppRouter")
}

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Route table:
/// - `/` → Landing page
/// - `/docs` → alias of `/docs/features` (address bar is rewritten)
/// - `/docs/{features,settings,theme,self-host}` → Docs layout
/// - anything else → Not found
#[component]
pub fn AppRouter() -> impl IntoView {
    let preview = use_preview();

    let path = RwSignal::new(normalize_path(&dom::current_path()).to_string());
    let route = Memo::new(move |_| path.with(|p| Route::resolve(p)));
    let router = RouterContext { path, route };
    provide_context(router);

    // Set up popstate event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            router.sync_from_location();
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Per-navigation side effects: canonical URL, document metadata,
    // closing the preview (releases the scroll lock) and scrolling to top.
    Effect::new(move |prev_path: Option<String>| {
        let current_path = path.get();
        let current = route.get();

        if let Some(canonical) = current.canonical_path()
            && canonical != current_path
        {
            dom::replace_path(canonical);
            path.set(canonical.to_string());
        }

        dom::set_document_meta(&current.meta());

        if prev_path.is_some_and(|prev| prev != current_path) {
            preview.close();
            dom::scroll_to_top();
        }
        current_path
    });

    view! {
        <div class=css::layout>
            <Header />
            <main class=css::main>
                {move || match route.get() {
                    Route::Landing => view! { <Landing /> }.into_any(),
                    Route::Docs(page) => view! { <DocsLayout page=page /> }.into_any(),
                    Route::NotFound => view! { <NotFound /> }.into_any(),
                }}
            </main>
            <Footer />
            <ImagePreviewModal />
        </div>
    }
}

// ============================================================================
// Link
// ============================================================================

/// Whether a click should be handled client-side.
///
/// Modified clicks (new tab, new window, download) and non-primary buttons
/// are left to the browser.
fn is_plain_click(ev: &MouseEvent) -> bool {
    ev.button() == 0
        && !ev.default_prevented()
        && !(ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key())
}

/// Internal navigation link.
///
/// # Props
/// - `href`: Target path
/// - `class`: CSS class, may depend on the current route
/// - `on_navigate`: Invoked after a client-side navigation (e.g. close a menu)
#[component]
pub fn Link(
    href: &'static str,
    #[prop(into)] class: Signal<String>,
    #[prop(optional)] on_navigate: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: MouseEvent| {
        if !is_plain_click(&ev) {
            return;
        }
        ev.prevent_default();
        router.navigate(href);
        if let Some(callback) = on_navigate {
            callback.run(());
        }
    };

    view! {
        <a href=href class=move || class.get() on:click=on_click>
            {children()}
        </a>
    }
}
