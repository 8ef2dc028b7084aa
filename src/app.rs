//! Root application module.
//!
//! Contains the main App component and the page-wide [`PreviewStore`].

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::models::{PreviewState, PreviewTarget};

// ============================================================================
// PreviewStore
// ============================================================================

/// Page-wide image preview state.
///
/// Provided at the root so any thumbnail (landing page or docs article) can
/// open the single shared overlay.
///
/// # Note
///
/// This struct is `Copy` because its only field is a Leptos signal.
#[derive(Clone, Copy)]
pub struct PreviewStore {
    state: RwSignal<PreviewState>,
}

impl PreviewStore {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(PreviewState::default()),
        }
    }

    /// Show `src` in the overlay, replacing any image already shown.
    pub fn open(&self, src: impl Into<String>, caption: impl Into<String>) {
        let (src, caption) = (src.into(), caption.into());
        self.state.update(|state| state.open(src, caption));
    }

    /// Dismiss the overlay. Does not notify subscribers if nothing was open.
    pub fn close(&self) {
        if self.state.with_untracked(PreviewState::is_open) {
            self.state.update(|state| {
                state.close();
            });
        }
    }

    pub fn current(&self) -> Option<PreviewTarget> {
        self.state.with(|state| state.current().cloned())
    }

    pub fn is_open(&self) -> bool {
        self.state.with(PreviewState::is_open)
    }
}

impl Default for PreviewStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the [`PreviewStore`]
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    provide_context(PreviewStore::new());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    background: var(--nord0);
                    color: var(--nord4);
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: var(--nord11); margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: var(--nord3); margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <ul style="text-align: left; color: var(--nord11); font-size: 0.9rem;">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: var(--nord8);
                                color: var(--nord0);
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font: inherit;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
