//! Click-to-enlarge images.
//!
//! - [`PreviewImage`] - thumbnail that opens the overlay
//! - [`ImagePreviewModal`] - the single full-screen overlay, mounted by the router

mod modal;

pub use modal::ImagePreviewModal;

use leptos::prelude::*;

use crate::app::PreviewStore;

stylance::import_crate_style!(css, "src/components/preview/preview.module.css");

/// Get the preview store. Must be called below [`crate::app::App`].
pub fn use_preview() -> PreviewStore {
    use_context::<PreviewStore>().expect("PreviewStore must be provided by App")
}

/// Image thumbnail that opens in the preview overlay when clicked.
#[component]
pub fn PreviewImage(
    src: &'static str,
    alt: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let preview = use_preview();

    view! {
        <button
            type="button"
            class=format!("{} {}", css::thumbnail, class)
            on:click=move |_| preview.open(src, alt)
            aria-label=format!("Enlarge image: {alt}")
        >
            <img src=src alt=alt loading="lazy" class=css::thumbnailImage />
            <span class=css::hint>"Click to enlarge"</span>
        </button>
    }
}
