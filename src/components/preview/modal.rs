use leptos::ev::{self, MouseEvent};
use leptos::prelude::*;
use leptos_icons::Icon;

use super::{css, use_preview};
use crate::components::icons as ic;
use crate::models::ScrollLock;
use crate::utils::dom;

/// Full-screen image overlay.
///
/// Rendered iff the preview store holds a target. While it is shown the
/// document body cannot scroll; the previous `overflow` value comes back
/// when the preview closes or this component is torn down.
#[component]
pub fn ImagePreviewModal() -> impl IntoView {
    let preview = use_preview();
    let lock = StoredValue::new(ScrollLock::default());

    let release = move || {
        if let Some(previous) = lock.try_update_value(ScrollLock::release).flatten() {
            dom::set_body_overflow(&previous);
        }
    };

    Effect::new(move |_| {
        if preview.is_open() {
            let current = dom::body_overflow().unwrap_or_default();
            if lock
                .try_update_value(|lock| lock.engage(&current))
                .unwrap_or(false)
            {
                dom::set_body_overflow("hidden");
            }
        } else {
            release();
        }
    });

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            preview.close();
        }
    });

    on_cleanup(move || {
        keydown.remove();
        release();
    });

    move || {
        preview.current().map(|target| {
            let caption = target.caption;
            let has_caption = !caption.is_empty();

            view! {
                <div
                    class=css::overlay
                    role="dialog"
                    aria-modal="true"
                    aria-label="Image preview"
                    on:click=move |_| preview.close()
                >
                    <button
                        type="button"
                        class=css::closeButton
                        aria-label="Close preview"
                        on:click=move |ev: MouseEvent| {
                            ev.stop_propagation();
                            preview.close();
                        }
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                    <figure class=css::figure on:click=|ev: MouseEvent| ev.stop_propagation()>
                        <img src=target.src alt=caption.clone() class=css::fullImage />
                        {has_caption.then(|| view! {
                            <figcaption class=css::caption>{caption}</figcaption>
                        })}
                    </figure>
                </div>
            }
        })
    }
}
