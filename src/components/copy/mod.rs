//! Copy-to-clipboard widgets.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::components::icons as ic;
use crate::config::COPY_FEEDBACK_MS;
use crate::models::CopyFeedback;
use crate::utils::write_text;

stylance::import_crate_style!(css, "src/components/copy/copy.module.css");

/// Shell command in a terminal-styled block with a copy button.
#[component]
pub fn CodeBlock(#[prop(into)] code: String) -> impl IntoView {
    view! {
        <div class=css::block>
            <pre class=css::pre>
                <span class=css::prompt>"$ "</span>
                <code>{code.clone()}</code>
            </pre>
            <CopyButton text=code />
        </div>
    }
}

/// Copies `text` and shows "Copied!" for [`COPY_FEEDBACK_MS`].
///
/// A failed write leaves the button untouched. A second copy inside the
/// feedback window restarts it: the pending reset is dropped (which cancels
/// it) and the generation check discards it should it fire anyway.
#[component]
pub fn CopyButton(#[prop(into)] text: String) -> impl IntoView {
    let feedback = RwSignal::new(CopyFeedback::default());
    let pending = StoredValue::new_local(None::<Timeout>);
    let text = StoredValue::new(text);

    let on_click = move |_| {
        let text = text.get_value();
        spawn_local(async move {
            match write_text(&text).await {
                Ok(()) => {
                    let Some(generation) = feedback.try_update(CopyFeedback::mark_copied) else {
                        return;
                    };
                    let reset = Timeout::new(COPY_FEEDBACK_MS, move || {
                        feedback.try_update(|state| state.expire(generation));
                    });
                    pending.try_update_value(|slot| *slot = Some(reset));
                }
                Err(err) => {
                    #[cfg(target_arch = "wasm32")]
                    web_sys::console::warn_1(&format!("copy failed: {err}").into());
                    #[cfg(not(target_arch = "wasm32"))]
                    let _ = err;
                }
            }
        });
    };

    let copied = move || feedback.with(CopyFeedback::is_copied);

    view! {
        <button
            type="button"
            class=move || {
                if copied() {
                    format!("{} {}", css::button, css::copied)
                } else {
                    css::button.to_string()
                }
            }
            on:click=on_click
            aria-label="Copy to clipboard"
        >
            {move || {
                if copied() {
                    view! { <Icon icon=ic::CHECK /> }.into_any()
                } else {
                    view! { <Icon icon=ic::COPY /> }.into_any()
                }
            }}
            <span>{move || if copied() { "Copied!" } else { "Copy" }}</span>
        </button>
    }
}
