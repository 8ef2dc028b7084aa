use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

use super::css;
use super::palette::Palette;
use crate::components::preview::use_preview;
use crate::models::{DocPage, DocSection};
use crate::utils::markdown_to_html;

/// Rendered doc page.
///
/// Markdown images become preview thumbnails through a single click handler
/// on the article, since the rendered HTML carries no Leptos handlers.
#[component]
pub fn Article(page: DocPage) -> impl IntoView {
    let preview = use_preview();

    let on_click = move |ev: MouseEvent| {
        let Some(img) = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlImageElement>().ok())
        else {
            return;
        };
        preview.open(img.src(), img.alt());
    };

    let sections = page
        .sections()
        .iter()
        .map(|section| match *section {
            DocSection::Markdown(source) => {
                view! { <div class=css::prose inner_html=markdown_to_html(source) /> }.into_any()
            }
            DocSection::Palette => view! { <Palette /> }.into_any(),
        })
        .collect::<Vec<_>>();

    view! {
        <article class=css::article on:click=on_click>
            {sections}
        </article>
    }
}
