//! Documentation pages.
//!
//! [`DocsLayout`] pairs a sidebar of every doc page with the article for the
//! current one. On small screens the sidebar becomes a drawer behind a
//! toggle button.

mod article;
mod palette;

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::components::icons as ic;
use crate::components::router::{Link, use_router};
use crate::config::DESKTOP_MEDIA_QUERY;
use crate::models::{DocPage, sidebar_links};

use article::Article;

stylance::import_crate_style!(css, "src/components/docs/docs.module.css");

#[component]
pub fn DocsLayout(page: DocPage) -> impl IntoView {
    let sidebar_open = RwSignal::new(false);
    let is_desktop = use_media_query(DESKTOP_MEDIA_QUERY.to_string());

    Effect::new(move |_| {
        if is_desktop.get() {
            sidebar_open.set(false);
        }
    });

    let close_sidebar = Callback::new(move |_: ()| sidebar_open.set(false));

    view! {
        <div class=css::docs>
            <button
                type="button"
                class=css::sidebarToggle
                on:click=move |_| sidebar_open.update(|open| *open = !*open)
                aria-expanded=move || sidebar_open.get().to_string()
            >
                <Icon icon=ic::MENU />
                <span>{page.label()}</span>
            </button>

            <Show when=move || sidebar_open.get()>
                <div class=css::backdrop on:click=move |_| sidebar_open.set(false) />
            </Show>

            <aside class=move || {
                if sidebar_open.get() {
                    format!("{} {}", css::sidebar, css::sidebarOpen)
                } else {
                    css::sidebar.to_string()
                }
            }>
                <Sidebar on_navigate=close_sidebar />
            </aside>

            <Article page=page />
        </div>
    }
}

#[component]
fn Sidebar(on_navigate: Callback<()>) -> impl IntoView {
    let router = use_router();

    view! {
        <nav class=css::sidebarNav aria-label="Documentation">
            <p class=css::sidebarTitle>"Documentation"</p>
            <ul class=css::sidebarList>
                {sidebar_links()
                    .map(|item| {
                        let class = Signal::derive(move || {
                            if router.path.with(|path| item.is_active(path)) {
                                format!("{} {}", css::sidebarLink, css::sidebarLinkActive)
                            } else {
                                css::sidebarLink.to_string()
                            }
                        });
                        view! {
                            <li>
                                <Link href=item.href class=class on_navigate=on_navigate>
                                    {item.label}
                                </Link>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}
