//! Site header with primary navigation.
//!
//! Desktop shows the links inline; below the `md` breakpoint they move into
//! a drop-down menu behind a toggle button.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::components::icons as ic;
use crate::components::router::{Link, use_router};
use crate::config::{APP_NAME, DESKTOP_MEDIA_QUERY, GITHUB_URL};
use crate::models::HEADER_LINKS;

stylance::import_crate_style!(css, "src/components/layout/header.module.css");

#[component]
pub fn Header() -> impl IntoView {
    let router = use_router();
    let menu_open = RwSignal::new(false);
    let is_desktop = use_media_query(DESKTOP_MEDIA_QUERY.to_string());

    // Navigation always closes the menu
    Effect::new(move |_| {
        router.path.track();
        menu_open.set(false);
    });

    // Growing past the breakpoint hides the toggle, so the menu must not linger
    Effect::new(move |_| {
        if is_desktop.get() {
            menu_open.set(false);
        }
    });

    let close_menu = Callback::new(move |_: ()| menu_open.set(false));

    view! {
        <header class=css::header>
            <nav class=css::nav>
                <Link href="/" class=Signal::derive(|| css::logo.to_string()) on_navigate=close_menu>
                    <span class=css::bracket>"["</span>
                    <span class=css::brand>{APP_NAME}</span>
                    <span class=css::bracket>"]"</span>
                </Link>

                <div class=css::desktopLinks>
                    <NavLinks on_navigate=close_menu />
                </div>

                <button
                    type="button"
                    class=css::menuButton
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                >
                    {move || {
                        if menu_open.get() {
                            view! { <Icon icon=ic::CLOSE /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::MENU /> }.into_any()
                        }
                    }}
                </button>
            </nav>

            <Show when=move || menu_open.get()>
                <div class=css::mobileMenu>
                    <NavLinks on_navigate=close_menu />
                </div>
            </Show>
        </header>
    }
}

/// Header links plus the external GitHub link.
#[component]
fn NavLinks(on_navigate: Callback<()>) -> impl IntoView {
    let router = use_router();

    let links = HEADER_LINKS
        .iter()
        .map(|item| {
            let item = *item;
            let class = Signal::derive(move || {
                let active = router.path.with(|path| item.is_active(path));
                if active {
                    format!("{} {}", css::link, css::active)
                } else {
                    css::link.to_string()
                }
            });
            view! {
                <Link href=item.href class=class on_navigate=on_navigate>
                    {item.label}
                </Link>
            }
        })
        .collect::<Vec<_>>();

    view! {
        {links}
        <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" class=css::link>
            "GitHub"
        </a>
    }
}
