use leptos::prelude::*;

use crate::config::{GITHUB_URL, ISSUES_URL, RELEASES_URL};

stylance::import_crate_style!(css, "src/components/layout/footer.module.css");

/// Status-bar style footer with project links.
#[component]
pub fn Footer() -> impl IntoView {
    let links = [("GitHub", GITHUB_URL), ("Releases", RELEASES_URL), ("Issues", ISSUES_URL)];

    view! {
        <footer class=css::footer>
            <div class=css::inner>
                <span class=css::status>"-- MIT License --"</span>
                <div class=css::links>
                    {links
                        .into_iter()
                        .map(|(label, href)| view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class=css::link>
                                {label}
                            </a>
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </footer>
    }
}
