use leptos::prelude::*;

use crate::components::router::Link;

stylance::import_crate_style!(css, "src/components/not_found.module.css");

/// Fallback for unmatched paths.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class=css::notFound>
            <h1 class=css::code>
                <span class=css::bracket>"[ "</span>
                <span class=css::accent>"404"</span>
                <span class=css::bracket>" ]"</span>
            </h1>
            <p class=css::title>"Page not found"</p>
            <p class=css::message>"The page you're looking for doesn't exist or has been moved."</p>
            <div class=css::actions>
                <Link href="/" class=Signal::derive(|| css::primary.to_string())>
                    "Go Home"
                </Link>
                <Link href="/docs/features" class=Signal::derive(|| css::secondary.to_string())>
                    "View Docs"
                </Link>
            </div>
        </div>
    }
}
