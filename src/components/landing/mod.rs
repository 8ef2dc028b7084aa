//! Landing page.

mod features;
mod hero;
mod install;

use leptos::prelude::*;

use features::Features;
use hero::Hero;
use install::Install;

stylance::import_crate_style!(css, "src/components/landing/landing.module.css");

#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <Hero />
        <Features />
        <Install />
    }
}

/// `[ Title ]` heading used by every landing section.
#[component]
fn SectionTitle(title: &'static str, #[prop(into)] subtitle: Signal<String>) -> impl IntoView {
    view! {
        <div class=css::sectionHeader>
            <h2 class=css::sectionTitle>
                <span class=css::bracket>"[ "</span>
                <span class=css::accent>{title}</span>
                <span class=css::bracket>" ]"</span>
            </h2>
            <p class=css::sectionSubtitle>{move || subtitle.get()}</p>
        </div>
    }
}
