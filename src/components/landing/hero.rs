use leptos::prelude::*;

use super::css;
use crate::components::preview::PreviewImage;
use crate::components::router::Link;
use crate::config::{APP_NAME, APP_TAGLINE};

const HIGHLIGHTS: [&str; 3] = ["Multiple accounts", "Graphical emotes", "7TV & BTTV support"];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class=css::hero>
            <h1 class=css::heroTitle>
                <span class=css::bracket>"[ "</span>
                <span class=css::accent>{APP_NAME}</span>
                <span class=css::bracket>" ]"</span>
            </h1>
            <p class=css::tagline>{APP_TAGLINE}</p>

            <div class=css::actions>
                <a href="#install" class=css::primaryButton>"Install Now"</a>
                <Link
                    href="/docs/features"
                    class=Signal::derive(|| css::secondaryButton.to_string())
                >
                    "View Docs"
                </Link>
            </div>

            <div class=css::terminal>
                <div class=css::terminalBar>
                    <span class=css::dotRed />
                    <span class=css::dotYellow />
                    <span class=css::dotGreen />
                    <span class=css::terminalName>"chatuino"</span>
                </div>
                <PreviewImage
                    src="/demo.gif"
                    alt="Chatuino demo showing Twitch chat in a terminal"
                />
            </div>

            <ul class=css::highlights>
                {HIGHLIGHTS
                    .into_iter()
                    .map(|text| view! {
                        <li>
                            <span class=css::star aria-hidden="true">"*"</span>
                            <span>{text}</span>
                        </li>
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}
