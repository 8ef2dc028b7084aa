//! Install section.
//!
//! The visitor's OS is classified once on mount. The matching primary
//! method is shown up front; everything else sits behind a disclosure
//! toggle. With no recognised OS there is no primary and the toggle holds
//! the whole catalog.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{SectionTitle, css};
use crate::components::copy::CodeBlock;
use crate::components::icons as ic;
use crate::config::{RELEASES_URL, install_catalog};
use crate::core::InstallCatalog;
use crate::models::{InstallMethod, Os};
use crate::utils::dom;

#[component]
pub fn Install() -> impl IntoView {
    match install_catalog() {
        Ok(catalog) => view! { <InstallSection catalog=catalog /> }.into_any(),
        Err(_) => view! {
            <section id="install" class=css::section>
                <SectionTitle title="Install" subtitle="Get started with Chatuino".to_string() />
                <div class=css::note>
                    <p>"Install instructions are unavailable right now."</p>
                    <a href=RELEASES_URL target="_blank" rel="noopener noreferrer" class=css::primaryButton>
                        "Download from GitHub Releases"
                    </a>
                </div>
            </section>
        }
        .into_any(),
    }
}

#[component]
fn InstallSection(catalog: &'static InstallCatalog) -> impl IntoView {
    let os = RwSignal::new(Os::Unknown);
    let show_all = RwSignal::new(false);

    // No tracked reads: runs once after mount
    Effect::new(move |_| {
        let (user_agent, platform) = dom::navigator_strings();
        os.set(Os::classify(user_agent.as_deref(), platform.as_deref()));
    });

    let primary = Signal::derive(move || catalog.select_primary(os.get()));
    let others = Signal::derive(move || catalog.list_others(primary.get()));

    view! {
        <section id="install" class=css::section>
            <SectionTitle
                title="Install"
                subtitle=Signal::derive(move || {
                    format!("Get started with Chatuino on {}", os.get().display_name())
                })
            />

            {move || primary.get().map(|method| view! {
                <div class=css::recommended>
                    <div class=css::recommendedLabel>
                        <span class=css::star>"*"</span>
                        <span>{format!("Recommended for {}", os.get().display_name())}</span>
                    </div>
                    <InstallCard method=method />
                </div>
            })}

            <button
                type="button"
                class=move || {
                    if show_all.get() {
                        format!("{} {}", css::disclosure, css::disclosureOpen)
                    } else {
                        css::disclosure.to_string()
                    }
                }
                on:click=move |_| show_all.update(|open| *open = !*open)
                aria-expanded=move || show_all.get().to_string()
                aria-controls="other-methods"
            >
                <span class=css::chevron>
                    <Icon icon=ic::CHEVRON_RIGHT />
                </span>
                <span>"Other installation methods"</span>
            </button>

            <Show when=move || show_all.get()>
                <div id="other-methods" class=css::methodGrid>
                    {move || others
                        .get()
                        .into_iter()
                        .map(|method| view! { <InstallCard method=method /> })
                        .collect::<Vec<_>>()}
                </div>
            </Show>

            <div class=css::note>
                <h3>"After Installation"</h3>
                <p>
                    "Run " <code>"chatuino"</code> " to start the application. Use "
                    <code>"chatuino account"</code> " to manage your Twitch accounts."
                </p>
                <p>"Press " <code>"?"</code> " inside Chatuino to view all keybindings."</p>
            </div>
        </section>
    }
}

#[component]
fn InstallCard(method: &'static InstallMethod) -> impl IntoView {
    view! {
        <div class=css::card>
            <h4>{method.name.as_str()}</h4>
            {method.description.as_deref().map(|text| view! { <p>{text}</p> })}
            {method.code.as_deref().map(|code| view! { <CodeBlock code=code /> })}
            {method.link.as_deref().map(|link| view! {
                <a href=link target="_blank" rel="noopener noreferrer" class=css::primaryButton>
                    {method.link_text.as_deref().unwrap_or(link)}
                    <Icon icon=ic::EXTERNAL_LINK />
                </a>
            })}
        </div>
    }
}
