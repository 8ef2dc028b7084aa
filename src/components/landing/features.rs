use leptos::prelude::*;
use leptos_icons::Icon;

use super::{SectionTitle, css};
use crate::components::icons as ic;

struct Feature {
    title: &'static str,
    description: &'static str,
    icon: icondata::Icon,
}

const FEATURES: [Feature; 10] = [
    Feature {
        title: "Multiple Accounts",
        description: "Switch between Twitch accounts easily. Support for anonymous lurking without login.",
        icon: ic::ACCOUNTS,
    },
    Feature {
        title: "Graphical Emotes",
        description: "Emotes rendered directly in your terminal. Works with Kitty and Ghostty.",
        icon: ic::EMOTE,
    },
    Feature {
        title: "7TV & BTTV",
        description: "Full support for third-party emote providers. See all your favorite emotes.",
        icon: ic::PROVIDER,
    },
    Feature {
        title: "User Inspect",
        description: "View chat history per user. See follow age, subscription status, and all their messages.",
        icon: ic::INSPECT,
    },
    Feature {
        title: "Mention Notifications",
        description: "Dedicated tab for @mentions across all open channels. Never miss when someone talks to you.",
        icon: ic::MENTION,
    },
    Feature {
        title: "Live Alerts",
        description: "Know when channels go online or offline. Dedicated notification tab.",
        icon: ic::LIVE,
    },
    Feature {
        title: "Message Search",
        description: "Search through chat history. Find messages and usernames quickly.",
        icon: ic::SEARCH,
    },
    Feature {
        title: "Chat Logging",
        description: "SQLite-backed local message persistence. Keep a record of all chats you visit.",
        icon: ic::LOG,
    },
    Feature {
        title: "Configurable",
        description: "Customize themes, keybinds, and behavior.",
        icon: ic::CONFIG,
    },
    Feature {
        title: "Self-Hostable",
        description: "Don't want to use chatuino.net? Run your own server component. Full control over your data.",
        icon: ic::SERVER,
    },
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class=css::section>
            <SectionTitle
                title="Features"
                subtitle="Everything you need for Twitch chat in your terminal".to_string()
            />
            <div class=css::featureGrid>
                {FEATURES
                    .iter()
                    .map(|feature| view! {
                        <div class=css::featureCard>
                            <div class=css::featureHeading>
                                <span class=css::featureIcon>
                                    <Icon icon=feature.icon />
                                </span>
                                <h3>{feature.title}</h3>
                            </div>
                            <p>{feature.description}</p>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
