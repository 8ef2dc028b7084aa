use leptos::prelude::*;

use super::css;

struct Swatch {
    name: &'static str,
    hex: &'static str,
}

struct SwatchGroup {
    title: &'static str,
    swatches: &'static [Swatch],
}

macro_rules! swatches {
    ($($name:literal => $hex:literal),* $(,)?) => {
        &[$(Swatch { name: $name, hex: $hex }),*]
    };
}

const NORD: [SwatchGroup; 4] = [
    SwatchGroup {
        title: "Polar Night",
        swatches: swatches!["nord0" => "#2e3440", "nord1" => "#3b4252", "nord2" => "#434c5e", "nord3" => "#4c566a"],
    },
    SwatchGroup {
        title: "Snow Storm",
        swatches: swatches!["nord4" => "#d8dee9", "nord5" => "#e5e9f0", "nord6" => "#eceff4"],
    },
    SwatchGroup {
        title: "Frost",
        swatches: swatches!["nord7" => "#8fbcbb", "nord8" => "#88c0d0", "nord9" => "#81a1c1", "nord10" => "#5e81ac"],
    },
    SwatchGroup {
        title: "Aurora",
        swatches: swatches![
            "nord11" => "#bf616a",
            "nord12" => "#d08770",
            "nord13" => "#ebcb8b",
            "nord14" => "#a3be8c",
            "nord15" => "#b48ead",
        ],
    },
];

/// Nord color reference shown on the theme page.
#[component]
pub fn Palette() -> impl IntoView {
    view! {
        <div class=css::palette>
            {NORD
                .iter()
                .map(|group| view! {
                    <section class=css::paletteGroup>
                        <h3>{group.title}</h3>
                        <div class=css::swatches>
                            {group
                                .swatches
                                .iter()
                                .map(|swatch| view! {
                                    <div class=css::swatch>
                                        <span
                                            class=css::swatchColor
                                            style=format!("background: {}", swatch.hex)
                                        />
                                        <code>{swatch.hex}</code>
                                        <span class=css::swatchName>{swatch.name}</span>
                                    </div>
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </section>
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
