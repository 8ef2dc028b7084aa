mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = config::install_catalog() {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::error_1(&format!("install catalog rejected: {err}").into());
        #[cfg(not(target_arch = "wasm32"))]
        let _ = err;
    }

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
