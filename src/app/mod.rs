pub mod components;
pub mod layouts;
pub mod pages;

use dioxus::prelude::*;

use crate::config::NavbarConfig;
use layouts::Navbar;
use pages::HomePage;

#[component]
pub fn App() -> Element {
    // Bundled and minified by build.rs
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    // Provided by the native launcher from NAVBAR_CONFIG, defaults otherwise
    let config = try_consume_context::<NavbarConfig>().unwrap_or_default();

    use_effect(|| {
        tracing::info!("Navbar app initialized");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        Navbar { config: config.clone() }
        HomePage { items: config.items }
    }
}
