//! Scroll Navbar - demo entry point
//!
//! Renders the navbar above a page of placeholder sections.

use scroll_navbar::app::App;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    // Log to browser console to confirm WASM loaded
    web_sys::console::log_1(&"[WASM] Scroll Navbar - WASM initialized!".into());
    dioxus::launch(App);
}

// Native entry point (desktop renderer)
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_config()?;
    tracing::info!("Starting Scroll Navbar...");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
    Ok(())
}

/// Reads the JSON file named by `NAVBAR_CONFIG`, or falls back to defaults
#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> anyhow::Result<scroll_navbar::config::NavbarConfig> {
    use anyhow::Context;
    use scroll_navbar::config::NavbarConfig;

    let Some(path) = std::env::var_os("NAVBAR_CONFIG") else {
        return Ok(NavbarConfig::default());
    };
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read navbar config {}", path.to_string_lossy()))?;
    NavbarConfig::from_json(&json)
        .with_context(|| format!("Invalid navbar config {}", path.to_string_lossy()))
}
