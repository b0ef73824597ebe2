// Public API exports
pub mod config;
pub mod domain;
pub mod shared;

// Dioxus components (DOM access is wasm-only inside the hooks)
pub mod app;
