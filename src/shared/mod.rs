pub mod errors;
pub mod logging;

// Available on every target (DOM access inside is wasm-only)
pub mod hooks;
