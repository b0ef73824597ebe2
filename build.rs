//! Bundles the navbar stylesheets into a single minified `bundle.css`.

use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::Path;

const CSS_ENTRY: &str = "assets/css/main.css";
const CSS_PARTIALS: [&str; 3] = [
    "assets/css/base.css",
    "assets/css/navbar.css",
    "assets/css/mobile-menu.css",
];
const BUNDLE_DIR: &str = "assets/dist";
const BUNDLE_PATH: &str = "assets/dist/bundle.css";

fn bundle_css() -> Result<String, String> {
    let provider = FileProvider::new();
    let mut bundler = Bundler::new(&provider, None, ParserOptions::default());

    let mut sheet = bundler
        .bundle(Path::new(CSS_ENTRY))
        .map_err(|e| format!("bundling {}: {}", CSS_ENTRY, e))?;
    sheet
        .minify(MinifyOptions::default())
        .map_err(|e| format!("minifying: {}", e))?;

    let printed = sheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("printing: {}", e))?;
    Ok(printed.code)
}

fn main() {
    println!("cargo:rerun-if-changed={}", CSS_ENTRY);
    for partial in CSS_PARTIALS {
        println!("cargo:rerun-if-changed={}", partial);
    }

    let css = match bundle_css() {
        Ok(css) => css,
        Err(e) => panic!("navbar stylesheet: {}", e),
    };

    fs::create_dir_all(BUNDLE_DIR).expect("Failed to create assets/dist");
    fs::write(BUNDLE_PATH, css).expect("Failed to write navbar bundle");
}
