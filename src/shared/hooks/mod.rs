// Custom Dioxus hooks
pub mod use_menu;
pub mod use_scroll_sample;

pub use use_menu::{use_menu, UseMenuReturn};
pub use use_scroll_sample::use_scroll_sample;
