// Domain models for the scroll-driven navbar
// Pure Rust, no framework dependencies

pub mod menu;
pub mod nav_item;
pub mod scroll;
pub mod style;

pub use menu::{menu_item_delay_ms, MenuState};
pub use nav_item::NavItem;
pub use scroll::{ScrollProgress, ScrollSample, ScrollTracker};
pub use style::{CssLength, LayoutMode, LogoStyle, NavbarStyle, STYLE_TRANSITION};
