pub mod brand;
pub mod menu_button;

pub use brand::Brand;
pub use menu_button::MenuButton;
