pub mod mobile_menu;
pub mod navbar;

pub use mobile_menu::MobileMenu;
pub use navbar::Navbar;
