// Navbar animation logic
// Framework-agnostic, 100% testable

pub mod easing;
pub mod profile;

pub use easing::{ease_in_out_cubic, lerp};
pub use profile::{StyleProfile, BLUR_BREAKPOINT, SPREAD_BREAKPOINT};
