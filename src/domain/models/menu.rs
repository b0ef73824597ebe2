/// Open/closed state of the mobile dropdown menu.
///
/// Independent of scroll state: nothing in here reads progress, and the
/// style profiles never read this.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Menu button press
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A navigation item was activated
    pub fn close(&mut self) {
        self.open = false;
    }

    /// SVG path for the menu button icon ("X" when open, hamburger when closed)
    pub fn icon_path(&self) -> &'static str {
        if self.open {
            "M6 18L18 6M6 6l12 12"
        } else {
            "M4 6h16M4 12h16M4 18h16"
        }
    }
}

/// Staggered slide-in delay for the n-th mobile menu entry
pub fn menu_item_delay_ms(index: usize) -> u32 {
    (index as u32).saturating_mul(50)
}
