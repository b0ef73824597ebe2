use dioxus::prelude::*;

use crate::domain::models::MenuState;
use crate::shared::logging::log_menu_toggled;

/// Mobile menu state shared by the menu button and the dropdown links
#[derive(Clone, Copy, PartialEq)]
pub struct UseMenuReturn {
    pub state: Signal<MenuState>,
}

impl UseMenuReturn {
    pub fn is_open(&self) -> bool {
        self.state.read().is_open()
    }

    pub fn icon_path(&self) -> &'static str {
        self.state.read().icon_path()
    }

    /// Menu button press
    pub fn toggle(&mut self) {
        self.state.write().toggle();
        log_menu_toggled(self.is_open());
    }

    /// A navigation link was followed
    pub fn close(&mut self) {
        if !self.state.peek().is_open() {
            return;
        }
        self.state.write().close();
        log_menu_toggled(false);
    }
}

pub fn use_menu() -> UseMenuReturn {
    let state = use_signal(MenuState::default);
    UseMenuReturn { state }
}
