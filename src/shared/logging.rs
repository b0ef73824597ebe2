//! Structured logging for the navbar
//!
//! Scroll events fire at frame rate, so only state transitions are logged,
//! never individual samples.

use crate::domain::services::StyleProfile;

#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    ScrollListener,
    ScrollState,
    Menu,
    Config,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::ScrollListener => "scroll_listener",
            LogOperation::ScrollState => "scroll_state",
            LogOperation::Menu => "menu",
            LogOperation::Config => "config",
        }
    }
}

/// Log scroll listener registration
pub fn log_listener_attached(initial_offset: f64) {
    tracing::info!(
        operation = LogOperation::ScrollListener.as_str(),
        initial_offset = initial_offset,
        "Scroll listener attached"
    );
}

/// Log scroll listener removal (component unmounted)
pub fn log_listener_detached() {
    tracing::debug!(
        operation = LogOperation::ScrollListener.as_str(),
        "Scroll listener detached"
    );
}

/// Log failure to attach; the navbar stays in its top-of-page look
pub fn log_listener_error(error: &str) {
    tracing::warn!(
        operation = LogOperation::ScrollListener.as_str(),
        error = error,
        "Scroll listener unavailable, navbar will not animate"
    );
}

/// Log failure to remove the listener on teardown
pub fn log_listener_detach_error(error: &str) {
    tracing::error!(
        operation = LogOperation::ScrollListener.as_str(),
        error = error,
        "Failed to remove scroll listener"
    );
}

/// Log crossing the scrolled breakpoint in either direction
pub fn log_scrolled_changed(is_scrolled: bool, offset: f64) {
    tracing::debug!(
        operation = LogOperation::ScrollState.as_str(),
        is_scrolled = is_scrolled,
        offset = offset,
        "Scrolled state changed"
    );
}

pub fn log_menu_toggled(open: bool) {
    tracing::debug!(
        operation = LogOperation::Menu.as_str(),
        open = open,
        "Mobile menu toggled"
    );
}

/// Log config load
pub fn log_config_loaded(profile: StyleProfile, item_count: usize) {
    tracing::info!(
        operation = LogOperation::Config.as_str(),
        profile = profile.as_str(),
        item_count = item_count,
        "Navbar config loaded"
    );
}
