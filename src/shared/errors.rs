use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavbarError {
    #[error("Scroll threshold must be a positive number of pixels, got {0}")]
    InvalidThreshold(f64),

    #[error("Scrolled breakpoint must be a non-negative number of pixels, got {0}")]
    InvalidBreakpoint(f64),

    #[error("Invalid navbar config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("No browser window available")]
    NoWindow,

    #[error("Scroll listener error: {0}")]
    Listener(String),
}

pub type Result<T> = std::result::Result<T, NavbarError>;
