use crate::shared::errors::{NavbarError, Result};

/// Normalized scroll depth, always within [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct ScrollProgress(f64);

impl ScrollProgress {
    pub const TOP: ScrollProgress = ScrollProgress(0.0);
    pub const FULL: ScrollProgress = ScrollProgress(1.0);

    /// Clamp an arbitrary value into [0, 1]. NaN maps to 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::TOP;
        }
        ScrollProgress(value.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// One reading of the viewport scroll position
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollSample {
    /// Offset in pixels, after clamping overscroll to zero
    pub offset: f64,
    pub progress: ScrollProgress,
    pub is_scrolled: bool,
}

impl ScrollSample {
    pub fn top() -> Self {
        Self::default()
    }
}

/// Turns raw vertical offsets into progress over a fixed pixel distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    threshold: f64,
    scrolled_breakpoint: f64,
}

impl ScrollTracker {
    pub fn new(threshold: f64, scrolled_breakpoint: f64) -> Result<Self> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(NavbarError::InvalidThreshold(threshold));
        }
        if !scrolled_breakpoint.is_finite() || scrolled_breakpoint < 0.0 {
            return Err(NavbarError::InvalidBreakpoint(scrolled_breakpoint));
        }
        Ok(Self {
            threshold,
            scrolled_breakpoint,
        })
    }

    /// For parameters known valid at compile time
    pub(crate) const fn from_valid(threshold: f64, scrolled_breakpoint: f64) -> Self {
        Self {
            threshold,
            scrolled_breakpoint,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn scrolled_breakpoint(&self) -> f64 {
        self.scrolled_breakpoint
    }

    /// `min(offset / threshold, 1)`, with negative (rubber-band) offsets read as 0
    pub fn progress(&self, offset: f64) -> ScrollProgress {
        ScrollProgress::new(sanitize_offset(offset) / self.threshold)
    }

    pub fn sample(&self, offset: f64) -> ScrollSample {
        let offset = sanitize_offset(offset);
        ScrollSample {
            offset,
            progress: self.progress(offset),
            is_scrolled: offset > self.scrolled_breakpoint,
        }
    }
}

fn sanitize_offset(offset: f64) -> f64 {
    if offset.is_finite() {
        offset.max(0.0)
    } else {
        0.0
    }
}
