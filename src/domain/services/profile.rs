//! Progress → style mappings.
//!
//! Two independent profiles exist. `Eased` drives every value from the cubic
//! eased progress over 400px. `Blended` uses raw progress over 500px and
//! sizes the link container with a `calc()` blend of percentage and pixels,
//! so it grows from a centered pill into a full-width bar.

use serde::{Deserialize, Serialize};

use crate::domain::models::{
    CssLength, LayoutMode, LogoStyle, NavbarStyle, ScrollProgress, ScrollTracker,
};
use crate::domain::services::easing::{ease_in_out_cubic, lerp};

/// Layout switches to `Spread` once the driving progress passes this value
pub const SPREAD_BREAKPOINT: f64 = 0.3;
/// Backdrop blur kicks in past this raw progress
pub const BLUR_BREAKPOINT: f64 = 0.1;

const EASED_TRACKER: ScrollTracker = ScrollTracker::from_valid(400.0, 200.0);
const BLENDED_TRACKER: ScrollTracker = ScrollTracker::from_valid(500.0, 50.0);

/// Width of the link pill at the top of the page (Blended profile)
const PILL_WIDTH_PX: f64 = 720.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleProfile {
    #[default]
    Eased,
    Blended,
}

impl StyleProfile {
    pub const ALL: [StyleProfile; 2] = [StyleProfile::Eased, StyleProfile::Blended];

    /// Past this offset no profile renders anything different: every
    /// threshold is reached and every scrolled breakpoint is passed.
    pub fn saturation_offset() -> f64 {
        Self::ALL
            .iter()
            .map(|profile| {
                let tracker = profile.tracker();
                tracker.threshold().max(tracker.scrolled_breakpoint())
            })
            .fold(0.0, f64::max)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StyleProfile::Eased => "eased",
            StyleProfile::Blended => "blended",
        }
    }

    /// Scroll distance and `is_scrolled` breakpoint this profile animates over
    pub fn tracker(&self) -> ScrollTracker {
        match self {
            StyleProfile::Eased => EASED_TRACKER,
            StyleProfile::Blended => BLENDED_TRACKER,
        }
    }

    /// The value the interpolations are driven by
    pub fn drive(&self, progress: ScrollProgress) -> f64 {
        match self {
            StyleProfile::Eased => ease_in_out_cubic(progress.value()),
            StyleProfile::Blended => progress.value(),
        }
    }

    pub fn style(&self, progress: ScrollProgress) -> NavbarStyle {
        let driver = self.drive(progress);
        match self {
            StyleProfile::Eased => eased_style(progress, driver),
            StyleProfile::Blended => blended_style(progress, driver),
        }
    }
}

fn layout_for(driver: f64) -> LayoutMode {
    if driver > SPREAD_BREAKPOINT {
        LayoutMode::Spread
    } else {
        LayoutMode::Centered
    }
}

fn brand_marks(driver: f64) -> (LogoStyle, LogoStyle) {
    let logo = LogoStyle {
        opacity: 1.0 - driver,
        scale: lerp(1.0, 0.95, driver),
    };
    let inner_logo = LogoStyle {
        opacity: driver,
        scale: lerp(0.95, 1.0, driver),
    };
    (logo, inner_logo)
}

fn eased_style(progress: ScrollProgress, e: f64) -> NavbarStyle {
    let layout = layout_for(e);
    let (logo, inner_logo) = brand_marks(e);

    let (width, radius) = match layout {
        LayoutMode::Spread => (CssLength::Percent(100.0), CssLength::Rem(0.75)),
        LayoutMode::Centered => (CssLength::Auto, CssLength::Rem(0.5)),
    };

    NavbarStyle {
        padding: CssLength::Rem(lerp(1.5, 0.75, e)),
        background_alpha: lerp(0.0, 0.8, e),
        backdrop_blur: progress.value() > BLUR_BREAKPOINT,
        logo,
        inner_logo,
        layout,
        wrapper_width: width,
        container_width: width,
        container_offset: None,
        container_radius: radius,
        container_alpha: lerp(0.15, 0.2, e),
    }
}

fn blended_style(progress: ScrollProgress, p: f64) -> NavbarStyle {
    let (logo, inner_logo) = brand_marks(p);
    let remaining = 1.0 - p;

    NavbarStyle {
        padding: CssLength::Rem(lerp(1.5, 0.75, p)),
        background_alpha: lerp(0.0, 0.9, p),
        backdrop_blur: progress.value() > BLUR_BREAKPOINT,
        logo,
        inner_logo,
        layout: layout_for(p),
        wrapper_width: CssLength::Percent(100.0),
        container_width: CssLength::Blend {
            percent: 100.0 * p,
            px: PILL_WIDTH_PX * remaining,
        },
        container_offset: Some(CssLength::Blend {
            percent: 50.0 * remaining,
            px: -(PILL_WIDTH_PX / 2.0) * remaining,
        }),
        container_radius: CssLength::Rem(lerp(2.0, 0.75, p)),
        container_alpha: lerp(0.15, 0.2, p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eased_top_of_page() {
        let style = StyleProfile::Eased.style(ScrollProgress::TOP);
        assert_eq!(style.padding, CssLength::Rem(1.5));
        assert_eq!(style.background_alpha, 0.0);
        assert!(!style.backdrop_blur);
        assert_eq!(style.logo, LogoStyle { opacity: 1.0, scale: 1.0 });
        assert_eq!(style.inner_logo, LogoStyle { opacity: 0.0, scale: 0.95 });
        assert_eq!(style.layout, LayoutMode::Centered);
        assert_eq!(style.container_width, CssLength::Auto);
        assert_eq!(style.container_radius, CssLength::Rem(0.5));
        assert_eq!(style.container_alpha, 0.15);
        assert_eq!(style.container_offset, None);
    }

    #[test]
    fn test_eased_fully_scrolled() {
        let style = StyleProfile::Eased.style(ScrollProgress::FULL);
        assert_eq!(style.padding, CssLength::Rem(0.75));
        assert_eq!(style.background_alpha, 0.8);
        assert!(style.backdrop_blur);
        assert_eq!(style.logo, LogoStyle { opacity: 0.0, scale: 0.95 });
        assert_eq!(style.inner_logo, LogoStyle { opacity: 1.0, scale: 1.0 });
        assert_eq!(style.layout, LayoutMode::Spread);
        assert_eq!(style.container_width, CssLength::Percent(100.0));
        assert_eq!(style.container_radius, CssLength::Rem(0.75));
        assert!((style.container_alpha - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_eased_layout_switches_discretely_at_breakpoint() {
        // ease(t) == 0.3 at t = cbrt(0.075)
        let crossing = (SPREAD_BREAKPOINT / 4.0).cbrt();
        let before = StyleProfile::Eased.style(ScrollProgress::new(crossing - 1e-6));
        let after = StyleProfile::Eased.style(ScrollProgress::new(crossing + 1e-6));

        assert_eq!(before.layout, LayoutMode::Centered);
        assert_eq!(after.layout, LayoutMode::Spread);
        assert_ne!(before.container_width, after.container_width);
        assert_ne!(before.container_radius, after.container_radius);
        assert_ne!(before.links_style(), after.links_style());
    }

    #[test]
    fn test_blur_uses_raw_progress() {
        // ease(0.11) is ~0.005, blur still follows raw progress
        let style = StyleProfile::Eased.style(ScrollProgress::new(0.11));
        assert!(style.backdrop_blur);
        assert!(style.background_alpha < 0.01);
        assert!(!StyleProfile::Eased.style(ScrollProgress::new(0.1)).backdrop_blur);
    }

    #[test]
    fn test_blended_top_of_page_is_centered_pill() {
        let style = StyleProfile::Blended.style(ScrollProgress::TOP);
        assert_eq!(style.container_width.to_string(), "calc(0% + 720px)");
        assert_eq!(
            style.container_offset.map(|o| o.to_string()),
            Some("calc(50% - 360px)".to_string())
        );
        assert_eq!(style.container_radius, CssLength::Rem(2.0));
        assert_eq!(style.layout, LayoutMode::Centered);
    }

    #[test]
    fn test_blended_fully_scrolled_is_full_width() {
        let style = StyleProfile::Blended.style(ScrollProgress::FULL);
        assert_eq!(style.container_width.to_string(), "calc(100% + 0px)");
        assert_eq!(
            style.container_offset.map(|o| o.to_string()),
            Some("calc(0% + 0px)".to_string())
        );
        assert_eq!(style.background_alpha, 0.9);
        assert_eq!(style.layout, LayoutMode::Spread);
    }

    #[test]
    fn test_blended_uses_raw_progress() {
        let style = StyleProfile::Blended.style(ScrollProgress::new(0.25));
        assert_eq!(style.logo.opacity, 0.75);
        assert_eq!(style.inner_logo.opacity, 0.25);
        assert_eq!(StyleProfile::Blended.drive(ScrollProgress::new(0.25)), 0.25);
    }

    #[test]
    fn test_style_is_referentially_transparent() {
        for profile in [StyleProfile::Eased, StyleProfile::Blended] {
            for step in 0..=20 {
                let progress = ScrollProgress::new(step as f64 / 20.0);
                assert_eq!(profile.style(progress), profile.style(progress));
            }
        }
    }

    #[test]
    fn test_style_follows_drive() {
        let progress = ScrollProgress::new(0.35);
        let eased = StyleProfile::Eased;
        let driver = eased.drive(progress);
        assert_eq!(driver, ease_in_out_cubic(0.35));
        assert_eq!(eased.style(progress).inner_logo.opacity, driver);
        assert_eq!(StyleProfile::Blended.style(progress).inner_logo.opacity, 0.35);
    }

    #[test]
    fn test_saturation_offset_covers_every_profile() {
        assert_eq!(StyleProfile::saturation_offset(), 500.0);
        for profile in StyleProfile::ALL {
            let tracker = profile.tracker();
            let at = tracker.sample(StyleProfile::saturation_offset());
            let beyond = tracker.sample(5_000.0);
            assert_eq!(at.progress, beyond.progress);
            assert_eq!(at.is_scrolled, beyond.is_scrolled);
        }
    }

    #[test]
    fn test_trackers_per_profile() {
        assert_eq!(StyleProfile::Eased.tracker().threshold(), 400.0);
        assert_eq!(StyleProfile::Eased.tracker().scrolled_breakpoint(), 200.0);
        assert_eq!(StyleProfile::Blended.tracker().threshold(), 500.0);
        assert_eq!(StyleProfile::Blended.tracker().scrolled_breakpoint(), 50.0);
    }

    #[test]
    fn test_profile_serde_names() {
        assert_eq!(serde_json::to_string(&StyleProfile::Blended).unwrap(), "\"blended\"");
        let parsed: StyleProfile = serde_json::from_str("\"eased\"").unwrap();
        assert_eq!(parsed, StyleProfile::Eased);
        assert_eq!(StyleProfile::default().as_str(), "eased");
    }
}
