use std::fmt;

/// Transition applied to every animated element so the browser smooths
/// between successive scroll samples
pub const STYLE_TRANSITION: &str = "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)";

/// Header background color (slate-900), alpha comes from progress
const HEADER_RGB: (u8, u8, u8) = (15, 23, 42);
/// Frosted container color, alpha comes from progress
const CONTAINER_RGB: (u8, u8, u8) = (255, 255, 255);

/// Logos at or below this opacity collapse to zero width
const LOGO_COLLAPSE_OPACITY: f64 = 0.1;

/// A CSS length value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CssLength {
    Auto,
    Zero,
    Rem(f64),
    Percent(f64),
    /// `calc(<percent>% + <px>px)`
    Blend { percent: f64, px: f64 },
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssLength::Auto => write!(f, "auto"),
            CssLength::Zero => write!(f, "0"),
            CssLength::Rem(v) => write!(f, "{}rem", css_number(*v)),
            CssLength::Percent(v) => write!(f, "{}%", css_number(*v)),
            CssLength::Blend { percent, px } => {
                let sign = if *px < 0.0 { '-' } else { '+' };
                write!(
                    f,
                    "calc({}% {} {}px)",
                    css_number(*percent),
                    sign,
                    css_number(px.abs())
                )
            }
        }
    }
}

/// Discrete arrangement of the desktop link container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Top of page: compact box, links centered
    Centered,
    /// Scrolled: full-width bar, logo and links pushed apart
    Spread,
}

impl LayoutMode {
    pub fn justify_content(&self) -> &'static str {
        match self {
            LayoutMode::Centered => "center",
            LayoutMode::Spread => "space-between",
        }
    }

    pub fn links_gap(&self) -> CssLength {
        match self {
            LayoutMode::Centered => CssLength::Rem(3.0),
            LayoutMode::Spread => CssLength::Rem(2.0),
        }
    }
}

/// Opacity and scale of one of the two brand marks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoStyle {
    pub opacity: f64,
    pub scale: f64,
}

impl LogoStyle {
    pub fn width(&self) -> CssLength {
        if self.opacity > LOGO_COLLAPSE_OPACITY {
            CssLength::Auto
        } else {
            CssLength::Zero
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "opacity: {}; transform: scale({}); width: {}; transition: {};",
            css_number(self.opacity),
            css_number(self.scale),
            self.width(),
            STYLE_TRANSITION
        )
    }
}

/// Every scroll-derived visual value of the navbar for one progress reading
#[derive(Debug, Clone, PartialEq)]
pub struct NavbarStyle {
    /// Header top/bottom padding
    pub padding: CssLength,
    pub background_alpha: f64,
    pub backdrop_blur: bool,
    /// Stand-alone brand shown at the top of the page
    pub logo: LogoStyle,
    /// Brand inside the link container, shown once scrolled
    pub inner_logo: LogoStyle,
    pub layout: LayoutMode,
    pub wrapper_width: CssLength,
    pub container_width: CssLength,
    /// Horizontal anchor offset of the container, when the profile positions it
    pub container_offset: Option<CssLength>,
    pub container_radius: CssLength,
    pub container_alpha: f64,
}

impl NavbarStyle {
    pub fn header_style(&self) -> String {
        let blur = if self.backdrop_blur { "blur(12px)" } else { "none" };
        format!(
            "padding-top: {p}; padding-bottom: {p}; background-color: {bg}; backdrop-filter: {blur}; transition: {t};",
            p = self.padding,
            bg = rgba(HEADER_RGB, self.background_alpha),
            blur = blur,
            t = STYLE_TRANSITION
        )
    }

    pub fn logo_style(&self) -> String {
        self.logo.to_css()
    }

    pub fn inner_logo_style(&self) -> String {
        self.inner_logo.to_css()
    }

    /// Desktop wrapper around the link container
    pub fn wrapper_style(&self) -> String {
        format!(
            "width: {}; transition: {};",
            self.wrapper_width, STYLE_TRANSITION
        )
    }

    pub fn container_style(&self) -> String {
        let mut css = format!(
            "width: {}; justify-content: {}; border-radius: {}; background-color: {};",
            self.container_width,
            self.layout.justify_content(),
            self.container_radius,
            rgba(CONTAINER_RGB, self.container_alpha)
        );
        if let Some(offset) = self.container_offset {
            css.push_str(&format!(" position: relative; left: {};", offset));
        }
        css.push_str(&format!(" transition: {};", STYLE_TRANSITION));
        css
    }

    pub fn links_style(&self) -> String {
        format!(
            "gap: {}; transition: {};",
            self.layout.links_gap(),
            STYLE_TRANSITION
        )
    }
}

fn rgba((r, g, b): (u8, u8, u8), alpha: f64) -> String {
    format!("rgba({}, {}, {}, {})", r, g, b, css_number(alpha))
}

/// Round to 4 decimals so float noise (0.30000000000000004) stays out of the DOM
pub(crate) fn css_number(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    // -0.0 + 0.0 == +0.0, avoids rendering "-0"
    format!("{}", rounded + 0.0)
}
