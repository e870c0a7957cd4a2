//! Breakpoint controller: derives the layout mode from the live viewport width.

/// Last viewport width (CSS pixels) that still renders the mobile layout.
pub const MOBILE_MAX_WIDTH: f64 = 992.0;

/// First viewport width that renders the desktop layout.
///
/// The split is asymmetric on purpose: 992 is mobile, 993 is desktop. Every
/// consumer derives its visibility from [`ViewportMode::from_width`] so the
/// threshold exists in exactly one place.
pub const DESKTOP_MIN_WIDTH: f64 = 993.0;

/// Layout variant selected by the current viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    /// Persistent sidebar, no mobile header.
    Desktop,
    /// Fixed mobile header bar, sidebar hidden, overlay-capable menu.
    Mobile,
}

impl ViewportMode {
    /// Pure mapping from viewport width to layout mode.
    ///
    /// Total over all non-negative widths and cheap enough to run on every
    /// resize event without throttling.
    pub fn from_width(width: f64) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            ViewportMode::Desktop
        } else {
            ViewportMode::Mobile
        }
    }

    pub fn is_desktop(self) -> bool {
        self == ViewportMode::Desktop
    }

    pub fn is_mobile(self) -> bool {
        self == ViewportMode::Mobile
    }
}
