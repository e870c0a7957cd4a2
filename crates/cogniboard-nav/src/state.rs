//! Navigation state machine combining viewport mode and menu state.

use tracing::debug;

use crate::menu::MenuState;
use crate::viewport::ViewportMode;

/// Combined navigation state for one app instance.
///
/// Invariant: the menu may only be `Open` while the mode is `Mobile`. A
/// resize into desktop while the overlay is open forces it closed, so a later
/// return to mobile widths cannot resurrect an overlay nobody re-opened.
///
/// All transitions are total: a trigger received outside its legal
/// originating state is a no-op rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    mode: ViewportMode,
    menu: MenuState,
}

impl NavState {
    /// State at mount: mode derived from the initial width, menu closed.
    pub fn new(width: f64) -> Self {
        Self {
            mode: ViewportMode::from_width(width),
            menu: MenuState::Closed,
        }
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    /// Re-derive the mode from a new viewport width.
    ///
    /// Idempotent and cheap; callers feed raw resize events without
    /// throttling. Crossing into desktop while the menu is open applies the
    /// forced reset.
    pub fn set_width(&mut self, width: f64) {
        let mode = ViewportMode::from_width(width);
        if mode == self.mode {
            return;
        }
        debug!(?mode, width, "viewport mode changed");
        self.mode = mode;
        if self.mode.is_desktop() && self.menu.is_open() {
            debug!("forcing menu closed on desktop transition");
            self.menu = MenuState::Closed;
        }
    }

    /// Menu button trigger. Legal only while mobile; otherwise a no-op,
    /// since the trigger is unreachable on desktop anyway.
    pub fn open_menu(&mut self) {
        if self.mode.is_mobile() {
            self.menu = MenuState::Open;
        }
    }

    /// Close button (or nav-link click) trigger. No-op while already closed.
    pub fn close_menu(&mut self) {
        self.menu = MenuState::Closed;
    }

    /// The desktop sidebar is rendered only in desktop mode.
    pub fn sidebar_visible(&self) -> bool {
        self.mode.is_desktop()
    }

    /// The mobile header (and its menu button) exists only in mobile mode.
    pub fn mobile_header_visible(&self) -> bool {
        self.mode.is_mobile()
    }

    /// Whether the overlay is shown and interactive.
    ///
    /// Checks the mode independently of the menu state, so even a bug that
    /// left the menu logically open off-mobile could not yield an invisible
    /// but interactive overlay.
    pub fn overlay_open(&self) -> bool {
        self.mode.is_mobile() && self.menu.is_open()
    }
}
