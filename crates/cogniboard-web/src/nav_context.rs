//! Navigation context: the single `NavState` value shared across the chrome.

use cogniboard_nav::{NavState, ViewportMode};
use leptos::prelude::*;

/// Context wrapper around the navigation state machine.
///
/// One instance per app, provided at the root. Components read the derived
/// visibility queries reactively and feed user triggers and resize events
/// back through it; nobody touches the breakpoint constant directly.
#[derive(Clone, Copy)]
pub struct NavContext {
    state: RwSignal<NavState>,
}

impl NavContext {
    pub fn new(initial_width: f64) -> Self {
        Self {
            state: RwSignal::new(NavState::new(initial_width)),
        }
    }

    /// Feed a viewport width sample. Applies the desktop-forces-closed reset.
    pub fn set_width(&self, width: f64) {
        self.state.update(|nav| nav.set_width(width));
    }

    /// Hamburger button trigger.
    pub fn open_menu(&self) {
        self.state.update(|nav| nav.open_menu());
    }

    /// Close button or overlay nav-link trigger.
    pub fn close_menu(&self) {
        self.state.update(|nav| nav.close_menu());
    }

    pub fn mode(&self) -> ViewportMode {
        self.state.get().mode()
    }

    pub fn sidebar_visible(&self) -> bool {
        self.state.get().sidebar_visible()
    }

    pub fn mobile_header_visible(&self) -> bool {
        self.state.get().mobile_header_visible()
    }

    pub fn overlay_open(&self) -> bool {
        self.state.get().overlay_open()
    }
}

/// Create the navigation context and register it for the subtree.
pub fn provide_nav(initial_width: f64) -> NavContext {
    let nav = NavContext::new(initial_width);
    provide_context(nav);
    nav
}

/// Hook to access the navigation context.
pub fn use_nav() -> NavContext {
    expect_context::<NavContext>()
}
