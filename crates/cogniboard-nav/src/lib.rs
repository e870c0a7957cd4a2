//! cogniboard-nav - Navigation state core for cogniboard
//!
//! Holds the breakpoint controller and the mobile menu overlay state machine,
//! free of any UI framework so the transition rules can be tested headlessly.

pub mod menu;
pub mod state;
pub mod viewport;

pub use menu::MenuState;
pub use state::NavState;
pub use viewport::{ViewportMode, DESKTOP_MIN_WIDTH, MOBILE_MAX_WIDTH};
