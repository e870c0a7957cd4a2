//! Leptos UI components

mod menu_overlay;
mod mobile_header;
mod sidebar;

pub use menu_overlay::MenuOverlay;
pub use mobile_header::MobileHeader;
pub use sidebar::Sidebar;
