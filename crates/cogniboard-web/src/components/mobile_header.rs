//! Mobile header bar with the menu trigger
//!
//! Rendered only while the viewport is in mobile mode, so the trigger is
//! structurally unreachable on desktop rather than merely hidden.

use leptos::prelude::*;

use crate::nav_context::use_nav;

/// Fixed header bar shown below the breakpoint; sole navigation entry point
/// on mobile.
#[component]
pub fn MobileHeader() -> impl IntoView {
    let nav = use_nav();

    view! {
        <header class="mobile-header">
            <div class="mobile-header-brand">
                <span class="logo">"🧠 Cognitive Query Pro"</span>
            </div>
            <button
                class="menu-button"
                on:click=move |_| nav.open_menu()
                aria-label="Open menu"
                aria-expanded=move || nav.overlay_open().to_string()
            >
                <span class="menu-button-icon">"☰"</span>
            </button>
        </header>
    }
}
