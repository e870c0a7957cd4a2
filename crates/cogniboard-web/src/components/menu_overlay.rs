//! Full-screen mobile menu overlay
//!
//! The overlay element stays in the DOM for the whole mobile session and is
//! driven purely by the `open` class. The stylesheet sequences the close:
//! opacity and scale ease out over 0.3s while the element keeps hit-testing,
//! and `visibility` flips to hidden only once that transition ends. Gating
//! the element behind `<Show when=open>` instead would snap it away.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::nav_context::use_nav;

/// Overlay menu toggled by the mobile header's menu button.
#[component]
pub fn MenuOverlay() -> impl IntoView {
    let nav = use_nav();

    // Close before navigation so the next page never starts under a stale
    // overlay.
    let close_menu = move |_| {
        nav.close_menu();
    };

    view! {
        <div class="menu-overlay" class:open=move || nav.overlay_open()>
            <button
                class="menu-overlay-close"
                on:click=move |_| nav.close_menu()
                aria-label="Close menu"
            >
                "✕"
            </button>

            <nav class="menu-overlay-nav">
                <ul class="menu-overlay-list">
                    <li class="menu-overlay-item">
                        <A href="/" attr:class="overlay-link" on:click=close_menu>
                            "Home"
                        </A>
                    </li>
                    <li class="menu-overlay-item">
                        <A href="/analyzer" attr:class="overlay-link" on:click=close_menu>
                            "Analyzer"
                        </A>
                    </li>
                </ul>
            </nav>
        </div>
    }
}
