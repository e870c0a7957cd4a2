//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{MenuOverlay, MobileHeader, Sidebar};
use crate::nav_context::provide_nav;
use crate::pages::{Analyzer, Home};
use crate::viewport_hook::{use_viewport_width, PRERENDER_WIDTH};

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    let nav = provide_nav(PRERENDER_WIDTH);

    // Viewport width is an injected signal, not an ambient lookup; the nav
    // machine re-derives its mode on every sample.
    let width = use_viewport_width();
    Effect::new(move |_| {
        nav.set_width(width.get());
    });

    view! {
        <Router>
            <div class="app">
                // Mobile chrome exists only in mobile mode: on desktop the
                // menu trigger and overlay are absent, not hidden.
                <Show when=move || nav.mobile_header_visible()>
                    <MobileHeader />
                    <MenuOverlay />
                </Show>

                <div class="layout">
                    <Show when=move || nav.sidebar_visible()>
                        <Sidebar />
                    </Show>

                    <main class="content">
                        <Routes fallback=|| "Not found">
                            <Route path=path!("/") view=Home />
                            <Route path=path!("/analyzer") view=Analyzer />
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}
