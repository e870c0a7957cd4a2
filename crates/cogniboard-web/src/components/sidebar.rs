//! Desktop sidebar navigation with inline Lucide-style SVG icons

use leptos::prelude::*;
use leptos_router::components::A;

/// Persistent sidebar shown in desktop mode.
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <h1 class="logo">"🧠 Cognitive Query Pro"</h1>
                <p class="subtitle">"Intelligent Document Analysis"</p>
            </div>

            <nav class="nav">
                <ul class="nav-list">
                    <li class="nav-item">
                        <A href="/" attr:class="nav-link">
                            <span class="nav-link-icon">
                                <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                    <path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/>
                                    <polyline points="9 22 9 12 15 12 15 22"/>
                                </svg>
                            </span>
                            <span class="nav-link-label">"Home"</span>
                        </A>
                    </li>
                    <li class="nav-item">
                        <A href="/analyzer" attr:class="nav-link">
                            <span class="nav-link-icon">
                                <svg xmlns="http://www.w3.org/2000/svg" width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                    <circle cx="11" cy="11" r="8"/>
                                    <path d="m21 21-4.3-4.3"/>
                                </svg>
                            </span>
                            <span class="nav-link-label">"Analyzer"</span>
                        </A>
                    </li>
                </ul>
            </nav>
        </aside>
    }
}
