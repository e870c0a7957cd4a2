//! Analyzer page placeholder
//!
//! Document upload and chat are owned by the page-rendering backend; this
//! route only gives the navigation chrome a second destination.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Analyzer() -> impl IntoView {
    view! {
        <div class="page analyzer-page">
            <div class="card analyzer-card">
                <h2 class="analyzer-title">"🔬 Analyzer"</h2>
                <p class="analyzer-body">
                    "Upload PDF or TXT documents, process them, and ask questions \
                     about their contents."
                </p>
                <div class="analyzer-actions">
                    <A href="/" attr:class="btn btn-primary">
                        "← Back to Home"
                    </A>
                </div>
            </div>
        </div>
    }
}
