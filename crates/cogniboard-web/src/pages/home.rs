//! Home page with the feature overview cards

use leptos::prelude::*;

/// Landing page content.
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="page home-page">
            <div class="hero">
                <h1 class="hero-title">"Welcome to Cognitive Query Pro"</h1>
                <h4 class="hero-subtitle">"Your Intelligent Document Analysis Partner"</h4>
            </div>

            <div class="card-grid">
                <div class="card feature-card">
                    <h3 class="feature-card-title">"🤖 Agentic Power"</h3>
                    <p class="feature-card-body">
                        "A router agent reads your query and picks the right worker: \
                         fast Q&A for simple questions, the report agent for complex \
                         summaries."
                    </p>
                </div>
                <div class="card feature-card">
                    <h3 class="feature-card-title">"🎯 Precision Q&A"</h3>
                    <p class="feature-card-body">
                        "Ask about a specific document, like \"What is the conclusion \
                         in 'project_plan.pdf'?\", and the search stays scoped to that \
                         file."
                    </p>
                </div>
                <div class="card feature-card">
                    <h3 class="feature-card-title">"🚀 How to Start"</h3>
                    <p class="feature-card-body">
                        "Open the Analyzer page, upload your PDF or TXT documents, \
                         process them, and start chatting."
                    </p>
                </div>
            </div>
        </div>
    }
}
