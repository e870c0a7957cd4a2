//! cogniboard-web - Web frontend for cogniboard using Leptos + Axum

pub mod app;
pub mod components;
pub mod nav_context;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod router;
pub mod viewport_hook;

pub use app::App;
pub use nav_context::{use_nav, NavContext};
#[cfg(feature = "ssr")]
pub use router::create_router;

#[cfg(feature = "ssr")]
use anyhow::Result;
#[cfg(feature = "ssr")]
use std::net::SocketAddr;
#[cfg(feature = "ssr")]
use tokio::net::TcpListener;
#[cfg(feature = "ssr")]
use tracing::info;

/// Run the web host serving the shell, stylesheet, and health probe.
#[cfg(feature = "ssr")]
pub async fn run(port: u16) -> Result<()> {
    let router = create_router();

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;

    info!("Web server listening on http://{}", addr);
    println!("Web server listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
