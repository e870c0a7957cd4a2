//! cogniboard - Cognitive Query Pro dashboard host

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cogniboard",
    version,
    about = "Cognitive Query Pro dashboard host",
    long_about = "Serves the Cognitive Query Pro dashboard: SPA shell, theme \
                  stylesheet, and health probe.\n\
                  \n\
                  Examples:\n\
                    cogniboard                       # Serve on the default port\n\
                    cogniboard serve --port 8080     # Custom port\n\
                  \n\
                  Environment Variables:\n\
                    COGNIBOARD_PORT                  # Override the web server port\n\
                    COGNIBOARD_LOG                   # Log filter (default: info)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Log filter directive (e.g. "debug", "cogniboard_web=trace")
    #[arg(long, env = "COGNIBOARD_LOG", default_value = "info")]
    log: String,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the web dashboard (default)
    Serve {
        /// Port for web server
        #[arg(long, env = "COGNIBOARD_PORT", default_value_t = default_port())]
        port: u16,
    },
}

const DEFAULT_PORT: u16 = 3333;

/// Port used when no --port flag is given. Consulted both by clap and by the
/// bare `cogniboard` invocation, so COGNIBOARD_PORT applies either way.
fn default_port() -> u16 {
    std::env::var("COGNIBOARD_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match cli
        .mode
        .unwrap_or_else(|| Mode::Serve { port: default_port() })
    {
        Mode::Serve { port } => {
            info!(port, "starting web host");
            cogniboard_web::run(port).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved_port(cli: Cli) -> u16 {
        let Mode::Serve { port } = cli
            .mode
            .unwrap_or_else(|| Mode::Serve { port: default_port() });
        port
    }

    // All COGNIBOARD_PORT cases live in one test: cargo runs tests in
    // parallel and the env var is process-global.
    #[test]
    fn port_resolution_honors_env_flag_and_default() {
        std::env::remove_var("COGNIBOARD_PORT");
        let cli = Cli::try_parse_from(["cogniboard"]).unwrap();
        assert_eq!(resolved_port(cli), DEFAULT_PORT);

        std::env::set_var("COGNIBOARD_PORT", "8080");

        // Env override applies on the bare invocation, without `serve`.
        let cli = Cli::try_parse_from(["cogniboard"]).unwrap();
        assert_eq!(resolved_port(cli), 8080);

        // And on the explicit subcommand.
        let cli = Cli::try_parse_from(["cogniboard", "serve"]).unwrap();
        assert_eq!(resolved_port(cli), 8080);

        // An explicit flag still beats the env var.
        let cli = Cli::try_parse_from(["cogniboard", "serve", "--port", "9000"]).unwrap();
        assert_eq!(resolved_port(cli), 9000);

        std::env::remove_var("COGNIBOARD_PORT");
    }
}
