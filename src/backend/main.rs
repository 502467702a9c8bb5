/**
 * CineScope Server Entry Point
 *
 * Loads `.env`, initializes tracing, reads the configuration and serves the
 * Axum application until the process is stopped.
 */

use std::net::SocketAddr;

use cinescope::backend::server::{config::Config, create_app};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is not set
const DEFAULT_LOG_FILTER: &str = "info,cinescope=debug";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;
    let addr = config.socket_addr();

    let app = create_app(config).await?;

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
