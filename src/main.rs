//! Main entry point for the vote counter web server.
//!
//! Loads the JSON configuration, builds the immutable application state,
//! and serves the ballot over HTTP using the Axum web framework.

use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vote_counter::{AppState, Config, create_router};

#[tokio::main]
async fn main() {
    // Initialize tracing; RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.json".to_string());

    // Configuration problems are fatal; there is nothing to serve without
    // a valid candidate set.
    let config = match Config::load(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration ({config_path}): {e}");
            std::process::exit(1);
        }
    };

    let addr = match config.listen_addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!("invalid configuration ({config_path}): {e}");
            std::process::exit(1);
        }
    };

    let state = match AppState::new(config) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            error!("invalid configuration ({config_path}): {e}");
            std::process::exit(1);
        }
    };

    let app = create_router(state);

    info!("Server listening on http://{}", addr);
    info!("Available endpoints:");
    info!("  GET  /        - Ballot page");
    info!("  POST /vote    - Submit votes (urlencoded form)");
    info!("  GET  /health  - Health check");

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
