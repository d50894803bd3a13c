//! Buildboard server.

use std::path::Path;
use std::sync::Arc;

use buildboard_api::{AppState, routes};
use buildboard_config::ServerConfig;
use buildboard_store::FsProjectRepo;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Configuration is read once; it is immutable for the process lifetime.
    let config_path =
        std::env::var("BUILDBOARD_CONFIG").unwrap_or_else(|_| "buildboard.kdl".to_string());
    let config = if Path::new(&config_path).exists() {
        info!("Loading configuration from {}", config_path);
        buildboard_config::load_server_config(Path::new(&config_path))?
    } else {
        info!("No configuration file at {}, using defaults", config_path);
        ServerConfig::default()
    };

    let repo = Arc::new(FsProjectRepo::new(&config.projects_dir));
    let state = AppState::new(repo, config.build_history_limit);

    // Build router
    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start server
    info!(
        "Serving build results from {}",
        config.projects_dir.display()
    );
    info!("Starting server on {}", config.bind);

    let listener = TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
