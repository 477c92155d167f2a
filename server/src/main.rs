#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use config::ServerConfig;
use error::ServerError;

#[tokio::main]
async fn main() {
    // A missing .env file is normal outside local development.
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "command center server stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        assets_dir = %config.assets_dir.display(),
        "configuration loaded"
    );

    let app = routes::app(&config)?;
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "command center listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
