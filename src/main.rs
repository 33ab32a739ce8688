use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;

use movies_api::catalog::{load_fixture, MovieStore};
use movies_api::config::AppConfig;
use movies_api::http::MovieServer;
use movies_api::observability::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration (MOVIES_CONFIG file, then PORT)
    let config = AppConfig::from_env()?;

    init_logging(&config.observability.log_level)?;

    tracing::info!("movies-api v{} starting", env!("CARGO_PKG_VERSION"));

    // Seed the store from the fixture
    let fixture_path = config.store.fixture_path.as_deref().map(Path::new);
    let store = Arc::new(MovieStore::new(load_fixture(fixture_path)?));

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        records = store.len(),
        request_timeout_secs = config.limits.request_timeout_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "server listening on port http://localhost:{}",
        local_addr.port()
    );

    let server = MovieServer::new(config, store);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
