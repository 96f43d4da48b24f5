//! World Overlay - Binary Entry Point

use std::sync::Arc;

use world_overlay::api::{create_router, AppState};
use world_overlay::probe::default_probe;
use world_overlay::{HttpWorldFetcher, OverlayConfig, OverlayResult, Poller, SnapshotPublisher};

#[tokio::main]
async fn main() -> OverlayResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = OverlayConfig::from_env()?;
    tracing::info!("{} {}", world_overlay::NAME, world_overlay::VERSION);

    let publisher = Arc::new(SnapshotPublisher::new());
    let state = Arc::new(AppState::new(Arc::clone(&publisher)));

    // The poller lives until the process exits
    let poller = Poller::new(default_probe(&config), HttpWorldFetcher::new()?, publisher);
    tokio::spawn(poller.run());

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("Overlay available at http://{}", config.bind);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down");
        })
        .await?;

    Ok(())
}
