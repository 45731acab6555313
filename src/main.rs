//! RSS Aggregation Service — Binary Entrypoint
//! Boots the Axum HTTP server, wiring the feed store, fetcher, and routes.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rss_aggregator::api::{self, AppState};
use rss_aggregator::fetch::HttpFeedFetcher;
use rss_aggregator::store::FeedStore;

/// Fixed listening port; the service takes no other configuration.
const LISTEN_ADDR: &str = "0.0.0.0:8080";

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rss_aggregator=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op elsewhere.
    let _ = dotenvy::dotenv();
    init_tracing();

    let state = AppState::new(Arc::new(FeedStore::new()), Arc::new(HttpFeedFetcher::new()));
    let router = api::router(state);

    let listener = TcpListener::bind(LISTEN_ADDR).await?;
    tracing::info!(addr = %listener.local_addr()?, "rss aggregator listening");
    axum::serve(listener, router).await?;

    Ok(())
}
