//! Job Text Splitter Service - Main Entry Point
//!
//! Splits job postings into embedding-ready chunks over HTTP.

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use job_text_splitter::api::{self, handlers::AppState};
use job_text_splitter::types::SplitterConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "job_text_splitter=info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SplitterConfig::from_env();
    // fail fast on a bad default rather than on the first request
    let strategy = config.strategy()?;

    info!("Starting Job Text Splitter v{}", env!("CARGO_PKG_VERSION"));
    info!(
        strategy = %strategy,
        max_chunk_size = config.max_chunk_size,
        chunk_overlap = config.chunk_overlap,
        "Default splitting options"
    );

    let state = Arc::new(AppState::new(config));

    let app = api::routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3018);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
