// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::application::chart_service::ChartService;
use crate::infrastructure::config::load_server_config;
use crate::infrastructure::inference_client::HttpInferenceClient;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{health_check, process_chart, process_data, sort_files};

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/process-data/", post(process_data))
        .route("/sort_files/", post(sort_files))
        .route("/process-chart/", post(process_chart))
        .with_state(state)
        // The annotation tool is a static page served from elsewhere
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = load_server_config()?;
    let addr = config.server.socket_addr()?;

    // Create inference client (infrastructure layer)
    let inference = Arc::new(HttpInferenceClient::new(&config.inference)?);
    if config.inference.endpoints.is_empty() {
        tracing::warn!("No inference endpoints configured; /process-chart/ will answer 503");
    }

    // Create application state
    let state = Arc::new(AppState {
        chart_service: ChartService::new(inference),
    });

    let router = build_router(state);

    tracing::info!("Starting chart-digitizer service on {}", addr);
    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
