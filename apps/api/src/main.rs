mod analysis;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod report;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::OpenAiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    if config.openai_api_key.is_none() {
        warn!("No provider API key configured (GPT4O_API_KEY / OPENAI_API_KEY); analyses will fail");
    }

    let provider = OpenAiClient::new(config.openai_api_key.clone(), &config.openai_base_url);
    info!(
        "LLM client initialized (model: {}, base: {})",
        llm_client::MODEL,
        config.openai_base_url
    );

    let state = AppState {
        provider: Arc::new(provider),
        config: config.clone(),
    };

    // The upload form is served from a separate origin.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
