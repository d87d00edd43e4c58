mod config;
mod editor;
mod errors;
mod formatter;
mod llm_client;
mod models;
mod parsing;
mod routes;
mod sessions;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::parsing::structurer::{LlmStructurer, ResumeStructurer};
use crate::routes::build_router;
use crate::sessions::SessionStore;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let crate_name = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{}={}", crate_name, &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume editor API v{}", env!("CARGO_PKG_VERSION"));

    // Structuring is optional: without an API key, uploads still return the
    // cleaned plain text for the display variant.
    let structurer: Option<Arc<dyn ResumeStructurer>> = match &config.anthropic_api_key {
        Some(key) => {
            info!("LLM structurer enabled (model: {})", llm_client::MODEL);
            Some(Arc::new(LlmStructurer::new(LlmClient::new(key.clone()))))
        }
        None => {
            info!("No ANTHROPIC_API_KEY set; uploads return raw parsed text only");
            None
        }
    };

    let sessions = SessionStore::new(config.session_ttl_secs);

    let state = AppState {
        config: config.clone(),
        structurer,
        sessions,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
