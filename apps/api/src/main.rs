mod analysis;
mod assistant;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::analyzer::ResumeAnalyzer;
use crate::assistant::GenerativeAssistant;
use crate::config::Config;
use crate::extraction::DocumentExtractor;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails only on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the generative assistant; without a token every AI step degrades
    let assistant = build_assistant(&config);
    if !assistant.is_available() {
        warn!("AI features disabled; analyses will use heuristic feedback only");
    }

    let analyzer = ResumeAnalyzer::new(Arc::new(DocumentExtractor), assistant);

    // Build app state
    let state = AppState {
        analyzer,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_assistant(config: &Config) -> GenerativeAssistant {
    let Some(token) = config.huggingface_api_token.clone() else {
        warn!("HUGGINGFACE_API_TOKEN not set");
        return GenerativeAssistant::disabled();
    };

    match LlmClient::new(
        config.llm_api_url.clone(),
        token,
        config.llm_model.clone(),
        config.llm_request_timeout(),
    ) {
        Ok(client) => {
            info!("LLM client initialized (model: {})", client.model());
            GenerativeAssistant::new(Arc::new(client), config.llm_call_budget())
        }
        Err(e) => {
            warn!("Failed to initialize LLM client: {e}");
            GenerativeAssistant::disabled()
        }
    }
}
