use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use chat::GenerationClient;
use chat::gemini::GeminiGenerateContentProvider;
use request::GenerationConfig;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod prompt;
pub mod utils;

use config::Configuration;
use handlers::email::generate_email;
use handlers::index::index;
use utils::usage_callback;

pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

pub struct AppState {
    pub generation_client: GenerationClient,
    pub generation_config: GenerationConfig,
}

impl AppState {
    pub fn new(config: &Configuration, generation_client: GenerationClient) -> Self {
        Self {
            generation_client,
            generation_config: config.generation_config(),
        }
    }
}

pub fn build_generation_client(config: &Configuration) -> GenerationClient {
    match &config.api_key {
        Some(api_key) => {
            let provider = GeminiGenerateContentProvider::new(api_key, &config.model_name)
                .base_url(&config.api_base_url)
                .usage_callback(usage_callback);
            info!("Configured Gemini model: {}", provider.model());
            GenerationClient::new(provider)
        }
        None => {
            error!("Gemini API key not found in config!");
            GenerationClient::unavailable()
        }
    }
}

pub fn get_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate_email", post(generate_email))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
