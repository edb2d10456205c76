//! # aidoo_api
//!
//! HTTP chat relay for the ai.doo site.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;

use std::sync::Arc;

use aidoo_core::completion::{CompletionService, OpenAiClient};
use axum::Router;
use axum::routing::post;
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::chat;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: ApiConfig,
    /// Upstream completion service.
    pub completion: Arc<dyn CompletionService>,
}

impl AppState {
    /// State backed by the OpenAI client described by `config`.
    pub fn from_config(config: ApiConfig) -> Self {
        let completion = Arc::new(OpenAiClient::new(
            config.openai_base_url.clone(),
            config.openai_api_key.clone(),
        ));
        Self { config, completion }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let api = Router::new().route(
        routes::API_CHAT,
        post(chat::chat_handler).options(chat::chat_preflight),
    );

    Router::new()
        .merge(api)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::cors::allow_listed_origins,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
