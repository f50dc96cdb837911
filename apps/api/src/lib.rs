//! # Phrasebook API
//!
//! REST server for phrase and translation lookup.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           API Server                                    │
//! │                                                                         │
//! │  Client ───► axum (3000) ───► CorsLayer ───► TraceLayer                │
//! │                                                  │                      │
//! │                                                  ▼                      │
//! │                                   routes ───► services ───► PostgreSQL │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{http::HeaderValue, routing::get, Router};
use phrasebook_db::Database;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ApiConfig;
use crate::services::{LanguageService, PhraseService};

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub phrases: PhraseService,
    pub languages: LanguageService,
    pub config: Arc<ApiConfig>,
}

impl AppState {
    pub fn new(db: Database, config: ApiConfig) -> Self {
        AppState {
            phrases: PhraseService::new(db.clone(), config.disclosure),
            languages: LanguageService::new(db.clone()),
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let cors = cors_layer(state.config.cors_origins.as_deref());

    Router::new()
        .route("/health", get(routes::health))
        .route("/language/list", get(routes::list_languages))
        .route("/phrase/get-all-phrase", get(routes::list_phrases))
        .route("/phrase/search", get(routes::search_phrases))
        .route("/phrase/{id}", get(routes::get_phrase))
        .route("/phrase/{id}/{language}", get(routes::get_translation))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: Option<&[String]>) -> CorsLayer {
    let allow_origin = match origins {
        None => AllowOrigin::any(),
        Some(list) => AllowOrigin::list(list.iter().filter_map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| warn!(%origin, "Ignoring malformed CORS origin"))
                .ok()
        })),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
