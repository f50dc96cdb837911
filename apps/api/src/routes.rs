//! # HTTP Handlers
//!
//! ```text
//! GET /health                     → {"status": "ok"} | 503
//! GET /language/list              → Envelope<Language[]>
//! GET /phrase/get-all-phrase      → paged Envelope<Phrase[]>
//! GET /phrase/search              → paged Envelope<Phrase[]>
//! GET /phrase/{id}                → Envelope<Phrase>          (400 on bad id)
//! GET /phrase/{id}/{language}     → Envelope<{translation}>
//! ```
//!
//! Query parameters are read as plain strings and interpreted leniently:
//! anything unusable falls back to its default instead of failing the request.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use phrasebook_core::{
    validation::{parse_uuid, validate_language_code},
    Envelope, PageRequest, PhraseFilter, PhraseQuery, SortColumn, SortOrder,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::error::ApiError;
use crate::services::phrase_service::TRANSLATION_NOT_FOUND;
use crate::AppState;

/// Raw query string of the phrase listing and search routes.
#[derive(Debug, Default, Deserialize)]
pub struct PhraseParams {
    pub query: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub status: Option<String>,
}

impl PhraseParams {
    /// Interprets the parameters; `query` is left to the caller.
    pub fn to_query(&self, max_limit: u32) -> PhraseQuery {
        PhraseQuery::new(
            PhraseFilter::all().with_status(self.status.as_deref()),
            SortColumn::parse_lenient(self.sort.as_deref()),
            SortOrder::parse_lenient(self.order.as_deref()),
            PageRequest::from_params(self.page.as_deref(), self.limit.as_deref(), max_limit),
        )
    }
}

/// Serializes an envelope with an HTTP status equal to its `statusCode`.
fn respond<T: Serialize>(envelope: Envelope<T>) -> Response {
    let status =
        StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(envelope)).into_response()
}

// =============================================================================
// Handlers
// =============================================================================

pub async fn health(State(state): State<AppState>) -> Response {
    if state.db.health_check().await {
        (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response()
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "unavailable" })),
        )
            .into_response()
    }
}

pub async fn list_languages(State(state): State<AppState>) -> Result<Response, ApiError> {
    let languages = state
        .languages
        .list_languages()
        .await
        .map_err(|_| ApiError::LanguagesFailed)?;

    Ok(respond(Envelope::ok(languages)))
}

pub async fn list_phrases(
    State(state): State<AppState>,
    Query(params): Query<PhraseParams>,
) -> Response {
    let query = params.to_query(state.config.max_page_limit);
    respond(state.phrases.list_phrases(&query).await)
}

pub async fn search_phrases(
    State(state): State<AppState>,
    Query(params): Query<PhraseParams>,
) -> Result<Response, ApiError> {
    let query = params.to_query(state.config.max_page_limit);
    let term = params.query.as_deref().unwrap_or("");

    let envelope = state.phrases.search_phrases(term, &query).await;
    if !envelope.is_success() {
        error!(message = ?envelope.message, "Phrase search failed");
        return Err(ApiError::SearchFailed);
    }

    Ok(respond(envelope))
}

pub async fn get_phrase(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_uuid(&id)?;
    Ok(respond(state.phrases.get_phrase_by_id(id).await))
}

pub async fn get_translation(
    State(state): State<AppState>,
    Path((id, language)): Path<(String, String)>,
) -> Response {
    // Neither a malformed id nor an over-long code can match a row, so both
    // answer 404 without a query. Earlier releases passed a malformed id
    // through to Postgres and answered 500 with the uuid cast error.
    let Ok(id) = parse_uuid(&id) else {
        return respond(Envelope::<()>::not_found(TRANSLATION_NOT_FOUND));
    };
    if validate_language_code(&language).is_err() {
        return respond(Envelope::<()>::not_found(TRANSLATION_NOT_FOUND));
    }

    respond(state.phrases.get_translation(id, &language).await)
}
