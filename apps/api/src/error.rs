//! Error types for the HTTP boundary.
//!
//! Store failures inside the phrase service are already envelopes; only the
//! failures below are raised as errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use phrasebook_core::ValidationError;
use serde::Serialize;
use thiserror::Error;

/// API errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed path or query input, rejected before any store access.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Error searching phrases")]
    SearchFailed,

    #[error("Error fetching languages")]
    LanguagesFailed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::SearchFailed | ApiError::LanguagesFailed => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    status_code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            status_code: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
