//! # Response Envelope
//!
//! Every lookup answers with the same JSON shape:
//!
//! ```text
//! {
//!   "data":        <payload or null>,
//!   "statusCode":  200 | 404 | 500,
//!   "totalRows":   <paged results only>,
//!   "currentPage": <paged results only>,
//!   "totalPages":  <paged results only>,
//!   "message":     <404 / 500 only>
//! }
//! ```
//!
//! Store failures are reported inside the envelope, not raised. The text
//! that goes into `message` for those failures is produced in one place,
//! [`ErrorDisclosure::render`], so the verbatim store error can be swapped
//! for a fixed message without touching any call site.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::query::PageRequest;

/// 200
pub const STATUS_OK: u16 = 200;
/// 404
pub const STATUS_NOT_FOUND: u16 = 404;
/// 500
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Message used for store failures in sanitized mode.
pub const SANITIZED_MESSAGE: &str = "Internal server error";

// =============================================================================
// Error Disclosure
// =============================================================================

/// How much of a store error reaches the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorDisclosure {
    /// Raw error text. Leaks driver/server detail; kept as the default for
    /// compatibility with existing clients.
    #[default]
    Verbatim,

    /// Fixed [`SANITIZED_MESSAGE`] for every store failure.
    Sanitized,
}

impl ErrorDisclosure {
    pub fn render(&self, err: &dyn Display) -> String {
        match self {
            ErrorDisclosure::Verbatim => err.to_string(),
            ErrorDisclosure::Sanitized => SANITIZED_MESSAGE.to_string(),
        }
    }
}

// =============================================================================
// Envelope
// =============================================================================

/// Uniform response wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Envelope<T> {
    /// Payload; `null` on 404 and 500.
    pub data: Option<T>,

    pub status_code: u16,

    /// Matching rows before pagination.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub total_rows: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub current_page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub total_pages: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// 200 with a payload.
    pub fn ok(data: T) -> Self {
        Envelope {
            data: Some(data),
            status_code: STATUS_OK,
            total_rows: None,
            current_page: None,
            total_pages: None,
            message: None,
        }
    }

    /// 200 with one page of rows and the page metadata.
    ///
    /// `totalPages` is derived from `total_rows` and the page size.
    pub fn paged(data: T, total_rows: i64, page: PageRequest) -> Self {
        Envelope {
            total_rows: Some(total_rows),
            current_page: Some(page.page()),
            total_pages: Some(page.total_pages(total_rows)),
            ..Envelope::ok(data)
        }
    }

    /// 404 with a fixed message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Envelope::error(STATUS_NOT_FOUND, message)
    }

    /// 500 for a store failure, message rendered through `disclosure`.
    pub fn failure(err: &dyn Display, disclosure: ErrorDisclosure) -> Self {
        Envelope::error(STATUS_INTERNAL_ERROR, disclosure.render(err))
    }

    /// `data: null` with the given status and message.
    pub fn error(status_code: u16, message: impl Into<String>) -> Self {
        Envelope {
            data: None,
            status_code,
            total_rows: None,
            current_page: None,
            total_pages: None,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code == STATUS_OK
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
