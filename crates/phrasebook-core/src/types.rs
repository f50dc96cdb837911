//! # Domain Types
//!
//! The three stored entities and the phrase workflow status.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Language     │   │   Translation   │   │     Phrase      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  uuid           │   │  uuid           │   │  uuid           │       │
//! │  │  language_code ◄├───┤  language_code  │   │  phrase         │       │
//! │  │  language_name  │   │  phrase_uuid  ──├──►│  status         │       │
//! │  └─────────────────┘   │  translation    │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Soft Delete
//! Every entity carries `is_deleted`. Rows are never removed by the read
//! path; they are only hidden. A phrase's `status` is a separate field:
//! a phrase with status `deleted` stays visible while `is_deleted` is false.
//!
//! Field names serialize in snake_case, matching the column names that
//! existing clients already consume.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// =============================================================================
// Language
// =============================================================================

/// A supported locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Language {
    /// Store-generated identifier.
    #[ts(as = "String")]
    pub uuid: Uuid,

    /// Short unique code, e.g. `en`, `fr` (at most 10 characters).
    pub language_code: String,

    /// Display name, e.g. `English`.
    pub language_name: String,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,

    pub created_by: Option<String>,

    pub updated_by: Option<String>,

    pub is_deleted: bool,
}

// =============================================================================
// Phrase Status
// =============================================================================

/// Workflow status of a phrase.
///
/// Independent of `is_deleted`; queries never filter on it implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(
    feature = "sqlx",
    sqlx(type_name = "phrase_status", rename_all = "lowercase")
)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PhraseStatus {
    Active,
    Pending,
    Spam,
    Deleted,
}

impl PhraseStatus {
    /// The stored (and wire) spelling of this status.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PhraseStatus::Active => "active",
            PhraseStatus::Pending => "pending",
            PhraseStatus::Spam => "spam",
            PhraseStatus::Deleted => "deleted",
        }
    }
}

impl fmt::Display for PhraseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Phrase
// =============================================================================

/// A unit of source text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Phrase {
    #[ts(as = "String")]
    pub uuid: Uuid,

    pub phrase: String,

    pub status: PhraseStatus,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,

    pub created_by: Option<String>,

    pub updated_by: Option<String>,

    pub is_deleted: bool,
}

// =============================================================================
// Translation
// =============================================================================

/// A phrase rendered in one language.
///
/// Callers expect one row per `(phrase_uuid, language_code)` pair, but the
/// schema does not enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Translation {
    #[ts(as = "String")]
    pub uuid: Uuid,

    #[ts(as = "String")]
    pub phrase_uuid: Uuid,

    pub language_code: String,

    pub translation: String,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,

    pub created_by: Option<String>,

    pub updated_by: Option<String>,

    pub is_deleted: bool,
}

/// Payload of the translation lookup: just the translated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TranslationText {
    pub translation: String,
}

// =============================================================================
// Insert Payloads
// =============================================================================
// Used by the seed process; the store fills in uuid and timestamps.

/// Fields needed to create a language.
#[derive(Debug, Clone)]
pub struct NewLanguage {
    pub language_code: String,
    pub language_name: String,
    pub created_by: String,
}

/// Fields needed to create a phrase.
#[derive(Debug, Clone)]
pub struct NewPhrase {
    pub phrase: String,
    pub status: PhraseStatus,
    pub created_by: String,
}

/// Fields needed to create a translation.
#[derive(Debug, Clone)]
pub struct NewTranslation {
    pub phrase_uuid: Uuid,
    pub language_code: String,
    pub translation: String,
    pub created_by: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
