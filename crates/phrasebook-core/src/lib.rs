//! # phrasebook-core: Pure Domain Logic for Phrasebook
//!
//! Domain types and the pure rules behind every phrase query: which columns
//! may be sorted on, how page parameters are read, and how results are
//! wrapped in the response envelope. Nothing in here touches a database.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Phrasebook Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 REST API (apps/api, axum)                       │   │
//! │  │   /phrase/search, /phrase/{id}, /language/list, ...             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ phrasebook-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   query   │  │ envelope  │  │ validation│  │   │
//! │  │   │  Phrase   │  │ SortColumn│  │ Envelope  │  │ parse_uuid│  │   │
//! │  │   │ Language  │  │PageRequest│  │ Disclosure│  │ page args │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               phrasebook-db (Database Layer)                    │   │
//! │  │         PostgreSQL queries, migrations, repositories            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Language, Phrase, Translation)
//! - [`query`] - Sort, order, page and filter rules for phrase listings
//! - [`envelope`] - Uniform `{data, statusCode, ...}` response shape
//! - [`validation`] - Boundary input parsing
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use phrasebook_core::query::{PageRequest, SortColumn, SortOrder};
//!
//! // Unknown sort columns and orders fall back silently.
//! assert_eq!(SortColumn::parse_lenient(Some("uuid")), SortColumn::CreatedAt);
//! assert_eq!(SortOrder::parse_lenient(Some("DESC")), SortOrder::Asc);
//!
//! let page = PageRequest::new(3, 10);
//! assert_eq!(page.offset(), 20);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod envelope;
pub mod error;
pub mod query;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use envelope::{Envelope, ErrorDisclosure};
pub use error::ValidationError;
pub use query::{PageRequest, PhraseFilter, PhraseQuery, SortColumn, SortOrder};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Page number used when the caller gives none (or an unusable one).
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the caller gives none (or an unusable one).
pub const DEFAULT_LIMIT: u32 = 10;

/// Default ceiling on page size.
///
/// Values at or below this are passed through untouched; larger values are
/// clamped. Deployments can raise it through `MAX_PAGE_LIMIT`.
pub const DEFAULT_MAX_LIMIT: u32 = 1000;

/// Author recorded on rows written by the seed process.
pub const SYSTEM_USER: &str = "system";
