//! # phrasebook-db: Database Layer for Phrasebook
//!
//! PostgreSQL access for the phrase lookup service, built on sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Phrasebook Data Flow                               │
//! │                                                                         │
//! │  GET /phrase/search?query=how                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PhraseService (apps/api)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   phrasebook-db (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐   ┌──────────────┐   │   │
//! │  │   │   Database    │    │  Repositories  │   │  Migrations  │   │   │
//! │  │   │   (pool.rs)   │    │                │   │  (embedded)  │   │   │
//! │  │   │               │    │ LanguageRepo   │   │ 001_schema   │   │   │
//! │  │   │ PgPool        │◄───│ PhraseRepo     │   │ 002_indexes  │   │   │
//! │  │   │ DbConfig      │    │ TranslationRepo│   │              │   │   │
//! │  │   └───────────────┘    └────────────────┘   └──────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PostgreSQL (languages, phrases, translations)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use phrasebook_core::PhraseQuery;
//! use phrasebook_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::from_env()?).await?;
//! let (total, rows) = db.phrases().fetch_page(&PhraseQuery::default()).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::language::LanguageRepository;
pub use repository::phrase::PhraseRepository;
pub use repository::translation::TranslationRepository;
