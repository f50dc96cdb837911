//! # Repository Module
//!
//! Database repository implementations for Phrasebook.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PhraseService / LanguageService                                       │
//! │       │                                                                 │
//! │       │  db.phrases().fetch_page(&query)                               │
//! │       ▼                                                                 │
//! │  PhraseRepository                                                      │
//! │  ├── count(&self, filter)                                              │
//! │  ├── page(&self, query)                                                │
//! │  └── get_by_id(&self, id)                                              │
//! │       │                                                                 │
//! │       │  SQL                                                            │
//! │       ▼                                                                 │
//! │  PostgreSQL                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`language::LanguageRepository`] - Language listing
//! - [`phrase::PhraseRepository`] - Filtered, sorted, paginated phrase reads
//! - [`translation::TranslationRepository`] - Translation lookup

pub mod language;
pub mod phrase;
pub mod translation;
