//! # Phrase Service
//!
//! Listing, search and lookup of phrases, answered as [`Envelope`]s.
//!
//! ## Failure Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  repository call ──► Ok(rows)        ──► Envelope { data, 200 }        │
//! │        │                                                                │
//! │        ├───────────► Ok(None)        ──► Envelope { null, 404, msg }   │
//! │        │                                                                │
//! │        └───────────► Err(DbError)    ──► warn! + Envelope {            │
//! │                                            null, 500,                   │
//! │                                            disclosure.render(err) }     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No method returns `Err`; callers only ever inspect `statusCode`.

use phrasebook_core::{Envelope, ErrorDisclosure, Phrase, PhraseQuery, TranslationText};
use phrasebook_db::{Database, DbError};
use tracing::{debug, warn};
use uuid::Uuid;

pub const PHRASE_NOT_FOUND: &str = "Phrase not found";
pub const TRANSLATION_NOT_FOUND: &str = "Translation not found";

/// Phrase query engine.
#[derive(Debug, Clone)]
pub struct PhraseService {
    db: Database,
    disclosure: ErrorDisclosure,
}

impl PhraseService {
    pub fn new(db: Database, disclosure: ErrorDisclosure) -> Self {
        PhraseService { db, disclosure }
    }

    /// One page of live phrases, optionally restricted to a status.
    pub async fn list_phrases(&self, query: &PhraseQuery) -> Envelope<Vec<Phrase>> {
        match self.db.phrases().fetch_page(query).await {
            Ok((total, rows)) => Envelope::paged(rows, total, query.page),
            Err(err) => self.failure("list phrases", err),
        }
    }

    /// Like [`PhraseService::list_phrases`], restricted to phrases whose
    /// text contains `term` case-insensitively. An empty term matches all.
    pub async fn search_phrases(&self, term: &str, query: &PhraseQuery) -> Envelope<Vec<Phrase>> {
        let mut query = query.clone();
        query.filter.search = Some(term.to_string());

        debug!(term, "Searching phrases");
        match self.db.phrases().fetch_page(&query).await {
            Ok((total, rows)) => Envelope::paged(rows, total, query.page),
            Err(err) => self.failure("search phrases", err),
        }
    }

    /// A single live phrase.
    pub async fn get_phrase_by_id(&self, id: Uuid) -> Envelope<Phrase> {
        match self.db.phrases().get_by_id(id).await {
            Ok(Some(phrase)) => Envelope::ok(phrase),
            Ok(None) => Envelope::not_found(PHRASE_NOT_FOUND),
            Err(err) => self.failure("get phrase", err),
        }
    }

    /// The text of `phrase_uuid` in `language_code`.
    pub async fn get_translation(
        &self,
        phrase_uuid: Uuid,
        language_code: &str,
    ) -> Envelope<TranslationText> {
        match self.db.translations().find_text(phrase_uuid, language_code).await {
            Ok(Some(translation)) => Envelope::ok(TranslationText { translation }),
            Ok(None) => Envelope::not_found(TRANSLATION_NOT_FOUND),
            Err(err) => self.failure("get translation", err),
        }
    }

    fn failure<T>(&self, operation: &str, err: DbError) -> Envelope<T> {
        warn!(operation, error = %err, "Store error reported in envelope");
        Envelope::failure(&err, self.disclosure)
    }
}
