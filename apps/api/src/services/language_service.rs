//! Language listing.

use phrasebook_core::Language;
use phrasebook_db::{Database, DbResult};
use tracing::warn;

/// Language service.
#[derive(Debug, Clone)]
pub struct LanguageService {
    db: Database,
}

impl LanguageService {
    pub fn new(db: Database) -> Self {
        LanguageService { db }
    }

    /// Every language that is not soft-deleted, ordered by code.
    ///
    /// Errors propagate; the handler turns them into a fixed 500 message.
    pub async fn list_languages(&self) -> DbResult<Vec<Language>> {
        self.db.languages().list_active().await.map_err(|err| {
            warn!(error = %err, "Failed to list languages");
            err
        })
    }
}
