//! # Translation Repository
//!
//! Lookup of a phrase's text in one language.
//!
//! Unlike phrase reads, the lookup does not filter on `is_deleted`: a
//! soft-deleted translation is still returned. Existing clients depend on
//! this, so it is kept as is.

use phrasebook_core::{NewTranslation, Translation};
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;

const TRANSLATION_COLUMNS: &str = "uuid, phrase_uuid, language_code, translation, \
     created_at, updated_at, created_by, updated_by, is_deleted";

/// Repository for translation database operations.
#[derive(Debug, Clone)]
pub struct TranslationRepository {
    pool: PgPool,
}

impl TranslationRepository {
    /// Creates a new TranslationRepository.
    pub fn new(pool: PgPool) -> Self {
        TranslationRepository { pool }
    }

    /// Returns the translated text for `(phrase_uuid, language_code)`.
    ///
    /// If duplicates exist, whichever row the store yields first wins.
    pub async fn find_text(&self, phrase_uuid: Uuid, language_code: &str) -> DbResult<Option<String>> {
        debug!(%phrase_uuid, language_code, "Looking up translation");

        let text = sqlx::query_scalar::<_, String>(
            "SELECT translation FROM translations \
             WHERE phrase_uuid = $1 AND language_code = $2 LIMIT 1",
        )
        .bind(phrase_uuid)
        .bind(language_code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(text)
    }

    /// Inserts a translation.
    ///
    /// ## Returns
    /// * `Err(DbError::ForeignKeyViolation)` - unknown phrase or language
    pub async fn insert(&self, new: &NewTranslation) -> DbResult<Translation> {
        debug!(phrase_uuid = %new.phrase_uuid, code = %new.language_code, "Inserting translation");

        let sql = format!(
            "INSERT INTO translations (phrase_uuid, language_code, translation, created_by) \
             VALUES ($1, $2, $3, $4) RETURNING {TRANSLATION_COLUMNS}"
        );

        let translation = sqlx::query_as::<_, Translation>(&sql)
            .bind(new.phrase_uuid)
            .bind(&new.language_code)
            .bind(&new.translation)
            .bind(&new.created_by)
            .fetch_one(&self.pool)
            .await?;

        Ok(translation)
    }

    /// Flags a translation as deleted without removing it.
    pub async fn soft_delete(&self, id: Uuid) -> DbResult<bool> {
        let result = sqlx::query(
            "UPDATE translations SET is_deleted = TRUE, updated_at = NOW() \
             WHERE uuid = $1 AND is_deleted = FALSE",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Removes every translation. Seed use only.
    pub async fn delete_all(&self) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM translations")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
