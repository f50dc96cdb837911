//! # Language Repository
//!
//! Read access to the `languages` table, plus the inserts the seed process
//! needs.

use phrasebook_core::{Language, NewLanguage};
use sqlx::PgPool;
use tracing::debug;

use crate::error::DbResult;

const LANGUAGE_COLUMNS: &str =
    "uuid, language_code, language_name, created_at, updated_at, created_by, updated_by, is_deleted";

/// Repository for language database operations.
#[derive(Debug, Clone)]
pub struct LanguageRepository {
    pool: PgPool,
}

impl LanguageRepository {
    /// Creates a new LanguageRepository.
    pub fn new(pool: PgPool) -> Self {
        LanguageRepository { pool }
    }

    /// Lists every language that is not soft-deleted.
    ///
    /// Ordered by `language_code`, which is unique, so the order is stable
    /// across calls.
    pub async fn list_active(&self) -> DbResult<Vec<Language>> {
        let sql = format!(
            "SELECT {LANGUAGE_COLUMNS} FROM languages \
             WHERE is_deleted = FALSE ORDER BY language_code ASC"
        );

        let languages = sqlx::query_as::<_, Language>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = languages.len(), "Listed languages");
        Ok(languages)
    }

    /// Inserts a language.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - language code already exists
    pub async fn insert(&self, new: &NewLanguage) -> DbResult<Language> {
        debug!(code = %new.language_code, "Inserting language");

        let sql = format!(
            "INSERT INTO languages (language_code, language_name, created_by) \
             VALUES ($1, $2, $3) RETURNING {LANGUAGE_COLUMNS}"
        );

        let language = sqlx::query_as::<_, Language>(&sql)
            .bind(&new.language_code)
            .bind(&new.language_name)
            .bind(&new.created_by)
            .fetch_one(&self.pool)
            .await?;

        Ok(language)
    }

    /// Removes every language (translations cascade). Seed use only.
    pub async fn delete_all(&self) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM languages")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
