//! # Phrase Repository
//!
//! Query construction and execution for the `phrases` table.
//!
//! ## Paged Listing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 One page = two independent statements                   │
//! │                                                                         │
//! │  PhraseQuery { filter, sort, order, page }                             │
//! │       │                                                                 │
//! │       ├──► SELECT COUNT(*) FROM phrases                                │
//! │       │      WHERE is_deleted = FALSE                                  │
//! │       │      [AND phrase ILIKE $n]        ← search term, escaped       │
//! │       │      [AND status::text = $n]      ← exact status               │
//! │       │                                                                 │
//! │       └──► SELECT <columns> FROM phrases                               │
//! │              WHERE <same filter>                                       │
//! │              ORDER BY <column> <ASC|DESC>, uuid ASC                    │
//! │              LIMIT $n OFFSET $n                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sort column and direction come from closed enums, so they are pushed
//! as SQL text; every user-supplied value is a bind parameter. The trailing
//! `uuid` key keeps page boundaries stable when sort values tie (seeded rows
//! share a `created_at`).

use phrasebook_core::{NewPhrase, Phrase, PhraseFilter, PhraseQuery};
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;

/// Columns selected for every phrase row, in `Phrase` field order.
const PHRASE_COLUMNS: &str =
    "uuid, phrase, status, created_at, updated_at, created_by, updated_by, is_deleted";

/// Repository for phrase database operations.
#[derive(Debug, Clone)]
pub struct PhraseRepository {
    pool: PgPool,
}

impl PhraseRepository {
    /// Creates a new PhraseRepository.
    pub fn new(pool: PgPool) -> Self {
        PhraseRepository { pool }
    }

    /// Counts live phrases matching `filter`, ignoring pagination.
    pub async fn count(&self, filter: &PhraseFilter) -> DbResult<i64> {
        let mut builder = count_query(filter);
        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    /// Fetches one page of live phrases.
    pub async fn page(&self, query: &PhraseQuery) -> DbResult<Vec<Phrase>> {
        let mut builder = page_query(query);
        let phrases = builder
            .build_query_as::<Phrase>()
            .fetch_all(&self.pool)
            .await?;

        Ok(phrases)
    }

    /// Runs the count and the page query, returning `(total_rows, rows)`.
    ///
    /// The two statements are not wrapped in a transaction; a concurrent
    /// write can make them disagree.
    pub async fn fetch_page(&self, query: &PhraseQuery) -> DbResult<(i64, Vec<Phrase>)> {
        debug!(
            search = ?query.filter.search,
            status = ?query.filter.status,
            sort = query.sort.as_sql(),
            order = query.order.as_sql(),
            page = query.page.page(),
            limit = query.page.limit(),
            "Fetching phrase page"
        );

        let total = self.count(&query.filter).await?;
        let rows = self.page(query).await?;

        debug!(total, returned = rows.len(), "Phrase page fetched");
        Ok((total, rows))
    }

    /// Gets a live phrase by its UUID.
    ///
    /// ## Returns
    /// * `Ok(Some(Phrase))` - Phrase found and not soft-deleted
    /// * `Ok(None)` - Missing or soft-deleted
    pub async fn get_by_id(&self, id: Uuid) -> DbResult<Option<Phrase>> {
        let sql = format!(
            "SELECT {PHRASE_COLUMNS} FROM phrases WHERE uuid = $1 AND is_deleted = FALSE LIMIT 1"
        );

        let phrase = sqlx::query_as::<_, Phrase>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(phrase)
    }

    /// Inserts a phrase; the store generates uuid and timestamps.
    pub async fn insert(&self, new: &NewPhrase) -> DbResult<Phrase> {
        debug!(phrase = %new.phrase, status = %new.status, "Inserting phrase");

        let sql = format!(
            "INSERT INTO phrases (phrase, status, created_by) VALUES ($1, $2, $3) \
             RETURNING {PHRASE_COLUMNS}"
        );

        let phrase = sqlx::query_as::<_, Phrase>(&sql)
            .bind(&new.phrase)
            .bind(new.status)
            .bind(&new.created_by)
            .fetch_one(&self.pool)
            .await?;

        Ok(phrase)
    }

    /// Flags a phrase as deleted without removing it.
    ///
    /// Returns whether a live row was hidden.
    pub async fn soft_delete(&self, id: Uuid) -> DbResult<bool> {
        let result = sqlx::query(
            "UPDATE phrases SET is_deleted = TRUE, updated_at = NOW() \
             WHERE uuid = $1 AND is_deleted = FALSE",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Removes every phrase (translations cascade). Seed use only.
    pub async fn delete_all(&self) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM phrases")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

// =============================================================================
// Query Construction
// =============================================================================

/// `SELECT COUNT(*)` over the filtered rows.
pub fn count_query(filter: &PhraseFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM phrases");
    push_filter(&mut builder, filter);
    builder
}

/// Sorted, paginated row query.
pub fn page_query(query: &PhraseQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {PHRASE_COLUMNS} FROM phrases"));
    push_filter(&mut builder, &query.filter);

    builder.push(format_args!(
        " ORDER BY {} {}, uuid ASC",
        query.sort.as_sql(),
        query.order.as_sql()
    ));
    builder
        .push(" LIMIT ")
        .push_bind(i64::from(query.page.limit()))
        .push(" OFFSET ")
        .push_bind(query.page.offset());

    builder
}

fn push_filter(builder: &mut QueryBuilder<'static, Postgres>, filter: &PhraseFilter) {
    builder.push(" WHERE is_deleted = FALSE");

    if let Some(pattern) = filter.search_pattern() {
        builder.push(" AND phrase ILIKE ").push_bind(pattern);
    }

    if let Some(status) = &filter.status {
        // Text comparison: an unknown status matches nothing instead of
        // failing the enum cast.
        builder.push(" AND status::text = ").push_bind(status.clone());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use phrasebook_core::{PageRequest, SortColumn, SortOrder};

    #[test]
    fn test_count_query_without_filters() {
        let builder = count_query(&PhraseFilter::all());
        assert_eq!(
            builder.sql(),
            "SELECT COUNT(*) FROM phrases WHERE is_deleted = FALSE"
        );
    }

    #[test]
    fn test_count_query_with_search_and_status() {
        let filter = PhraseFilter::search("how ar").with_status(Some("active"));
        let builder = count_query(&filter);
        assert_eq!(
            builder.sql(),
            "SELECT COUNT(*) FROM phrases WHERE is_deleted = FALSE \
             AND phrase ILIKE $1 AND status::text = $2"
        );
    }

    #[test]
    fn test_page_query_orders_and_paginates() {
        let query = PhraseQuery::new(
            PhraseFilter::all().with_status(Some("spam")),
            SortColumn::Phrase,
            SortOrder::Desc,
            PageRequest::new(3, 20),
        );

        let builder = page_query(&query);
        assert_eq!(
            builder.sql(),
            "SELECT uuid, phrase, status, created_at, updated_at, created_by, updated_by, is_deleted \
             FROM phrases WHERE is_deleted = FALSE AND status::text = $1 \
             ORDER BY phrase DESC, uuid ASC LIMIT $2 OFFSET $3"
        );
    }

    #[test]
    fn test_page_query_defaults() {
        let builder = page_query(&PhraseQuery::default());
        assert!(builder
            .sql()
            .ends_with("WHERE is_deleted = FALSE ORDER BY created_at ASC, uuid ASC LIMIT $1 OFFSET $2"));
    }

    #[test]
    fn test_hostile_sort_input_never_reaches_sql() {
        let query = PhraseQuery::new(
            PhraseFilter::search("'; DROP TABLE phrases; --"),
            SortColumn::parse_lenient(Some("phrase; DROP TABLE phrases")),
            SortOrder::parse_lenient(Some("desc; --")),
            PageRequest::default(),
        );

        let builder = page_query(&query);
        assert!(!builder.sql().contains("DROP"));
        assert!(builder.sql().contains("ORDER BY created_at ASC"));
    }
}
