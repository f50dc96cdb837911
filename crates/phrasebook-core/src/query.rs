//! # Phrase Query Rules
//!
//! Pure rules shared by the phrase listing and phrase search operations.
//!
//! ## Parameter Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Request parameters → PhraseQuery                       │
//! │                                                                         │
//! │  sort   ──► {created_at, phrase, updated_at}  else → created_at         │
//! │  order  ──► {asc, desc}                       else → asc                │
//! │  page   ──► positive integer                  else → 1                  │
//! │  limit  ──► positive integer (≤ max_limit)    else → 10                 │
//! │  status ──► exact match                       absent → no filter        │
//! │  query  ──► case-insensitive substring        empty  → every row        │
//! │                                                                         │
//! │  Invalid values never raise errors. Existing clients rely on this.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Matching is exact and case-sensitive: `DESC` is not `desc`, so it falls
//! back to ascending order.

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_LIMIT, DEFAULT_PAGE};

// =============================================================================
// Sort Column
// =============================================================================

/// Column a phrase listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    #[default]
    CreatedAt,
    Phrase,
    UpdatedAt,
}

impl SortColumn {
    /// Reads a sort column, falling back to `created_at` for anything else
    /// (including an empty or missing value).
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value {
            Some("created_at") => SortColumn::CreatedAt,
            Some("phrase") => SortColumn::Phrase,
            Some("updated_at") => SortColumn::UpdatedAt,
            _ => SortColumn::default(),
        }
    }

    /// Column name as it appears in SQL. Only ever one of three literals.
    pub const fn as_sql(&self) -> &'static str {
        match self {
            SortColumn::CreatedAt => "created_at",
            SortColumn::Phrase => "phrase",
            SortColumn::UpdatedAt => "updated_at",
        }
    }
}

// =============================================================================
// Sort Order
// =============================================================================

/// Direction of a phrase listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Reads a sort order, falling back to `asc` for anything else.
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub const fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

// =============================================================================
// Page Request
// =============================================================================

/// A 1-based page number and a page size, both at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Creates a page request. Zero values are replaced by the defaults.
    pub fn new(page: u32, limit: u32) -> Self {
        PageRequest {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
        }
    }

    /// Builds a page request from raw query-string values.
    ///
    /// Missing, non-numeric and non-positive values take the defaults.
    /// `limit` is clamped to `max_limit` (itself at least 1).
    ///
    /// ## Example
    /// ```rust
    /// use phrasebook_core::query::PageRequest;
    ///
    /// let page = PageRequest::from_params(Some("2"), Some("abc"), 1000);
    /// assert_eq!((page.page(), page.limit()), (2, 10));
    ///
    /// let page = PageRequest::from_params(None, Some("5000"), 1000);
    /// assert_eq!(page.limit(), 1000);
    /// ```
    pub fn from_params(page: Option<&str>, limit: Option<&str>, max_limit: u32) -> Self {
        let page = parse_positive(page).unwrap_or(DEFAULT_PAGE);
        let limit = parse_positive(limit)
            .unwrap_or(DEFAULT_LIMIT)
            .min(max_limit.max(1));

        PageRequest { page, limit }
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Rows to skip: `(page - 1) * limit`.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.limit)
    }

    /// Number of pages needed for `total_rows` at this page size.
    pub fn total_pages(&self, total_rows: i64) -> i64 {
        total_pages(total_rows, self.limit)
    }
}

/// `ceil(total_rows / limit)`; zero rows means zero pages.
pub fn total_pages(total_rows: i64, limit: u32) -> i64 {
    if total_rows <= 0 || limit == 0 {
        return 0;
    }
    let limit = i64::from(limit);
    (total_rows + limit - 1) / limit
}

/// Positive integer, saturating at `u32::MAX` for oversized digit strings.
fn parse_positive(value: Option<&str>) -> Option<u32> {
    let parsed = match value?.trim().parse::<u32>() {
        Ok(v) => v,
        Err(err) if *err.kind() == IntErrorKind::PosOverflow => u32::MAX,
        Err(_) => return None,
    };

    (parsed > 0).then_some(parsed)
}

// =============================================================================
// Filter
// =============================================================================

/// Row filter for phrase listings. `is_deleted = false` is always implied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseFilter {
    /// Substring to look for, case-insensitively.
    pub search: Option<String>,

    /// Exact status to match. Compared as text, so an unknown status simply
    /// matches nothing.
    pub status: Option<String>,
}

impl PhraseFilter {
    /// Filter with only the soft-delete condition.
    pub fn all() -> Self {
        PhraseFilter::default()
    }

    /// Substring search. An empty query still produces a pattern (`%%`),
    /// which matches every row.
    pub fn search(query: impl Into<String>) -> Self {
        PhraseFilter {
            search: Some(query.into()),
            status: None,
        }
    }

    /// Restricts to a status. Empty strings are treated as "no filter".
    pub fn with_status(mut self, status: Option<&str>) -> Self {
        self.status = status
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());
        self
    }

    /// `ILIKE` pattern for the search term, if any.
    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_deref().map(contains_pattern)
    }
}

/// Builds a `LIKE`/`ILIKE` pattern that matches `needle` as a literal
/// substring. `%`, `_` and the escape character itself are escaped with `\`.
///
/// ## Example
/// ```rust
/// use phrasebook_core::query::contains_pattern;
///
/// assert_eq!(contains_pattern("how ar"), "%how ar%");
/// assert_eq!(contains_pattern("100%"), "%100\\%%");
/// ```
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// =============================================================================
// Phrase Query
// =============================================================================

/// Everything needed to fetch one page of phrases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseQuery {
    pub filter: PhraseFilter,
    pub sort: SortColumn,
    pub order: SortOrder,
    pub page: PageRequest,
}

impl PhraseQuery {
    pub fn new(filter: PhraseFilter, sort: SortColumn, order: SortOrder, page: PageRequest) -> Self {
        PhraseQuery {
            filter,
            sort,
            order,
            page,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_column_fallback() {
        assert_eq!(SortColumn::parse_lenient(Some("phrase")), SortColumn::Phrase);
        assert_eq!(SortColumn::parse_lenient(Some("updated_at")), SortColumn::UpdatedAt);
        assert_eq!(SortColumn::parse_lenient(Some("")), SortColumn::CreatedAt);
        assert_eq!(SortColumn::parse_lenient(None), SortColumn::CreatedAt);
        assert_eq!(
            SortColumn::parse_lenient(Some("phrase; DROP TABLE phrases")),
            SortColumn::CreatedAt
        );
        assert_eq!(SortColumn::parse_lenient(Some("Phrase")), SortColumn::CreatedAt);
    }

    #[test]
    fn test_sort_order_fallback() {
        assert_eq!(SortOrder::parse_lenient(Some("desc")), SortOrder::Desc);
        assert_eq!(SortOrder::parse_lenient(Some("asc")), SortOrder::Asc);
        assert_eq!(SortOrder::parse_lenient(Some("DESC")), SortOrder::Asc);
        assert_eq!(SortOrder::parse_lenient(Some("sideways")), SortOrder::Asc);
        assert_eq!(SortOrder::parse_lenient(None), SortOrder::Asc);
    }

    #[test]
    fn test_page_defaults() {
        let page = PageRequest::from_params(None, None, 1000);
        assert_eq!(page, PageRequest::default());
        assert_eq!((page.page(), page.limit()), (1, 10));
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_page_rejects_non_positive_values() {
        let page = PageRequest::from_params(Some("0"), Some("-5"), 1000);
        assert_eq!((page.page(), page.limit()), (1, 10));

        let page = PageRequest::from_params(Some("two"), Some(""), 1000);
        assert_eq!((page.page(), page.limit()), (1, 10));

        assert_eq!(PageRequest::new(0, 0), PageRequest::default());
    }

    #[test]
    fn test_limit_is_clamped_only_above_ceiling() {
        assert_eq!(PageRequest::from_params(None, Some("25"), 1000).limit(), 25);
        assert_eq!(PageRequest::from_params(None, Some("1000"), 1000).limit(), 1000);
        assert_eq!(PageRequest::from_params(None, Some("1001"), 1000).limit(), 1000);
        assert_eq!(PageRequest::from_params(None, Some("3"), 0).limit(), 1);
    }

    #[test]
    fn test_oversized_values_saturate() {
        let page = PageRequest::from_params(Some("4294967296"), Some("2"), 1000);
        assert_eq!(page.page(), u32::MAX);
        assert!(page.offset() > 0);

        let page = PageRequest::from_params(None, Some("99999999999"), 1000);
        assert_eq!(page.limit(), 1000);

        let page = PageRequest::from_params(Some("999999999999999999999999"), None, 1000);
        assert_eq!(page.page(), u32::MAX);
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(4, 25).offset(), 75);
        assert_eq!(PageRequest::new(u32::MAX, 2).offset(), (i64::from(u32::MAX) - 1) * 2);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 1), 5);

        for rows in 0..50_i64 {
            for limit in 1..12_u32 {
                let pages = total_pages(rows, limit);
                assert!(pages * i64::from(limit) >= rows);
                assert!((pages - 1).max(0) * i64::from(limit) < rows.max(1));
            }
        }
    }

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern(""), "%%");
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(contains_pattern("c:\\dir"), "%c:\\\\dir%");
    }

    #[test]
    fn test_status_filter_ignores_empty() {
        assert_eq!(PhraseFilter::all().with_status(Some("")).status, None);
        assert_eq!(
            PhraseFilter::all().with_status(Some("active")).status.as_deref(),
            Some("active")
        );
        assert_eq!(PhraseFilter::all().search_pattern(), None);
        assert_eq!(
            PhraseFilter::search("").search_pattern().as_deref(),
            Some("%%")
        );
    }
}
