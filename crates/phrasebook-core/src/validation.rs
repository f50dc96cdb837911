//! # Validation Module
//!
//! Boundary input parsing for the REST layer.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP handler                                                 │
//! │  └── THIS MODULE: identifiers must be hyphenated UUIDs (else 400)      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Query rules (query.rs)                                       │
//! │  └── sort/order/page/limit fall back silently, never reject            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (PostgreSQL)                                        │
//! │  ├── NOT NULL / UNIQUE constraints                                     │
//! │  └── Foreign keys with ON DELETE CASCADE                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use uuid::Uuid;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest language code the schema accepts.
pub const MAX_LANGUAGE_CODE_LEN: usize = 10;

/// Parses a path identifier as a UUID.
///
/// Only the canonical 36-character hyphenated form is accepted, in any
/// letter case. Braced, URN and bare-hex spellings are rejected.
///
/// ## Example
/// ```rust
/// use phrasebook_core::validation::parse_uuid;
///
/// assert!(parse_uuid("67e55044-10b1-426f-9247-bb680e5fe0c8").is_ok());
/// assert!(parse_uuid("invalid-uuid").is_err());
/// assert!(parse_uuid("67e5504410b1426f9247bb680e5fe0c8").is_err());
/// ```
pub fn parse_uuid(value: &str) -> ValidationResult<Uuid> {
    if value.len() != 36 {
        return Err(ValidationError::InvalidUuid);
    }

    Uuid::try_parse(value).map_err(|_| ValidationError::InvalidUuid)
}

/// Validates a language code.
///
/// ## Rules
/// - Must not be empty
/// - At most [`MAX_LANGUAGE_CODE_LEN`] characters
pub fn validate_language_code(code: &str) -> ValidationResult<()> {
    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "language".to_string(),
        });
    }

    if code.chars().count() > MAX_LANGUAGE_CODE_LEN {
        return Err(ValidationError::TooLong {
            field: "language".to_string(),
            max: MAX_LANGUAGE_CODE_LEN,
        });
    }

    Ok(())
}
