//! # Error Types
//!
//! Domain-specific error types for phrasebook-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  phrasebook-core errors (this file)                                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  phrasebook-db errors (separate crate)                                 │
//! │  └── DbError          - Database operation failures (HTTP 500)         │
//! │                                                                         │
//! │  API errors (in app)                                                   │
//! │  └── ApiError         - What HTTP clients see                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors, raised at the request boundary before any
/// store access.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Identifier is not a hyphenated UUID.
    ///
    /// The message is part of the public API and must not change.
    #[error("Invalid UUID")]
    InvalidUuid,

    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_uuid_message_is_stable() {
        assert_eq!(ValidationError::InvalidUuid.to_string(), "Invalid UUID");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::TooLong {
            field: "language".to_string(),
            max: 10,
        };
        assert_eq!(err.to_string(), "language must be at most 10 characters");
    }
}
