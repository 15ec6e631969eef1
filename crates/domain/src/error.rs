//! Unified error types for the domain layer
//!
//! Provides a common error type for scenario validation and value parsing,
//! so adapters do not have to fall back to String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., a scenario document is malformed)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for document invariant violations.
    ///
    /// Use this when a scenario document breaks a structural rule:
    /// - Reserved `start` or `end` nodes are missing
    /// - A choice has an empty id
    /// - Two choices inside one node share an id
    ///
    /// # Example
    /// ```ignore
    /// if !scenario.nodes.contains_key(START_NODE) {
    ///     return Err(DomainError::validation("scenario has no start node"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
