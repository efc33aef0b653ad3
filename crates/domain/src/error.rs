//! Unified error types for the domain layer

use std::fmt::Display;

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Identifier is non-numeric, zero or negative
    #[error("Invalid {entity_type} ID: {value}")]
    InvalidId {
        entity_type: &'static str,
        value: String,
    },

    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Create an invalid ID error for the given entity kind.
    pub fn invalid_id(entity_type: &'static str, value: impl Display) -> Self {
        Self::InvalidId {
            entity_type,
            value: value.to_string(),
        }
    }

    /// Creates a validation error for invariant violations in loaded data.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
