//! Error types for the ProfNet application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire ProfNet application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum ProfNetError {
    /// A row with the same key already exists (account or connection)
    #[error("Duplicate {entity_type}: '{id}' already exists")]
    DuplicateKey {
        entity_type: &'static str,
        id: String,
    },

    /// Credentials did not match a stored account
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Entity not found or not visible to the caller
    #[error("{entity_type} '{id}' not found")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Connection request blocked by the eligibility gate
    #[error("Not eligible: {0}")]
    NotEligible(String),

    /// Malformed user input (non-numeric choice, unparsable date, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Backing store failure (query or connection level)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProfNetError {
    /// Creates a DuplicateKey error
    pub fn duplicate_key(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::DuplicateKey {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a NotEligible error
    pub fn not_eligible(message: impl Into<String>) -> Self {
        Self::NotEligible(message.into())
    }

    /// Creates an InvalidInput error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is a DuplicateKey error
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a NotAuthenticated error
    pub fn is_not_authenticated(&self) -> bool {
        matches!(self, Self::NotAuthenticated)
    }

    /// Check if this is a NotEligible error
    pub fn is_not_eligible(&self) -> bool {
        matches!(self, Self::NotEligible(_))
    }

    /// Check if this is a Storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

impl From<sqlx::Error> for ProfNetError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// A type alias for `Result<T, ProfNetError>`.
pub type Result<T> = std::result::Result<T, ProfNetError>;
