//! Domain and store error models.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// identifiers). Infrastructure concerns belong in [`StoreError`]; missing
/// rows and denied access are expressed at the API boundary, not here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}

/// Infrastructure failure raised by an order or product store.
///
/// The display message is surfaced verbatim to API clients on 500 responses,
/// so implementations should keep it self-describing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing database rejected or failed a query.
    #[error("{0}")]
    Database(String),

    /// A stored row could not be decoded into its domain shape.
    #[error("failed to decode {entity} row: {message}")]
    Decode { entity: &'static str, message: String },
}

impl StoreError {
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn decode(entity: &'static str, msg: impl Into<String>) -> Self {
        Self::Decode {
            entity,
            message: msg.into(),
        }
    }
}
