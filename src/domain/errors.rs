//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Resource not found
    NotFound,
    /// Input rejected before reaching the store
    Validation(String),
    /// A referenced owner account does not exist
    Reference(String),
    /// Uniqueness violation that could not be folded into an update
    Conflict(String),
    /// Database/persistence error (transient infrastructure, no retry here)
    Database(String),
    /// Generic internal error
    Internal(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound => write!(f, "Resource not found"),
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::Reference(msg) => write!(f, "Reference error: {}", msg),
            DomainError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer).
// SQLite reports constraint failures only through the message text.
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        let msg = e.to_string();
        if msg.contains("FOREIGN KEY constraint failed") {
            DomainError::Reference(msg)
        } else if msg.contains("UNIQUE constraint failed") {
            DomainError::Conflict(msg)
        } else {
            DomainError::Database(msg)
        }
    }
}
