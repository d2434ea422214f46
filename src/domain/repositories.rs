//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;

/// A user's last recorded book and chapter position
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReadingProgress {
    pub id: i64,
    pub user_id: i64,
    pub last_book_read: String,
    pub chapter: i64,
}

/// Account data for collaborators that only need identity
#[derive(Debug, Clone, serde::Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Repository trait for the per-user reading position.
///
/// Each user has at most one record; `upsert` is the only write path for
/// book/chapter and folds concurrent first-time inserts into a single row.
#[async_trait]
pub trait ReadingProgressRepository: Send + Sync {
    /// Fetch a user's reading position. Absence is `Ok(None)`, not an error.
    async fn get(&self, user_id: i64) -> Result<Option<ReadingProgress>, DomainError>;

    /// Create or overwrite the user's reading position.
    ///
    /// Rejects empty `book` and negative `chapter` before touching the store.
    /// Fails with `DomainError::Reference` when `user_id` names no live
    /// account.
    async fn upsert(
        &self,
        user_id: i64,
        book: &str,
        chapter: i64,
    ) -> Result<ReadingProgress, DomainError>;

    /// Remove the user's reading position. No-op if absent.
    async fn delete(&self, user_id: i64) -> Result<(), DomainError>;
}

/// Repository trait for user accounts.
///
/// Account management proper lives outside this crate; this surface exists so
/// the ownership contract of reading progress (unique owner, cascade on
/// account deletion) is enforceable and testable.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create an account. `DomainError::Conflict` on duplicate username.
    async fn create(&self, username: &str) -> Result<User, DomainError>;

    /// Find an account by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Delete an account and, in the same transaction, its reading-progress
    /// row. `DomainError::NotFound` when no such account exists.
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
