//! SeaORM implementation of ReadingProgressRepository

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, TransactionError,
    TransactionTrait,
};

use crate::domain::{DomainError, ReadingProgress, ReadingProgressRepository};
use crate::models::book_reader::{ActiveModel, Column, Entity as BookReaderEntity, Model};
use crate::models::user::Entity as UserEntity;

/// SeaORM-based implementation of ReadingProgressRepository
pub struct SeaOrmReadingProgressRepository {
    db: DatabaseConnection,
}

impl SeaOrmReadingProgressRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReadingProgressRepository for SeaOrmReadingProgressRepository {
    async fn get(&self, user_id: i64) -> Result<Option<ReadingProgress>, DomainError> {
        let row = BookReaderEntity::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await?;

        Ok(row.map(ReadingProgress::from))
    }

    async fn upsert(
        &self,
        user_id: i64,
        book: &str,
        chapter: i64,
    ) -> Result<ReadingProgress, DomainError> {
        if book.trim().is_empty() {
            return Err(DomainError::Validation(
                "book identifier must not be empty".to_string(),
            ));
        }
        if chapter < 0 {
            return Err(DomainError::Validation(format!(
                "chapter must not be negative, got {}",
                chapter
            )));
        }

        let book = book.to_string();

        // Owner check and write share one transaction so they serialize
        // against the transactional cascade in user deletion; the SQLite
        // foreign_keys pragma binds per pooled connection and cannot be
        // relied on here.
        let stored = self
            .db
            .transaction::<_, Model, DomainError>(move |txn| {
                Box::pin(async move {
                    let owner = UserEntity::find_by_id(user_id).one(txn).await?;
                    if owner.is_none() {
                        return Err(DomainError::Reference(format!(
                            "no user account with id {}",
                            user_id
                        )));
                    }

                    // Single atomic statement: two concurrent first-time
                    // writers for the same user collapse onto one row, and a
                    // concurrent writer can never observe a mix of two
                    // records.
                    let row = ActiveModel {
                        user_id: Set(user_id),
                        last_book_read: Set(book),
                        chapter: Set(chapter),
                        updated_at: Set(chrono::Utc::now().to_rfc3339()),
                        ..Default::default()
                    };

                    BookReaderEntity::insert(row)
                        .on_conflict(
                            OnConflict::column(Column::UserId)
                                .update_columns([
                                    Column::LastBookRead,
                                    Column::Chapter,
                                    Column::UpdatedAt,
                                ])
                                .to_owned(),
                        )
                        .exec(txn)
                        .await?;

                    // last_insert_id is not meaningful on the conflict path,
                    // so re-read the row by its unique owner key.
                    BookReaderEntity::find()
                        .filter(Column::UserId.eq(user_id))
                        .one(txn)
                        .await?
                        .ok_or_else(|| {
                            DomainError::Internal(format!(
                                "reading progress for user {} missing after upsert",
                                user_id
                            ))
                        })
                })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Connection(e) => DomainError::from(e),
                TransactionError::Transaction(e) => e,
            })?;

        tracing::debug!(
            user_id,
            book = %stored.last_book_read,
            chapter = stored.chapter,
            "reading progress stored"
        );

        Ok(ReadingProgress::from(stored))
    }

    async fn delete(&self, user_id: i64) -> Result<(), DomainError> {
        // Idempotent: zero rows affected is fine.
        BookReaderEntity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await?;

        Ok(())
    }
}
