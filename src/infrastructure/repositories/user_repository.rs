//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set, TransactionError,
    TransactionTrait,
};

use crate::domain::{DomainError, User, UserRepository};
use crate::models::book_reader;
use crate::models::user::{ActiveModel, Entity as UserEntity};

/// SeaORM-based implementation of UserRepository
pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn from_tx_error(e: TransactionError<DbErr>) -> DomainError {
    match e {
        TransactionError::Connection(e) => DomainError::from(e),
        TransactionError::Transaction(e) => DomainError::from(e),
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, username: &str) -> Result<User, DomainError> {
        if username.trim().is_empty() {
            return Err(DomainError::Validation(
                "username must not be empty".to_string(),
            ));
        }

        let now = chrono::Utc::now().to_rfc3339();
        let user = ActiveModel {
            username: Set(username.to_string()),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = UserEntity::insert(user).exec(&self.db).await?;

        let stored = UserEntity::find_by_id(result.last_insert_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| {
                DomainError::Internal(format!("user {} missing after insert", username))
            })?;

        Ok(User {
            id: stored.id,
            username: stored.username,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let user = UserEntity::find_by_id(id).one(&self.db).await?;

        Ok(user.map(|u| User {
            id: u.id,
            username: u.username,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }))
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        // Explicit transactional cascade: SQLite only honors ON DELETE
        // CASCADE on connections with foreign_keys enabled, so the
        // reading-progress row is removed in the same transaction.
        let rows_affected = self
            .db
            .transaction::<_, u64, DbErr>(|txn| {
                Box::pin(async move {
                    book_reader::Entity::delete_many()
                        .filter(book_reader::Column::UserId.eq(id))
                        .exec(txn)
                        .await?;

                    let result = UserEntity::delete_by_id(id).exec(txn).await?;
                    Ok(result.rows_affected)
                })
            })
            .await
            .map_err(from_tx_error)?;

        if rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        tracing::debug!(user_id = id, "user account deleted with reading progress");

        Ok(())
    }
}
