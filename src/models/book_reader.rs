use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::ReadingProgress;

/// Per-user reading position. One row per user (unique `user_id`); the row is
/// removed with its owner.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "book_reader")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    pub last_book_read: String,
    pub chapter: i64,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ReadingProgress {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            last_book_read: model.last_book_read,
            chapter: model.chapter,
        }
    }
}
