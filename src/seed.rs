use crate::models::{book_reader, user};
use sea_orm::sea_query::OnConflict;
use sea_orm::*;

/// Insert demo accounts and a demo reading position. Safe to run repeatedly.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    // 1. Create Users
    let now = chrono::Utc::now().to_rfc3339();

    for username in ["demo", "reader"] {
        let account = user::ActiveModel {
            username: Set(username.to_owned()),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
            ..Default::default()
        };

        user::Entity::insert(account)
            .on_conflict(
                OnConflict::column(user::Column::Username)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;
    }

    // 2. Give the demo account a reading position
    let demo = user::Entity::find()
        .filter(user::Column::Username.eq("demo"))
        .one(db)
        .await?;

    if let Some(demo) = demo {
        let progress = book_reader::ActiveModel {
            user_id: Set(demo.id),
            last_book_read: Set("Alice in Wonderland".to_owned()),
            chapter: Set(1),
            updated_at: Set(now),
            ..Default::default()
        };

        book_reader::Entity::insert(progress)
            .on_conflict(
                OnConflict::column(book_reader::Column::UserId)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;
    }

    Ok(())
}
