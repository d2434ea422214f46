use ana_core::db;
use ana_core::domain::{DomainError, ReadingProgressRepository, UserRepository};
use ana_core::infrastructure::{SeaOrmReadingProgressRepository, SeaOrmUserRepository};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

// Helper to create a test database
async fn setup_test_db() -> DatabaseConnection {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    db
}

#[tokio::test]
async fn test_create_and_find_user() {
    let db = setup_test_db().await;
    let repo = SeaOrmUserRepository::new(db.clone());

    let created = repo.create("alice").await.expect("Failed to create user");
    assert_eq!(created.username, "alice");

    let found = repo
        .find_by_id(created.id)
        .await
        .expect("Failed to find user")
        .expect("User should exist");
    assert_eq!(found.username, "alice");

    let absent = repo.find_by_id(9999).await.expect("Failed to query user");
    assert!(absent.is_none());
}

#[tokio::test]
async fn test_duplicate_username_is_conflict() {
    let db = setup_test_db().await;
    let repo = SeaOrmUserRepository::new(db.clone());

    repo.create("alice").await.expect("Failed to create user");
    let err = repo
        .create("alice")
        .await
        .expect_err("Duplicate username should be rejected");
    assert!(matches!(err, DomainError::Conflict(_)));
}

#[tokio::test]
async fn test_empty_username_rejected() {
    let db = setup_test_db().await;
    let repo = SeaOrmUserRepository::new(db.clone());

    let err = repo
        .create("  ")
        .await
        .expect_err("Empty username should be rejected");
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn test_delete_unknown_user_is_not_found() {
    let db = setup_test_db().await;
    let repo = SeaOrmUserRepository::new(db.clone());

    let err = repo
        .delete(4242)
        .await
        .expect_err("Deleting unknown user should fail");
    assert!(matches!(err, DomainError::NotFound));
}

#[tokio::test]
async fn test_account_deletion_cascades_to_reading_progress() {
    let db = setup_test_db().await;
    let users = SeaOrmUserRepository::new(db.clone());
    let progress = SeaOrmReadingProgressRepository::new(db.clone());

    let alice = users.create("alice").await.expect("Failed to create user");
    let bob = users.create("bob").await.expect("Failed to create user");

    progress
        .upsert(alice.id, "Dune", 3)
        .await
        .expect("Failed to upsert");
    progress
        .upsert(bob.id, "Hyperion", 5)
        .await
        .expect("Failed to upsert");

    users.delete(alice.id).await.expect("Failed to delete user");

    // Alice's row is gone, the account is gone, Bob is untouched
    assert!(progress
        .get(alice.id)
        .await
        .expect("Failed to get progress")
        .is_none());
    assert!(users
        .find_by_id(alice.id)
        .await
        .expect("Failed to query user")
        .is_none());
    assert!(progress
        .get(bob.id)
        .await
        .expect("Failed to get progress")
        .is_some());

    let remaining = ana_core::models::book_reader::Entity::find()
        .count(&db)
        .await
        .expect("Failed to count rows");
    assert_eq!(remaining, 1);
}

#[tokio::test]
async fn test_app_state_wires_repositories() {
    let db = setup_test_db().await;
    let state = ana_core::AppState::new(db);

    let ana = state
        .user_repo
        .create("ana")
        .await
        .expect("Failed to create user");
    state
        .reading_progress_repo
        .upsert(ana.id, "Dune", 3)
        .await
        .expect("Failed to upsert");

    let progress = state
        .reading_progress_repo
        .get(ana.id)
        .await
        .expect("Failed to get progress")
        .expect("Progress should exist");
    assert_eq!(progress.last_book_read, "Dune");
    assert_eq!(progress.chapter, 3);

    state
        .user_repo
        .delete(ana.id)
        .await
        .expect("Failed to delete user");
    assert!(state
        .reading_progress_repo
        .get(ana.id)
        .await
        .expect("Failed to get progress")
        .is_none());
}

#[tokio::test]
async fn test_account_deletion_without_progress() {
    let db = setup_test_db().await;
    let users = SeaOrmUserRepository::new(db.clone());

    let alice = users.create("alice").await.expect("Failed to create user");
    users.delete(alice.id).await.expect("Failed to delete user");

    assert!(users
        .find_by_id(alice.id)
        .await
        .expect("Failed to query user")
        .is_none());
}

#[tokio::test]
async fn test_progress_cannot_be_recreated_for_deleted_owner() {
    let db = setup_test_db().await;
    let users = SeaOrmUserRepository::new(db.clone());
    let progress = SeaOrmReadingProgressRepository::new(db.clone());

    let alice = users.create("alice").await.expect("Failed to create user");
    progress
        .upsert(alice.id, "Dune", 1)
        .await
        .expect("Failed to upsert");
    users.delete(alice.id).await.expect("Failed to delete user");

    let err = progress
        .upsert(alice.id, "Dune", 2)
        .await
        .expect_err("Upsert for a deleted owner should fail");
    assert!(matches!(err, DomainError::Reference(_)));
}
