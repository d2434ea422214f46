//! Repository implementations using SeaORM

pub mod reading_progress_repository;
pub mod user_repository;

pub use reading_progress_repository::SeaOrmReadingProgressRepository;
pub use user_repository::SeaOrmUserRepository;
