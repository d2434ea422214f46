pub mod config;
pub mod db;
pub mod domain;
pub mod infrastructure;
pub mod models;
pub mod prompts;
pub mod seed;

pub use infrastructure::AppState;
