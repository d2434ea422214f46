use std::env;
use std::path::PathBuf;

/// Runtime configuration for the crate and for the external collaborators the
/// surrounding system wires in (LLM endpoint, task broker, pub/sub backend).
/// Collaborator endpoints are carried as values only; nothing here opens a
/// connection to them.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub llama_api_url: Option<String>,
    pub broker_url: Option<String>,
    pub redis_backend: Option<String>,
    /// Root of the assistant's text assets: prompts/v1, prompts/v2,
    /// instructions, responses
    pub static_dir: PathBuf,
    pub books_root_dir: PathBuf,
    pub profile: String,
}

impl Config {
    pub fn from_env() -> Self {
        let profile = env::var("PROFILE").unwrap_or_else(|_| "default".to_string());

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            if profile == "default" {
                "sqlite://ana.db?mode=rwc".to_string()
            } else {
                format!("sqlite://ana_{}.db?mode=rwc", profile)
            }
        });

        Self {
            database_url,
            llama_api_url: env::var("LLAMA_API_URL").ok(),
            broker_url: env::var("CELERY_BROKER_URL").ok(),
            redis_backend: env::var("REDIS_BACKEND").ok(),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static")),
            books_root_dir: env::var("BOOKS_ROOT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static/books")),
            profile,
        }
    }
}
