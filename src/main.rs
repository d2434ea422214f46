//! Provisioning entrypoint: runs migrations, optionally seeds demo data, and
//! verifies the prompt-template catalog. Request serving (HTTP, websockets,
//! task workers) lives in the surrounding deployment, not here.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ana_core::{config, db, prompts, seed};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ana_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();

    // Check for --profile CLI argument
    let args: Vec<String> = std::env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--profile") {
        if let Some(val) = args.get(pos + 1) {
            std::env::set_var("PROFILE", val);
        }
    }

    let config = config::Config::from_env();

    // Initialize database
    let db = db::init_db(&config.database_url)
        .await
        .expect("Failed to initialize database");

    tracing::info!("Database ready at {}", config.database_url);

    // Check for seed flag
    if std::env::var("SEED_DEMO").is_ok() {
        tracing::info!("Seeding demo data...");
        if let Err(e) = seed::seed_demo_data(&db).await {
            tracing::error!("Failed to seed data: {}", e);
        } else {
            tracing::info!("Demo data seeded successfully.");
        }
    }

    // Verify the asset catalog so missing templates surface now rather than
    // on the assistant's first request.
    let missing = prompts::PromptCatalog::missing(&config.static_dir);
    if missing.is_empty() {
        tracing::info!(
            "All {} assistant text assets present under {}",
            prompts::PromptKind::ALL.len(),
            config.static_dir.display()
        );
    } else {
        for kind in &missing {
            tracing::warn!(
                "Missing assistant text asset: {}",
                kind.path(&config.static_dir).display()
            );
        }
    }

    if !config.books_root_dir.is_dir() {
        tracing::warn!(
            "Books directory {} does not exist",
            config.books_root_dir.display()
        );
    }

    if let Some(url) = &config.llama_api_url {
        tracing::info!("LLM completion endpoint configured: {}", url);
    } else {
        tracing::warn!("LLAMA_API_URL not set; assistant layer will have no LLM endpoint");
    }
    if let Some(broker) = &config.broker_url {
        tracing::debug!("Task broker configured: {}", broker);
    }
    if let Some(redis) = &config.redis_backend {
        tracing::debug!("Pub/sub backend configured: {}", redis);
    }

    tracing::info!("Provisioning complete (profile: {})", config.profile);
}
