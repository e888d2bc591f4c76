//! DraftShare server: time-limited public previews of draft documents.
//!
//! Main entry point that loads configuration, prepares the database and
//! starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use draftshare_core::config::AppConfig;
use draftshare_core::error::AppError;
use draftshare_database::DatabasePool;
use draftshare_database::migration::run_migrations;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file, environment overlay and environment variables
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("DRAFTSHARE_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    let env = std::env::var("DRAFTSHARE_ENV").unwrap_or_else(|_| "development".to_string());
    let overlay = format!("config/{env}");

    AppConfig::load_with_overlay(&config_path, Some(&overlay))
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting DraftShare v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!("Connecting to database...");
    let db_pool = DatabasePool::connect(&config.database).await?;
    run_migrations(db_pool.pool()).await?;

    draftshare_api::run_server(config, db_pool).await?;

    tracing::info!("DraftShare server shut down gracefully");
    Ok(())
}
