//! CLI command definitions and dispatch.

pub mod config;
pub mod link;
pub mod migrate;
pub mod registry;
pub mod token;

use clap::{Parser, Subcommand};

use draftshare_api::AppState;
use draftshare_api::app::postgres_collaborators;
use draftshare_core::config::AppConfig;
use draftshare_core::error::AppError;
use draftshare_database::DatabasePool;

use crate::output::OutputFormat;

/// DraftShare: time-limited public previews of draft documents
#[derive(Debug, Parser)]
#[command(name = "draftshare", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Preview registry management
    Registry(registry::RegistryArgs),
    /// Print a fresh preview link for a document
    Link(link::LinkArgs),
    /// Editor token management
    Token(token::TokenArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command.
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::Registry(args) => registry::execute(args, &self.config, self.format).await,
            Commands::Link(args) => link::execute(args, &self.config).await,
            Commands::Token(args) => token::execute(args, &self.config, self.format).await,
            Commands::Config(args) => config::execute(args, &self.config, self.format).await,
        }
    }
}

/// Load configuration from file and environment.
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Connect to the configured database.
pub async fn connect(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}

/// Build the service graph on PostgreSQL.
pub async fn build_state(config: AppConfig) -> Result<AppState, AppError> {
    let pool = connect(&config).await?;
    let collaborators = postgres_collaborators(&config, pool)?;
    AppState::build(config, collaborators)
}
