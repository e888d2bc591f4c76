//! Configuration commands.

use clap::{Args, Subcommand};

use draftshare_core::error::AppError;
use draftshare_core::types::ExpirationPolicy;
use draftshare_database::connection::mask_password;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration file
    Validate,
}

const DEFAULT_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Execute config commands.
pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    match &args.command {
        ConfigCommand::Show => {
            let mut shown = config.clone();
            shown.database.url = mask_password(&shown.database.url);
            shown.auth.jwt_secret = "****".to_string();
            shown.auth.nonce_secret = "****".to_string();
            shown.auth.form_token_secret = "****".to_string();
            output::print_item(&shown, format);
        }
        ConfigCommand::Validate => {
            let policy = ExpirationPolicy::parse(
                config.preview.default_expiration_days,
                &config.preview.default_expiration_time,
            )?;
            draftshare_service::LinkBuilder::new(
                &config.preview.base_url,
                config.preview.token_param.clone(),
            )?;
            if config.preview.token_param.is_empty() {
                return Err(AppError::validation("preview.token_param must not be empty"));
            }

            output::print_success(&format!("Configuration '{config_path}' is valid"));
            output::print_kv(
                "Server",
                &format!("{}:{}", config.server.host, config.server.port),
            );
            output::print_kv("Database", &mask_password(&config.database.url));
            output::print_kv("Preview base URL", &config.preview.base_url);
            output::print_kv("Token parameter", &config.preview.token_param);
            output::print_kv(
                "Default expiration",
                &format!("{} days {}", policy.days, policy.time_of_day_string()),
            );
            output::print_kv(
                "Published statuses",
                &config.preview.published_statuses.join(", "),
            );

            for (name, value) in [
                ("auth.jwt_secret", &config.auth.jwt_secret),
                ("auth.nonce_secret", &config.auth.nonce_secret),
                ("auth.form_token_secret", &config.auth.form_token_secret),
            ] {
                if value == DEFAULT_SECRET {
                    output::print_warning(&format!("{name} uses the built-in default"));
                }
            }
        }
    }

    Ok(())
}
