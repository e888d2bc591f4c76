//! Editor token commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use uuid::Uuid;

use draftshare_auth::jwt::JwtEncoder;
use draftshare_core::error::AppError;
use draftshare_core::types::EditorRole;

use crate::output::{self, OutputFormat};

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Issue an editor access token
    Issue {
        /// Editor user id (random if omitted)
        #[arg(long)]
        user_id: Option<Uuid>,
        /// Editor role: admin, editor, author, contributor
        #[arg(long, default_value = "admin")]
        role: EditorRole,
        /// Username recorded in the token
        #[arg(long, default_value = "cli")]
        username: String,
    },
}

#[derive(Debug, Serialize)]
struct IssuedToken {
    user_id: Uuid,
    role: EditorRole,
    access_token: String,
    expires_at: String,
}

/// Execute token commands.
pub async fn execute(
    args: &TokenArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    match &args.command {
        TokenCommand::Issue {
            user_id,
            role,
            username,
        } => {
            let user_id = user_id.unwrap_or_else(Uuid::new_v4);
            let encoder = JwtEncoder::new(&config.auth);
            let (access_token, expires_at) =
                encoder.generate_access_token(user_id, *role, username)?;

            let issued = IssuedToken {
                user_id,
                role: *role,
                access_token,
                expires_at: expires_at.to_rfc3339(),
            };
            match format {
                OutputFormat::Json => output::print_item(&issued, format),
                OutputFormat::Table => {
                    output::print_kv("User", &issued.user_id.to_string());
                    output::print_kv("Role", &issued.role.to_string());
                    output::print_kv("Expires", &issued.expires_at);
                    println!("{}", issued.access_token);
                }
            }
        }
    }

    Ok(())
}
