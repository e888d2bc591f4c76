//! Preview link command.

use chrono::Utc;
use clap::Args;

use draftshare_core::error::AppError;
use draftshare_core::types::DocumentId;

use crate::output;

/// Arguments for the link command
#[derive(Debug, Args)]
pub struct LinkArgs {
    /// Document id
    pub id: DocumentId,
}

/// Print a fresh preview link. Warns when the document is not registered,
/// since the link would be refused.
pub async fn execute(args: &LinkArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let state = super::build_state(config).await?;

    let document = state
        .documents
        .find_document(args.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Document {} not found", args.id)))?;

    let link = state
        .authorizer
        .build_link(&document, Utc::now().timestamp())
        .await?;

    if !state.registry.is_enabled(args.id).await? {
        output::print_warning("Document is not registered for public preview");
    }
    println!("{link}");
    Ok(())
}
