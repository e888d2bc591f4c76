//! Preview registry commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use draftshare_core::error::AppError;
use draftshare_core::types::DocumentId;

use crate::output::{self, OutputFormat};

/// Arguments for registry commands
#[derive(Debug, Args)]
pub struct RegistryArgs {
    /// Registry subcommand
    #[command(subcommand)]
    pub command: RegistryCommand,
}

/// Registry subcommands
#[derive(Debug, Subcommand)]
pub enum RegistryCommand {
    /// List documents open for public preview
    List,
    /// Open a document for public preview
    Enable {
        /// Document id
        id: DocumentId,
    },
    /// Close a document's public preview
    Disable {
        /// Document id
        id: DocumentId,
    },
    /// Delete the registry entry entirely
    Purge {
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// One row of `registry list`.
#[derive(Debug, Serialize, Tabled)]
struct RegistrationRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Type")]
    doc_type: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Title")]
    title: String,
}

/// Execute registry commands.
pub async fn execute(
    args: &RegistryArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let state = super::build_state(config).await?;

    match &args.command {
        RegistryCommand::List => {
            let mut rows = Vec::new();
            for id in state.registry.list().await? {
                let row = match state.documents.find_document(id).await? {
                    Some(doc) => RegistrationRow {
                        id: id.get(),
                        doc_type: doc.doc_type.as_str().to_string(),
                        status: doc.status,
                        title: doc.title,
                    },
                    None => RegistrationRow {
                        id: id.get(),
                        doc_type: "-".to_string(),
                        status: "missing".to_string(),
                        title: String::new(),
                    },
                };
                rows.push(row);
            }
            output::print_list(&rows, format);
        }
        RegistryCommand::Enable { id } => {
            let document = state
                .documents
                .find_document(*id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))?;
            let published = &state.config.preview.published_statuses;
            if published.iter().any(|s| *s == document.status) {
                return Err(AppError::validation(format!(
                    "Document {id} is already published ({})",
                    document.status
                )));
            }
            state.registry.enable(*id).await?;
            output::print_success(&format!("Public preview enabled for document {id}"));
        }
        RegistryCommand::Disable { id } => {
            if state.registry.disable(*id).await? {
                output::print_success(&format!("Public preview disabled for document {id}"));
            } else {
                output::print_warning(&format!("Document {id} was not registered"));
            }
        }
        RegistryCommand::Purge { force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt("This removes every public preview registration. Continue?")
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;
                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }
            state.registry.purge().await?;
            output::print_success("Preview registry purged.");
        }
    }

    Ok(())
}
