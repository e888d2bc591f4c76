//! The editor's preview toggle and panel state.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use draftshare_auth::nonce::FormTokenGuard;
use draftshare_core::error::AppError;
use draftshare_core::result::AppResult;
use draftshare_core::traits::{DocumentSource, EditPermission};
use draftshare_core::types::document::AUTO_DRAFT_STATUS;
use draftshare_core::types::{Document, DocumentId, PublishedStatuses};

use crate::context::RequestContext;
use crate::preview::{AccessRegistry, PreviewAuthorizer};

/// Raw toggle form fields. Every field is optional so that missing data
/// is reported as such rather than as a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToggleRequest {
    /// Document id.
    #[serde(rename = "post_ID")]
    pub post_id: Option<String>,
    /// `"true"` to enable, `"false"` to disable.
    pub checked: Option<String>,
    /// Anti-forgery token.
    #[serde(rename = "_wpnonce")]
    pub form_token: Option<String>,
}

/// Successful toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleResult {
    /// Preview enabled; carries the link to share.
    Enabled {
        /// Preview link.
        preview_url: String,
    },
    /// Preview disabled.
    Disabled,
}

/// What the editor panel shows for a document.
#[derive(Debug, Clone, Serialize)]
pub struct PanelState {
    /// Document id.
    pub document_id: DocumentId,
    /// Whether public preview is on.
    pub enabled: bool,
    /// Current link, when enabled.
    pub preview_url: Option<String>,
    /// Token to submit with the toggle or save.
    pub form_token: String,
}

/// Handles toggle requests from the editor.
#[derive(Debug, Clone)]
pub struct ToggleService {
    registry: AccessRegistry,
    authorizer: PreviewAuthorizer,
    documents: Arc<dyn DocumentSource>,
    permission: Arc<dyn EditPermission>,
    forms: FormTokenGuard,
    published: PublishedStatuses,
}

impl ToggleService {
    /// Creates a new toggle service.
    pub fn new(
        registry: AccessRegistry,
        authorizer: PreviewAuthorizer,
        documents: Arc<dyn DocumentSource>,
        permission: Arc<dyn EditPermission>,
        forms: FormTokenGuard,
        published: PublishedStatuses,
    ) -> Self {
        Self {
            registry,
            authorizer,
            documents,
            permission,
            forms,
            published,
        }
    }

    /// Flip preview on or off.
    ///
    /// Checks run in order: fields present, form token, edit right, state
    /// change. Each failure maps to its own error kind.
    pub async fn toggle(
        &self,
        ctx: &RequestContext,
        request: &ToggleRequest,
    ) -> AppResult<ToggleResult> {
        let (Some(post_id), Some(checked)) = (&request.post_id, &request.checked) else {
            return Err(AppError::incomplete_request("post_ID and checked are required"));
        };

        let id = post_id
            .trim()
            .parse::<DocumentId>()
            .map_err(|_| AppError::anti_forgery("Invalid or missing form token"))?;

        let token = request.form_token.as_deref().unwrap_or_default();
        self.forms.verify(token, ctx.user_id, id, ctx.now())?;

        self.ensure_can_edit(ctx, id).await?;

        let enabled = self.registry.is_enabled(id).await?;
        match checked.trim() {
            "true" if !enabled => {
                let document = self.find(id).await?;
                if self.published.contains(&document.status) {
                    return Err(AppError::unknown_status(
                        "Published documents cannot be opened for preview",
                    ));
                }
                // link first: a failed policy read must not leave the id registered
                let link = self.authorizer.build_link(&document, ctx.now()).await?;
                self.registry.enable(id).await?;
                info!(document_id = %id, user_id = %ctx.user_id, "Preview toggled on");
                Ok(ToggleResult::Enabled {
                    preview_url: link.to_string(),
                })
            }
            "false" if enabled => {
                self.registry.disable(id).await?;
                info!(document_id = %id, user_id = %ctx.user_id, "Preview toggled off");
                Ok(ToggleResult::Disabled)
            }
            _ => Err(AppError::unknown_status(
                "The request does not change the preview state",
            )),
        }
    }

    /// Panel state for the editor screen of `id`.
    pub async fn panel(&self, ctx: &RequestContext, id: DocumentId) -> AppResult<PanelState> {
        self.ensure_can_edit(ctx, id).await?;
        let document = self.find(id).await?;

        if document.status == AUTO_DRAFT_STATUS || self.published.contains(&document.status) {
            return Err(AppError::validation(
                "Public preview is not offered for this document",
            ));
        }

        let enabled = self.registry.is_enabled(id).await?;
        let preview_url = if enabled {
            Some(self.authorizer.build_link(&document, ctx.now()).await?.to_string())
        } else {
            None
        };

        Ok(PanelState {
            document_id: id,
            enabled,
            preview_url,
            form_token: self.forms.issue(ctx.user_id, id, ctx.now()),
        })
    }

    async fn ensure_can_edit(&self, ctx: &RequestContext, id: DocumentId) -> AppResult<()> {
        if self.permission.can_edit(ctx.user_id, ctx.role, id).await? {
            Ok(())
        } else {
            Err(AppError::forbidden("You are not allowed to edit this document"))
        }
    }

    async fn find(&self, id: DocumentId) -> AppResult<Document> {
        self.documents
            .find_document(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))
    }
}
