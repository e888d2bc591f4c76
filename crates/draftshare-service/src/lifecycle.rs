//! Entry points the document-management system calls when documents are
//! saved or change status.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use draftshare_auth::nonce::FormTokenGuard;
use draftshare_core::error::AppError;
use draftshare_core::result::AppResult;
use draftshare_core::traits::{DocumentSource, EditPermission};
use draftshare_core::types::{Document, DocumentId, PublishedStatuses};

use crate::context::RequestContext;
use crate::preview::{AccessRegistry, ReconcileOutcome};

/// Warning returned when a save both published a document and asked for preview.
pub const PUBLISH_SUPERSEDED_WARNING: &str =
    "The document was published in the same save, so public preview was not enabled";

/// A document save as reported by the editor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveEvent {
    /// Whether the editor's preview checkbox was ticked.
    pub requested_enable: bool,
    /// Status before the save, when the editor form carried it.
    pub previous_status: Option<String>,
    /// Anti-forgery token rendered into the editor form.
    pub form_token: String,
    /// Autosaves never touch the registry.
    pub autosave: bool,
    /// Revision snapshots never touch the registry.
    pub revision: bool,
}

/// What a save did to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveReport {
    /// Outcome of applying the checkbox. `None` if the save was skipped.
    pub outcome: Option<ReconcileOutcome>,
    /// Whether the document was revoked because it is now published or trashed.
    pub revoked: bool,
}

impl SaveReport {
    /// Whether the stored registry changed.
    pub fn changed(&self) -> bool {
        self.revoked || self.outcome.is_some_and(ReconcileOutcome::changed)
    }

    /// Warning for the editor, if publishing overrode their request.
    pub fn warning(&self) -> Option<&'static str> {
        matches!(self.outcome, Some(ReconcileOutcome::PublishSuperseded { .. }))
            .then_some(PUBLISH_SUPERSEDED_WARNING)
    }
}

/// Save and status-transition hooks.
#[derive(Debug, Clone)]
pub struct LifecycleHooks {
    registry: AccessRegistry,
    documents: Arc<dyn DocumentSource>,
    permission: Arc<dyn EditPermission>,
    forms: FormTokenGuard,
    published: PublishedStatuses,
}

impl LifecycleHooks {
    /// Creates the hooks.
    pub fn new(
        registry: AccessRegistry,
        documents: Arc<dyn DocumentSource>,
        permission: Arc<dyn EditPermission>,
        forms: FormTokenGuard,
        published: PublishedStatuses,
    ) -> Self {
        Self {
            registry,
            documents,
            permission,
            forms,
            published,
        }
    }

    /// Handle a saved document.
    ///
    /// The checkbox is applied only for a genuine save carrying a valid form
    /// token from an editor allowed to edit the document. Revocation of a
    /// published or trashed document runs regardless, and before any
    /// token or permission error is returned.
    pub async fn on_save(
        &self,
        ctx: &RequestContext,
        id: DocumentId,
        event: &SaveEvent,
    ) -> AppResult<SaveReport> {
        if event.autosave || event.revision {
            debug!(document_id = %id, "Skipping autosave or revision");
            return Ok(SaveReport {
                outcome: None,
                revoked: false,
            });
        }

        let document = self
            .documents
            .find_document(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))?;

        let outcome = self.apply_checkbox(ctx, &document, event).await;
        let revoked = self.revoke_on_edit(&document).await?;
        let outcome = outcome?;

        if let Some(ReconcileOutcome::PublishSuperseded { .. }) = outcome {
            warn!(
                document_id = %id,
                user_id = %ctx.user_id,
                "Public preview request dropped because the document was published"
            );
        }

        Ok(SaveReport { outcome, revoked })
    }

    /// Handle a status transition. Returns whether preview was revoked.
    pub async fn on_status_transition(
        &self,
        id: DocumentId,
        old_status: &str,
        new_status: &str,
    ) -> AppResult<bool> {
        debug!(document_id = %id, from = %old_status, to = %new_status, "Status transition");
        self.registry
            .revoke_on_transition(id, new_status, &self.published)
            .await
    }

    async fn apply_checkbox(
        &self,
        ctx: &RequestContext,
        document: &Document,
        event: &SaveEvent,
    ) -> AppResult<Option<ReconcileOutcome>> {
        self.forms
            .verify(&event.form_token, ctx.user_id, document.id, ctx.now())?;

        if !self
            .permission
            .can_edit(ctx.user_id, ctx.role, document.id)
            .await?
        {
            return Err(AppError::forbidden("You are not allowed to edit this document"));
        }

        let outcome = self
            .registry
            .reconcile(
                document.id,
                event.requested_enable,
                event.previous_status.as_deref(),
                &document.status,
                &self.published,
            )
            .await?;

        if outcome.changed() {
            info!(
                document_id = %document.id,
                user_id = %ctx.user_id,
                ?outcome,
                "Preview registration updated on save"
            );
        }
        Ok(Some(outcome))
    }

    async fn revoke_on_edit(&self, document: &Document) -> AppResult<bool> {
        self.registry
            .revoke_on_transition(document.id, &document.status, &self.published)
            .await
    }
}
