//! Durable allow-list of documents open for public preview.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use draftshare_core::error::AppError;
use draftshare_core::result::AppResult;
use draftshare_core::traits::RegistryStore;
use draftshare_core::types::{DocumentId, PublishedStatuses};

/// Result of reconciling a save against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The document was added.
    Enabled,
    /// The document was removed because the editor unchecked preview.
    Disabled,
    /// The editor asked for preview but the same save published the
    /// document, so preview was turned off instead.
    PublishSuperseded {
        /// Whether the document had been registered before this save.
        revoked: bool,
    },
    /// Nothing to do.
    Unchanged,
}

impl ReconcileOutcome {
    /// Whether the stored set was modified.
    pub fn changed(self) -> bool {
        match self {
            Self::Enabled | Self::Disabled => true,
            Self::PublishSuperseded { revoked } => revoked,
            Self::Unchanged => false,
        }
    }
}

/// Allow-list of document ids, persisted through a [`RegistryStore`].
///
/// Every mutation loads the full set, applies the change, and writes the
/// normalized set back. A write the store refuses leaves the previous set
/// in place and surfaces as a `NotSaved` error.
#[derive(Debug, Clone)]
pub struct AccessRegistry {
    store: Arc<dyn RegistryStore>,
}

impl AccessRegistry {
    /// Creates a registry over `store`.
    pub fn new(store: Arc<dyn RegistryStore>) -> Self {
        Self { store }
    }

    /// All registered ids, normalized.
    pub async fn list(&self) -> AppResult<Vec<DocumentId>> {
        let raw = self.store.load_ids().await?;
        Ok(normalize(raw))
    }

    /// Whether `id` is registered.
    pub async fn is_enabled(&self, id: DocumentId) -> AppResult<bool> {
        Ok(self.list().await?.contains(&id))
    }

    /// Register `id`. Registering twice is a no-op.
    pub async fn enable(&self, id: DocumentId) -> AppResult<()> {
        let mut ids = self.list().await?;
        if ids.contains(&id) {
            return Ok(());
        }
        ids.push(id);
        self.persist(&ids).await?;
        info!(document_id = %id, "Public preview enabled");
        Ok(())
    }

    /// Unregister `id`. Returns whether it had been registered.
    pub async fn disable(&self, id: DocumentId) -> AppResult<bool> {
        let mut ids = self.list().await?;
        let before = ids.len();
        ids.retain(|existing| *existing != id);
        if ids.len() == before {
            return Ok(false);
        }
        self.persist(&ids).await?;
        info!(document_id = %id, "Public preview disabled");
        Ok(true)
    }

    /// Apply the editor's preview checkbox from a document save.
    ///
    /// Rules, first match wins:
    /// 1. not requested and registered: disable;
    /// 2. requested, previous status known and unpublished, current status
    ///    published: disable (publishing wins);
    /// 3. requested and not registered: enable;
    /// 4. otherwise nothing changes.
    pub async fn reconcile(
        &self,
        id: DocumentId,
        requested_enable: bool,
        previous_status: Option<&str>,
        current_status: &str,
        published: &PublishedStatuses,
    ) -> AppResult<ReconcileOutcome> {
        let enabled = self.is_enabled(id).await?;

        if !requested_enable {
            if enabled {
                self.disable(id).await?;
                return Ok(ReconcileOutcome::Disabled);
            }
            return Ok(ReconcileOutcome::Unchanged);
        }

        let just_published = previous_status
            .filter(|previous| !previous.is_empty())
            .is_some_and(|previous| !published.contains(previous))
            && published.contains(current_status);

        if just_published {
            let revoked = self.disable(id).await?;
            warn!(
                document_id = %id,
                status = %current_status,
                "Preview request superseded by publish"
            );
            return Ok(ReconcileOutcome::PublishSuperseded { revoked });
        }

        if !enabled {
            self.enable(id).await?;
            return Ok(ReconcileOutcome::Enabled);
        }

        Ok(ReconcileOutcome::Unchanged)
    }

    /// Unregister `id` if `new_status` is published or trashed. Returns
    /// whether anything was removed.
    pub async fn revoke_on_transition(
        &self,
        id: DocumentId,
        new_status: &str,
        published: &PublishedStatuses,
    ) -> AppResult<bool> {
        if !published.revokes(new_status) {
            return Ok(false);
        }
        let revoked = self.disable(id).await?;
        if revoked {
            info!(document_id = %id, status = %new_status, "Preview revoked on status change");
        }
        Ok(revoked)
    }

    /// Remove the stored registry entirely.
    pub async fn purge(&self) -> AppResult<()> {
        self.store.clear().await?;
        info!("Preview registry purged");
        Ok(())
    }

    async fn persist(&self, ids: &[DocumentId]) -> AppResult<()> {
        if !self.store.save_ids(ids).await? {
            warn!(count = ids.len(), "Registry store did not persist the preview set");
            return Err(AppError::not_saved("The preview registry could not be saved"));
        }
        debug!(count = ids.len(), "Preview registry saved");
        Ok(())
    }
}

/// Positive ids only, first occurrence kept.
fn normalize(raw: Vec<i64>) -> Vec<DocumentId> {
    let mut seen = HashSet::new();
    raw.into_iter()
        .filter_map(DocumentId::from_stored)
        .filter(|id| seen.insert(*id))
        .collect()
}
