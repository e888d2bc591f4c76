//! Role-based edit permission.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use draftshare_core::result::AppResult;
use draftshare_core::traits::{DocumentSource, EditPermission};
use draftshare_core::types::{DocumentId, EditorRole};

/// Admins and editors may edit any document; authors and contributors only
/// their own. Unknown documents are never editable.
#[derive(Debug, Clone)]
pub struct RoleEditPermission {
    documents: Arc<dyn DocumentSource>,
}

impl RoleEditPermission {
    /// Creates a permission check over the given document source.
    pub fn new(documents: Arc<dyn DocumentSource>) -> Self {
        Self { documents }
    }
}

#[async_trait]
impl EditPermission for RoleEditPermission {
    async fn can_edit(
        &self,
        user_id: Uuid,
        role: EditorRole,
        document_id: DocumentId,
    ) -> AppResult<bool> {
        let Some(document) = self.documents.find_document(document_id).await? else {
            return Ok(false);
        };

        if role.can_edit_others() {
            return Ok(true);
        }

        Ok(document.author_id == Some(user_id))
    }
}
