//! Edit-permission collaborator.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;
use crate::types::{DocumentId, EditorRole};

/// Decides whether an editor may change a document's preview registration.
#[async_trait]
pub trait EditPermission: Send + Sync + std::fmt::Debug + 'static {
    /// Returns `true` if `user_id` acting with `role` may edit `document_id`.
    async fn can_edit(
        &self,
        user_id: Uuid,
        role: EditorRole,
        document_id: DocumentId,
    ) -> AppResult<bool>;
}
