//! Read access to documents owned by the hosting system.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{Document, DocumentId};

/// Looks up documents by id.
#[async_trait]
pub trait DocumentSource: Send + Sync + std::fmt::Debug + 'static {
    /// Find a document. Returns `None` if it does not exist.
    async fn find_document(&self, id: DocumentId) -> AppResult<Option<Document>>;
}
