//! Durable storage for the preview registry.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::DocumentId;

/// Loads and saves the full set of document ids registered for preview.
///
/// The registry is the only durable state. Implementations treat each
/// call as atomic; a read followed by a write may lose a concurrent update,
/// which is acceptable for this data.
#[async_trait]
pub trait RegistryStore: Send + Sync + std::fmt::Debug + 'static {
    /// Load the stored ids as raw integers. Returns an empty list when
    /// nothing has been stored yet.
    async fn load_ids(&self) -> AppResult<Vec<i64>>;

    /// Replace the stored set. Returns `false` if the store did not persist it.
    async fn save_ids(&self, ids: &[DocumentId]) -> AppResult<bool>;

    /// Remove the stored entry entirely.
    async fn clear(&self) -> AppResult<()>;
}
