//! In-memory collaborators using a Tokio mutex, for single-process
//! deployments and tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use draftshare_core::result::AppResult;
use draftshare_core::traits::{DocumentSource, PolicySource, RegistryStore};
use draftshare_core::types::{Document, DocumentId, ExpirationPolicy};

/// Registry store held in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistryStore {
    ids: Arc<Mutex<Vec<i64>>>,
    reject_saves: Arc<AtomicBool>,
}

impl MemoryRegistryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-loaded with raw ids, as a legacy entry might hold them.
    pub fn with_raw_ids(ids: Vec<i64>) -> Self {
        Self {
            ids: Arc::new(Mutex::new(ids)),
            reject_saves: Arc::default(),
        }
    }

    /// When set, every save reports that nothing was persisted.
    pub fn set_reject_saves(&self, reject: bool) {
        self.reject_saves.store(reject, Ordering::SeqCst);
    }

    /// Snapshot of the raw stored ids.
    pub async fn raw_ids(&self) -> Vec<i64> {
        self.ids.lock().await.clone()
    }
}

#[async_trait]
impl RegistryStore for MemoryRegistryStore {
    async fn load_ids(&self) -> AppResult<Vec<i64>> {
        Ok(self.ids.lock().await.clone())
    }

    async fn save_ids(&self, ids: &[DocumentId]) -> AppResult<bool> {
        if self.reject_saves.load(Ordering::SeqCst) {
            debug!(count = ids.len(), "Memory registry rejected save");
            return Ok(false);
        }
        let mut stored = self.ids.lock().await;
        *stored = ids.iter().map(|id| id.to_stored()).collect();
        Ok(true)
    }

    async fn clear(&self) -> AppResult<()> {
        self.ids.lock().await.clear();
        Ok(())
    }
}

/// Document source held in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentSource {
    documents: Arc<Mutex<HashMap<DocumentId, Document>>>,
}

impl MemoryDocumentSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document.
    pub async fn insert(&self, document: Document) {
        self.documents.lock().await.insert(document.id, document);
    }

    /// Change a document's status, returning the previous one.
    pub async fn set_status(&self, id: DocumentId, status: &str) -> Option<String> {
        let mut documents = self.documents.lock().await;
        let document = documents.get_mut(&id)?;
        Some(std::mem::replace(&mut document.status, status.to_string()))
    }
}

#[async_trait]
impl DocumentSource for MemoryDocumentSource {
    async fn find_document(&self, id: DocumentId) -> AppResult<Option<Document>> {
        Ok(self.documents.lock().await.get(&id).cloned())
    }
}

/// Policy source held in process memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryPolicySource {
    policy: Arc<Mutex<ExpirationPolicy>>,
}

impl MemoryPolicySource {
    /// Creates a source starting from `policy`.
    pub fn new(policy: ExpirationPolicy) -> Self {
        Self {
            policy: Arc::new(Mutex::new(policy)),
        }
    }
}

#[async_trait]
impl PolicySource for MemoryPolicySource {
    async fn current_policy(&self) -> AppResult<ExpirationPolicy> {
        Ok(*self.policy.lock().await)
    }

    async fn update_policy(&self, policy: &ExpirationPolicy) -> AppResult<()> {
        *self.policy.lock().await = *policy;
        Ok(())
    }
}
