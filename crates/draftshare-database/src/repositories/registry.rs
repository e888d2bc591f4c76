//! Preview registry persisted as a single JSON option.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tracing::{debug, warn};

use draftshare_core::result::AppResult;
use draftshare_core::traits::RegistryStore;
use draftshare_core::types::DocumentId;

use super::option::OptionRepository;

/// Registry store keeping the id list under one option name.
#[derive(Debug, Clone)]
pub struct PgRegistryStore {
    options: OptionRepository,
    key: String,
}

impl PgRegistryStore {
    /// Create a store writing to option `key`.
    pub fn new(pool: PgPool, key: impl Into<String>) -> Self {
        Self {
            options: OptionRepository::new(pool),
            key: key.into(),
        }
    }
}

#[async_trait]
impl RegistryStore for PgRegistryStore {
    async fn load_ids(&self) -> AppResult<Vec<i64>> {
        let value = self.options.get(&self.key).await?;
        Ok(value.as_ref().map(decode_ids).unwrap_or_default())
    }

    async fn save_ids(&self, ids: &[DocumentId]) -> AppResult<bool> {
        let value = Value::from(ids.iter().map(|id| id.to_stored()).collect::<Vec<_>>());
        let written = self.options.set(&self.key, &value).await?;
        debug!(key = %self.key, count = ids.len(), written, "Saved preview registry");
        Ok(written)
    }

    async fn clear(&self) -> AppResult<()> {
        self.options.delete(&self.key).await?;
        Ok(())
    }
}

/// Decode a stored registry value. Entries that are not integers (or
/// integer strings) are skipped; anything other than an array is empty.
pub fn decode_ids(value: &Value) -> Vec<i64> {
    let Some(items) = value.as_array() else {
        warn!("Preview registry entry is not an array, treating as empty");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_ids() {
        assert_eq!(decode_ids(&json!([3, 7, 3])), vec![3, 7, 3]);
        assert_eq!(decode_ids(&json!(["12", "x", 5, null, -1])), vec![12, 5, -1]);
        assert!(decode_ids(&json!({"a": 1})).is_empty());
        assert!(decode_ids(&json!("7")).is_empty());
    }
}
