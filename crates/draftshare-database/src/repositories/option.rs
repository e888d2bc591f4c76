//! Named site options stored as JSON values.

use sqlx::PgPool;

use draftshare_core::error::{AppError, ErrorKind};
use draftshare_core::result::AppResult;

/// Repository over the `options` table.
#[derive(Debug, Clone)]
pub struct OptionRepository {
    pool: PgPool,
}

impl OptionRepository {
    /// Create a new option repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Read an option value.
    pub async fn get(&self, name: &str) -> AppResult<Option<serde_json::Value>> {
        sqlx::query_scalar::<_, serde_json::Value>("SELECT value FROM options WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to read option", e))
    }

    /// Insert or replace an option value. Returns `true` if a row was written.
    pub async fn set(&self, name: &str, value: &serde_json::Value) -> AppResult<bool> {
        let result = sqlx::query(
            "INSERT INTO options (name, value, updated_at) VALUES ($1, $2, NOW()) \
             ON CONFLICT (name) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()",
        )
        .bind(name)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to write option", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Write several options in one transaction.
    pub async fn set_many(&self, entries: &[(&str, serde_json::Value)]) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        for (name, value) in entries {
            sqlx::query(
                "INSERT INTO options (name, value, updated_at) VALUES ($1, $2, NOW()) \
                 ON CONFLICT (name) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()",
            )
            .bind(*name)
            .bind(value)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to write option", e))?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit options", e)
        })
    }

    /// Delete an option. Returns `true` if it existed.
    pub async fn delete(&self, name: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM options WHERE name = $1")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete option", e))?;
        Ok(result.rows_affected() > 0)
    }
}
