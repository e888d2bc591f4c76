//! Document repository.

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use draftshare_core::error::{AppError, ErrorKind};
use draftshare_core::result::AppResult;
use draftshare_core::traits::DocumentSource;
use draftshare_core::types::{Document, DocumentId, DocumentType};

/// Row shape of the `documents` table.
#[derive(Debug, Clone, FromRow)]
struct DocumentRow {
    id: i64,
    doc_type: String,
    status: String,
    author_id: Option<Uuid>,
    title: String,
    permalink: String,
    pages: Vec<String>,
}

impl DocumentRow {
    fn into_document(self) -> Option<Document> {
        Some(Document {
            id: DocumentId::from_stored(self.id)?,
            doc_type: DocumentType::from(self.doc_type),
            status: self.status,
            author_id: self.author_id,
            title: self.title,
            permalink: self.permalink,
            pages: self.pages,
        })
    }
}

/// Repository for document lookups.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    /// Create a new document repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a document by id.
    pub async fn find_by_id(&self, id: DocumentId) -> AppResult<Option<Document>> {
        let row = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, doc_type, status, author_id, title, permalink, pages \
             FROM documents WHERE id = $1",
        )
        .bind(id.get() as i64)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find document", e))?;
        Ok(row.and_then(DocumentRow::into_document))
    }
}

#[async_trait::async_trait]
impl DocumentSource for DocumentRepository {
    async fn find_document(&self, id: DocumentId) -> AppResult<Option<Document>> {
        self.find_by_id(id).await
    }
}
