//! Documents as seen through the hosting document-management system.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::id::DocumentId;

/// Status assigned to trashed documents.
pub const TRASH_STATUS: &str = "trash";

/// Status of a document that was created but never saved.
pub const AUTO_DRAFT_STATUS: &str = "auto-draft";

/// Status a previewed document is presented with.
pub const PUBLISH_STATUS: &str = "publish";

/// Kind of document, which decides the shape of its preview link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum DocumentType {
    /// A standalone page, addressed by `page_id`.
    Page,
    /// The default document type, addressed by `p`.
    Post,
    /// Any other registered type, addressed by `p` plus `post_type`.
    Custom(String),
}

impl DocumentType {
    /// Return the type name as stored by the hosting system.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Page => "page",
            Self::Post => "post",
            Self::Custom(name) => name,
        }
    }
}

impl From<String> for DocumentType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "page" => Self::Page,
            "post" => Self::Post,
            _ => Self::Custom(value),
        }
    }
}

impl From<&str> for DocumentType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<DocumentType> for String {
    fn from(value: DocumentType) -> Self {
        value.as_str().to_string()
    }
}

/// A document eligible for preview, as provided by the document source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier.
    pub id: DocumentId,
    /// Document type.
    pub doc_type: DocumentType,
    /// Persisted status (`draft`, `pending`, `publish`, ...).
    pub status: String,
    /// Owning editor, if known.
    pub author_id: Option<Uuid>,
    /// Title.
    pub title: String,
    /// Canonical published address.
    pub permalink: String,
    /// Rendered content, one entry per page of a paginated document.
    pub pages: Vec<String>,
}

/// The set of statuses that count as published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublishedStatuses(Vec<String>);

impl PublishedStatuses {
    /// Build from configured status names.
    pub fn new<I, S>(statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(statuses.into_iter().map(Into::into).collect())
    }

    /// Whether `status` is a published status.
    pub fn contains(&self, status: &str) -> bool {
        self.0.iter().any(|s| s == status)
    }

    /// Whether `status` is published or trashed, the statuses that revoke preview.
    pub fn revokes(&self, status: &str) -> bool {
        status == TRASH_STATUS || self.contains(status)
    }

    /// Iterate over the status names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for PublishedStatuses {
    fn default() -> Self {
        Self::new(["publish", "private"])
    }
}
