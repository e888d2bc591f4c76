//! Typed path parameter helpers.

use draftshare_core::error::AppError;
use draftshare_core::types::DocumentId;

/// Parses a document id from a path segment.
pub fn parse_document_id(s: &str) -> Result<DocumentId, AppError> {
    s.parse()
        .map_err(|_| AppError::validation(format!("Invalid document id: {s}")))
}
