//! Request context carrying the authenticated editor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use draftshare_core::types::EditorRole;

/// Context for the current authenticated editor request.
///
/// Built by the API layer from token claims and passed into service
/// methods so every mutation knows who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated editor's ID.
    pub user_id: Uuid,
    /// The editor's role at the time the token was issued.
    pub role: EditorRole,
    /// Username, for logging.
    pub username: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context stamped with the current time.
    pub fn new(user_id: Uuid, role: EditorRole, username: impl Into<String>) -> Self {
        Self {
            user_id,
            role,
            username: username.into(),
            request_time: Utc::now(),
        }
    }

    /// Request time as unix seconds.
    pub fn now(&self) -> i64 {
        self.request_time.timestamp()
    }

    /// Returns whether the editor may change site settings.
    pub fn is_admin(&self) -> bool {
        self.role.can_manage_settings()
    }
}
