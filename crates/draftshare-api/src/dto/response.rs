//! Response DTOs.

use serde::{Deserialize, Serialize};

use draftshare_core::types::{DocumentId, ExpirationPolicy};
use draftshare_service::{ReconcileOutcome, SaveReport, ToggleResult};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Toggle success payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleData {
    /// `"enabled"` or `"disabled"`.
    pub status: String,
    /// Link to share, when enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

impl From<ToggleResult> for ToggleData {
    fn from(result: ToggleResult) -> Self {
        match result {
            ToggleResult::Enabled { preview_url } => Self {
                status: "enabled".to_string(),
                preview_url: Some(preview_url),
            },
            ToggleResult::Disabled => Self {
                status: "disabled".to_string(),
                preview_url: None,
            },
        }
    }
}

/// Result of the save hook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResponse {
    /// Whether the registry changed.
    pub changed: bool,
    /// `enabled`, `disabled`, `publish_superseded`, `unchanged`, or `skipped`.
    pub outcome: String,
    /// Whether the document was revoked for being published or trashed.
    pub revoked: bool,
    /// Shown to the editor when publishing overrode their request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl From<SaveReport> for SaveResponse {
    fn from(report: SaveReport) -> Self {
        let outcome = match report.outcome {
            None => "skipped",
            Some(ReconcileOutcome::Enabled) => "enabled",
            Some(ReconcileOutcome::Disabled) => "disabled",
            Some(ReconcileOutcome::PublishSuperseded { .. }) => "publish_superseded",
            Some(ReconcileOutcome::Unchanged) => "unchanged",
        };
        Self {
            changed: report.changed(),
            outcome: outcome.to_string(),
            revoked: report.revoked,
            warning: report.warning().map(str::to_string),
        }
    }
}

/// Result of the status transition hook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionResponse {
    /// Whether the document was removed from the registry.
    pub revoked: bool,
}

/// Expiration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpirationResponse {
    /// Whole days.
    pub days: u32,
    /// Time of day, `HH:MM`.
    pub time_of_day: String,
    /// Nominal link validity in seconds.
    pub validity_span_seconds: i64,
}

impl From<ExpirationPolicy> for ExpirationResponse {
    fn from(policy: ExpirationPolicy) -> Self {
        Self {
            days: policy.days,
            time_of_day: policy.time_of_day_string(),
            validity_span_seconds: policy.validity_span_seconds(),
        }
    }
}

/// Documents registered for preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationsResponse {
    /// Registered ids.
    pub document_ids: Vec<DocumentId>,
    /// Number of registered ids.
    pub count: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Server version.
    pub version: String,
    /// `connected`, `unreachable`, or `not_configured`.
    pub database: String,
}
