//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use draftshare_core::types::policy::MAX_EXPIRATION_DAYS;
use draftshare_service::SaveEvent;

/// Body of `POST /api/documents/{id}/saved`, sent by the editor after a save.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveRequest {
    /// Preview checkbox state.
    #[serde(default)]
    pub share_draft_pages: bool,
    /// Status the document had when the editor form was opened.
    #[serde(default)]
    pub original_post_status: Option<String>,
    /// Anti-forgery token from the editor panel.
    #[serde(default)]
    pub form_token: String,
    /// Set for autosaves.
    #[serde(default)]
    pub autosave: bool,
    /// Set for revision snapshots.
    #[serde(default)]
    pub revision: bool,
}

impl From<SaveRequest> for SaveEvent {
    fn from(req: SaveRequest) -> Self {
        Self {
            requested_enable: req.share_draft_pages,
            previous_status: req.original_post_status,
            form_token: req.form_token,
            autosave: req.autosave,
            revision: req.revision,
        }
    }
}

/// Body of `POST /api/documents/{id}/transition`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TransitionRequest {
    /// Status before the transition.
    #[serde(default)]
    pub old_status: String,
    /// Status after the transition.
    #[validate(length(min = 1, message = "New status is required"))]
    pub new_status: String,
}

/// Body of `PUT /api/settings/expiration`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateExpirationRequest {
    /// Whole days.
    #[validate(range(max = MAX_EXPIRATION_DAYS, message = "Days must be between 0 and 365"))]
    pub days: u32,
    /// Time of day, `HH:MM`.
    #[validate(length(equal = 5, message = "Time must be in HH:MM format"))]
    pub time_of_day: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_validation() {
        let ok = UpdateExpirationRequest {
            days: 365,
            time_of_day: "23:59".to_string(),
        };
        assert!(ok.validate().is_ok());

        let too_long = UpdateExpirationRequest {
            days: 366,
            time_of_day: "00:00".to_string(),
        };
        assert!(too_long.validate().is_err());

        let bad_time = UpdateExpirationRequest {
            days: 1,
            time_of_day: "9:00".to_string(),
        };
        assert!(bad_time.validate().is_err());
    }

    #[test]
    fn test_save_request_defaults() {
        let req: SaveRequest = serde_json::from_str(r#"{"form_token":"abc"}"#).unwrap();
        let event = SaveEvent::from(req);
        assert!(!event.requested_enable);
        assert!(event.previous_status.is_none());
        assert_eq!(event.form_token, "abc");
    }
}
