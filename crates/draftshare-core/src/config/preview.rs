//! Preview link configuration.

use serde::{Deserialize, Serialize};

/// Settings for issuing and serving public preview links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Site home URL that preview links are built on.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Query parameter carrying the preview token.
    #[serde(default = "default_token_param")]
    pub token_param: String,
    /// Expiration days used until the settings store holds a value.
    #[serde(default = "default_expiration_days")]
    pub default_expiration_days: u32,
    /// Expiration time of day (`HH:MM`) used until the settings store holds a value.
    #[serde(default = "default_expiration_time")]
    pub default_expiration_time: String,
    /// Document statuses that count as published.
    #[serde(default = "default_published_statuses")]
    pub published_statuses: Vec<String>,
    /// Name of the option entry holding the registry.
    #[serde(default = "default_registry_key")]
    pub registry_key: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_param: default_token_param(),
            default_expiration_days: default_expiration_days(),
            default_expiration_time: default_expiration_time(),
            published_statuses: default_published_statuses(),
            registry_key: default_registry_key(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/".to_string()
}

fn default_token_param() -> String {
    "_mfpp".to_string()
}

fn default_expiration_days() -> u32 {
    2
}

fn default_expiration_time() -> String {
    "00:00".to_string()
}

fn default_published_statuses() -> Vec<String> {
    vec!["publish".to_string(), "private".to_string()]
}

fn default_registry_key() -> String {
    "share_draft_pages".to_string()
}
