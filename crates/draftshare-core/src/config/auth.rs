//! Authentication and key-material configuration.

use serde::{Deserialize, Serialize};

/// Editor authentication and token key material.
///
/// The preview and form secrets are supplied by the hosting environment;
/// nothing in DraftShare generates or persists key material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for editor JWT signing (HMAC-SHA256).
    #[serde(default = "default_secret")]
    pub jwt_secret: String,
    /// Editor access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub jwt_access_ttl_minutes: u64,
    /// Key for the preview token keyed hash.
    #[serde(default = "default_secret")]
    pub nonce_secret: String,
    /// Key for per-document anti-forgery form tokens.
    #[serde(default = "default_secret")]
    pub form_token_secret: String,
    /// Nominal lifetime of an anti-forgery form token in seconds.
    #[serde(default = "default_form_token_lifetime")]
    pub form_token_lifetime_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_secret(),
            jwt_access_ttl_minutes: default_access_ttl(),
            nonce_secret: default_secret(),
            form_token_secret: default_secret(),
            form_token_lifetime_seconds: default_form_token_lifetime(),
        }
    }
}

fn default_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_access_ttl() -> u64 {
    60
}

fn default_form_token_lifetime() -> u64 {
    86_400
}
