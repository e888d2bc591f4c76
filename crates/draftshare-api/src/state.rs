//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use draftshare_auth::jwt::JwtDecoder;
use draftshare_auth::nonce::{FormTokenGuard, HmacKeyedHasher, TokenCodec};
use draftshare_auth::permission::RoleEditPermission;
use draftshare_core::config::AppConfig;
use draftshare_core::error::AppError;
use draftshare_core::traits::{DocumentSource, EditPermission, PolicySource, RegistryStore};
use draftshare_core::types::PublishedStatuses;
use draftshare_database::DatabasePool;
use draftshare_service::{
    AccessRegistry, LifecycleHooks, LinkBuilder, PreviewAuthorizer, SettingsService, ToggleService,
};

/// Storage-facing collaborators the services are built on.
#[derive(Debug, Clone)]
pub struct Collaborators {
    /// Registry persistence.
    pub registry_store: Arc<dyn RegistryStore>,
    /// Document lookups.
    pub documents: Arc<dyn DocumentSource>,
    /// Expiration settings.
    pub policy: Arc<dyn PolicySource>,
    /// Database pool, when running against PostgreSQL.
    pub db_pool: Option<DatabasePool>,
}

/// Shared application state passed to every handler via Axum's `State`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Database pool, if any.
    pub db_pool: Option<DatabasePool>,
    /// Editor token validation.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Document lookups.
    pub documents: Arc<dyn DocumentSource>,
    /// Preview registry.
    pub registry: AccessRegistry,
    /// Preview link issuance and authorization.
    pub authorizer: Arc<PreviewAuthorizer>,
    /// Save and status-transition hooks.
    pub lifecycle: Arc<LifecycleHooks>,
    /// Editor toggle.
    pub toggle: Arc<ToggleService>,
    /// Expiration settings.
    pub settings: Arc<SettingsService>,
}

impl AppState {
    /// Wire every service from configuration and collaborators.
    pub fn build(config: AppConfig, collaborators: Collaborators) -> Result<Self, AppError> {
        let Collaborators {
            registry_store,
            documents,
            policy,
            db_pool,
        } = collaborators;

        let published = PublishedStatuses::new(config.preview.published_statuses.iter().cloned());
        let hasher = HmacKeyedHasher::new(&config.auth.nonce_secret)?;
        let codec = TokenCodec::new(Arc::new(hasher));
        let forms = FormTokenGuard::new(
            &config.auth.form_token_secret,
            config.auth.form_token_lifetime_seconds,
        )?;
        let links = LinkBuilder::new(&config.preview.base_url, config.preview.token_param.clone())?;
        let permission: Arc<dyn EditPermission> =
            Arc::new(RoleEditPermission::new(Arc::clone(&documents)));

        let registry = AccessRegistry::new(registry_store);
        let authorizer = PreviewAuthorizer::new(
            codec,
            registry.clone(),
            Arc::clone(&documents),
            Arc::clone(&policy),
            links,
            published.clone(),
        );
        let lifecycle = LifecycleHooks::new(
            registry.clone(),
            Arc::clone(&documents),
            Arc::clone(&permission),
            forms.clone(),
            published.clone(),
        );
        let toggle = ToggleService::new(
            registry.clone(),
            authorizer.clone(),
            Arc::clone(&documents),
            permission,
            forms,
            published,
        );
        let settings = SettingsService::new(policy);

        Ok(Self {
            jwt_decoder: Arc::new(JwtDecoder::new(&config.auth)),
            config: Arc::new(config),
            db_pool,
            documents,
            registry,
            authorizer: Arc::new(authorizer),
            lifecycle: Arc::new(lifecycle),
            toggle: Arc::new(toggle),
            settings: Arc::new(settings),
        })
    }
}
