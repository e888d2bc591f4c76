//! Expiration policy settings.

use std::sync::Arc;

use tracing::info;

use draftshare_core::error::AppError;
use draftshare_core::result::AppResult;
use draftshare_core::traits::PolicySource;
use draftshare_core::types::ExpirationPolicy;

use crate::context::RequestContext;

/// Reads and updates the expiration policy. Admin only.
#[derive(Debug, Clone)]
pub struct SettingsService {
    policy: Arc<dyn PolicySource>,
}

impl SettingsService {
    /// Creates a new settings service.
    pub fn new(policy: Arc<dyn PolicySource>) -> Self {
        Self { policy }
    }

    /// Current policy.
    pub async fn expiration(&self, ctx: &RequestContext) -> AppResult<ExpirationPolicy> {
        require_admin(ctx)?;
        self.policy.current_policy().await
    }

    /// Replace the policy. Takes effect on the next request; outstanding
    /// links are re-evaluated against the new span.
    pub async fn update_expiration(
        &self,
        ctx: &RequestContext,
        days: u32,
        time_of_day: &str,
    ) -> AppResult<ExpirationPolicy> {
        require_admin(ctx)?;
        let policy = ExpirationPolicy::parse(days, time_of_day)?;
        self.policy.update_policy(&policy).await?;
        info!(
            user_id = %ctx.user_id,
            days = policy.days,
            time_of_day = %policy.time_of_day_string(),
            "Expiration settings changed"
        );
        Ok(policy)
    }
}

fn require_admin(ctx: &RequestContext) -> AppResult<()> {
    if ctx.is_admin() {
        Ok(())
    } else {
        Err(AppError::forbidden("Only administrators can manage settings"))
    }
}
