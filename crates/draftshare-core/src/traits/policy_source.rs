//! Source of the current expiration policy.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::ExpirationPolicy;

/// Supplies the expiration policy. Read on every tick computation, so an
/// updated policy applies to the very next request.
#[async_trait]
pub trait PolicySource: Send + Sync + std::fmt::Debug + 'static {
    /// Return the policy currently in force.
    async fn current_policy(&self) -> AppResult<ExpirationPolicy>;

    /// Replace the stored policy.
    async fn update_policy(&self, policy: &ExpirationPolicy) -> AppResult<()>;
}
