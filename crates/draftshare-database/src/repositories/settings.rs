//! Expiration policy persisted as two options.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tracing::{info, warn};

use draftshare_core::error::AppError;
use draftshare_core::result::AppResult;
use draftshare_core::traits::PolicySource;
use draftshare_core::types::ExpirationPolicy;

use super::option::OptionRepository;

/// Option holding the whole-days component.
pub const EXPIRATION_DAYS_OPTION: &str = "mfpp_expiration_days";

/// Option holding the `HH:MM` component.
pub const EXPIRATION_TIME_OPTION: &str = "mfpp_expiration_time";

/// Policy source reading the settings options on every call.
#[derive(Debug, Clone)]
pub struct PgPolicySource {
    options: OptionRepository,
    fallback: ExpirationPolicy,
}

impl PgPolicySource {
    /// Create a source that falls back to `fallback` for unset or unreadable options.
    pub fn new(pool: PgPool, fallback: ExpirationPolicy) -> Self {
        Self {
            options: OptionRepository::new(pool),
            fallback,
        }
    }
}

#[async_trait]
impl PolicySource for PgPolicySource {
    async fn current_policy(&self) -> AppResult<ExpirationPolicy> {
        let days = self.options.get(EXPIRATION_DAYS_OPTION).await?;
        let time = self.options.get(EXPIRATION_TIME_OPTION).await?;
        Ok(policy_from_options(days.as_ref(), time.as_ref(), self.fallback))
    }

    async fn update_policy(&self, policy: &ExpirationPolicy) -> AppResult<()> {
        self.options
            .set_many(&[
                (EXPIRATION_DAYS_OPTION, Value::from(policy.days)),
                (EXPIRATION_TIME_OPTION, Value::from(policy.time_of_day_string())),
            ])
            .await?;
        info!(
            days = policy.days,
            time_of_day = %policy.time_of_day_string(),
            "Expiration policy updated"
        );
        Ok(())
    }
}

/// Combine stored option values with the fallback, component by component.
pub fn policy_from_options(
    days: Option<&Value>,
    time: Option<&Value>,
    fallback: ExpirationPolicy,
) -> ExpirationPolicy {
    let days = days
        .and_then(|v| match v {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
        .and_then(|d| u32::try_from(d).ok())
        .unwrap_or(fallback.days);

    let time = time.and_then(Value::as_str).unwrap_or_default();
    let time_of_day = if time.is_empty() {
        fallback.time_of_day_string()
    } else {
        time.to_string()
    };

    ExpirationPolicy::parse(days, &time_of_day).unwrap_or_else(|e: AppError| {
        warn!(error = %e, "Stored expiration settings are invalid, using defaults");
        fallback
    })
}
