//! Expiration policy for preview links.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Seconds in one day.
pub const DAY_IN_SECONDS: i64 = 86_400;

/// Upper bound accepted for the days component.
pub const MAX_EXPIRATION_DAYS: u32 = 365;

/// Total nominal validity of a preview link, expressed as whole days plus a
/// time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirationPolicy {
    /// Whole days.
    pub days: u32,
    /// Additional time, measured from midnight.
    #[serde(with = "hhmm")]
    pub time_of_day: NaiveTime,
}

impl ExpirationPolicy {
    /// Build a policy from its settings representation.
    pub fn parse(days: u32, time_of_day: &str) -> Result<Self, AppError> {
        if days > MAX_EXPIRATION_DAYS {
            return Err(AppError::validation(format!(
                "Expiration days must be between 0 and {MAX_EXPIRATION_DAYS}"
            )));
        }
        let time_of_day = parse_time_of_day(time_of_day)?;
        Ok(Self { days, time_of_day })
    }

    /// Total validity span in seconds. May be zero for a misconfigured policy.
    pub fn validity_span_seconds(&self) -> i64 {
        i64::from(self.days) * DAY_IN_SECONDS
            + i64::from(self.time_of_day.num_seconds_from_midnight())
    }

    /// Time of day rendered as `HH:MM`.
    pub fn time_of_day_string(&self) -> String {
        self.time_of_day.format("%H:%M").to_string()
    }
}

impl Default for ExpirationPolicy {
    fn default() -> Self {
        Self {
            days: 2,
            time_of_day: NaiveTime::MIN,
        }
    }
}

/// Parse an `HH:MM` string.
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|e| AppError::validation(format!("Invalid time of day '{value}': {e}")))
}

mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_time_of_day(&raw).map_err(|e| serde::de::Error::custom(e.message))
    }
}
