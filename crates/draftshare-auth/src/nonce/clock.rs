//! Epoch tick computation.

use tracing::warn;

use draftshare_core::types::ExpirationPolicy;

/// Validity span for `policy`, clamped to at least one second.
pub fn validity_span_seconds(policy: &ExpirationPolicy) -> i64 {
    let span = policy.validity_span_seconds();
    if span < 1 {
        warn!(
            days = policy.days,
            time_of_day = %policy.time_of_day_string(),
            "Expiration policy has no duration, clamping to one second"
        );
        return 1;
    }
    span
}

/// Current tick for `policy` at unix time `now`.
///
/// Each tick spans half the configured validity, so accepting the current
/// and the previous tick gives a link between one half-span and one full
/// span of life.
pub fn current_tick(policy: &ExpirationPolicy, now: i64) -> i64 {
    tick_for_span(validity_span_seconds(policy), now)
}

/// Tick for an explicit validity span in seconds.
pub fn tick_for_span(span_seconds: i64, now: i64) -> i64 {
    let half_span = span_seconds.max(1) as f64 / 2.0;
    (now as f64 / half_span).ceil() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_day() -> ExpirationPolicy {
        ExpirationPolicy::parse(1, "00:00").unwrap()
    }

    #[test]
    fn test_tick_is_ceil_of_half_span() {
        let policy = one_day();
        assert_eq!(current_tick(&policy, 0), 0);
        assert_eq!(current_tick(&policy, 1), 1);
        assert_eq!(current_tick(&policy, 43_200), 1);
        assert_eq!(current_tick(&policy, 43_201), 2);
    }

    #[test]
    fn test_tick_non_decreasing_and_advances_each_half_span() {
        let policy = ExpirationPolicy::parse(0, "01:00").unwrap();
        let half_span = 1_800;
        let start = 1_700_000_000;
        let mut previous = current_tick(&policy, start);
        for now in (start..start + 4 * half_span).step_by(97) {
            let tick = current_tick(&policy, now);
            assert!(tick >= previous);
            previous = tick;
        }
        for now in (start..start + 10 * half_span).step_by(half_span as usize) {
            assert!(current_tick(&policy, now + half_span) > current_tick(&policy, now));
        }
    }

    #[test]
    fn test_zero_span_is_clamped() {
        let policy = ExpirationPolicy::parse(0, "00:00").unwrap();
        assert_eq!(validity_span_seconds(&policy), 1);
        assert_eq!(current_tick(&policy, 10), 20);
    }

    #[test]
    fn test_odd_span_uses_fractional_half() {
        assert_eq!(tick_for_span(3, 3), 2);
        assert_eq!(tick_for_span(3, 4), 3);
    }
}
