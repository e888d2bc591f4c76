//! Token derivation and verification.

use std::sync::Arc;

use subtle::ConstantTimeEq;

use draftshare_core::traits::KeyedHasher;
use draftshare_core::types::ExpirationPolicy;

use super::clock::current_tick;

/// Number of characters in a token.
pub const TOKEN_LENGTH: usize = 10;

/// Distance from the end of the hex digest at which the token starts.
pub const TOKEN_TAIL_OFFSET: usize = 12;

/// Outcome of verifying a candidate token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// Issued during the current tick.
    Fresh,
    /// Issued during the previous tick, still accepted.
    Stale,
    /// Not issued for this context within the last two ticks.
    Invalid,
}

impl Verification {
    /// Whether the token is accepted.
    pub fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

/// Derives short deterministic tokens from a tick and a context string.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    hasher: Arc<dyn KeyedHasher>,
}

impl TokenCodec {
    /// Creates a codec over the host-supplied keyed hash.
    pub fn new(hasher: Arc<dyn KeyedHasher>) -> Self {
        Self { hasher }
    }

    /// Token for `tick` and `context`.
    pub fn derive(&self, tick: i64, context: &str) -> String {
        let digest = self.hasher.keyed_hash(format!("{tick}{context}").as_bytes());
        truncate(&hex::encode(&digest))
    }

    /// Token for `context` at the current tick of `policy`.
    pub fn issue(&self, context: &str, policy: &ExpirationPolicy, now: i64) -> String {
        self.derive(current_tick(policy, now), context)
    }

    /// Verify `candidate` against the current tick of `policy`.
    pub fn verify(
        &self,
        candidate: &str,
        context: &str,
        policy: &ExpirationPolicy,
        now: i64,
    ) -> Verification {
        self.verify_at_tick(candidate, context, current_tick(policy, now))
    }

    /// Verify `candidate` against `tick` and the tick before it.
    pub fn verify_at_tick(&self, candidate: &str, context: &str, tick: i64) -> Verification {
        if candidate.is_empty() {
            return Verification::Invalid;
        }
        if constant_time_eq(candidate, &self.derive(tick, context)) {
            return Verification::Fresh;
        }
        if constant_time_eq(candidate, &self.derive(tick - 1, context)) {
            return Verification::Stale;
        }
        Verification::Invalid
    }
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    bool::from(a.as_bytes().ct_eq(b.as_bytes()))
}

/// Take `TOKEN_LENGTH` characters starting `TOKEN_TAIL_OFFSET` from the end.
fn truncate(hex: &str) -> String {
    let start = hex.len().saturating_sub(TOKEN_TAIL_OFFSET);
    let end = (start + TOKEN_LENGTH).min(hex.len());
    hex[start..end].to_string()
}

/// Lowercase hex encoding.
mod hex {
    /// Encode bytes to hex string.
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nonce::HmacKeyedHasher;

    fn codec() -> TokenCodec {
        TokenCodec::new(Arc::new(HmacKeyedHasher::new("test-secret").unwrap()))
    }

    #[derive(Debug)]
    struct FixedHasher;

    impl KeyedHasher for FixedHasher {
        fn keyed_hash(&self, _data: &[u8]) -> Vec<u8> {
            (0u8..16).collect()
        }
    }

    #[test]
    fn test_truncation_offsets() {
        // hex of 0x00..0x0f is "000102030405060708090a0b0c0d0e0f"
        let codec = TokenCodec::new(Arc::new(FixedHasher));
        assert_eq!(codec.derive(1, "x"), "0a0b0c0d0e");
    }

    #[test]
    fn test_derive_is_deterministic() {
        let codec = codec();
        let a = codec.derive(39_352, "share_draft_pages_42");
        let b = codec.derive(39_352, "share_draft_pages_42");
        assert_eq!(a, b);
        assert_eq!(a.len(), TOKEN_LENGTH);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_context_changes_token() {
        let codec = codec();
        assert_ne!(
            codec.derive(10, "share_draft_pages_42"),
            codec.derive(10, "share_draft_pages_43")
        );
    }

    #[test]
    fn test_verify_accepts_current_and_previous_tick() {
        let codec = codec();
        let ctx = "share_draft_pages_7";
        assert_eq!(
            codec.verify_at_tick(&codec.derive(100, ctx), ctx, 100),
            Verification::Fresh
        );
        assert_eq!(
            codec.verify_at_tick(&codec.derive(99, ctx), ctx, 100),
            Verification::Stale
        );
        assert_eq!(
            codec.verify_at_tick(&codec.derive(98, ctx), ctx, 100),
            Verification::Invalid
        );
        assert_eq!(
            codec.verify_at_tick(&codec.derive(100, ctx), "share_draft_pages_8", 100),
            Verification::Invalid
        );
        assert_eq!(codec.verify_at_tick("", ctx, 100), Verification::Invalid);
    }

    #[test]
    fn test_one_day_scenario() {
        let codec = codec();
        let policy = ExpirationPolicy::parse(1, "00:00").unwrap();
        let ctx = "share_draft_pages_42";
        let t = 1_700_000_123;
        let token = codec.issue(ctx, &policy, t);

        assert!(codec.verify(&token, ctx, &policy, t).is_valid());
        assert!(codec.verify(&token, ctx, &policy, t + 40_000).is_valid());
        assert_eq!(
            codec.verify(&token, ctx, &policy, t + 130_000),
            Verification::Invalid
        );
    }

    #[test]
    fn test_policy_change_reshapes_outstanding_tokens() {
        let codec = codec();
        let ctx = "share_draft_pages_5";
        let long = ExpirationPolicy::parse(2, "00:00").unwrap();
        let short = ExpirationPolicy::parse(0, "01:00").unwrap();
        let t = 1_700_000_000;
        let token = codec.issue(ctx, &long, t);
        assert!(codec.verify(&token, ctx, &long, t + 60).is_valid());
        assert_eq!(
            codec.verify(&token, ctx, &short, t + 60),
            Verification::Invalid
        );
    }
}
