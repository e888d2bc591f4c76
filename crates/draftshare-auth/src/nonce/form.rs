//! Per-document anti-forgery tokens for editor requests.
//!
//! Same construction as preview tokens, but keyed with a separate secret,
//! bound to the acting editor, and living for a fixed span.

use std::sync::Arc;

use uuid::Uuid;

use draftshare_core::error::AppError;
use draftshare_core::types::DocumentId;

use super::clock::tick_for_span;
use super::codec::TokenCodec;
use super::hasher::HmacKeyedHasher;

/// Issues and checks anti-forgery tokens for toggle and save requests.
#[derive(Debug, Clone)]
pub struct FormTokenGuard {
    codec: TokenCodec,
    lifetime_seconds: i64,
}

impl FormTokenGuard {
    /// Creates a guard keyed with `secret`.
    pub fn new(secret: &str, lifetime_seconds: u64) -> Result<Self, AppError> {
        let hasher = HmacKeyedHasher::new(secret)?;
        Ok(Self {
            codec: TokenCodec::new(Arc::new(hasher)),
            lifetime_seconds: i64::try_from(lifetime_seconds).unwrap_or(i64::MAX),
        })
    }

    /// Token authorizing `user_id` to change `document_id`.
    pub fn issue(&self, user_id: Uuid, document_id: DocumentId, now: i64) -> String {
        self.codec.derive(self.tick(now), &context(user_id, document_id))
    }

    /// Check a submitted token.
    pub fn verify(
        &self,
        token: &str,
        user_id: Uuid,
        document_id: DocumentId,
        now: i64,
    ) -> Result<(), AppError> {
        let verdict =
            self.codec
                .verify_at_tick(token, &context(user_id, document_id), self.tick(now));
        if verdict.is_valid() {
            Ok(())
        } else {
            Err(AppError::anti_forgery("Invalid or missing form token"))
        }
    }

    fn tick(&self, now: i64) -> i64 {
        tick_for_span(self.lifetime_seconds, now)
    }
}

fn context(user_id: Uuid, document_id: DocumentId) -> String {
    format!("share-draft-pages_{document_id}|{user_id}")
}
