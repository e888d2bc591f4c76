//! HMAC-SHA256 keyed hasher.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use draftshare_core::error::AppError;
use draftshare_core::traits::KeyedHasher;

type HmacSha256 = Hmac<Sha256>;

/// Keyed hash backed by HMAC-SHA256 over a host-supplied secret.
#[derive(Clone)]
pub struct HmacKeyedHasher {
    mac: HmacSha256,
}

impl std::fmt::Debug for HmacKeyedHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacKeyedHasher").finish_non_exhaustive()
    }
}

impl HmacKeyedHasher {
    /// Creates a hasher keyed with `secret`.
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, AppError> {
        let secret = secret.as_ref();
        if secret.is_empty() {
            return Err(AppError::configuration("Keyed hash secret must not be empty"));
        }
        let mac = HmacSha256::new_from_slice(secret)
            .map_err(|e| AppError::configuration(format!("Invalid keyed hash secret: {e}")))?;
        Ok(Self { mac })
    }
}

impl KeyedHasher for HmacKeyedHasher {
    fn keyed_hash(&self, data: &[u8]) -> Vec<u8> {
        let mut mac = self.mac.clone();
        mac.update(data);
        mac.finalize().into_bytes().to_vec()
    }
}
