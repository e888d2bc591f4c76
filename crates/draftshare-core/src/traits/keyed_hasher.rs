//! Keyed hash supplied by the hosting environment.

/// A keyed hash over arbitrary bytes.
///
/// The key lives inside the implementation; callers only ever see digests.
pub trait KeyedHasher: Send + Sync + std::fmt::Debug + 'static {
    /// Hash `data` with the process-wide key.
    fn keyed_hash(&self, data: &[u8]) -> Vec<u8>;
}
