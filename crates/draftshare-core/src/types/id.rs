//! Document identifier newtype.
//!
//! Document ids come from the hosting document-management system as plain
//! positive integers. Wrapping them keeps registry code from mixing them up
//! with ticks or timestamps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A positive document identifier. Bounded by `i64::MAX` so that every id
/// survives the signed integer storage of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct DocumentId(u64);

impl DocumentId {
    /// Wrap a raw id, rejecting zero and values above `i64::MAX`.
    pub fn new(raw: u64) -> Option<Self> {
        (raw > 0 && i64::try_from(raw).is_ok()).then_some(Self(raw))
    }

    /// Coerce a stored integer, dropping non-positive values.
    pub fn from_stored(raw: i64) -> Option<Self> {
        u64::try_from(raw).ok().and_then(Self::new)
    }

    /// Return the inner value.
    pub fn get(self) -> u64 {
        self.0
    }

    /// The value as stored by registry backends.
    pub fn to_stored(self) -> i64 {
        // `new` guarantees the value fits
        i64::try_from(self.0).unwrap_or(i64::MAX)
    }
}

impl TryFrom<u64> for DocumentId {
    type Error = ParseDocumentIdError;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        Self::new(raw).ok_or_else(|| ParseDocumentIdError(raw.to_string()))
    }
}

impl From<DocumentId> for u64 {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when parsing a [`DocumentId`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid document id: {0:?}")]
pub struct ParseDocumentIdError(pub String);

impl FromStr for DocumentId {
    type Err = ParseDocumentIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ParseDocumentIdError(s.to_string()))
    }
}
