//! Editor roles carried in editor JWTs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role of an authenticated editor in the hosting system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorRole {
    /// Full access including settings.
    Admin,
    /// May edit any document.
    Editor,
    /// May edit own documents.
    Author,
    /// May edit own documents, cannot publish.
    Contributor,
}

impl EditorRole {
    /// Whether the role may change site-wide settings.
    pub fn can_manage_settings(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether the role may edit documents owned by others.
    pub fn can_edit_others(&self) -> bool {
        matches!(self, Self::Admin | Self::Editor)
    }
}

impl fmt::Display for EditorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Editor => write!(f, "editor"),
            Self::Author => write!(f, "author"),
            Self::Contributor => write!(f, "contributor"),
        }
    }
}

impl FromStr for EditorRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "editor" => Ok(Self::Editor),
            "author" => Ok(Self::Author),
            "contributor" => Ok(Self::Contributor),
            other => Err(format!("unknown role: {other}")),
        }
    }
}
