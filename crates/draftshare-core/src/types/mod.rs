//! Domain value types shared by every DraftShare crate.

pub mod document;
pub mod id;
pub mod policy;
pub mod role;

pub use document::{Document, DocumentType, PublishedStatuses};
pub use id::DocumentId;
pub use policy::ExpirationPolicy;
pub use role::EditorRole;
