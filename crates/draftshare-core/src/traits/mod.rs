//! Collaborator traits defined in `draftshare-core` and implemented by
//! other crates.

pub mod document_source;
pub mod keyed_hasher;
pub mod permission;
pub mod policy_source;
pub mod registry_store;

pub use document_source::DocumentSource;
pub use keyed_hasher::KeyedHasher;
pub use permission::EditPermission;
pub use policy_source::PolicySource;
pub use registry_store::RegistryStore;
