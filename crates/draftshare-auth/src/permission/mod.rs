//! Edit permission over documents.

pub mod role_based;

pub use role_based::RoleEditPermission;
