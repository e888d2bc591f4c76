//! # draftshare-database
//!
//! PostgreSQL connection management, the `options` key/value store that
//! backs the preview registry and expiration settings, the document
//! repository, and in-memory collaborators for single-process use and tests.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use memory::{MemoryDocumentSource, MemoryPolicySource, MemoryRegistryStore};
pub use repositories::{DocumentRepository, OptionRepository, PgPolicySource, PgRegistryStore};
