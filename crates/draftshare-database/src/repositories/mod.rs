//! Repository implementations backed by PostgreSQL.

pub mod document;
pub mod option;
pub mod registry;
pub mod settings;

pub use document::DocumentRepository;
pub use option::OptionRepository;
pub use registry::PgRegistryStore;
pub use settings::PgPolicySource;
