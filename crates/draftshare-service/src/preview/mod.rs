//! Public draft preview: registry, links, and request authorization.

pub mod authorizer;
pub mod link;
pub mod pagination;
pub mod registry;

pub use authorizer::{Authorization, PreviewAuthorizer, PreviewGrant, PreviewOutcome};
pub use link::LinkBuilder;
pub use registry::{AccessRegistry, ReconcileOutcome};
