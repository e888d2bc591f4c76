//! # draftshare-service
//!
//! Business logic for DraftShare. Services take their collaborators as
//! `Arc` trait objects at construction time and hold no state between
//! calls; the registry store is the only durable state.

pub mod context;
pub mod lifecycle;
pub mod preview;
pub mod settings;
pub mod toggle;

pub use context::RequestContext;
pub use lifecycle::{LifecycleHooks, SaveEvent, SaveReport};
pub use preview::{
    AccessRegistry, Authorization, LinkBuilder, PreviewAuthorizer, PreviewGrant, PreviewOutcome,
    ReconcileOutcome,
};
pub use settings::SettingsService;
pub use toggle::{PanelState, ToggleRequest, ToggleResult, ToggleService};
