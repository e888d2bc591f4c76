//! Request handlers, grouped by surface.

pub mod documents;
pub mod health;
pub mod preview;
pub mod registrations;
pub mod settings;
pub mod toggle;
