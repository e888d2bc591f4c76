//! # draftshare-core
//!
//! Core crate for DraftShare. Contains configuration schemas, the
//! collaborator traits implemented by the storage and auth crates,
//! domain value types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other DraftShare crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
