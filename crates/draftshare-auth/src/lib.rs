//! # draftshare-auth
//!
//! Token and permission primitives for DraftShare.
//!
//! ## Modules
//!
//! - `nonce`: rotating-window preview tokens, the keyed hasher, and
//!   per-document anti-forgery form tokens
//! - `jwt`: editor access token creation and validation
//! - `permission`: role-based edit permission over documents

pub mod jwt;
pub mod nonce;
pub mod permission;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use nonce::{FormTokenGuard, HmacKeyedHasher, TokenCodec, Verification};
pub use permission::RoleEditPermission;
