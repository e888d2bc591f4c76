//! Time-windowed tokens.
//!
//! A token is a truncated keyed hash of the current tick and a context
//! string. Nothing about an issued token is stored: verification recomputes
//! the expected token for the current and previous tick.

pub mod clock;
pub mod codec;
pub mod form;
pub mod hasher;

pub use clock::{current_tick, tick_for_span, validity_span_seconds};
pub use codec::{TokenCodec, Verification};
pub use form::FormTokenGuard;
pub use hasher::HmacKeyedHasher;
