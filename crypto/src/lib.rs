//! Hashing primitives for the Custos platform.
//!
//! - **Blake2b-256** for all identifier derivation
//! - ARN derivation from (custody contract address, asset-standard tag, sub-identifier)
//! - Event-id derivation for trigger registration

pub mod arn;
pub mod hash;

pub use arn::{derive_arn, derive_event_id};
pub use hash::{blake2b_256, blake2b_256_multi};
