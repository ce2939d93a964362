//! Fundamental types for the Custos custody platform.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: actor addresses, asset resource names, trust and key ids,
//! trigger-event ids, and the per-trust actor roles.

pub mod address;
pub mod arn;
pub mod event;
pub mod id;
pub mod role;

pub use address::ActorAddress;
pub use arn::Arn;
pub use event::EventId;
pub use id::{KeyId, TrustId};
pub use role::Role;
