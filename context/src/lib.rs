//! Per-scope balance accounting.
//!
//! A [`BalanceContext`] tracks, for one scope (the whole platform, one
//! trust, or one capability key), the total balance of every asset broken
//! down by which custody module deposited it — plus the membership
//! registries needed to enumerate assets and modules without scanning
//! the raw balance maps.

pub mod context;
pub mod error;

pub use context::BalanceContext;
pub use error::ContextError;
