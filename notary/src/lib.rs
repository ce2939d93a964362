//! The authorization gate for every ledger mutation.
//!
//! The Notary tracks, per (ledger, trust, role), which actors the trust's
//! root-key holder currently trusts to act as collateral provider, scribe,
//! or event dispatcher — and the per-(ledger, key, module, asset) spendable
//! withdrawal allowances set by key holders. Every mutating ledger entry
//! point calls one of the `notarize_*` gates first and fails closed if the
//! actor/role/allowance conditions are not met.

pub mod error;
pub mod notary;

pub use error::NotaryError;
pub use notary::{DistributionPolicy, Notary};
