//! The three-tier custodial ledger.
//!
//! Every deposit or withdrawal against a capability key mutates three
//! balance scopes in lockstep — the platform-wide global scope, the
//! owning trust's scope, and the key's own scope — after the Notary has
//! authorized the acting module. Distributions move entitlement between
//! keys of one trust and touch only the key scopes, since the trust- and
//! platform-level holdings do not change.
//!
//! Execution is single-threaded and transactional: every entry point
//! validates, then notarizes, then mutates, so a call either fully
//! commits or returns with all state unchanged.

pub mod engine;
pub mod error;

pub use engine::{BalanceReceipt, LedgerEngine, Scope};
pub use error::LedgerError;
