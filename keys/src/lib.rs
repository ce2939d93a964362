//! The capability-key seam.
//!
//! Key issuance, copying, burning, and trust membership live in an external
//! system. The accounting engine consumes it only through the narrow
//! [`KeyInspector`] trait: "is this key valid, for which trust, and is it
//! the trust's root key", "does this actor currently hold this key", and
//! "do these keys all belong to this trust".
//!
//! [`InMemoryKeyVault`] is a deterministic in-memory implementation for
//! tests and for embedders that do not run a real key system.

pub mod error;
pub mod inspector;
pub mod vault;

pub use error::KeyVaultError;
pub use inspector::{KeyAttributes, KeyInspector};
pub use vault::InMemoryKeyVault;
