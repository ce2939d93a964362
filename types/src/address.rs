//! Actor address type with `cst_` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The authenticated identity of any external participant: custody modules
/// (collateral providers), scribes, event dispatchers, key holders, and
/// ledger instances themselves.
///
/// The platform has no ambient "current caller"; every entry point takes
/// the acting identity as an explicit `ActorAddress` parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorAddress(String);

impl ActorAddress {
    /// The standard prefix for all Custos actor addresses.
    pub const PREFIX: &'static str = "cst_";

    /// Create a new actor address from a raw string.
    ///
    /// # Panics
    /// Panics if the string does not start with `cst_`.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(s.starts_with(Self::PREFIX), "address must start with cst_");
        Self(s)
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this address is well-formed.
    pub fn is_valid(&self) -> bool {
        self.0.starts_with(Self::PREFIX) && self.0.len() > Self::PREFIX.len()
    }
}

impl fmt::Display for ActorAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ActorAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
