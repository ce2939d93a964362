//! Per-trust actor roles tracked by the Notary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The role an external actor plays on behalf of a trust's root-key holder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// A custody module physically holding an asset class and depositing /
    /// withdrawing it through the ledger.
    CollateralProvider,
    /// An actor permitted to move entitlement between keys within one trust.
    Scribe,
    /// An actor permitted to register trigger events for the trust.
    Dispatcher,
}

impl Role {
    /// Whether this role is allowed to move funds (as opposed to only
    /// registering events).
    pub fn moves_funds(&self) -> bool {
        matches!(self, Self::CollateralProvider | Self::Scribe)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CollateralProvider => write!(f, "collateral-provider"),
            Self::Scribe => write!(f, "scribe"),
            Self::Dispatcher => write!(f, "dispatcher"),
        }
    }
}
