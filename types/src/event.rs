//! Trigger-event identifier.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte identifier for an externally registered trigger event
/// (timer firing, oracle attestation, …).
///
/// The event log itself lives outside this engine; the Notary only gates
/// who may register events for a trust.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId([u8; 32]);

impl EventId {
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EventId({})", crate::arn::hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::arn::hex::encode(&self.0))
    }
}
