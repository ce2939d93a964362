//! The narrow read interface the engine consumes from the key system.

use custos_types::{ActorAddress, KeyId, TrustId};
use serde::{Deserialize, Serialize};

/// What the key system reveals about one valid key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyAttributes {
    /// The trust this key belongs to.
    pub trust: TrustId,
    /// Whether this is the trust's root key (full control).
    pub is_root: bool,
}

/// Read-only view into the external capability-key system.
///
/// Implementations must be side-effect-free and total: unknown keys are
/// reported as invalid (`None`), never as failures.
pub trait KeyInspector {
    /// Resolve a key to its trust and root status. `None` means the key
    /// does not exist (or has been burned) — i.e. it is invalid.
    fn inspect(&self, key: KeyId) -> Option<KeyAttributes>;

    /// How many copies of `key` the given actor currently holds.
    fn key_balance_of(&self, holder: &ActorAddress, key: KeyId) -> u128;

    /// Whether every key in `keys` is valid and belongs to `trust`.
    /// When `allow_root` is false, the trust's root key is rejected as a
    /// member of the set.
    fn validate_key_set(&self, trust: TrustId, keys: &[KeyId], allow_root: bool) -> bool;
}
