//! Key-vault errors.

use custos_types::{ActorAddress, KeyId, TrustId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyVaultError {
    #[error("trust {0} not found")]
    UnknownTrust(TrustId),

    #[error("key {0} not found")]
    UnknownKey(KeyId),

    #[error("actor {holder} does not hold key {key}")]
    NotHeld { holder: ActorAddress, key: KeyId },
}
