//! Notarization errors.
//!
//! All of these are caller errors: they are detected before any state
//! mutation and leave the Notary (and the calling ledger) unchanged.

use custos_types::{ActorAddress, KeyId, Role, TrustId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotaryError {
    #[error("key {0} is not a valid capability key")]
    InvalidKey(KeyId),

    #[error("key {0} is not its trust's root key")]
    NotRootKey(KeyId),

    #[error("actor {actor} does not hold key {key}")]
    KeyNotHeld { actor: ActorAddress, key: KeyId },

    #[error("key {held} cannot set allowances for key {key}")]
    KeyMismatch { held: KeyId, key: KeyId },

    #[error("actor {actor} is not trusted as {role} for {trust}")]
    UntrustedActor {
        actor: ActorAddress,
        role: Role,
        trust: TrustId,
    },

    #[error("actor {actor} is already trusted as {role}")]
    RedundantActor { actor: ActorAddress, role: Role },

    #[error("actor {actor} is not currently trusted as {role}")]
    UnknownActor { actor: ActorAddress, role: Role },

    #[error("insufficient withdrawal allowance: need {needed}, have {available}")]
    InsufficientAllowance { needed: u128, available: u128 },

    #[error("destination/amount length mismatch: {destinations} destinations, {amounts} amounts")]
    LengthMismatch {
        destinations: usize,
        amounts: usize,
    },

    #[error("destination keys are not all non-excluded members of {trust}")]
    InvalidDestinations { trust: TrustId },
}
