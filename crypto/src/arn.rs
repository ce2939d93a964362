//! Deterministic identifier derivation.

use crate::hash::blake2b_256_multi;
use custos_types::{ActorAddress, Arn, EventId};

/// Derive the asset resource name for one asset type.
///
/// The ARN is a collision-resistant function of the custody contract's
/// address, the asset-standard tag (e.g. fungible vs. non-fungible
/// standard number), and the standard-specific sub-identifier. Equal
/// inputs always produce the same ARN, so any two modules referring to
/// the same underlying asset agree on its key.
pub fn derive_arn(contract: &ActorAddress, standard: u32, sub_id: &[u8]) -> Arn {
    let standard_bytes = standard.to_be_bytes();
    Arn::new(blake2b_256_multi(&[
        contract.as_str().as_bytes(),
        &standard_bytes,
        sub_id,
    ]))
}

/// Derive the identifier for a trigger event from its dispatcher and a
/// description of the firing condition.
pub fn derive_event_id(dispatcher: &ActorAddress, description: &str) -> EventId {
    EventId::new(blake2b_256_multi(&[
        dispatcher.as_str().as_bytes(),
        description.as_bytes(),
    ]))
}
