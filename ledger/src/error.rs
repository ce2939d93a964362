//! Ledger errors.
//!
//! All variants are caller errors, detected before any mutation. Internal
//! consistency faults (a scope diverging from what the Notary authorized)
//! are not errors — they panic, because continuing would operate on a
//! corrupted ledger.

use custos_notary::NotaryError;
use custos_types::Arn;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("amount must be positive")]
    ZeroAmount,

    #[error("overdraft on asset {arn}: need {needed}, have {available}")]
    Overdraft {
        arn: Arn,
        needed: u128,
        available: u128,
    },

    #[error("destination/amount length mismatch: {destinations} destinations, {amounts} amounts")]
    LengthMismatch {
        destinations: usize,
        amounts: usize,
    },

    #[error("distribution amounts overflow")]
    AmountOverflow,

    #[error(transparent)]
    Notary(#[from] NotaryError),
}
