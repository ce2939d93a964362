//! Balance-context errors.

use custos_types::Arn;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("overdraft on asset {arn}: need {needed}, have {available}")]
    Overdraft {
        arn: Arn,
        needed: u128,
        available: u128,
    },
}
