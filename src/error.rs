use thiserror::Error;
use uuid::Uuid;

use crate::credit_card::error::CreditCardError;

/// Errors surfaced by the donut shop domain. Every failure is returned to
/// the immediate caller; nothing is retried.
#[derive(Debug, Error)]
pub enum DonutShopError {
    /// Two payments against different cards cannot be folded into one.
    #[error("payments charge different cards: {expected} and {found}")]
    IncompatibleCard { expected: Uuid, found: Uuid },

    #[error("invalid donut quantity: {0}")]
    InvalidQuantity(i32),

    #[error("no card with id {0}")]
    UnknownCard(Uuid),

    #[error(transparent)]
    CreditCard(#[from] CreditCardError),
}
