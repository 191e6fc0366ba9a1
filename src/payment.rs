use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DonutShopError;

/// An amount to be charged to a specific card.
///
/// A `Payment` is the record of a charge, not the charge itself: building
/// one has no effect on any card. The effect only happens when the payment
/// is settled (see [`DonutShop::settle`](crate::DonutShop::settle)).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    card_id: Uuid,
    amount: i32,
}

impl Payment {
    pub fn new(card_id: Uuid, amount: i32) -> Self {
        Self { card_id, amount }
    }

    pub fn card_id(&self) -> Uuid {
        self.card_id
    }

    pub fn amount(&self) -> i32 {
        self.amount
    }

    /// Folds two payments against the same card into one, summing their
    /// amounts. Payments against different cards are incompatible.
    pub fn combine(self, other: Payment) -> Result<Payment, DonutShopError> {
        if self.card_id != other.card_id {
            return Err(DonutShopError::IncompatibleCard {
                expected: self.card_id,
                found: other.card_id,
            });
        }

        Ok(Payment {
            card_id: self.card_id,
            amount: self.amount + other.amount,
        })
    }

    /// Groups the payments by card id and folds each group with
    /// [`Payment::combine`], yielding one payment per distinct card. Order
    /// across cards is unspecified.
    ///
    /// Combining only ever happens within one group, so the
    /// incompatible-card error is propagated but unreachable from here.
    pub fn group_by_card(payments: Vec<Payment>) -> Result<Vec<Payment>, DonutShopError> {
        let mut groups: HashMap<Uuid, Payment> = HashMap::new();

        for payment in payments {
            let group = match groups.remove(&payment.card_id) {
                Some(folded) => folded.combine(payment)?,
                None => payment,
            };
            groups.insert(group.card_id, group);
        }

        Ok(groups.into_values().collect())
    }
}
