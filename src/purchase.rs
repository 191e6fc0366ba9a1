use uuid::Uuid;

use crate::donut::Donut;
use crate::error::DonutShopError;
use crate::payment::Payment;

/// The outcome of buying donuts: the donuts themselves plus the payment
/// covering them.
///
/// Only [`buy_donuts`] builds one, which keeps the payment amount equal to
/// the number of donuts times [`Donut::PRICE`].
#[derive(Clone, Debug)]
pub struct Purchase {
    donuts: Vec<Donut>,
    payment: Payment,
}

impl Purchase {
    pub fn donuts(&self) -> &[Donut] {
        &self.donuts
    }

    pub fn payment(&self) -> &Payment {
        &self.payment
    }
}

/// Builds the purchase of `quantity` donuts paid with the given card.
///
/// The card is referenced, never touched: no charge happens here. Settling
/// the payment is a separate, explicit step
/// (see [`DonutShop::settle`](crate::DonutShop::settle)).
pub fn buy_donuts(quantity: i32, card_id: Uuid) -> Result<Purchase, DonutShopError> {
    if quantity < 0 {
        return Err(DonutShopError::InvalidQuantity(quantity));
    }

    Ok(Purchase {
        donuts: vec![Donut; quantity as usize],
        payment: Payment::new(card_id, Donut::PRICE * quantity),
    })
}
