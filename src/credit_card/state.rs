/// Balance of a single card, in the same integer unit as
/// [`Donut::PRICE`](crate::Donut::PRICE).
#[derive(Clone, Debug)]
pub struct CreditCardState {
    pub balance: i32,
}

impl Default for CreditCardState {
    fn default() -> Self {
        Self { balance: 0 }
    }
}

impl CreditCardState {
    pub fn add_amount(self, amount: i32) -> Self {
        Self {
            balance: self.balance + amount,
        }
    }

    pub fn sub_amount(self, amount: i32) -> Self {
        Self {
            balance: self.balance - amount,
        }
    }
}
