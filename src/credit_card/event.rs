use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub enum CreditCardEvent {
    Deposited { amount: i32 },
    Charged { amount: i32 },
}
