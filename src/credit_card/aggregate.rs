use crate::aggregate::Aggregate;
use crate::credit_card::command::CreditCardCommand;
use crate::credit_card::error::CreditCardError;
use crate::credit_card::event::CreditCardEvent;
use crate::credit_card::state::CreditCardState;

/// The credit card aggregate.
///
/// A card is a balance advanced only by `Deposited` and `Charged` events.
/// Charging beyond the available balance is rejected at command time, so a
/// recorded history can never fold below zero.
pub struct CreditCardAggregate;

impl Aggregate for CreditCardAggregate {
    const NAME: &'static str = "credit_card";
    type State = CreditCardState;
    type Command = CreditCardCommand;
    type Event = CreditCardEvent;
    type Error = CreditCardError;

    fn handle_command(state: &Self::State, command: Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            CreditCardCommand::Deposit { amount } if amount < 0 => Err(CreditCardError::NegativeAmount),
            CreditCardCommand::Deposit { amount } => Ok(vec![CreditCardEvent::Deposited { amount }]),
            CreditCardCommand::Charge { amount } if amount < 0 => Err(CreditCardError::NegativeAmount),
            CreditCardCommand::Charge { amount } if amount > state.balance => Err(CreditCardError::InsufficientFunds {
                required: amount,
                available: state.balance,
            }),
            CreditCardCommand::Charge { amount } => Ok(vec![CreditCardEvent::Charged { amount }]),
        }
    }

    fn apply_event(state: Self::State, payload: Self::Event) -> Self::State {
        match payload {
            CreditCardEvent::Deposited { amount } => state.add_amount(amount),
            CreditCardEvent::Charged { amount } => state.sub_amount(amount),
        }
    }
}
