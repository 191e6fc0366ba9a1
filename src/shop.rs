use uuid::Uuid;

use crate::credit_card::aggregate::CreditCardAggregate;
use crate::credit_card::command::CreditCardCommand;
use crate::error::DonutShopError;
use crate::manager::AggregateManager;
use crate::payment::Payment;
use crate::state::AggregateState;
use crate::store::InMemoryStore;

/// The context owning every card known to the shop.
///
/// Payments only carry card ids; all card state lives here, and every
/// mutation goes through `&mut self`, so charges against a card are always
/// serialized. The type itself is not safe for concurrent mutation: share
/// it across threads only behind external synchronization (a mutex, or a
/// single owning task).
pub struct DonutShop {
    cards: AggregateManager<InMemoryStore<CreditCardAggregate>>,
}

impl Default for DonutShop {
    fn default() -> Self {
        Self::new()
    }
}

impl DonutShop {
    pub fn new() -> Self {
        Self {
            cards: AggregateManager::new(InMemoryStore::new()),
        }
    }

    /// Opens a card with the given opening balance and returns its id.
    pub fn open_card(&mut self, initial_balance: i32) -> Result<Uuid, DonutShopError> {
        let card_id = Uuid::new_v4();
        let state = AggregateState::with_id(card_id);

        self.cards
            .handle_command(state, CreditCardCommand::Deposit { amount: initial_balance })?;

        tracing::info!(%card_id, initial_balance, "card opened");
        Ok(card_id)
    }

    /// Current balance of the card, reconstructed from its event history.
    pub fn balance(&self, card_id: Uuid) -> Result<i32, DonutShopError> {
        let state = self
            .cards
            .load(card_id)?
            .ok_or(DonutShopError::UnknownCard(card_id))?;

        Ok(state.inner().balance)
    }

    /// Settles the given payments: groups them by card with
    /// [`Payment::group_by_card`], then charges every card exactly once with
    /// its summed amount. Returns the grouped payments that were charged.
    ///
    /// A rejected charge (unknown card, insufficient funds) is returned to
    /// the caller and aborts the settlement of the remaining groups; groups
    /// already charged stay charged.
    pub fn settle(&mut self, payments: Vec<Payment>) -> Result<Vec<Payment>, DonutShopError> {
        let grouped = Payment::group_by_card(payments)?;

        for payment in &grouped {
            let state = self
                .cards
                .load(payment.card_id())?
                .ok_or_else(|| DonutShopError::UnknownCard(payment.card_id()))?;

            self.cards
                .handle_command(state, CreditCardCommand::Charge { amount: payment.amount() })?;

            tracing::info!(card_id = %payment.card_id(), amount = payment.amount(), "payment settled");
        }

        Ok(grouped)
    }
}
