use uuid::Uuid;

use crate::aggregate::Aggregate;
use crate::state::AggregateState;
use crate::store::EventStore;

/// The AggregateManager couples an [`Aggregate`] with an [`EventStore`], so
/// that the events a handled command emits get recorded, and the state can
/// be reconstructed by loading and applying events sequentially.
pub struct AggregateManager<E>
where
    E: EventStore,
{
    event_store: E,
}

impl<E> AggregateManager<E>
where
    E: EventStore,
{
    /// Creates a new instance of an [`AggregateManager`].
    pub fn new(event_store: E) -> Self {
        Self { event_store }
    }

    /// Validates and handles the command onto the given state, records the
    /// resulting events, and returns the state with those events applied.
    pub fn handle_command(
        &mut self,
        aggregate_state: AggregateState<<E::Aggregate as Aggregate>::State>,
        command: <E::Aggregate as Aggregate>::Command,
    ) -> Result<AggregateState<<E::Aggregate as Aggregate>::State>, <E::Aggregate as Aggregate>::Error> {
        let events: Vec<<E::Aggregate as Aggregate>::Event> =
            <E::Aggregate as Aggregate>::handle_command(aggregate_state.inner(), command)?;

        let store_events = self.event_store.persist(
            aggregate_state.id(),
            events,
            aggregate_state.sequence_number() + 1,
        )?;

        Ok(aggregate_state.apply_store_events(store_events, <E::Aggregate as Aggregate>::apply_event))
    }

    /// Loads an aggregate instance from the event store, by applying the
    /// previously recorded events onto a fresh state by order of their
    /// sequence number. Returns `None` for an instance with no history.
    pub fn load(
        &self,
        aggregate_id: Uuid,
    ) -> Result<Option<AggregateState<<E::Aggregate as Aggregate>::State>>, <E::Aggregate as Aggregate>::Error> {
        let store_events = self.event_store.by_aggregate_id(aggregate_id)?;

        Ok(if store_events.is_empty() {
            None
        } else {
            let aggregate_state = AggregateState::with_id(aggregate_id);
            Some(aggregate_state.apply_store_events(store_events, <E::Aggregate as Aggregate>::apply_event))
        })
    }

    /// Returns the internal event store
    pub fn event_store(&self) -> &E {
        &self.event_store
    }
}
