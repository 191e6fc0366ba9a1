use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::aggregate::Aggregate;
use crate::store::{EventStore, StoreEvent};
use crate::types::SequenceNumber;

/// A row of the in-memory event log. The payload is kept serialized, the
/// same way a database store would keep it in a json column.
struct EventRow {
    id: Uuid,
    aggregate_id: Uuid,
    payload: serde_json::Value,
    occurred_on: DateTime<Utc>,
    sequence_number: SequenceNumber,
}

/// An [`EventStore`] backed by a plain in-process `Vec`.
///
/// Nothing survives the process: this store exists to give aggregates a
/// history to fold, not to persist one.
pub struct InMemoryStore<A> {
    events: Vec<EventRow>,
    aggregate: PhantomData<A>,
}

impl<A> Default for InMemoryStore<A> {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            aggregate: PhantomData,
        }
    }
}

impl<A> InMemoryStore<A> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A> EventStore for InMemoryStore<A>
where
    A: Aggregate,
    A::Error: From<serde_json::Error>,
{
    type Aggregate = A;

    fn by_aggregate_id(&self, aggregate_id: Uuid) -> Result<Vec<StoreEvent<A::Event>>, A::Error> {
        let mut store_events: Vec<StoreEvent<A::Event>> = Vec::new();

        for row in self.events.iter().filter(|row| row.aggregate_id == aggregate_id) {
            store_events.push(StoreEvent {
                id: row.id,
                aggregate_id: row.aggregate_id,
                payload: serde_json::from_value(row.payload.clone())?,
                occurred_on: row.occurred_on,
                sequence_number: row.sequence_number,
            });
        }

        store_events.sort_by_key(|store_event| store_event.sequence_number);
        Ok(store_events)
    }

    #[tracing::instrument(skip_all, fields(aggregate = A::NAME, aggregate_id = %aggregate_id), err)]
    fn persist(
        &mut self,
        aggregate_id: Uuid,
        events: Vec<A::Event>,
        starting_sequence_number: SequenceNumber,
    ) -> Result<Vec<StoreEvent<A::Event>>, A::Error> {
        let mut store_events: Vec<StoreEvent<A::Event>> = Vec::with_capacity(events.len());

        for (index, event) in events.into_iter().enumerate() {
            let payload: serde_json::Value = serde_json::to_value(&event)?;

            let store_event = StoreEvent {
                id: Uuid::new_v4(),
                aggregate_id,
                payload: event,
                occurred_on: Utc::now(),
                sequence_number: starting_sequence_number + index as SequenceNumber,
            };

            self.events.push(EventRow {
                id: store_event.id,
                aggregate_id: store_event.aggregate_id,
                payload,
                occurred_on: store_event.occurred_on,
                sequence_number: store_event.sequence_number,
            });

            store_events.push(store_event);
        }

        Ok(store_events)
    }
}
