use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::aggregate::Aggregate;
use crate::types::SequenceNumber;

mod in_memory;

pub use in_memory::InMemoryStore;

/// An EventStore is responsible for recording the events that an aggregate
/// emits, and for loading back the events that make up an aggregate
/// instance's history.
pub trait EventStore {
    type Aggregate: Aggregate;

    /// Loads the events that an aggregate instance has emitted in the past,
    /// ordered by sequence number.
    fn by_aggregate_id(
        &self,
        aggregate_id: Uuid,
    ) -> Result<Vec<StoreEvent<<Self::Aggregate as Aggregate>::Event>>, <Self::Aggregate as Aggregate>::Error>;

    /// Records the events emitted by one handled command, numbering them
    /// from `starting_sequence_number`. Either all the events are recorded,
    /// or none are.
    fn persist(
        &mut self,
        aggregate_id: Uuid,
        events: Vec<<Self::Aggregate as Aggregate>::Event>,
        starting_sequence_number: SequenceNumber,
    ) -> Result<Vec<StoreEvent<<Self::Aggregate as Aggregate>::Event>>, <Self::Aggregate as Aggregate>::Error>;
}

/// A `StoreEvent` contains the payload (the original event) alongside the
/// event's metadata.
#[derive(Debug, Clone)]
pub struct StoreEvent<Event> {
    /// Uniquely identifies an event among all events emitted from all aggregates.
    pub id: Uuid,
    /// The aggregate instance that emitted the event.
    pub aggregate_id: Uuid,
    /// The original, emitted, event.
    pub payload: Event,
    /// The timestamp of when the event was recorded.
    pub occurred_on: DateTime<Utc>,
    /// The sequence number of the event, within its specific aggregate instance.
    pub sequence_number: SequenceNumber,
}

impl<Event> StoreEvent<Event> {
    pub const fn sequence_number(&self) -> SequenceNumber {
        self.sequence_number
    }

    pub const fn payload(&self) -> &Event {
        &self.payload
    }
}
