use uuid::Uuid;

use crate::store::StoreEvent;
use crate::types::SequenceNumber;

/// The state of an aggregate instance, paired with the identifier of the
/// instance and the sequence number of the last event applied onto it.
#[derive(Clone)]
pub struct AggregateState<S> {
    id: Uuid,
    sequence_number: SequenceNumber,
    inner: S,
}

impl<S: Default> Default for AggregateState<S> {
    fn default() -> Self {
        Self::with_id(Uuid::new_v4())
    }
}

impl<S: Default> AggregateState<S> {
    /// Creates a state for the given aggregate id, with a default inner
    /// state and no applied events.
    pub fn with_id(id: Uuid) -> Self {
        Self {
            id,
            sequence_number: 0,
            inner: Default::default(),
        }
    }
}

impl<S> AggregateState<S> {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }

    pub fn sequence_number(&self) -> SequenceNumber {
        self.sequence_number
    }

    /// Folds the given store events onto the inner state, in order of their
    /// sequence number, recording the sequence number of the last one.
    pub(crate) fn apply_store_events<E>(self, store_events: Vec<StoreEvent<E>>, apply: fn(S, E) -> S) -> Self {
        let mut sequence_number: SequenceNumber = self.sequence_number;

        let inner: S = store_events.into_iter().fold(self.inner, |state, store_event| {
            sequence_number = store_event.sequence_number;
            apply(state, store_event.payload)
        });

        Self {
            id: self.id,
            sequence_number,
            inner,
        }
    }
}
