use serde::de::DeserializeOwned;
use serde::Serialize;

/// The Aggregate trait is where the business logic of a domain entity lives:
/// commands are validated against the current state, and accepted commands
/// are mapped to events.
///
/// Both functions are pure. A rejected command leaves the state untouched,
/// and the state is only ever advanced by folding events onto it with
/// [`apply_event`](Aggregate::apply_event).
pub trait Aggregate {
    /// Name of the aggregate, used to tag its events in the store and in logs.
    const NAME: &'static str;

    type State: Default + Clone;
    type Command;
    type Event: Serialize + DeserializeOwned + Clone;
    type Error: std::error::Error;

    /// Validates and handles the command onto the given state, mapping it to
    /// the list of events it produces.
    fn handle_command(state: &Self::State, command: Self::Command) -> Result<Vec<Self::Event>, Self::Error>;

    /// Updates the state using the event. Pure fold step.
    fn apply_event(state: Self::State, payload: Self::Event) -> Self::State;
}
