// Defines actions and events for TUI interaction and state updates.
use crate::model::{Event, EventDraft, EventId};

/// Intents sent from the UI thread to the network actor.
#[derive(Debug)]
pub enum Action {
    CreateEvent(EventDraft),
    UpdateEvent(Event),
    DeleteEvent(EventId),
    Refresh,
    Quit,
}

/// Results sent back from the network actor; applying one of these is the
/// only way the store changes.
#[derive(Debug)]
pub enum AppEvent {
    EventsLoaded(Vec<Event>),
    EventCreated(Event),
    EventUpdated(Event),
    EventDeleted(EventId),
    Error(String),
    Status(String),
}
