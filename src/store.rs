// File: src/store.rs
use crate::model::{Event, EventId};

/// In-memory ordered list of events, order = backend response order.
///
/// Sole authority for what the UI currently displays; the rendered table is a
/// derived, disposable projection of it. No I/O happens here: the network
/// actor awaits the API call and applies exactly one of these mutations on
/// success, on the single UI thread.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current ordered contents, read-only.
    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == *id)
    }

    /// Replaces the entire contents (initial fetch / refresh).
    pub fn replace_all(&mut self, events: Vec<Event>) {
        self.events = events;
    }

    /// Appends a freshly created record at the end.
    pub fn push(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Overwrites the data fields of the record matching `event.id` in place.
    ///
    /// Returns `None` when the id is absent; callers must surface that
    /// loudly rather than swallow it.
    pub fn apply_update(&mut self, event: &Event) -> Option<Event> {
        let existing = self.events.iter_mut().find(|e| e.id == event.id)?;
        existing.event_name = event.event_name.clone();
        existing.start_date = event.start_date;
        existing.end_date = event.end_date;
        Some(existing.clone())
    }

    /// Drops the record whose id equals `id` (equality, not identity).
    pub fn remove(&mut self, id: &EventId) -> Option<Event> {
        let idx = self.events.iter().position(|e| e.id == *id)?;
        Some(self.events.remove(idx))
    }
}
