// File: src/tui/state.rs
// Manages the application state for the TUI.
use crate::model::{DATE_FORMAT, Event, EventId};
use crate::store::EventStore;
use ratatui::widgets::TableState;

/// The single open edit session. At most one of these is active at a time;
/// every save and discard path funnels back to `Idle`, so the add key can
/// never be left silently inert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditSession {
    Idle,
    CreatingNew,
    Editing(EventId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Start,
    End,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Start,
            Field::Start => Field::End,
            Field::End => Field::Name,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Field::Name => Field::End,
            Field::Start => Field::Name,
            Field::End => Field::Start,
        }
    }
}

/// Input buffers backing the inline edit row.
#[derive(Debug, Clone, Default)]
pub struct RowInputs {
    pub name: String,
    pub start: String,
    pub end: String,
}

impl RowInputs {
    pub fn from_event(event: &Event) -> Self {
        Self {
            name: event.event_name.clone(),
            start: event.start_date.format(DATE_FORMAT).to_string(),
            end: event.end_date.format(DATE_FORMAT).to_string(),
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.start.clear();
        self.end.clear();
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Start => &mut self.start,
            Field::End => &mut self.end,
        }
    }
}

pub struct AppState {
    pub store: EventStore,
    pub table_state: TableState,
    pub session: EditSession,
    pub inputs: RowInputs,
    pub active_field: Field,
    pub message: String,
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let mut table_state = TableState::default();
        table_state.select(Some(0));

        Self {
            store: EventStore::new(),
            table_state,
            session: EditSession::Idle,
            inputs: RowInputs::default(),
            active_field: Field::Name,
            message: "Loading...".to_string(),
            loading: true,
        }
    }

    /// Rows currently rendered: the records, plus the transient new-row while
    /// a create session is open.
    pub fn row_count(&self) -> usize {
        self.store.len() + usize::from(self.session == EditSession::CreatingNew)
    }

    pub fn next(&mut self) {
        let rows = self.row_count();
        if rows == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) if i + 1 >= rows => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let rows = self.row_count();
        if rows == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(0) | None => rows - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    pub fn selected_event(&self) -> Option<&Event> {
        let idx = self.table_state.selected()?;
        self.store.all().get(idx)
    }

    /// Opens the transient new-row session with empty inputs.
    /// A no-op unless the session is `Idle` (single-session invariant).
    pub fn begin_create(&mut self) -> bool {
        if self.session != EditSession::Idle {
            return false;
        }
        self.inputs.clear();
        self.active_field = Field::Name;
        self.session = EditSession::CreatingNew;
        // Park the selection on the transient row.
        self.table_state.select(Some(self.store.len()));
        true
    }

    /// Opens an edit session for `id`, seeding the inputs from the stored
    /// record. Pure state toggle; no store or network interaction.
    pub fn begin_edit(&mut self, id: &EventId) -> bool {
        if self.session != EditSession::Idle {
            return false;
        }
        let Some(event) = self.store.get(id) else {
            return false;
        };
        self.inputs = RowInputs::from_event(event);
        self.active_field = Field::Name;
        self.session = EditSession::Editing(id.clone());
        true
    }

    /// Discards the open session. Unsaved input is dropped; for an existing
    /// record the stored values win, so its displayed text is unchanged.
    pub fn cancel_editing(&mut self) {
        self.inputs.clear();
        self.session = EditSession::Idle;
        self.clamp_selection();
    }

    /// Clamps the selection after the visible row set shrank.
    pub fn clamp_selection(&mut self) {
        let rows = self.row_count();
        if rows == 0 {
            self.table_state.select(None);
            return;
        }
        match self.table_state.selected() {
            Some(i) if i >= rows => self.table_state.select(Some(rows - 1)),
            None => self.table_state.select(Some(0)),
            _ => {}
        }
    }
}
