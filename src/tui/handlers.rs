// File: src/tui/handlers.rs
// Handles keyboard input and network events for the TUI.
use crate::error::EvlistError;
use crate::model::EventDraft;
use crate::tui::action::{Action, AppEvent};
use crate::tui::state::{AppState, EditSession};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Applies a network-actor result to the application state. This is the only
/// place the store mutates, and it always runs on the UI thread.
pub fn handle_app_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Status(s) => state.message = s,
        AppEvent::Error(s) => {
            state.message = format!("Error: {}", s);
            state.loading = false;
        }
        AppEvent::EventsLoaded(events) => {
            state.store.replace_all(events);
            // A reload may have dropped the row being edited; end that
            // session rather than editing a ghost.
            if let EditSession::Editing(id) = state.session.clone()
                && state.store.get(&id).is_none()
            {
                state.cancel_editing();
                state.message = format!("Event '{}' disappeared from the backend.", id);
            }
            state.clamp_selection();
            state.loading = false;
        }
        AppEvent::EventCreated(event) => {
            state.store.push(event);
            if state.session == EditSession::Idle {
                state.table_state.select(Some(state.store.len() - 1));
            }
        }
        AppEvent::EventUpdated(event) => {
            if state.store.apply_update(&event).is_none() {
                log::warn!("update applied to unknown id {}", event.id);
                let err = EvlistError::UnknownId(event.id.to_string());
                state.message = format!("Error: {}", err);
            }
        }
        AppEvent::EventDeleted(id) => {
            state.store.remove(&id);
            if state.session == EditSession::Editing(id) {
                state.cancel_editing();
            }
            state.clamp_selection();
        }
    }
}

/// Translates a key press into state changes and, possibly, an [`Action`]
/// for the network actor.
pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    match state.session {
        EditSession::Idle => handle_browse_key(key, state),
        _ => handle_edit_key(key, state),
    }
}

fn handle_browse_key(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('j') | KeyCode::Down => {
            state.next();
            None
        }
        KeyCode::Char('k') | KeyCode::Up => {
            state.previous();
            None
        }
        KeyCode::Char('r') => {
            state.message = "Refreshing...".to_string();
            Some(Action::Refresh)
        }
        KeyCode::Char('a') => {
            state.begin_create();
            None
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(event) = state.selected_event() {
                let id = event.id.clone();
                state.begin_edit(&id);
            }
            None
        }
        KeyCode::Char('d') => state
            .selected_event()
            .map(|event| Action::DeleteEvent(event.id.clone())),
        _ => None,
    }
}

fn handle_edit_key(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    match key.code {
        KeyCode::Esc => {
            state.cancel_editing();
            state.message = "Discarded.".to_string();
            None
        }
        KeyCode::Tab => {
            state.active_field = state.active_field.next();
            None
        }
        KeyCode::BackTab => {
            state.active_field = state.active_field.previous();
            None
        }
        KeyCode::Enter => save_session(state),
        KeyCode::Backspace => {
            state.inputs.field_mut(state.active_field).pop();
            None
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.inputs.field_mut(state.active_field).push(c);
            None
        }
        _ => None,
    }
}

/// Validates the input buffers and, when they hold a well-formed event,
/// closes the session and dispatches the create/update intent. Validation
/// failures keep the session open for correction and touch nothing but the
/// message line.
fn save_session(state: &mut AppState) -> Option<Action> {
    let draft = match EventDraft::parse(&state.inputs.name, &state.inputs.start, &state.inputs.end)
    {
        Ok(draft) => draft,
        Err(e) => {
            state.message = format!("Error: {}", e);
            return None;
        }
    };

    match state.session.clone() {
        EditSession::Idle => None,
        EditSession::CreatingNew => {
            state.session = EditSession::Idle;
            state.inputs.clear();
            state.clamp_selection();
            state.message = "Creating...".to_string();
            Some(Action::CreateEvent(draft))
        }
        EditSession::Editing(id) => {
            state.session = EditSession::Idle;
            state.inputs.clear();
            state.message = "Saving...".to_string();
            Some(Action::UpdateEvent(draft.into_event(id)))
        }
    }
}
