// Exercises the single-edit-session state machine through the key handler.
use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use evlist::model::{Event, EventId};
use evlist::tui::action::{Action, AppEvent};
use evlist::tui::handlers::{handle_app_event, handle_key_event};
use evlist::tui::state::{AppState, EditSession};

fn event(id: &str, name: &str, start: &str, end: &str) -> Event {
    Event {
        id: EventId::from(id),
        event_name: name.to_string(),
        start_date: start.parse::<NaiveDate>().unwrap(),
        end_date: end.parse::<NaiveDate>().unwrap(),
    }
}

fn loaded_state() -> AppState {
    let mut state = AppState::new();
    handle_app_event(
        &mut state,
        AppEvent::EventsLoaded(vec![
            event("1", "Standup", "2023-01-01", "2023-01-01"),
            event("2", "Offsite", "2023-02-01", "2023-02-03"),
        ]),
    );
    state
}

fn press(state: &mut AppState, code: KeyCode) -> Option<Action> {
    handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), state)
}

fn type_str(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, KeyCode::Char(c));
    }
}

#[test]
fn test_add_opens_exactly_one_session() {
    let mut state = loaded_state();
    assert_eq!(state.session, EditSession::Idle);

    press(&mut state, KeyCode::Char('a'));
    assert_eq!(state.session, EditSession::CreatingNew);
    assert_eq!(state.row_count(), 3); // two records + transient row

    // While a session is open, 'a' is plain input, never a second row.
    press(&mut state, KeyCode::Char('a'));
    assert_eq!(state.session, EditSession::CreatingNew);
    assert_eq!(state.row_count(), 3);
    assert_eq!(state.inputs.name, "a");
}

#[test]
fn test_discard_new_row_resets_session() {
    let mut state = loaded_state();

    press(&mut state, KeyCode::Char('a'));
    type_str(&mut state, "Half-typed");
    press(&mut state, KeyCode::Esc);

    assert_eq!(state.session, EditSession::Idle);
    assert_eq!(state.row_count(), 2);
    assert_eq!(state.store.len(), 2);

    // The add key works again after a discard.
    press(&mut state, KeyCode::Char('a'));
    assert_eq!(state.session, EditSession::CreatingNew);
    assert_eq!(state.inputs.name, "");
}

#[test]
fn test_save_with_empty_fields_is_rejected() {
    let mut state = loaded_state();

    press(&mut state, KeyCode::Char('a'));
    let action = press(&mut state, KeyCode::Enter);

    assert!(action.is_none());
    assert_eq!(state.session, EditSession::CreatingNew); // open for correction
    assert_eq!(state.store.len(), 2);
    assert!(state.message.starts_with("Error:"));
}

#[test]
fn test_save_with_start_after_end_is_rejected() {
    let mut state = loaded_state();

    press(&mut state, KeyCode::Char('a'));
    type_str(&mut state, "Bad range");
    press(&mut state, KeyCode::Tab);
    type_str(&mut state, "2023-02-01");
    press(&mut state, KeyCode::Tab);
    type_str(&mut state, "2023-01-01");
    let action = press(&mut state, KeyCode::Enter);

    assert!(action.is_none());
    assert_eq!(state.session, EditSession::CreatingNew);
    assert_eq!(state.store.len(), 2);
    assert!(state.message.contains("start date"));
}

#[test]
fn test_valid_save_dispatches_create_and_closes_session() {
    let mut state = loaded_state();

    press(&mut state, KeyCode::Char('a'));
    type_str(&mut state, "Retro");
    press(&mut state, KeyCode::Tab);
    type_str(&mut state, "2023-04-01");
    press(&mut state, KeyCode::Tab);
    type_str(&mut state, "2023-04-02");
    let action = press(&mut state, KeyCode::Enter);

    let draft = match action {
        Some(Action::CreateEvent(draft)) => draft,
        other => panic!("expected CreateEvent, got {:?}", other),
    };
    assert_eq!(draft.event_name, "Retro");
    assert_eq!(draft.start_date, "2023-04-01".parse::<NaiveDate>().unwrap());
    assert_eq!(state.session, EditSession::Idle);

    // The backend answers; the row materializes exactly once.
    handle_app_event(
        &mut state,
        AppEvent::EventCreated(event("9", "Retro", "2023-04-01", "2023-04-02")),
    );
    assert_eq!(state.store.len(), 3);
    assert_eq!(state.store.all()[2].id, EventId::from("9"));
}

#[test]
fn test_edit_then_discard_leaves_record_untouched() {
    let mut state = loaded_state();
    let before = state.store.all().to_vec();

    // Row 0 is selected by default; enter its edit session.
    press(&mut state, KeyCode::Char('e'));
    assert_eq!(state.session, EditSession::Editing(EventId::from("1")));
    assert_eq!(state.inputs.name, "Standup");
    assert_eq!(state.inputs.start, "2023-01-01");

    type_str(&mut state, " scribble");
    press(&mut state, KeyCode::Esc);

    assert_eq!(state.session, EditSession::Idle);
    assert_eq!(state.store.all(), before.as_slice());
}

#[test]
fn test_edit_then_save_dispatches_update_for_target_only() {
    let mut state = loaded_state();

    press(&mut state, KeyCode::Char('j')); // select row 1 ("2")
    press(&mut state, KeyCode::Char('e'));
    assert_eq!(state.session, EditSession::Editing(EventId::from("2")));

    // Replace the name, keep the dates.
    for _ in 0.."Offsite".len() {
        press(&mut state, KeyCode::Backspace);
    }
    type_str(&mut state, "Offsite (moved)");
    let action = press(&mut state, KeyCode::Enter);

    let updated = match action {
        Some(Action::UpdateEvent(updated)) => updated,
        other => panic!("expected UpdateEvent, got {:?}", other),
    };
    assert_eq!(updated.id, EventId::from("2"));
    assert_eq!(updated.event_name, "Offsite (moved)");
    assert_eq!(state.session, EditSession::Idle);

    let untouched = state.store.all()[0].clone();
    handle_app_event(&mut state, AppEvent::EventUpdated(updated));
    assert_eq!(state.store.all()[1].event_name, "Offsite (moved)");
    assert_eq!(state.store.all()[0], untouched);
}

#[test]
fn test_delete_dispatches_for_selected_row() {
    let mut state = loaded_state();

    let action = press(&mut state, KeyCode::Char('d'));
    let id = match action {
        Some(Action::DeleteEvent(id)) => id,
        other => panic!("expected DeleteEvent, got {:?}", other),
    };
    assert_eq!(id, EventId::from("1"));

    handle_app_event(&mut state, AppEvent::EventDeleted(id));
    assert_eq!(state.store.len(), 1);
    assert!(state.store.get(&EventId::from("1")).is_none());
    assert!(state.store.get(&EventId::from("2")).is_some());
}

#[test]
fn test_edit_keys_do_not_navigate_or_delete() {
    let mut state = loaded_state();

    press(&mut state, KeyCode::Char('e'));
    let selected = state.table_state.selected();

    // 'j', 'k' and 'd' are text input while editing.
    assert!(press(&mut state, KeyCode::Char('j')).is_none());
    assert!(press(&mut state, KeyCode::Char('d')).is_none());
    assert_eq!(state.table_state.selected(), selected);
    assert_eq!(state.store.len(), 2);
    assert!(state.inputs.name.ends_with("jd"));
}
