// File: src/tui/view.rs
use crate::tui::state::{AppState, EditSession, Field};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

/// Redraws the whole surface from the store and session state. A record row
/// renders as read-only cells unless the session targets its id, in which
/// case the same slot renders the input buffers; a create session appends one
/// transient input row after all records.
pub fn draw(f: &mut Frame, state: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(4)])
        .split(f.area());

    let header = Row::new(vec!["Event", "Start", "End"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let mut rows: Vec<Row> = Vec::with_capacity(state.row_count());
    for event in state.store.all() {
        let is_editing =
            matches!(&state.session, EditSession::Editing(id) if *id == event.id);
        if is_editing {
            rows.push(input_row(state));
        } else {
            rows.push(Row::new(vec![
                Cell::from(event.event_name.clone()),
                Cell::from(event.start_date.to_string()),
                Cell::from(event.end_date.to_string()),
            ]));
        }
    }
    if state.session == EditSession::CreatingNew {
        rows.push(input_row(state));
    }

    let widths = [
        Constraint::Percentage(50),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
    ];
    let title = if state.loading {
        " Events (loading) "
    } else {
        " Events "
    };
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_stateful_widget(table, chunks[0], &mut state.table_state);

    let hints = match state.session {
        EditSession::Idle => "a:Add  e/Enter:Edit  d:Delete  r:Refresh  j/k:Move  q:Quit",
        _ => "Tab:Next Field  Enter:Save  Esc:Discard",
    };
    let footer = Paragraph::new(vec![
        Line::from(state.message.clone()),
        Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray))),
    ])
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, chunks[1]);
}

fn input_row(state: &AppState) -> Row<'static> {
    let cell = |text: &str, field: Field| {
        let mut content = text.to_string();
        let style = if state.active_field == field {
            content.push('_');
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        Cell::from(Span::styled(content, style))
    };

    Row::new(vec![
        cell(&state.inputs.name, Field::Name),
        cell(&state.inputs.start, Field::Start),
        cell(&state.inputs.end, Field::End),
    ])
}
