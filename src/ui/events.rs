//! Event handling for the finder UI
//!
//! Key presses are mapped onto [`AppState`] operations. Anything that needs
//! the outside world (a network request, the system image viewer, quitting)
//! comes back as an [`EventResult`] for the run loop to carry out.

use super::state::{AppState, Focus};
use crate::search::{ContentView, EXAMPLE_SEARCHES, FilterField, Layout, SearchTicket};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// No action taken
    Ignored,
    /// A search was dispatched and must be run
    Search(SearchTicket),
    /// The detail overlay was opened
    DetailOpened,
    /// Open this cover in the system image viewer
    OpenCover(i64),
    /// Leave the finder
    Exit,
}

/// Index into the example searches for a digit key
fn example_index(c: char) -> Option<usize> {
    let idx = c.to_digit(10)? as usize;
    (1..=EXAMPLE_SEARCHES.len())
        .contains(&idx)
        .then(|| idx - 1)
}

fn run_example(state: &mut AppState, idx: usize) -> EventResult {
    let (text, field) = EXAMPLE_SEARCHES[idx];
    EventResult::Search(state.run_example(text, field))
}

/// Keys while the detail overlay is open
fn handle_detail_mode(state: &mut AppState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            state.controller.close_detail();
            EventResult::Continue
        }
        KeyCode::Char('o') => state
            .controller
            .selected()
            .and_then(|record| record.cover_id())
            .filter(|id| !state.controller.is_cover_broken(*id))
            .map_or(EventResult::Ignored, EventResult::OpenCover),
        _ => EventResult::Ignored,
    }
}

/// Keys that work regardless of focus
fn handle_global(state: &mut AppState, key: KeyEvent) -> Option<EventResult> {
    let result = match (key.code, key.modifiers) {
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => {
            state.controller.cycle_field();
            EventResult::Continue
        }
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => {
            state.toggle_filters();
            EventResult::Continue
        }
        (KeyCode::Char('x'), KeyModifiers::CONTROL) => {
            state.clear_filters();
            EventResult::Continue
        }
        (KeyCode::Char('g'), KeyModifiers::CONTROL) => {
            state.set_layout(Layout::Grid);
            EventResult::Continue
        }
        (KeyCode::Char('l'), KeyModifiers::CONTROL) => {
            state.set_layout(Layout::List);
            EventResult::Continue
        }
        (KeyCode::Char(c), KeyModifiers::ALT) => run_example(state, example_index(c)?),
        (KeyCode::Tab, _) => {
            state.focus_next();
            EventResult::Continue
        }
        (KeyCode::BackTab, _) => {
            state.focus_prev();
            EventResult::Continue
        }
        (KeyCode::Esc, _) => {
            if state.focus == Focus::Query {
                EventResult::Exit
            } else {
                state.focus = Focus::Query;
                EventResult::Continue
            }
        }
        _ => return None,
    };
    Some(result)
}

/// Keys while typing in the query input
fn handle_query_input(state: &mut AppState, key: KeyEvent) -> EventResult {
    let input = &mut state.query_input;
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => state
            .submit()
            .map_or(EventResult::Ignored, EventResult::Search),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            input.insert_char(c);
            state.sync_query();
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            if input.backspace() {
                state.sync_query();
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Delete, _) => {
            if input.delete() {
                state.sync_query();
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Left, _) => {
            input.cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            input.cursor_right();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            input.cursor_home();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            input.cursor_end();
            EventResult::Continue
        }
        (KeyCode::Down, _) => {
            state.focus = Focus::Results;
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Keys while typing in a filter input
fn handle_filter_input(state: &mut AppState, field: FilterField, key: KeyEvent) -> EventResult {
    let input = state.filter_inputs.get_mut(field);
    let changed = match (key.code, key.modifiers) {
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            input.insert_char(c);
            true
        }
        (KeyCode::Backspace, _) => input.backspace(),
        (KeyCode::Delete, _) => input.delete(),
        (KeyCode::Left, _) => {
            input.cursor_left();
            return EventResult::Continue;
        }
        (KeyCode::Right, _) => {
            input.cursor_right();
            return EventResult::Continue;
        }
        (KeyCode::Home, _) => {
            input.cursor_home();
            return EventResult::Continue;
        }
        (KeyCode::End, _) => {
            input.cursor_end();
            return EventResult::Continue;
        }
        (KeyCode::Enter | KeyCode::Down, _) => {
            state.focus = Focus::Results;
            return EventResult::Continue;
        }
        _ => return EventResult::Ignored,
    };

    if changed {
        state.sync_filter(field);
        EventResult::Continue
    } else {
        EventResult::Ignored
    }
}

/// Keys while moving through the results
fn handle_results(state: &mut AppState, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Up => {
            let step = match state.controller.view().layout {
                Layout::Grid => state.columns.max(1),
                Layout::List => 1,
            };
            // Leaving the top row returns to the query
            if state.cursor < step {
                state.focus = Focus::Query;
            } else {
                state.cursor_up();
            }
            EventResult::Continue
        }
        KeyCode::Down => {
            state.cursor_down();
            EventResult::Continue
        }
        KeyCode::Left => {
            state.cursor_left();
            EventResult::Continue
        }
        KeyCode::Right => {
            state.cursor_right();
            EventResult::Continue
        }
        KeyCode::Enter => {
            if state.open_current() {
                EventResult::DetailOpened
            } else {
                EventResult::Ignored
            }
        }
        KeyCode::Char(c) if matches!(state.controller.display().content, ContentView::Welcome) => {
            example_index(c).map_or(EventResult::Ignored, |idx| run_example(state, idx))
        }
        _ => EventResult::Ignored,
    }
}

/// Handle a key press
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> EventResult {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return EventResult::Exit;
    }

    if state.controller.selected().is_some() {
        return handle_detail_mode(state, key);
    }

    if let Some(result) = handle_global(state, key) {
        return result;
    }

    match state.focus {
        Focus::Query => handle_query_input(state, key),
        Focus::Filter(field) => handle_filter_input(state, field, key),
        Focus::Results => handle_results(state, key),
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns `std::io::Error` if reading terminal events fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BookRecord, SearchField};
    use crate::search::{SearchController, SearchOutcome};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(state, key(KeyCode::Char(c)));
        }
    }

    fn loaded_state(records: Vec<BookRecord>) -> AppState {
        let mut state = AppState::new(SearchController::new());
        type_text(&mut state, "books");
        let EventResult::Search(ticket) = handle_key(&mut state, key(KeyCode::Enter)) else {
            panic!("expected a search");
        };
        state.controller.complete(SearchOutcome {
            token: ticket.token,
            result: Ok(records),
        });
        state.focus = Focus::Results;
        state
    }

    #[test]
    fn test_typing_and_submit() {
        let mut state = AppState::new(SearchController::new());
        type_text(&mut state, "dune");
        assert_eq!(state.controller.criteria().query_text, "dune");

        let result = handle_key(&mut state, key(KeyCode::Enter));
        let EventResult::Search(ticket) = result else {
            panic!("expected a search, got {result:?}");
        };
        assert_eq!(ticket.request.query, "dune");
        assert!(state.controller.view().loading);
    }

    #[test]
    fn test_blank_submit_ignored() {
        let mut state = AppState::new(SearchController::new());
        type_text(&mut state, "  ");
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), EventResult::Ignored);
        assert!(!state.controller.view().loading);
    }

    #[test]
    fn test_cycle_field() {
        let mut state = AppState::new(SearchController::new());
        handle_key(&mut state, ctrl('t'));
        assert_eq!(state.controller.criteria().field, SearchField::Author);
    }

    #[test]
    fn test_alt_digit_runs_example() {
        let mut state = AppState::new(SearchController::new());
        let result = handle_key(
            &mut state,
            KeyEvent::new(KeyCode::Char('3'), KeyModifiers::ALT),
        );
        let EventResult::Search(ticket) = result else {
            panic!("expected a search, got {result:?}");
        };
        assert_eq!(ticket.request.query, "Science Fiction");
        assert_eq!(ticket.request.field, SearchField::Subject);
        assert_eq!(state.query_input.as_str(), "Science Fiction");

        assert_eq!(
            handle_key(&mut state, KeyEvent::new(KeyCode::Char('9'), KeyModifiers::ALT)),
            EventResult::Ignored
        );
    }

    #[test]
    fn test_digit_on_welcome_runs_example() {
        let mut state = AppState::new(SearchController::new());
        state.focus = Focus::Results;
        let result = handle_key(&mut state, key(KeyCode::Char('4')));
        let EventResult::Search(ticket) = result else {
            panic!("expected a search, got {result:?}");
        };
        assert_eq!(ticket.request.field, SearchField::Isbn);
    }

    #[test]
    fn test_filter_typing_narrows_results() {
        let mut state = loaded_state(vec![
            BookRecord {
                first_publish_year: Some(1997),
                ..BookRecord::titled("A")
            },
            BookRecord {
                first_publish_year: Some(1998),
                ..BookRecord::titled("B")
            },
        ]);
        handle_key(&mut state, ctrl('f'));
        state.focus = Focus::Filter(FilterField::Year);
        type_text(&mut state, "1997");
        assert_eq!(state.visible_count(), 1);

        handle_key(&mut state, ctrl('x'));
        assert_eq!(state.visible_count(), 2);
        assert_eq!(state.filter_inputs.year.as_str(), "");
    }

    #[test]
    fn test_detail_open_and_close() {
        let mut state = loaded_state(vec![
            BookRecord::titled("First"),
            BookRecord {
                cover_i: Some(7),
                ..BookRecord::titled("Second")
            },
        ]);
        handle_key(&mut state, key(KeyCode::Right));
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), EventResult::DetailOpened);
        assert_eq!(
            state.controller.selected().map(BookRecord::display_title),
            Some("Second")
        );

        assert_eq!(handle_key(&mut state, key(KeyCode::Char('o'))), EventResult::OpenCover(7));

        // Keys other than the overlay's own are swallowed
        assert_eq!(handle_key(&mut state, ctrl('l')), EventResult::Ignored);
        assert_eq!(state.controller.view().layout, Layout::Grid);

        handle_key(&mut state, key(KeyCode::Esc));
        assert!(state.controller.selected().is_none());
    }

    #[test]
    fn test_open_cover_needs_working_cover() {
        let mut state = loaded_state(vec![BookRecord {
            cover_i: Some(7),
            ..BookRecord::titled("Broken")
        }]);
        state.controller.mark_cover_broken(7);
        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(handle_key(&mut state, key(KeyCode::Char('o'))), EventResult::Ignored);
    }

    #[test]
    fn test_layout_shortcuts() {
        let mut state = AppState::new(SearchController::new());
        handle_key(&mut state, ctrl('l'));
        assert_eq!(state.controller.view().layout, Layout::List);
        handle_key(&mut state, ctrl('g'));
        assert_eq!(state.controller.view().layout, Layout::Grid);
    }

    #[test]
    fn test_escape_returns_to_query_then_exits() {
        let mut state = AppState::new(SearchController::new());
        state.focus = Focus::Results;
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), EventResult::Continue);
        assert_eq!(state.focus, Focus::Query);
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), EventResult::Exit);
    }

    #[test]
    fn test_ctrl_c_exits_from_detail() {
        let mut state = loaded_state(vec![BookRecord::titled("Only")]);
        handle_key(&mut state, key(KeyCode::Enter));
        assert_eq!(handle_key(&mut state, ctrl('c')), EventResult::Exit);
    }
}
