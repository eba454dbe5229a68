//! Application state for the terminal UI
//!
//! Wraps the [`SearchController`] together with the purely presentational
//! state the controller does not care about: which input has focus, text
//! cursors, the highlighted card, scrolling, and transient status messages.
//! Every change to query, filters, selection or layout still goes through
//! the controller's operations.

use crate::catalog::SearchField;
use crate::search::{FilterField, Layout, SearchController, SearchTicket};
use std::time::{Duration, Instant};

/// Which part of the screen receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Query,
    Filter(FilterField),
    Results,
}

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub level: MessageLevel,
    pub text: String,
    pub created_at: Instant,
}

impl StatusMessage {
    #[must_use]
    pub fn new(level: MessageLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Single-line editable text with a character-indexed cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    buffer: String,
    /// Cursor position (character index, not byte)
    cursor: usize,
}

impl TextField {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the contents and put the cursor at the end
    pub fn set(&mut self, text: &str) {
        self.buffer = text.to_string();
        self.cursor = self.buffer.chars().count();
    }

    /// Byte index of the cursor
    #[must_use]
    pub fn byte_index(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.byte_index();
        self.buffer.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor; `false` if nothing changed
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte_idx = self.byte_index();
        let prev = self.buffer[..byte_idx]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        self.buffer.remove(prev);
        self.cursor -= 1;
        true
    }

    /// Delete the character at the cursor; `false` if nothing changed
    pub fn delete(&mut self) -> bool {
        let byte_idx = self.byte_index();
        if byte_idx < self.buffer.len() {
            self.buffer.remove(byte_idx);
            true
        } else {
            false
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.buffer.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.buffer.chars().count();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }
}

/// Text inputs of the filter panel
#[derive(Debug, Clone, Default)]
pub struct FilterInputs {
    pub year: TextField,
    pub language: TextField,
    pub isbn: TextField,
}

impl FilterInputs {
    #[must_use]
    pub const fn get(&self, field: FilterField) -> &TextField {
        match field {
            FilterField::Year => &self.year,
            FilterField::Language => &self.language,
            FilterField::Isbn => &self.isbn,
        }
    }

    pub const fn get_mut(&mut self, field: FilterField) -> &mut TextField {
        match field {
            FilterField::Year => &mut self.year,
            FilterField::Language => &mut self.language,
            FilterField::Isbn => &mut self.isbn,
        }
    }

    pub fn clear(&mut self) {
        self.year.clear();
        self.language.clear();
        self.isbn.clear();
    }
}

/// Application state for the finder UI
#[derive(Debug)]
pub struct AppState {
    pub controller: SearchController,
    pub query_input: TextField,
    pub filter_inputs: FilterInputs,
    pub focus: Focus,
    /// Highlighted position in the filtered results
    pub cursor: usize,
    /// Cards per row in grid layout (set during render)
    pub columns: usize,
    /// Rows of cards that fit on screen (set during render)
    pub visible_rows: usize,
    /// First visible row of cards
    pub scroll_row: usize,
    pub messages: Vec<StatusMessage>,
    pub message_ttl: Duration,
    pub should_exit: bool,
}

impl AppState {
    /// Create UI state around a controller, mirroring its current criteria
    #[must_use]
    pub fn new(controller: SearchController) -> Self {
        let mut query_input = TextField::default();
        query_input.set(&controller.criteria().query_text);

        let mut filter_inputs = FilterInputs::default();
        for field in FilterField::ALL {
            if let Some(value) = controller.filters().get(field) {
                filter_inputs.get_mut(field).set(value);
            }
        }

        Self {
            controller,
            query_input,
            filter_inputs,
            focus: Focus::Query,
            cursor: 0,
            columns: 1,
            visible_rows: 1,
            scroll_row: 0,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            should_exit: false,
        }
    }

    /// Push the query input into the controller
    pub fn sync_query(&mut self) {
        self.controller.set_query_text(self.query_input.as_str());
    }

    /// Push one filter input into the controller
    pub fn sync_filter(&mut self, field: FilterField) {
        let value = self.filter_inputs.get(field).as_str().to_string();
        self.controller.set_filter_field(field, value);
        self.clamp_cursor();
    }

    /// Submit the current query
    pub fn submit(&mut self) -> Option<SearchTicket> {
        self.sync_query();
        let ticket = self.controller.submit_search();
        if ticket.is_some() {
            self.reset_cursor();
        }
        ticket
    }

    /// Run one of the welcome-panel example searches
    pub fn run_example(&mut self, text: &str, field: SearchField) -> SearchTicket {
        self.query_input.set(text);
        self.reset_cursor();
        self.controller.run_example_search(text, field)
    }

    pub fn clear_filters(&mut self) {
        self.filter_inputs.clear();
        self.controller.clear_filters();
        self.clamp_cursor();
    }

    pub fn set_layout(&mut self, layout: Layout) {
        self.controller.set_layout(layout);
        self.scroll_row = 0;
        self.adjust_scroll();
    }

    /// Show or hide the filter panel, moving focus off a hidden filter
    pub fn toggle_filters(&mut self) {
        self.controller.toggle_filters_visible();
        if !self.controller.view().filters_visible && matches!(self.focus, Focus::Filter(_)) {
            self.focus = Focus::Query;
        }
    }

    /// Focus order: query, visible filters, results
    fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Query];
        if self.controller.view().filters_visible {
            order.extend(FilterField::ALL.map(Focus::Filter));
        }
        order.push(Focus::Results);
        order
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + 1) % order.len()];
    }

    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(idx + order.len() - 1) % order.len()];
    }

    /// Number of records currently shown
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.controller.display().records().len()
    }

    /// Open the detail overlay for the record under the cursor
    pub fn open_current(&mut self) -> bool {
        if self.controller.view().loading {
            return false;
        }
        self.controller.select_filtered(self.cursor)
    }

    fn reset_cursor(&mut self) {
        self.cursor = 0;
        self.scroll_row = 0;
    }

    /// Keep the cursor inside the filtered results
    pub fn clamp_cursor(&mut self) {
        let count = self.visible_count();
        if self.cursor >= count {
            self.cursor = count.saturating_sub(1);
        }
        self.adjust_scroll();
    }

    const fn step(&self) -> usize {
        match self.controller.view().layout {
            Layout::Grid => self.columns,
            Layout::List => 1,
        }
    }

    pub fn cursor_up(&mut self) {
        let step = self.step().max(1);
        if self.cursor >= step {
            self.cursor -= step;
            self.adjust_scroll();
        }
    }

    pub fn cursor_down(&mut self) {
        let step = self.step().max(1);
        if self.cursor + step < self.visible_count() {
            self.cursor += step;
            self.adjust_scroll();
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor + 1 < self.visible_count() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Scroll so the cursor's row is on screen
    pub fn adjust_scroll(&mut self) {
        let row = self.cursor / self.step().max(1);
        let visible = self.visible_rows.max(1);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + visible {
            self.scroll_row = row + 1 - visible;
        }
    }

    pub fn add_message(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Most recent non-expired message
    #[must_use]
    pub fn active_message(&self) -> Option<&StatusMessage> {
        self.messages
            .iter()
            .rev()
            .find(|m| !m.is_expired(self.message_ttl))
    }

    /// Clean up expired messages
    pub fn cleanup_messages(&mut self) {
        let ttl = self.message_ttl;
        self.messages.retain(|m| !m.is_expired(ttl));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BookRecord;
    use crate::search::SearchOutcome;

    fn loaded_state(count: usize) -> AppState {
        let mut state = AppState::new(SearchController::new());
        state.query_input.set("books");
        let ticket = state.submit().unwrap();
        let records = (0..count)
            .map(|i| BookRecord::titled(format!("Book {i}")))
            .collect();
        state.controller.complete(SearchOutcome {
            token: ticket.token,
            result: Ok(records),
        });
        state
    }

    #[test]
    fn test_text_field_editing() {
        let mut field = TextField::default();
        for c in "héllo".chars() {
            field.insert_char(c);
        }
        assert_eq!(field.as_str(), "héllo");
        assert_eq!(field.cursor(), 5);

        field.cursor_left();
        field.cursor_left();
        field.cursor_left();
        assert!(field.backspace());
        assert_eq!(field.as_str(), "hllo");

        field.cursor_home();
        assert!(!field.backspace());
        assert!(field.delete());
        assert_eq!(field.as_str(), "llo");

        field.cursor_end();
        assert!(!field.delete());
        field.clear();
        assert_eq!(field.as_str(), "");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_focus_cycle_skips_hidden_filters() {
        let mut state = AppState::new(SearchController::new());
        state.focus_next();
        assert_eq!(state.focus, Focus::Results);
        state.focus_next();
        assert_eq!(state.focus, Focus::Query);

        state.toggle_filters();
        state.focus_next();
        assert_eq!(state.focus, Focus::Filter(FilterField::Year));
        state.focus_prev();
        assert_eq!(state.focus, Focus::Query);
        state.focus_prev();
        assert_eq!(state.focus, Focus::Results);
    }

    #[test]
    fn test_hiding_filters_moves_focus() {
        let mut state = AppState::new(SearchController::new().with_filters_visible(true));
        state.focus = Focus::Filter(FilterField::Isbn);
        state.toggle_filters();
        assert_eq!(state.focus, Focus::Query);
    }

    #[test]
    fn test_grid_navigation() {
        let mut state = loaded_state(10);
        state.columns = 3;
        state.visible_rows = 2;

        state.cursor_down();
        assert_eq!(state.cursor, 3);
        state.cursor_right();
        assert_eq!(state.cursor, 4);
        state.cursor_down();
        state.cursor_down();
        assert_eq!(state.cursor, 7);
        assert_eq!(state.scroll_row, 1);

        state.cursor_down();
        assert_eq!(state.cursor, 7);
        state.cursor_up();
        state.cursor_up();
        assert_eq!(state.cursor, 1);
        assert_eq!(state.scroll_row, 0);
    }

    #[test]
    fn test_list_navigation() {
        let mut state = loaded_state(3);
        state.columns = 4;
        state.set_layout(Layout::List);
        state.cursor_down();
        state.cursor_down();
        state.cursor_down();
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_filter_sync_clamps_cursor() {
        let mut state = loaded_state(3);
        state.cursor = 2;
        state.filter_inputs.get_mut(FilterField::Year).set("1900");
        state.sync_filter(FilterField::Year);
        assert_eq!(state.controller.filters().year.as_deref(), Some("1900"));
        assert_eq!(state.visible_count(), 0);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_open_current() {
        let mut state = loaded_state(3);
        state.cursor = 1;
        assert!(state.open_current());
        assert_eq!(
            state.controller.selected().map(BookRecord::display_title),
            Some("Book 1")
        );
    }

    #[test]
    fn test_run_example_updates_input() {
        let mut state = AppState::new(SearchController::new());
        let ticket = state.run_example("Science Fiction", SearchField::Subject);
        assert_eq!(state.query_input.as_str(), "Science Fiction");
        assert_eq!(ticket.request.field, SearchField::Subject);
    }

    #[test]
    fn test_blank_submit_keeps_state() {
        let mut state = AppState::new(SearchController::new());
        state.query_input.set("   ");
        assert!(state.submit().is_none());
        assert!(!state.controller.view().loading);
    }

    #[test]
    fn test_messages_expire() {
        let mut state = AppState::new(SearchController::new());
        state.add_message(MessageLevel::Info, "hello");
        assert_eq!(state.active_message().map(|m| m.text.as_str()), Some("hello"));

        state.message_ttl = Duration::ZERO;
        std::thread::sleep(Duration::from_millis(5));
        assert!(state.active_message().is_none());
        state.cleanup_messages();
        assert!(state.messages.is_empty());
    }
}
