//! Interactive finder
//!
//! Owns the terminal and the event loop. Each iteration draws a frame,
//! applies whatever the background worker has finished, then waits briefly
//! for a key. Searches and cover probes never block the loop.

use super::error::Result;
use super::events::{EventResult, poll_and_handle};
use super::state::{AppState, Focus, MessageLevel};
use super::theme::Theme;
use super::widgets::{
    DETAIL_HINTS, DetailsModal, FilterPanel, INPUT_HINTS, RESULTS_HINTS, ResultsView, SearchBar,
    StatusBar, WelcomePanel, grid_columns, visible_rows,
};
use crate::catalog::{CatalogSource, CoverSize, CoverUrls};
use crate::output::FILTERED_EMPTY_MESSAGE;
use crate::search::{
    ContentView, Layout as ResultLayout, SearchController, SearchWorker, WorkerEvent,
};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Terminal book finder
pub struct Finder {
    worker: SearchWorker,
    covers: CoverUrls,
    probe_covers: bool,
    theme: Theme,
}

impl Finder {
    #[must_use]
    pub fn new(source: Arc<dyn CatalogSource>, covers: CoverUrls) -> Self {
        Self {
            worker: SearchWorker::new(source),
            covers,
            probe_covers: true,
            theme: Theme::default(),
        }
    }

    /// Check covers with a HEAD request when the detail view opens
    #[must_use]
    pub const fn with_probe_covers(mut self, probe: bool) -> Self {
        self.probe_covers = probe;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Run the finder until the user quits
    ///
    /// When `search_on_start` is set and the controller already holds a
    /// query, that search is dispatched before the first frame.
    ///
    /// # Errors
    ///
    /// Returns [`UiError`](super::UiError) if the terminal cannot be set up
    /// or drawn to.
    pub fn run(&self, controller: SearchController, search_on_start: bool) -> Result<()> {
        let mut state = AppState::new(controller);
        if search_on_start && let Some(ticket) = state.submit() {
            state.focus = Focus::Results;
            self.worker.dispatch(ticket);
        }

        let mut terminal = Self::setup_terminal()?;
        let result = self.run_loop(&mut terminal, &mut state);
        // Restore the terminal even when the loop failed
        let cleanup = Self::cleanup_terminal();
        result.and(cleanup)
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        state: &mut AppState,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| self.render(frame, state))?;

            self.drain_worker(state);
            state.cleanup_messages();

            let result = poll_and_handle(state, POLL_INTERVAL)?;
            self.apply(state, result);

            if state.should_exit {
                log::info!("Finder closed");
                return Ok(());
            }
        }
    }

    /// Apply every finished background request
    fn drain_worker(&self, state: &mut AppState) {
        while let Some(event) = self.worker.try_next() {
            match event {
                WorkerEvent::Search(outcome) => {
                    if state.controller.complete(outcome) {
                        state.clamp_cursor();
                    }
                }
                WorkerEvent::CoverProbe {
                    cover_id,
                    available,
                } => {
                    if !available {
                        state.controller.mark_cover_broken(cover_id);
                    }
                }
            }
        }
    }

    /// Carry out the side effect of a handled event
    fn apply(&self, state: &mut AppState, result: EventResult) {
        match result {
            EventResult::Search(ticket) => self.worker.dispatch(ticket),
            EventResult::DetailOpened => {
                let cover = state
                    .controller
                    .selected()
                    .and_then(|record| record.cover_id())
                    .filter(|id| !state.controller.is_cover_broken(*id));
                if self.probe_covers && let Some(id) = cover {
                    self.worker.probe_cover(id, self.covers.url(id, CoverSize::Large));
                }
            }
            EventResult::OpenCover(id) => {
                let url = self.covers.url(id, CoverSize::Large);
                match open::that(&url) {
                    Ok(()) => state.add_message(MessageLevel::Info, "Opened cover in viewer"),
                    Err(e) => {
                        log::warn!("Failed to open {url}: {e}");
                        state.add_message(MessageLevel::Error, format!("Could not open cover: {e}"));
                    }
                }
            }
            EventResult::Exit => state.should_exit = true,
            EventResult::Continue | EventResult::Ignored => {}
        }
    }

    /// Draw one frame
    fn render(&self, frame: &mut Frame, state: &mut AppState) {
        let theme = &self.theme;
        let filters_visible = state.controller.view().filters_visible;
        let has_error = state.controller.view().error_message.is_some();

        let [search_area, filter_area, banner_area, content_area, status_area] =
            Layout::vertical([
                Constraint::Length(3),
                Constraint::Length(if filters_visible { 3 } else { 0 }),
                Constraint::Length(u16::from(has_error)),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(frame.area());

        let layout = state.controller.view().layout;
        state.columns = match layout {
            ResultLayout::Grid => grid_columns(content_area.width),
            ResultLayout::List => 1,
        };
        state.visible_rows = visible_rows(content_area.height, layout);
        state.adjust_scroll();

        let state = &*state;
        let search_bar = SearchBar::new(&state.query_input, state.controller.criteria().field, theme)
            .focused(state.focus == Focus::Query)
            .loading(state.controller.view().loading);
        frame.render_widget(search_bar, search_area);

        if filters_visible {
            let focused = match state.focus {
                Focus::Filter(field) => Some(field),
                _ => None,
            };
            let panel = FilterPanel::new(
                &state.filter_inputs,
                !state.controller.filters().is_empty(),
                theme,
            )
            .focused(focused);
            frame.render_widget(panel, filter_area);
        }

        let display = state.controller.display();
        if let Some(error) = display.error_banner {
            let banner = Line::from(vec![
                Span::styled("✗ ", theme.error_style()),
                Span::styled(error, theme.error_style()),
            ]);
            frame.render_widget(Paragraph::new(banner), banner_area);
        }

        match &display.content {
            ContentView::Loading => {
                Self::render_centered(frame, content_area, Line::styled("Searching…", theme.info_style()));
            }
            ContentView::Results(records) => {
                let view = ResultsView::new(
                    records,
                    state.controller.view().results.len(),
                    layout,
                    &self.covers,
                    &state.controller.view().broken_covers,
                    theme,
                )
                .position(state.cursor, state.scroll_row)
                .focused(state.focus == Focus::Results);
                frame.render_widget(view, content_area);
            }
            ContentView::Welcome => frame.render_widget(WelcomePanel::new(theme), content_area),
            ContentView::FilteredEmpty => {
                Self::render_centered(
                    frame,
                    content_area,
                    Line::styled(FILTERED_EMPTY_MESSAGE, theme.warning_style()),
                );
            }
        }

        let hints = if state.controller.selected().is_some() {
            DETAIL_HINTS
        } else if state.focus == Focus::Results {
            RESULTS_HINTS
        } else {
            INPUT_HINTS
        };
        frame.render_widget(
            StatusBar::new(state.active_message(), hints, theme),
            status_area,
        );

        if let Some(record) = state.controller.selected() {
            let modal = DetailsModal::new(
                record,
                &self.covers,
                |id| state.controller.is_cover_broken(id),
                theme,
            );
            frame.render_widget(modal, frame.area());
        }
    }

    fn render_centered(frame: &mut Frame, area: Rect, line: Line<'_>) {
        let [_, middle, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), middle);
    }
}
