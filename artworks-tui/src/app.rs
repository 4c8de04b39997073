//! Application state and the main event loop.
//!
//! Page fetches run as spawned tasks and report back over a channel, so
//! results can arrive in any order. The [`PageStore`] discards everything
//! but the latest request's result.

use std::sync::Arc;

use artworks_lib::error::Error;
use artworks_lib::model::{Artwork, Page, TableRecord};
use artworks_lib::selection::SelectionTracker;
use artworks_lib::source::PageSource;
use artworks_lib::store::{FetchOutcome, FetchTicket, PageStore};
use artworks_lib::view::{PageView, ViewAction, dispatch};
use artworks_lib::PageNumber;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use log::{debug, info, warn};
use tokio::sync::mpsc;

use crate::error::AppError;
use crate::render::render;
use crate::terminal::TerminalGuard;

/// Result of one page fetch, sent back to the event loop.
pub type FetchResult = (FetchTicket, Result<Page<Artwork>, Error>);

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// The artwork browser.
pub struct App {
    store: PageStore<Artwork>,
    /// Lives for the whole session.
    tracker: SelectionTracker<u64>,
    source: Arc<dyn PageSource<Artwork>>,
    fetches: mpsc::UnboundedSender<FetchResult>,
    cursor: usize,
}

impl App {
    /// Creates the app. Fetch results are sent to `fetches`.
    pub fn new(
        source: Arc<dyn PageSource<Artwork>>,
        page_size: usize,
        fetches: mpsc::UnboundedSender<FetchResult>,
    ) -> Self {
        Self {
            store: PageStore::new(page_size),
            tracker: SelectionTracker::new(),
            source,
            fetches,
            cursor: 0,
        }
    }

    /// Runs until the user quits.
    pub async fn run(
        mut self,
        mut terminal: TerminalGuard,
        mut results: mpsc::UnboundedReceiver<FetchResult>,
    ) -> Result<(), AppError> {
        let mut events = EventStream::new();
        self.navigate(PageNumber::FIRST);
        self.draw(&mut terminal)?;

        loop {
            tokio::select! {
                event = events.next() => match event {
                    Some(Ok(event)) => {
                        if self.handle_event(event) == Control::Quit {
                            info!("Quit requested");
                            break;
                        }
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                },
                Some((ticket, result)) = results.recv() => {
                    self.on_fetch(ticket, result);
                }
            }
            self.draw(&mut terminal)?;
        }

        Ok(())
    }

    fn draw(&self, terminal: &mut TerminalGuard) -> Result<(), AppError> {
        let (width, height) = terminal.size()?;
        let lines = render(&self.view(), self.cursor_row(), width, height);
        terminal.draw(&lines)?;
        Ok(())
    }

    /// Derives the current view. Called on every frame.
    pub fn view(&self) -> PageView<u64> {
        PageView::build(&self.store, &self.tracker)
    }

    fn cursor_row(&self) -> Option<usize> {
        (!self.store.records().is_empty()).then_some(self.cursor)
    }

    /// Handles one terminal event.
    pub fn handle_event(&mut self, event: Event) -> Control {
        match event {
            Event::Key(key) => self.handle_key(key),
            _ => Control::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }
        debug!("Processing key: {:?}", key);

        let paginator = self.store.paginator();
        let requested = self.store.requested_page();

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Control::Quit;
            }
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                let last = self.store.records().len().saturating_sub(1);
                self.cursor = (self.cursor + 1).min(last);
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_row(),
            KeyCode::Char('a') => self.toggle_page(),
            KeyCode::Right | KeyCode::Char('n') => self.navigate(paginator.next(requested)),
            KeyCode::Left | KeyCode::Char('p') => self.navigate(paginator.prev(requested)),
            KeyCode::Home | KeyCode::Char('g') => self.navigate(paginator.first()),
            KeyCode::End | KeyCode::Char('G') => self.navigate(paginator.last()),
            KeyCode::Char('r') => self.retry(),
            _ => {}
        }
        Control::Continue
    }

    /// Flips the checkbox of the row under the cursor.
    fn toggle_row(&mut self) {
        let Some(record) = self.store.records().get(self.cursor) else {
            return;
        };
        let id = record.id();
        let selected = !self.tracker.is_selected(self.store.page(), &id);
        dispatch(ViewAction::ToggleRow { id, selected }, &self.store, &mut self.tracker);
    }

    /// Flips the header checkbox: clears a fully selected page, otherwise
    /// selects every record on it.
    fn toggle_page(&mut self) {
        let ids = self.store.current_ids();
        if ids.is_empty() {
            return;
        }
        let selected = !self.tracker.is_page_fully_selected(self.store.page(), &ids);
        dispatch(ViewAction::TogglePage { selected }, &self.store, &mut self.tracker);
    }

    /// Requests `page` unless it is already shown or being fetched.
    fn navigate(&mut self, page: PageNumber) {
        let shown = page == self.store.page()
            && self.store.last_error().is_none()
            && self.store.total_count() > 0;
        if page == self.store.requested_page() && (self.store.is_loading() || shown) {
            return;
        }
        let ticket = self.store.request(page);
        self.spawn_fetch(ticket);
    }

    fn retry(&mut self) {
        if self.store.is_loading() || self.store.last_error().is_none() {
            return;
        }
        let ticket = self.store.retry();
        self.spawn_fetch(ticket);
    }

    fn spawn_fetch(&self, ticket: FetchTicket) {
        let source = Arc::clone(&self.source);
        let results = self.fetches.clone();
        let page_size = self.store.page_size();
        tokio::spawn(async move {
            let result = source.fetch_page(ticket.page(), page_size).await;
            if results.send((ticket, result)).is_err() {
                warn!("Dropping result for page {}: event loop closed", ticket.page());
            }
        });
    }

    /// Applies a finished fetch.
    pub fn on_fetch(&mut self, ticket: FetchTicket, result: Result<Page<Artwork>, Error>) {
        let shown = self.store.page();
        if self.store.complete(ticket, result) == FetchOutcome::Applied {
            if self.store.page() != shown {
                self.cursor = 0;
            }
            let last = self.store.records().len().saturating_sub(1);
            self.cursor = self.cursor.min(last);
        }
    }
}
