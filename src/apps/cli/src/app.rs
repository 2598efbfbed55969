//! Application state and event loop for the terminal skin.
//!
//! The skin owns only presentation state (focus, cursor row, the search
//! text); collections and the draft live in the core coordinators, and
//! every frame renders from a fresh snapshot of them.

use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing::info;

use karya_core::view::{ListView, EMPTY_ANNOUNCEMENTS, EMPTY_WORKS};
use karya_core::{
    Announcement, BackendConfig, DraftField, EventBus, GatewayClient, ListingCoordinator,
    SubmissionCoordinator, SubmissionSnapshot, Work,
};

use crate::ui;

/// Which panel owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Form,
}

/// One row per draft field, plus the submit control.
pub const SUBMIT_ROW: usize = DraftField::ALL.len();
pub const FORM_ROWS: usize = SUBMIT_ROW + 1;

/// Everything the renderer needs for one frame.
pub struct RenderModel {
    pub announcements: ListView<Announcement>,
    pub works: ListView<Work>,
    pub submission: SubmissionSnapshot,
    pub search: String,
    pub focus: Focus,
    pub form_row: usize,
}

struct App {
    listing: Arc<ListingCoordinator>,
    submission: Arc<SubmissionCoordinator>,
    focus: Focus,
    search: String,
    form_row: usize,
    should_quit: bool,
}

pub async fn run(config: BackendConfig) -> Result<()> {
    info!(backend = %config.base_url, "starting terminal client");

    let bus = EventBus::new();
    let gateway = Arc::new(GatewayClient::new(&config));
    let listing = Arc::new(ListingCoordinator::new(gateway.clone(), bus.clone()));
    let submission = Arc::new(SubmissionCoordinator::new(gateway, bus.clone()));
    let refresh_listener = listing.clone().spawn_submission_listener();

    // The two startup fetches run independently; neither waits on the other.
    {
        let listing = listing.clone();
        tokio::spawn(async move { listing.refresh_announcements().await });
    }
    {
        let listing = listing.clone();
        tokio::spawn(async move { listing.refresh_works(None).await });
    }

    let mut app = App {
        listing,
        submission,
        focus: Focus::Search,
        search: String::new(),
        form_row: 0,
        should_quit: false,
    };

    let mut terminal = ui::init_terminal()?;
    let result = event_loop(&mut terminal, &mut app, &bus).await;
    ui::restore_terminal(terminal)?;
    refresh_listener.abort();
    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    bus: &EventBus,
) -> Result<()> {
    let mut inputs = spawn_input_reader();
    let mut events = bus.subscribe();

    loop {
        let model = app.render_model().await;
        terminal.draw(|frame| ui::draw(frame, &model))?;

        tokio::select! {
            input = inputs.recv() => {
                match input {
                    Some(Event::Key(key)) => app.handle_key(key).await,
                    Some(_) => {} // resize and the like fall through to a redraw
                    None => break,
                }
            }
            // Coordinator state changed; loop around and redraw. A lagged
            // receiver still redraws from the latest snapshot.
            _ = events.recv() => {}
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

/// Crossterm reads block, so they run on a dedicated thread feeding the
/// async loop through a channel.
fn spawn_input_reader() -> mpsc::UnboundedReceiver<Event> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || loop {
        match crossterm::event::read() {
            Ok(event) => {
                if tx.send(event).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });
    rx
}

impl App {
    async fn render_model(&self) -> RenderModel {
        RenderModel {
            announcements: ListView::from_state(
                &self.listing.announcements().await,
                EMPTY_ANNOUNCEMENTS,
            ),
            works: ListView::from_state(&self.listing.works().await, EMPTY_WORKS),
            submission: self.submission.snapshot().await,
            search: self.search.clone(),
            focus: self.focus,
            form_row: self.form_row,
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Tab {
            self.focus = match self.focus {
                Focus::Search => Focus::Form,
                Focus::Form => Focus::Search,
            };
            return;
        }
        match self.focus {
            Focus::Search => self.handle_search_key(key).await,
            Focus::Form => self.handle_form_key(key).await,
        }
    }

    async fn handle_search_key(&mut self, key: KeyEvent) {
        let changed = match key.code {
            KeyCode::Char(c) => {
                self.search.push(c);
                true
            }
            KeyCode::Backspace => self.search.pop().is_some(),
            _ => false,
        };
        if changed {
            // Every keystroke issues a request; the coordinator discards
            // responses superseded by a newer query.
            let listing = self.listing.clone();
            let query = self.search.clone();
            tokio::spawn(async move {
                let query = (!query.is_empty()).then_some(query);
                listing.refresh_works(query.as_deref()).await;
            });
        }
    }

    async fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.form_row = self.form_row.saturating_sub(1),
            KeyCode::Down => self.form_row = (self.form_row + 1).min(SUBMIT_ROW),
            KeyCode::Enter if self.form_row == SUBMIT_ROW => self.trigger_submit().await,
            KeyCode::Enter => self.form_row = (self.form_row + 1).min(SUBMIT_ROW),
            KeyCode::Char(c) if self.form_row < SUBMIT_ROW => {
                self.edit_field(|value| value.push(c)).await
            }
            KeyCode::Backspace if self.form_row < SUBMIT_ROW => {
                self.edit_field(|value| {
                    value.pop();
                })
                .await
            }
            _ => {}
        }
    }

    async fn edit_field(&self, apply: impl FnOnce(&mut String)) {
        let field = DraftField::ALL[self.form_row];
        let mut value = self.submission.snapshot().await.draft.get(field).to_string();
        apply(&mut value);
        self.submission.update_field(field, &value).await;
    }

    async fn trigger_submit(&self) {
        // The submit control is disabled while a submission is in flight.
        if self.submission.snapshot().await.submitting {
            return;
        }
        let submission = self.submission.clone();
        tokio::spawn(async move {
            submission.submit().await;
        });
    }
}
