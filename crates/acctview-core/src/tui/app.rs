//! Main TUI application.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::config::ViewConfig;
use crate::models::AccountData;
use crate::service::{AccountService, Transfer};

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::{AppState, Ticket};

/// Main TUI application: one mounted account view.
pub struct App {
    state: AppState,
    service: Arc<dyn AccountService>,
    should_quit: bool,
}

impl App {
    /// Creates a new App over `data`, performing backend calls through `service`.
    pub fn new(data: AccountData, service: Arc<dyn AccountService>, config: &ViewConfig) -> Self {
        Self {
            state: AppState::new(data, config.page_size),
            service,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Runs the TUI application until the user quits.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);
        let tx = events.sender();
        info!(account = %self.state.account.account_number.short(12), "account view opened");

        let result = loop {
            if let Err(e) = terminal.draw(|frame| render(frame, &self.state)) {
                break Err(e);
            }

            match events.next() {
                Ok(event) => self.handle_event(event, &tx),
                Err(_) => self.should_quit = true,
            }

            if self.should_quit {
                break Ok(());
            }
        };

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        // Dropping `events` here closes the channel, so completions of
        // requests still in flight are discarded by their workers.
        info!("account view closed");
        result
    }

    /// Applies one event to the view state.
    fn handle_event(&mut self, event: Event, tx: &Sender<Event>) {
        match event {
            Event::Tick | Event::Resize(..) => {}
            Event::Key(key) => {
                let action = handle_key(&mut self.state, key);
                self.handle_action(action, tx);
            }
            Event::DeleteFinished { ticket, result } => {
                self.state.complete_delete(ticket, result);
            }
            Event::TransferFinished { ticket, result } => {
                self.state.complete_transfer(ticket, result);
            }
        }
    }

    fn handle_action(&mut self, action: KeyAction, tx: &Sender<Event>) {
        match action {
            KeyAction::None => {}
            KeyAction::Quit => self.should_quit = true,
            KeyAction::DeleteAccount(ticket) => self.spawn_delete(ticket, tx.clone()),
            KeyAction::SendPoints(ticket, transfer) => {
                self.spawn_transfer(ticket, transfer, tx.clone())
            }
        }
    }

    /// Runs the deletion on a worker thread; the result comes back as
    /// [`Event::DeleteFinished`].
    fn spawn_delete(&self, ticket: Ticket, tx: Sender<Event>) {
        let service = Arc::clone(&self.service);
        let account = self.state.account.account_number.clone();
        thread::spawn(move || {
            let result = service.delete_account(&account);
            if tx.send(Event::DeleteFinished { ticket, result }).is_err() {
                debug!(%ticket, "view closed before deletion finished, result dropped");
            }
        });
    }

    fn spawn_transfer(&self, ticket: Ticket, transfer: Transfer, tx: Sender<Event>) {
        let service = Arc::clone(&self.service);
        thread::spawn(move || {
            let result = service.send_points(&transfer);
            if tx.send(Event::TransferFinished { ticket, result }).is_err() {
                debug!(%ticket, "view closed before transfer finished, result dropped");
            }
        });
    }
}
