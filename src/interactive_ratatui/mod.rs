use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::AverageMode;
use crate::provider::MovieProvider;

mod application;
mod constants;
mod domain;
pub mod ui;


pub use self::application::title_service::{RecordingTitle, TerminalTitle, TitleSurface};

use self::application::{fetch_service::FetchService, title_service::TitleScope};
use self::constants::*;
use self::domain::models::{FetchOutcome, FetchResponse, Mode, Panel};
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    renderer::Renderer,
};

pub struct InteractiveApp<S: TitleSurface = TerminalTitle> {
    state: AppState,
    renderer: Renderer,
    fetch_service: FetchService,
    responses: Receiver<FetchResponse>,
    search_token: Option<CancellationToken>,
    detail_token: Option<CancellationToken>,
    title: TitleScope<S>,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<Instant>,
    message_clear_delay: u64,
}

impl<S: TitleSurface> InteractiveApp<S> {
    pub fn new(
        provider: Arc<dyn MovieProvider>,
        runtime: Handle,
        average_mode: AverageMode,
        surface: S,
    ) -> Self {
        let (fetch_service, responses) = FetchService::new(provider, runtime);

        Self {
            state: AppState::new(average_mode),
            renderer: Renderer::new(),
            fetch_service,
            responses,
            search_token: None,
            detail_token: None,
            title: TitleScope::new(surface),
            last_ctrl_c_press: None,
            message_timer: None,
            message_clear_delay: MESSAGE_CLEAR_DELAY_MS,
        }
    }

    pub fn run(&mut self, initial_query: Option<String>) -> Result<()> {
        let mut terminal = self.setup_terminal()?;
        info!("interactive session started");

        if let Some(query) = initial_query.filter(|q| !q.is_empty()) {
            self.handle_message(Message::QueryChanged(query));
        }

        let result = self.run_app(&mut terminal);

        self.cancel_all();
        self.title.leave();
        self.cleanup_terminal(&mut terminal)?;
        info!("interactive session ended");
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;

            // Apply every completion that arrived since the last frame
            while let Ok(response) = self.responses.try_recv() {
                self.handle_response(response);
            }

            // Check for scheduled message clear
            if let Some(timer) = self.message_timer {
                if timer.elapsed() >= Duration::from_millis(self.message_clear_delay) {
                    self.message_timer = None;
                    self.handle_message(Message::ClearStatus);
                }
            }

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_input(key) {
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    pub(crate) fn draw(&mut self, f: &mut Frame) {
        self.renderer.render(f, &self.state);
    }

    /// Routes a key press. Returns `true` when the application should quit.
    fn handle_input(&mut self, key: KeyEvent) -> bool {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return true;
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.handle_message(Message::SetStatus(EXIT_PROMPT.to_string()));
            return false;
        }

        // Components answer keys from the state of the last update
        self.renderer.sync(&self.state);

        if self.state.mode != Mode::Help {
            let global = match key.code {
                KeyCode::F(1) => Some(Message::ShowHelp),
                KeyCode::F(2) => Some(Message::TogglePanel(Panel::Results)),
                KeyCode::F(3) => Some(Message::TogglePanel(Panel::Watched)),
                _ => None,
            };
            if let Some(msg) = global {
                self.handle_message(msg);
                return false;
            }
        }

        let message = match self.state.mode {
            Mode::Search if self.state.detail.is_some() => {
                self.renderer.get_movie_detail_mut().handle_key(key)
            }
            Mode::Search => self.handle_search_mode_input(key),
            Mode::Watched => self.renderer.get_watched_list_mut().handle_key(key),
            Mode::Help => self.renderer.get_help_dialog_mut().handle_key(key),
        };

        if let Some(msg) = message {
            self.handle_message(msg);
        }

        false
    }

    fn handle_search_mode_input(&mut self, key: KeyEvent) -> Option<Message> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Tab => Some(Message::FocusWatched),
            KeyCode::Char('p') | KeyCode::Char('n') if ctrl => {
                self.renderer.get_result_list_mut().handle_key(key)
            }
            KeyCode::Up
            | KeyCode::Down
            | KeyCode::PageUp
            | KeyCode::PageDown
            | KeyCode::Home
            | KeyCode::End
            | KeyCode::Enter => self.renderer.get_result_list_mut().handle_key(key),
            _ => self.renderer.get_nav_bar_mut().handle_key(key),
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        self.execute_command(command);
        self.title.sync(self.state.title_owner());
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::Search(query) => {
                if let Some(previous) = self.search_token.take() {
                    previous.cancel();
                }
                debug!(query = %query, "dispatching search");
                self.search_token = Some(self.fetch_service.search(query));
            }
            Command::CancelSearch => {
                if let Some(token) = self.search_token.take() {
                    token.cancel();
                }
            }
            Command::LoadDetails(id) => {
                if let Some(previous) = self.detail_token.take() {
                    previous.cancel();
                }
                debug!(id = %id, "loading movie details");
                self.detail_token = Some(self.fetch_service.load_details(id));
            }
            Command::CancelDetails => {
                if let Some(token) = self.detail_token.take() {
                    token.cancel();
                }
            }
            Command::ScheduleClearMessage(delay) => {
                self.message_timer = Some(Instant::now());
                self.message_clear_delay = delay;
            }
            Command::Batch(commands) => {
                for command in commands {
                    self.execute_command(command);
                }
            }
        }
    }

    fn handle_response(&mut self, response: FetchResponse) {
        if response.is_stale() {
            debug!("dropping superseded response");
            return;
        }

        let message = match response.outcome {
            FetchOutcome::Search { query, result } => {
                self.search_token = None;
                match result {
                    Ok(results) => Message::SearchSucceeded(results),
                    Err(e) => {
                        debug!(query = %query, error = %e, "search failed");
                        Message::SearchFailed(e.user_message().to_string())
                    }
                }
            }
            FetchOutcome::Details { id, result } => {
                self.detail_token = None;
                match result {
                    Ok(movie) => Message::DetailsLoaded(movie),
                    Err(e) => {
                        warn!(id = %id, error = %e, "failed to load movie details");
                        Message::DetailsFailed(DETAIL_LOAD_FAILED_MESSAGE.to_string())
                    }
                }
            }
        };

        self.handle_message(message);
    }

    fn cancel_all(&mut self) {
        self.execute_command(Command::CancelSearch.and(Command::CancelDetails));
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn send_key(&mut self, key: KeyEvent) -> bool {
        self.handle_input(key)
    }

    #[cfg(test)]
    pub(crate) fn send_message(&mut self, message: Message) {
        self.handle_message(message);
    }

    /// Blocks until one response arrives and applies it.
    #[cfg(test)]
    pub(crate) fn wait_for_response(&mut self, timeout: Duration) -> bool {
        match self.responses.recv_timeout(timeout) {
            Ok(response) => {
                self.handle_response(response);
                true
            }
            Err(_) => false,
        }
    }
}
