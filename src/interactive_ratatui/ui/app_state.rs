use crate::config::AverageMode;
use crate::interactive_ratatui::constants::*;
use crate::interactive_ratatui::domain::models::Panel;
use crate::interactive_ratatui::domain::summary::WatchedSummary;
use crate::interactive_ratatui::domain::watched::WatchedList;
use crate::interactive_ratatui::ui::commands::Command;
use crate::interactive_ratatui::ui::events::Message;
use crate::schemas::{MovieDetail, MovieSummary, UserRating, WatchedEntry};
use tracing::{debug, info};

// Re-export Mode
pub use crate::interactive_ratatui::domain::models::Mode;

pub struct AppState {
    pub mode: Mode,
    pub search: SearchState,
    pub detail: Option<DetailState>,
    pub watched: WatchedState,
    pub ui: UiState,
}

pub struct SearchState {
    pub query: String,
    pub results: Vec<MovieSummary>,
    pub selected_index: usize,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// State of the open detail view. Rebuilt from scratch for every selection.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailState {
    pub selected_id: String,
    pub movie: Option<MovieDetail>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub rating: Option<UserRating>,
}

impl DetailState {
    fn loading(selected_id: String) -> Self {
        Self {
            selected_id,
            movie: None,
            is_loading: true,
            error: None,
            rating: None,
        }
    }
}

pub struct WatchedState {
    pub list: WatchedList,
    pub selected_index: usize,
    pub average_mode: AverageMode,
}

pub struct UiState {
    pub message: Option<String>,
    pub results_panel_open: bool,
    pub watched_panel_open: bool,
    pub help_return_mode: Mode,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AverageMode::default())
    }
}

impl AppState {
    pub fn new(average_mode: AverageMode) -> Self {
        Self {
            mode: Mode::Search,
            search: SearchState {
                query: String::new(),
                results: Vec::new(),
                selected_index: 0,
                is_loading: false,
                error: None,
            },
            detail: None,
            watched: WatchedState {
                list: WatchedList::new(),
                selected_index: 0,
                average_mode,
            },
            ui: UiState {
                message: None,
                results_panel_open: true,
                watched_panel_open: true,
                help_return_mode: Mode::Search,
            },
        }
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => {
                self.search.query = q;
                // A new query always closes the open movie first
                let close = self.close_detail();
                if self.search.query.is_empty() {
                    self.search.results.clear();
                    self.search.selected_index = 0;
                    self.search.error = None;
                    self.search.is_loading = false;
                    close.and(Command::CancelSearch)
                } else {
                    self.search.error = None;
                    self.search.is_loading = true;
                    close.and(Command::Search(self.search.query.clone()))
                }
            }
            Message::SearchSucceeded(results) => {
                debug!(count = results.len(), "search results applied");
                self.search.results = results;
                self.search.selected_index = 0;
                self.search.is_loading = false;
                self.search.error = None;
                Command::None
            }
            Message::SearchFailed(error) => {
                self.search.error = Some(error);
                self.search.is_loading = false;
                Command::None
            }
            Message::SelectResult(index) => {
                if index < self.search.results.len() {
                    self.search.selected_index = index;
                }
                Command::None
            }
            Message::SelectMovie(id) => {
                if self.selected_id() == Some(id.as_str()) {
                    return self.close_detail();
                }
                let replaced = self.close_detail();
                self.ui.watched_panel_open = true;
                self.detail = Some(DetailState::loading(id.clone()));
                replaced.and(Command::LoadDetails(id))
            }
            Message::CloseMovie => self.close_detail(),
            Message::DetailsLoaded(movie) => {
                if let Some(detail) = self.detail.as_mut() {
                    detail.movie = Some(movie);
                    detail.is_loading = false;
                    detail.error = None;
                }
                Command::None
            }
            Message::DetailsFailed(error) => {
                if let Some(detail) = self.detail.as_mut() {
                    detail.error = Some(error);
                    detail.is_loading = false;
                }
                Command::None
            }
            Message::SetRating(value) => {
                if self.can_rate() {
                    if let (Some(detail), Some(rating)) =
                        (self.detail.as_mut(), UserRating::new(value))
                    {
                        detail.rating = Some(rating);
                    }
                }
                Command::None
            }
            Message::AdjustRating(delta) => {
                if self.can_rate() {
                    if let Some(detail) = self.detail.as_mut() {
                        detail.rating = Some(UserRating::step(detail.rating, delta));
                    }
                }
                Command::None
            }
            Message::AddWatched => self.add_watched(),
            Message::RemoveWatched(id) => {
                if self.watched.list.remove(&id).is_some() {
                    info!(id = %id, "removed from watched list");
                }
                let len = self.watched.list.len();
                if self.watched.selected_index >= len {
                    self.watched.selected_index = len.saturating_sub(1);
                }
                Command::None
            }
            Message::SelectWatched(index) => {
                if index < self.watched.list.len() {
                    self.watched.selected_index = index;
                }
                Command::None
            }
            Message::FocusWatched => {
                if self.mode == Mode::Search && self.ui.watched_panel_open {
                    self.mode = Mode::Watched;
                }
                Command::None
            }
            Message::FocusSearch => {
                if self.mode == Mode::Watched {
                    self.mode = Mode::Search;
                }
                Command::None
            }
            Message::TogglePanel(panel) => {
                match panel {
                    Panel::Results => {
                        self.ui.results_panel_open = !self.ui.results_panel_open;
                    }
                    Panel::Watched => {
                        self.ui.watched_panel_open = !self.ui.watched_panel_open;
                        if !self.ui.watched_panel_open {
                            // Collapsing unmounts the movie view and the watched list
                            if self.mode == Mode::Watched {
                                self.mode = Mode::Search;
                            }
                            return self.close_detail();
                        }
                    }
                }
                Command::None
            }
            Message::ShowHelp => {
                if self.mode != Mode::Help {
                    self.ui.help_return_mode = self.mode;
                    self.mode = Mode::Help;
                }
                Command::None
            }
            Message::CloseHelp => {
                if self.mode == Mode::Help {
                    self.mode = self.ui.help_return_mode;
                }
                Command::None
            }
            Message::SetStatus(status) => {
                self.ui.message = Some(status);
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::ClearStatus => {
                self.ui.message = None;
                Command::None
            }
        }
    }

    fn close_detail(&mut self) -> Command {
        match self.detail.take() {
            Some(_) => Command::CancelDetails,
            None => Command::None,
        }
    }

    fn add_watched(&mut self) -> Command {
        if !self.can_rate() {
            return Command::None;
        }
        let Some(detail) = self.detail.as_ref() else {
            return Command::None;
        };
        let Some(movie) = detail.movie.clone() else {
            return Command::None;
        };
        let Some(rating) = detail.rating else {
            return self.update(Message::SetStatus(RATING_REQUIRED_MESSAGE.to_string()));
        };

        info!(id = %movie.id, rating = rating.get(), "added to watched list");
        self.watched.list.add(WatchedEntry::new(movie, rating));
        self.close_detail()
    }

    /// Whether the rating control is shown for the open detail view.
    ///
    /// A movie already in the watched list shows its recorded rating instead.
    pub fn can_rate(&self) -> bool {
        match &self.detail {
            Some(detail) => !self.watched.list.contains(&detail.selected_id),
            None => false,
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.detail.as_ref().map(|d| d.selected_id.as_str())
    }

    pub fn recorded_rating(&self) -> Option<UserRating> {
        self.selected_id()
            .and_then(|id| self.watched.list.rating_of(id))
    }

    pub fn summary(&self) -> WatchedSummary {
        self.watched.list.summary(self.watched.average_mode)
    }

    /// `(id, title)` of the loaded movie that should own the window title.
    pub fn title_owner(&self) -> Option<(&str, &str)> {
        let detail = self.detail.as_ref()?;
        let movie = detail.movie.as_ref()?;
        Some((detail.selected_id.as_str(), movie.title.as_str()))
    }
}
