use crate::interactive_ratatui::domain::models::Panel;
use crate::schemas::{MovieDetail, MovieSummary};

#[derive(Clone, Debug)]
pub enum Message {
    // Search events
    QueryChanged(String),
    SearchSucceeded(Vec<MovieSummary>),
    SearchFailed(String),
    SelectResult(usize),

    // Detail events
    SelectMovie(String),
    CloseMovie,
    DetailsLoaded(MovieDetail),
    DetailsFailed(String),

    // Rating
    SetRating(u8),
    AdjustRating(i8),
    AddWatched,

    // Watched list
    RemoveWatched(String),
    SelectWatched(usize),

    // Focus and layout
    FocusWatched,
    FocusSearch,
    TogglePanel(Panel),
    ShowHelp,
    CloseHelp,

    // UI events
    SetStatus(String),
    ClearStatus,
}
