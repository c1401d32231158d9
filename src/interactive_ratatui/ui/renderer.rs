use crate::interactive_ratatui::constants::{NAV_BAR_HEIGHT, STATUS_BAR_HEIGHT, SUMMARY_HEIGHT};
use crate::interactive_ratatui::ui::app_state::{AppState, Mode};
use crate::interactive_ratatui::ui::components::{
    Component,
    collapsible_box::render_box,
    help_dialog::HelpDialog,
    movie_detail::MovieDetailView,
    nav_bar::NavBar,
    result_list::ResultList,
    status::{render_error, render_loader},
    view_layout::render_status_line,
    watched_list::WatchedList,
    watched_summary::render_summary,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

const SEARCH_HINTS: &str =
    "Type to search | ↑/↓: Move | Enter: Open | Tab: Watched | F1: Help | Ctrl+C×2: Quit";
const DETAIL_HINTS: &str = "1-9, 0: Rate | ←/→: Adjust | Enter: Add | Esc: Back | F1: Help";
const WATCHED_HINTS: &str = "↑/↓: Move | Del/x: Remove | Tab/Esc: Back | F1: Help";

pub struct Renderer {
    nav_bar: NavBar,
    result_list: ResultList,
    movie_detail: MovieDetailView,
    watched_list: WatchedList,
    help_dialog: HelpDialog,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            nav_bar: NavBar::new(),
            result_list: ResultList::new(),
            movie_detail: MovieDetailView::new(),
            watched_list: WatchedList::new(),
            help_dialog: HelpDialog::new(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState) {
        let underlying = Self::underlying_mode(state);
        self.sync(state);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(NAV_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(f.area());

        self.nav_bar.render(f, chunks[0]);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        self.render_results_panel(f, panels[0], state, underlying);
        self.render_right_panel(f, panels[1], state, underlying);

        render_status_line(
            f,
            chunks[2],
            Self::hints(state, underlying),
            state.ui.message.as_deref(),
        );

        if state.mode == Mode::Help {
            self.help_dialog.render(f, f.area());
        }
    }

    fn underlying_mode(state: &AppState) -> Mode {
        match state.mode {
            Mode::Help => state.ui.help_return_mode,
            mode => mode,
        }
    }

    /// Pushes application state into the components so that their key
    /// handling and the next frame see the same data.
    pub fn sync(&mut self, state: &AppState) {
        let mode = Self::underlying_mode(state);

        let search_bar = self.nav_bar.search_bar_mut();
        search_bar.set_query(state.search.query.clone());
        search_bar.set_focused(mode == Mode::Search && state.detail.is_none());
        self.nav_bar.set_result_count(state.search.results.len());

        self.result_list
            .update_results(state.search.results.clone(), state.search.selected_index);

        self.movie_detail
            .set_detail(state.detail.clone(), state.recorded_rating());

        self.watched_list.set_entries(state.watched.list.to_vec());
        self.watched_list
            .set_selected_index(state.watched.selected_index);
        self.watched_list.set_focused(mode == Mode::Watched);
    }

    fn hints(state: &AppState, mode: Mode) -> &'static str {
        match mode {
            Mode::Watched => WATCHED_HINTS,
            _ if state.detail.is_some() => DETAIL_HINTS,
            _ => SEARCH_HINTS,
        }
    }

    fn render_results_panel(&mut self, f: &mut Frame, area: Rect, state: &AppState, mode: Mode) {
        let focused = mode == Mode::Search && state.detail.is_none();
        let Some(inner) = render_box(
            f,
            area,
            "Results",
            "F2",
            state.ui.results_panel_open,
            focused,
        ) else {
            return;
        };

        if state.search.is_loading {
            render_loader(f, inner);
        } else if let Some(error) = &state.search.error {
            render_error(f, inner, error);
        } else {
            self.result_list.render(f, inner);
        }
    }

    fn render_right_panel(&mut self, f: &mut Frame, area: Rect, state: &AppState, mode: Mode) {
        let showing_detail = state.detail.is_some();
        let title = if showing_detail { "Movie" } else { "Watched" };
        let focused = mode == Mode::Watched || (mode == Mode::Search && showing_detail);
        let Some(inner) = render_box(
            f,
            area,
            title,
            "F3",
            state.ui.watched_panel_open,
            focused,
        ) else {
            return;
        };

        if showing_detail {
            self.movie_detail.render(f, inner);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(SUMMARY_HEIGHT), Constraint::Min(0)])
            .split(inner);

        render_summary(f, chunks[0], &state.summary());

        self.watched_list.render(f, chunks[1]);
    }

    pub fn get_nav_bar_mut(&mut self) -> &mut NavBar {
        &mut self.nav_bar
    }

    pub fn get_result_list_mut(&mut self) -> &mut ResultList {
        &mut self.result_list
    }

    pub fn get_movie_detail_mut(&mut self) -> &mut MovieDetailView {
        &mut self.movie_detail
    }

    pub fn get_watched_list_mut(&mut self) -> &mut WatchedList {
        &mut self.watched_list
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}
