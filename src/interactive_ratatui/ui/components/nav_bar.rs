use crate::interactive_ratatui::constants::{LOGO_WIDTH, RESULT_COUNT_WIDTH};
use crate::interactive_ratatui::ui::components::{
    Component, search_bar::SearchBar, view_layout::Styles,
};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Top bar: logo, query input and the number of results found.
pub struct NavBar {
    search_bar: SearchBar,
    result_count: usize,
}

impl Default for NavBar {
    fn default() -> Self {
        Self::new()
    }
}

impl NavBar {
    pub fn new() -> Self {
        Self {
            search_bar: SearchBar::new(),
            result_count: 0,
        }
    }

    pub fn set_result_count(&mut self, count: usize) {
        self.result_count = count;
    }

    pub fn search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    fn render_logo(f: &mut Frame, area: Rect) {
        let logo = Paragraph::new(Line::from(vec![
            Span::raw("🍿 "),
            Span::styled("Popcorn", Styles::title()),
        ]))
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(logo, area);
    }

    fn render_result_count(&self, f: &mut Frame, area: Rect) {
        let count = Paragraph::new(Line::from(vec![
            Span::raw("Found "),
            Span::styled(self.result_count.to_string(), Styles::label()),
            Span::raw(" results"),
        ]))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(count, area);
    }
}

impl Component for NavBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(LOGO_WIDTH),
                Constraint::Min(10),
                Constraint::Length(RESULT_COUNT_WIDTH),
            ])
            .split(area);

        Self::render_logo(f, chunks[0]);
        self.search_bar.render(f, chunks[1]);
        self.render_result_count(f, chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        self.search_bar.handle_key(key)
    }
}
