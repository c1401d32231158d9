use crate::interactive_ratatui::ui::app_state::DetailState;
use crate::interactive_ratatui::ui::components::{
    Component,
    star_rating::{digit_to_rating, rating_line},
    status::{render_error, render_loader},
    view_layout::Styles,
};
use crate::interactive_ratatui::ui::events::Message;
use crate::schemas::{MovieDetail, UserRating};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

/// Detail panel for the selected movie, including the rating control.
pub struct MovieDetailView {
    detail: Option<DetailState>,
    recorded_rating: Option<UserRating>,
    scroll_offset: u16,
}

impl Default for MovieDetailView {
    fn default() -> Self {
        Self::new()
    }
}

impl MovieDetailView {
    pub fn new() -> Self {
        Self {
            detail: None,
            recorded_rating: None,
            scroll_offset: 0,
        }
    }

    /// `recorded_rating` is the rating already stored in the watched list for
    /// this movie; when present the rating control is replaced by it.
    pub fn set_detail(&mut self, detail: Option<DetailState>, recorded_rating: Option<UserRating>) {
        let changed = self.detail.as_ref().map(|d| &d.selected_id)
            != detail.as_ref().map(|d| &d.selected_id);
        if changed {
            self.scroll_offset = 0;
        }
        self.detail = detail;
        self.recorded_rating = recorded_rating;
    }

    pub fn shows_rating_control(&self) -> bool {
        self.recorded_rating.is_none()
    }

    fn rating_lines(&self, detail: &DetailState) -> Vec<Line<'static>> {
        if let Some(rating) = self.recorded_rating {
            return vec![Line::from(Span::styled(
                format!("You rated this movie {rating} ⭐"),
                Styles::success(),
            ))];
        }

        let add_style = if detail.rating.is_some() {
            Styles::success()
        } else {
            Styles::dimmed()
        };
        vec![
            rating_line(detail.rating),
            Line::from(vec![
                Span::styled("[Enter] ", Styles::label()),
                Span::styled("+ Add to list", add_style),
            ]),
        ]
    }

    fn movie_lines(&self, movie: &MovieDetail, detail: &DetailState) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("← Esc  ", Styles::dimmed()),
                Span::styled(movie.title.clone(), Styles::title()),
            ]),
            Line::from(format!("{} • {}", movie.year, movie.runtime)),
            Line::from(movie.genre.clone()),
            Line::from(vec![
                Span::raw("⭐ "),
                Span::styled(movie.imdb_rating.clone(), Styles::label()),
                Span::raw(" IMDb rating"),
            ]),
            Line::from(""),
        ];

        lines.extend(self.rating_lines(detail));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            movie.plot.clone(),
            Styles::normal().add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Starring: {}", movie.actors)));
        lines.push(Line::from(format!("Directed by {}", movie.director)));
        lines
    }
}

impl Component for MovieDetailView {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(detail) = &self.detail else {
            return;
        };

        if detail.is_loading {
            render_loader(f, area);
            return;
        }
        if let Some(error) = &detail.error {
            render_error(f, area, error);
            return;
        }
        let Some(movie) = &detail.movie else {
            return;
        };

        let paragraph = Paragraph::new(self.movie_lines(movie, detail))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset, 0));
        f.render_widget(paragraph, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => Some(Message::CloseMovie),
            KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char(c) if c.is_ascii_digit() && self.shows_rating_control() => {
                digit_to_rating(c).map(Message::SetRating)
            }
            KeyCode::Left if self.shows_rating_control() => Some(Message::AdjustRating(-1)),
            KeyCode::Right if self.shows_rating_control() => Some(Message::AdjustRating(1)),
            KeyCode::Enter | KeyCode::Char('+') if self.shows_rating_control() => {
                Some(Message::AddWatched)
            }
            _ => None,
        }
    }
}
