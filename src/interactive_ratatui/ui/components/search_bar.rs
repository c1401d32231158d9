use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const PLACEHOLDER: &str = "Search movies...";

/// Single-line query input with readline-style editing.
///
/// Every edit that changes the text emits [`Message::QueryChanged`];
/// cursor movement alone emits nothing.
#[derive(Default)]
pub struct SearchBar {
    query: String,
    cursor_position: usize,
    focused: bool,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            cursor_position: 0,
            focused: true,
        }
    }

    /// Syncs the text with application state, keeping the cursor where it
    /// is unless the text changed underneath it.
    pub fn set_query(&mut self, query: String) {
        if query != self.query {
            self.cursor_position = query.chars().count();
            self.query = query;
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn get_query(&self) -> &str {
        &self.query
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    fn char_count(&self) -> usize {
        self.query.chars().count()
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_pos)
            .map_or(self.query.len(), |(i, _)| i)
    }

    /// Find the previous word boundary from the given position
    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let mut pos = from;

        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }

        pos
    }

    /// Find the next word boundary from the given position
    fn find_next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.query.chars().collect();
        let len = chars.len();
        let mut pos = from;

        while pos < len && !chars[pos].is_whitespace() {
            pos += 1;
        }
        while pos < len && chars[pos].is_whitespace() {
            pos += 1;
        }

        pos
    }

    /// Delete chars in `start..end` and report the new query if anything went.
    fn delete_range(&mut self, start: usize, end: usize) -> Option<Message> {
        if start >= end || end > self.char_count() {
            return None;
        }

        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);
        self.query.drain(byte_start..byte_end);
        self.cursor_position = start;
        Some(Message::QueryChanged(self.query.clone()))
    }

    fn insert_char(&mut self, c: char) -> Option<Message> {
        let byte_pos = self.byte_offset(self.cursor_position);
        self.query.insert(byte_pos, c);
        self.cursor_position += 1;
        Some(Message::QueryChanged(self.query.clone()))
    }

    fn delete_before_cursor(&mut self) -> Option<Message> {
        if self.cursor_position == 0 {
            return None;
        }
        self.delete_range(self.cursor_position - 1, self.cursor_position)
    }

    fn delete_under_cursor(&mut self) -> Option<Message> {
        self.delete_range(self.cursor_position, self.cursor_position + 1)
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);

        let spans = if self.query.is_empty() {
            vec![
                Span::styled(" ", cursor_style),
                Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)),
            ]
        } else if self.cursor_position < self.char_count() {
            let before: String = self.query.chars().take(self.cursor_position).collect();
            let at: String = self
                .query
                .chars()
                .nth(self.cursor_position)
                .map(String::from)
                .unwrap_or_default();
            let after: String = self.query.chars().skip(self.cursor_position + 1).collect();

            vec![
                Span::raw(before),
                Span::styled(at, cursor_style),
                Span::raw(after),
            ]
        } else {
            vec![Span::raw(self.query.clone()), Span::styled(" ", cursor_style)]
        };

        let border_style = if self.focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let input = Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .title(" Search ")
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .style(Style::default().fg(Color::Yellow));

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('a') => {
                    self.cursor_position = 0;
                    None
                }
                KeyCode::Char('e') => {
                    self.cursor_position = self.char_count();
                    None
                }
                KeyCode::Char('b') => {
                    self.cursor_position = self.cursor_position.saturating_sub(1);
                    None
                }
                KeyCode::Char('f') => {
                    self.cursor_position = (self.cursor_position + 1).min(self.char_count());
                    None
                }
                KeyCode::Char('h') => self.delete_before_cursor(),
                KeyCode::Char('d') => self.delete_under_cursor(),
                // Ctrl+W - Delete word before cursor
                KeyCode::Char('w') => {
                    let start = self.find_prev_word_boundary(self.cursor_position);
                    self.delete_range(start, self.cursor_position)
                }
                // Ctrl+U - Delete from cursor to beginning of line
                KeyCode::Char('u') => self.delete_range(0, self.cursor_position),
                // Ctrl+K - Delete from cursor to end of line
                KeyCode::Char('k') => self.delete_range(self.cursor_position, self.char_count()),
                _ => None,
            };
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                KeyCode::Char('b') => {
                    self.cursor_position = self.find_prev_word_boundary(self.cursor_position);
                }
                KeyCode::Char('f') => {
                    self.cursor_position = self.find_next_word_boundary(self.cursor_position);
                }
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.delete_before_cursor(),
            KeyCode::Delete => self.delete_under_cursor(),
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                self.cursor_position = (self.cursor_position + 1).min(self.char_count());
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.char_count();
                None
            }
            _ => None,
        }
    }
}
