use crate::schemas::{MovieSummary, WatchedEntry};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Trait for rows that can be displayed in a generic list viewer
pub trait ListItem: Clone {
    /// Movie id, used to address the row in messages
    fn id(&self) -> &str;

    fn title(&self) -> &str;

    /// Trailing columns shown after the title
    fn detail_spans(&self) -> Vec<Span<'static>>;

    /// Creates the single display line for the row
    fn create_line(&self, max_width: usize) -> Line<'static> {
        let details = self.detail_spans();
        let details_width: usize = details.iter().map(|s| s.content.chars().count()).sum();
        let title_width = max_width.saturating_sub(details_width + 1).max(1);

        let mut spans = vec![Span::raw(format!(
            "{:width$} ",
            truncate_message(self.title(), title_width),
            width = title_width
        ))];
        spans.extend(details);
        Line::from(spans)
    }
}

impl ListItem for MovieSummary {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn detail_spans(&self) -> Vec<Span<'static>> {
        vec![Span::styled(
            format!("🗓 {}", self.year),
            Style::default().fg(Color::DarkGray),
        )]
    }
}

impl ListItem for WatchedEntry {
    fn id(&self) -> &str {
        WatchedEntry::id(self)
    }

    fn title(&self) -> &str {
        &self.movie.title
    }

    fn detail_spans(&self) -> Vec<Span<'static>> {
        vec![
            Span::styled(
                format!("⭐️ {:4} ", self.movie.imdb_rating),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                format!("🌟 {:2} ", self.user_rating),
                Style::default().fg(Color::Magenta),
            ),
            Span::styled(
                format!("⏳ {}", self.movie.runtime),
                Style::default().fg(Color::DarkGray),
            ),
        ]
    }
}

pub fn truncate_message(text: &str, max_width: usize) -> String {
    let text = text.replace('\n', " ");
    let chars: Vec<char> = text.chars().collect();

    if chars.len() <= max_width {
        text
    } else if max_width <= 3 {
        chars.into_iter().take(max_width).collect()
    } else {
        let truncated: String = chars.into_iter().take(max_width - 3).collect();
        format!("{truncated}...")
    }
}
