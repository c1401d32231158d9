use crate::interactive_ratatui::domain::summary::WatchedSummary;
use crate::interactive_ratatui::ui::components::view_layout::Styles;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn summary_lines(summary: &WatchedSummary) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled("Movies you watched", Styles::title())),
        Line::from(vec![
            Span::raw(format!("#️⃣ {} movies   ", summary.count)),
            Span::styled(format!("⭐️ {:.1}   ", summary.imdb_rating), Styles::label()),
            Span::styled(format!("🌟 {:.1}   ", summary.user_rating), Styles::accent()),
            Span::raw(format!("⏳ {:.1} min", summary.runtime)),
        ]),
    ]
}

pub fn render_summary(f: &mut Frame, area: Rect, summary: &WatchedSummary) {
    let paragraph =
        Paragraph::new(summary_lines(summary)).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_summary_lines_format() {
        let summary = WatchedSummary {
            count: 2,
            imdb_rating: 7.45,
            user_rating: 8.0,
            runtime: 121.0,
        };
        let text = line_text(&summary_lines(&summary)[1]);

        assert!(text.contains("2 movies"));
        assert!(text.contains("8.0"));
        assert!(text.contains("121.0 min"));
    }

    #[test]
    fn test_empty_summary_shows_zeros() {
        let text = line_text(&summary_lines(&WatchedSummary::default())[1]);

        assert!(text.contains("0 movies"));
        assert!(text.contains("0.0 min"));
        assert!(!text.contains("NaN"));
    }
}
