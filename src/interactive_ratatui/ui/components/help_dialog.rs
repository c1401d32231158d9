use crate::interactive_ratatui::constants::{HELP_DIALOG_MARGIN, HELP_DIALOG_MAX_WIDTH};
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::components::view_layout::Styles;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn section(title: &'static str) -> Line<'static> {
        Line::from(Span::styled(title, Styles::title()))
    }

    fn help_text() -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled("🍿 Popcorn - Keyboard Shortcuts", Styles::accent())),
            Line::from(""),
            Self::section("Search:"),
            Line::from("  Type          - Search movies by title"),
            Line::from("  ↑/↓, Ctrl+P/N - Move through results"),
            Line::from("  PgUp/PgDn     - Move a page at a time"),
            Line::from("  Enter         - Open the selected movie"),
            Line::from("  Tab           - Focus the watched list"),
            Line::from(""),
            Self::section("Movie Details:"),
            Line::from("  1-9, 0        - Rate the movie (0 is 10)"),
            Line::from("  ←/→           - Lower or raise the rating"),
            Line::from("  Enter, +      - Add to the watched list"),
            Line::from("  ↑/↓           - Scroll"),
            Line::from("  Esc/Backspace - Back to search"),
            Line::from(""),
            Self::section("Watched List:"),
            Line::from("  ↑/↓           - Move through watched movies"),
            Line::from("  Delete, x     - Remove the selected movie"),
            Line::from("  Tab/Esc       - Back to search"),
            Line::from(""),
            Self::section("Anywhere:"),
            Line::from("  F1            - Show this help"),
            Line::from("  F2 / F3       - Collapse or expand a panel"),
            Line::from("  Ctrl+C twice  - Quit"),
            Line::from(""),
            Line::from("Press any key to close this help..."),
        ]
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = Self::help_text();

        let width = HELP_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(HELP_DIALOG_MARGIN));
        let height =
            (help_text.len() as u16 + 2).min(area.height.saturating_sub(HELP_DIALOG_MARGIN));

        // Center the dialog
        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        let dialog_area = Rect::new(x, y, width, height);

        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // Any key closes the help dialog
        Some(Message::CloseHelp)
    }
}
