use crate::interactive_ratatui::ui::components::view_layout::Styles;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

pub fn render_loader(f: &mut Frame, area: Rect) {
    let loader = Paragraph::new(Line::from(Span::styled("Loading...", Styles::label())))
        .alignment(Alignment::Center);
    f.render_widget(loader, area);
}

pub fn render_error(f: &mut Frame, area: Rect, error: &str) {
    let message = Paragraph::new(Line::from(vec![
        Span::raw("⛔ "),
        Span::styled(error.to_string(), Styles::error()),
    ]))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(message, area);
}
