use crate::interactive_ratatui::ui::components::view_layout::Styles;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders},
};

/// Draws the frame of a panel that can be collapsed.
///
/// Returns the inner area to draw the body into, or `None` when the panel
/// is closed. The `–`/`+` marker in the title shows the state and the key
/// that toggles it.
pub fn render_box(
    f: &mut Frame,
    area: Rect,
    title: &str,
    toggle_key: &str,
    open: bool,
    focused: bool,
) -> Option<Rect> {
    let marker = if open { "–" } else { "+" };
    let border_style = if focused {
        Styles::label()
    } else {
        Styles::dimmed()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Line::from(vec![
            Span::styled(format!(" {title} "), Styles::title()),
            Span::styled(format!("[{marker}] {toggle_key} "), Styles::dimmed()),
        ]));

    let inner = block.inner(area);
    f.render_widget(block, area);
    open.then_some(inner)
}
