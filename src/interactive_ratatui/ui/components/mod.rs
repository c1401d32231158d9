pub mod collapsible_box;
pub mod help_dialog;
pub mod list_item;
pub mod list_viewer;
pub mod movie_detail;
pub mod nav_bar;
pub mod result_list;
pub mod search_bar;
pub mod star_rating;
pub mod status;
pub mod view_layout;
pub mod watched_list;
pub mod watched_summary;

#[cfg(test)]
mod list_viewer_test;
#[cfg(test)]
mod result_list_test;

use crate::interactive_ratatui::constants::EXIT_PROMPT;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}

/// Check if a message is the exit prompt
pub fn is_exit_prompt(message: Option<&str>) -> bool {
    message == Some(EXIT_PROMPT)
}
