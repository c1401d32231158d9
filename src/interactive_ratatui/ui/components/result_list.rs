use crate::interactive_ratatui::ui::components::{Component, list_viewer::ListViewer};
use crate::interactive_ratatui::ui::events::Message;
use crate::schemas::MovieSummary;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Frame, layout::Rect};

pub struct ResultList {
    list_viewer: ListViewer<MovieSummary>,
}

impl Default for ResultList {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultList {
    pub fn new() -> Self {
        Self {
            list_viewer: ListViewer::new("Type to search movies".to_string()),
        }
    }

    pub fn selected_result(&self) -> Option<&MovieSummary> {
        self.list_viewer.get_selected_item()
    }

    pub fn update_results(&mut self, results: Vec<MovieSummary>, selected_index: usize) {
        self.list_viewer.set_items(results);
        self.list_viewer.set_selected_index(selected_index);
    }

    fn selection_message(&self, moved: bool) -> Option<Message> {
        moved.then(|| Message::SelectResult(self.list_viewer.selected_index()))
    }
}

impl Component for ResultList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        self.list_viewer.render(f, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        let moved = match key.code {
            KeyCode::Up => self.list_viewer.move_up(),
            KeyCode::Down => self.list_viewer.move_down(),
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => {
                self.list_viewer.move_up()
            }
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                self.list_viewer.move_down()
            }
            KeyCode::PageUp => self.list_viewer.page_up(),
            KeyCode::PageDown => self.list_viewer.page_down(),
            KeyCode::Home => self.list_viewer.move_to_start(),
            KeyCode::End => self.list_viewer.move_to_end(),
            KeyCode::Enter => {
                return self
                    .selected_result()
                    .map(|movie| Message::SelectMovie(movie.id.clone()));
            }
            _ => return None,
        };
        self.selection_message(moved)
    }
}
