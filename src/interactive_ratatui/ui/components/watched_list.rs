use crate::interactive_ratatui::ui::components::{Component, list_viewer::ListViewer};
use crate::interactive_ratatui::ui::events::Message;
use crate::schemas::WatchedEntry;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect};

pub struct WatchedList {
    list_viewer: ListViewer<WatchedEntry>,
}

impl Default for WatchedList {
    fn default() -> Self {
        Self::new()
    }
}

impl WatchedList {
    pub fn new() -> Self {
        Self {
            list_viewer: ListViewer::new("No watched movies yet".to_string()),
        }
    }

    pub fn set_entries(&mut self, entries: Vec<WatchedEntry>) {
        self.list_viewer.set_items(entries);
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.list_viewer.set_selected_index(index);
    }

    /// Highlight the cursor row only while the list has focus
    pub fn set_focused(&mut self, focused: bool) {
        self.list_viewer.highlight = focused;
    }

    pub fn selected_entry(&self) -> Option<&WatchedEntry> {
        self.list_viewer.get_selected_item()
    }
}

impl Component for WatchedList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        self.list_viewer.render(f, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => self
                .list_viewer
                .move_up()
                .then(|| Message::SelectWatched(self.list_viewer.selected_index())),
            KeyCode::Down => self
                .list_viewer
                .move_down()
                .then(|| Message::SelectWatched(self.list_viewer.selected_index())),
            KeyCode::Delete | KeyCode::Char('x') => self
                .selected_entry()
                .map(|entry| Message::RemoveWatched(entry.id().to_string())),
            KeyCode::Tab | KeyCode::Esc => Some(Message::FocusSearch),
            _ => None,
        }
    }
}
