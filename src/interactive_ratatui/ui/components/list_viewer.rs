use super::list_item::ListItem;
use super::view_layout::Styles;
use crate::interactive_ratatui::constants::PAGE_SIZE;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{List, ListItem as TuiListItem, Paragraph},
};

/// Scrollable, single-selection list of rows.
///
/// Renders into an area that already has its frame; the caller owns the
/// surrounding block.
pub struct ListViewer<T: ListItem> {
    pub items: Vec<T>,
    pub selected_index: usize,
    pub scroll_offset: usize,
    pub highlight: bool,
    pub empty_message: String,
}

impl<T: ListItem> Default for ListViewer<T> {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl<T: ListItem> ListViewer<T> {
    pub fn new(empty_message: String) -> Self {
        Self {
            items: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
            highlight: true,
            empty_message,
        }
    }

    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        if self.selected_index >= self.items.len() {
            self.selected_index = self.items.len().saturating_sub(1);
        }
        if self.scroll_offset > self.selected_index {
            self.scroll_offset = self.selected_index;
        }
    }

    pub fn set_selected_index(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected_index = index;
        }
    }

    pub fn get_selected_item(&self) -> Option<&T> {
        self.items.get(self.selected_index)
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn move_up(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            true
        } else {
            false
        }
    }

    pub fn move_down(&mut self) -> bool {
        if self.selected_index + 1 < self.items.len() {
            self.selected_index += 1;
            true
        } else {
            false
        }
    }

    pub fn page_up(&mut self) -> bool {
        let new_index = self.selected_index.saturating_sub(PAGE_SIZE);
        if new_index != self.selected_index {
            self.selected_index = new_index;
            true
        } else {
            false
        }
    }

    pub fn page_down(&mut self) -> bool {
        let new_index = (self.selected_index + PAGE_SIZE).min(self.items.len().saturating_sub(1));
        if new_index != self.selected_index {
            self.selected_index = new_index;
            true
        } else {
            false
        }
    }

    pub fn move_to_start(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index = 0;
            self.scroll_offset = 0;
            true
        } else {
            false
        }
    }

    pub fn move_to_end(&mut self) -> bool {
        let last_index = self.items.len().saturating_sub(1);
        if self.selected_index < last_index {
            self.selected_index = last_index;
            true
        } else {
            false
        }
    }

    pub fn adjust_scroll_offset(&mut self, available_height: u16) {
        let visible_count = (available_height as usize).max(1);
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible_count {
            self.scroll_offset = self.selected_index + 1 - visible_count;
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if self.items.is_empty() {
            let empty_message = Paragraph::new(self.empty_message.clone())
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty_message, area);
            return;
        }

        self.adjust_scroll_offset(area.height);
        let start = self.scroll_offset;
        let end = (start + area.height as usize).min(self.items.len());
        let width = area.width as usize;

        let items: Vec<TuiListItem> = (start..end)
            .filter_map(|i| {
                self.items.get(i).map(|item| {
                    let style = if self.highlight && i == self.selected_index {
                        Styles::selected()
                    } else {
                        Style::default()
                    };
                    TuiListItem::new(item.create_line(width)).style(style)
                })
            })
            .collect();

        f.render_widget(List::new(items), area);
    }
}
