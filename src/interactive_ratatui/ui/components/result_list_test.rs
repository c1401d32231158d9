#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::result_list::*;
    use crate::interactive_ratatui::application::stub_provider::summary;
    use crate::interactive_ratatui::ui::events::Message;
    use crate::schemas::MovieSummary;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: crossterm::event::KeyEventKind::Press,
            state: crossterm::event::KeyEventState::empty(),
        }
    }

    fn create_results(count: usize) -> Vec<MovieSummary> {
        (0..count)
            .map(|i| summary(&format!("tt{i:07}"), &format!("Movie {i}"), "1999"))
            .collect()
    }

    #[test]
    fn test_result_list_creation() {
        let list = ResultList::new();
        assert!(list.selected_result().is_none());
    }

    #[test]
    fn test_update_results() {
        let mut list = ResultList::new();
        list.update_results(create_results(3), 1);

        assert_eq!(list.selected_result().map(|m| m.id.as_str()), Some("tt0000001"));
    }

    #[test]
    fn test_selection_clamped_when_results_shrink() {
        let mut list = ResultList::new();
        list.update_results(create_results(5), 4);
        list.update_results(create_results(2), 4);

        assert_eq!(list.selected_result().map(|m| m.id.as_str()), Some("tt0000001"));
    }

    #[test]
    fn test_navigation_emits_selection() {
        let mut list = ResultList::new();
        list.update_results(create_results(3), 0);

        let msg = list.handle_key(create_key_event(KeyCode::Down));
        assert!(matches!(msg, Some(Message::SelectResult(1))));

        let msg = list.handle_key(create_key_event(KeyCode::End));
        assert!(matches!(msg, Some(Message::SelectResult(2))));

        // Already at the bottom
        assert!(list.handle_key(create_key_event(KeyCode::Down)).is_none());

        let msg = list.handle_key(create_key_event(KeyCode::Home));
        assert!(matches!(msg, Some(Message::SelectResult(0))));

        assert!(list.handle_key(create_key_event(KeyCode::Up)).is_none());
    }

    #[test]
    fn test_ctrl_p_and_ctrl_n() {
        let mut list = ResultList::new();
        list.update_results(create_results(3), 0);

        let down = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert!(matches!(list.handle_key(down), Some(Message::SelectResult(1))));

        let up = KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL);
        assert!(matches!(list.handle_key(up), Some(Message::SelectResult(0))));
    }

    #[test]
    fn test_page_navigation() {
        let mut list = ResultList::new();
        list.update_results(create_results(25), 0);

        let msg = list.handle_key(create_key_event(KeyCode::PageDown));
        assert!(matches!(msg, Some(Message::SelectResult(10))));

        let msg = list.handle_key(create_key_event(KeyCode::PageUp));
        assert!(matches!(msg, Some(Message::SelectResult(0))));
    }

    #[test]
    fn test_enter_selects_movie() {
        let mut list = ResultList::new();
        list.update_results(create_results(3), 2);

        let msg = list.handle_key(create_key_event(KeyCode::Enter));
        assert!(matches!(msg, Some(Message::SelectMovie(id)) if id == "tt0000002"));
    }

    #[test]
    fn test_enter_on_empty_list_does_nothing() {
        let mut list = ResultList::new();
        assert!(list.handle_key(create_key_event(KeyCode::Enter)).is_none());
    }

    #[test]
    fn test_plain_characters_are_ignored() {
        let mut list = ResultList::new();
        list.update_results(create_results(3), 0);
        assert!(list.handle_key(create_key_event(KeyCode::Char('j'))).is_none());
    }

    #[test]
    fn test_render_shows_title_and_year() {
        let mut list = ResultList::new();
        list.update_results(vec![summary("tt1877830", "The Batman", "2022")], 0);

        let backend = TestBackend::new(40, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| list.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let first_row: String = (0..buffer.area.width)
            .map(|x| buffer[(x, 0)].symbol())
            .collect();
        assert!(first_row.contains("The Batman"));
        assert!(first_row.contains("2022"));
    }

    #[test]
    fn test_render_empty_message() {
        let mut list = ResultList::new();

        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| list.render(f, f.area())).unwrap();

        let buffer = terminal.backend().buffer();
        let first_row: String = (0..buffer.area.width)
            .map(|x| buffer[(x, 0)].symbol())
            .collect();
        assert!(first_row.contains("Type to search movies"));
    }
}
