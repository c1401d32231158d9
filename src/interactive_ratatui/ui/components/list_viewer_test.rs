#[cfg(test)]
mod tests {
    use super::super::list_item::{ListItem, truncate_message};
    use super::super::list_viewer::ListViewer;
    use ratatui::text::Span;

    #[derive(Clone)]
    struct MockListItem {
        id: String,
        title: String,
    }

    impl ListItem for MockListItem {
        fn id(&self) -> &str {
            &self.id
        }

        fn title(&self) -> &str {
            &self.title
        }

        fn detail_spans(&self) -> Vec<Span<'static>> {
            vec![Span::raw("1999")]
        }
    }

    fn create_mock_items(count: usize) -> Vec<MockListItem> {
        (0..count)
            .map(|i| MockListItem {
                id: format!("tt{i}"),
                title: format!("Movie #{}", i + 1),
            })
            .collect()
    }

    fn viewer_with(count: usize) -> ListViewer<MockListItem> {
        let mut viewer = ListViewer::new("Empty".to_string());
        viewer.set_items(create_mock_items(count));
        viewer
    }

    #[test]
    fn test_move_up_and_down_stop_at_edges() {
        let mut viewer = viewer_with(2);

        assert!(!viewer.move_up());
        assert!(viewer.move_down());
        assert!(!viewer.move_down());
        assert_eq!(viewer.selected_index(), 1);
    }

    #[test]
    fn test_page_down_clamps_to_last() {
        let mut viewer = viewer_with(15);

        assert!(viewer.page_down());
        assert_eq!(viewer.selected_index(), 10);
        assert!(viewer.page_down());
        assert_eq!(viewer.selected_index(), 14);
        assert!(!viewer.page_down());
    }

    #[test]
    fn test_movement_on_empty_list() {
        let mut viewer = viewer_with(0);

        assert!(!viewer.move_down());
        assert!(!viewer.page_down());
        assert!(!viewer.move_to_end());
        assert!(viewer.get_selected_item().is_none());
    }

    #[test]
    fn test_set_selected_index_ignores_out_of_range() {
        let mut viewer = viewer_with(3);

        viewer.set_selected_index(2);
        viewer.set_selected_index(7);
        assert_eq!(viewer.selected_index(), 2);
    }

    #[test]
    fn test_scroll_offset_follows_selection() {
        let mut viewer = viewer_with(20);

        viewer.move_to_end();
        viewer.adjust_scroll_offset(5);
        assert_eq!(viewer.scroll_offset, 15);

        viewer.move_to_start();
        viewer.adjust_scroll_offset(5);
        assert_eq!(viewer.scroll_offset, 0);
    }

    #[test]
    fn test_shrinking_items_clamps_selection_and_scroll() {
        let mut viewer = viewer_with(20);
        viewer.move_to_end();
        viewer.adjust_scroll_offset(5);

        viewer.set_items(create_mock_items(3));
        assert_eq!(viewer.selected_index(), 2);
        assert!(viewer.scroll_offset <= 2);
    }

    #[test]
    fn test_create_line_truncates_long_titles() {
        let item = MockListItem {
            id: "tt1".to_string(),
            title: "A very long movie title that does not fit".to_string(),
        };

        let line = item.create_line(20);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("..."));
        assert!(text.ends_with("1999"));
    }

    #[test]
    fn test_truncate_message() {
        assert_eq!(truncate_message("Heat", 10), "Heat");
        assert_eq!(truncate_message("Heat\nRonin", 20), "Heat Ronin");
        assert_eq!(truncate_message("Collateral", 7), "Coll...");
        assert_eq!(truncate_message("Collateral", 2), "Co");
    }
}
