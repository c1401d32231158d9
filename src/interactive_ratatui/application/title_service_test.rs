#[cfg(test)]
mod tests {
    use super::super::title_service::*;

    #[test]
    fn test_scope_starts_with_default_title() {
        let surface = RecordingTitle::default();
        let _scope = TitleScope::new(surface.clone());

        assert_eq!(surface.history(), vec!["Popcorn"]);
    }

    #[test]
    fn test_enter_and_leave() {
        let surface = RecordingTitle::default();
        let mut scope = TitleScope::new(surface.clone());

        scope.sync(Some(("tt1", "Heat")));
        assert_eq!(surface.current().as_deref(), Some("Movie | Heat"));

        scope.sync(None);
        assert_eq!(surface.current().as_deref(), Some("Popcorn"));

        // Leaving twice writes the default title once
        scope.leave();
        assert_eq!(surface.history(), vec!["Popcorn", "Movie | Heat", "Popcorn"]);
    }

    #[test]
    fn test_same_movie_does_not_rewrite() {
        let surface = RecordingTitle::default();
        let mut scope = TitleScope::new(surface.clone());

        scope.sync(Some(("tt1", "Heat")));
        scope.sync(Some(("tt1", "Heat")));

        assert_eq!(surface.history(), vec!["Popcorn", "Movie | Heat"]);
    }

    #[test]
    fn test_switching_movie_restores_default_in_between() {
        let surface = RecordingTitle::default();
        let mut scope = TitleScope::new(surface.clone());

        scope.sync(Some(("tt1", "Heat")));
        scope.sync(Some(("tt2", "Ronin")));

        assert_eq!(
            surface.history(),
            vec!["Popcorn", "Movie | Heat", "Popcorn", "Movie | Ronin"]
        );
    }

    #[test]
    fn test_drop_restores_default() {
        let surface = RecordingTitle::default();
        {
            let mut scope = TitleScope::new(surface.clone());
            scope.sync(Some(("tt1", "Heat")));
        }

        assert_eq!(surface.current().as_deref(), Some("Popcorn"));
    }

    #[test]
    fn test_leave_without_active_is_silent() {
        let surface = RecordingTitle::default();
        let mut scope = TitleScope::new(surface.clone());

        scope.leave();
        scope.sync(None);

        assert_eq!(surface.history(), vec!["Popcorn"]);
    }
}
