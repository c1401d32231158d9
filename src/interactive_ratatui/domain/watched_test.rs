#[cfg(test)]
mod tests {
    use super::super::watched::*;
    use crate::config::AverageMode;
    use crate::schemas::{MovieDetail, UserRating, WatchedEntry};

    fn create_test_entry(id: &str, rating: u8) -> WatchedEntry {
        WatchedEntry::new(
            MovieDetail {
                id: id.to_string(),
                title: format!("Movie {id}"),
                imdb_rating: "7.0".to_string(),
                runtime: "100 min".to_string(),
                ..Default::default()
            },
            UserRating::new(rating).unwrap(),
        )
    }

    fn ids(list: &WatchedList) -> Vec<String> {
        list.iter().map(|e| e.id().to_string()).collect()
    }

    #[test]
    fn test_add_preserves_order() {
        let mut list = WatchedList::new();
        assert!(list.add(create_test_entry("tt3", 5)));
        assert!(list.add(create_test_entry("tt1", 7)));
        assert!(list.add(create_test_entry("tt2", 9)));

        assert_eq!(ids(&list), vec!["tt3", "tt1", "tt2"]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.get_index(1).unwrap().id(), "tt1");
    }

    #[test]
    fn test_duplicate_add_rejected() {
        let mut list = WatchedList::new();
        assert!(list.add(create_test_entry("tt1", 7)));
        assert!(!list.add(create_test_entry("tt1", 2)));

        assert_eq!(list.len(), 1);
        assert_eq!(list.rating_of("tt1").map(UserRating::get), Some(7));
    }

    #[test]
    fn test_remove_keeps_remaining_order() {
        let mut list = WatchedList::new();
        for id in ["tt1", "tt2", "tt3", "tt4"] {
            list.add(create_test_entry(id, 5));
        }

        let removed = list.remove("tt2").unwrap();
        assert_eq!(removed.id(), "tt2");
        assert_eq!(ids(&list), vec!["tt1", "tt3", "tt4"]);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut list = WatchedList::new();
        list.add(create_test_entry("tt1", 5));
        list.add(create_test_entry("tt2", 6));
        let before = list.clone();

        assert!(list.remove("tt999").is_none());
        assert_eq!(list, before);
        assert_eq!(list.to_vec(), before.to_vec());

        let mut empty = WatchedList::new();
        assert!(empty.remove("tt1").is_none());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_contains_and_summary() {
        let mut list = WatchedList::new();
        list.add(create_test_entry("tt1", 8));

        assert!(list.contains("tt1"));
        assert!(!list.contains("tt2"));

        let summary = list.summary(AverageMode::TreatAsZero);
        assert_eq!(summary.count, 1);
        assert!((summary.user_rating - 8.0).abs() < 1e-9);
    }
}
