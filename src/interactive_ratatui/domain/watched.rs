use crate::config::AverageMode;
use crate::interactive_ratatui::domain::summary::WatchedSummary;
use crate::schemas::{UserRating, WatchedEntry};
use indexmap::IndexMap;

/// Movies the user has rated this session, keyed by movie id.
///
/// Iteration order is the order entries were added; an id can appear at
/// most once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WatchedList {
    entries: IndexMap<String, WatchedEntry>,
}

impl WatchedList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `entry`. Returns `false` and leaves the list untouched when
    /// the id is already present.
    pub fn add(&mut self, entry: WatchedEntry) -> bool {
        if self.entries.contains_key(entry.id()) {
            return false;
        }
        self.entries.insert(entry.id().to_string(), entry);
        true
    }

    /// Removes the entry with `id`, preserving the order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<WatchedEntry> {
        self.entries.shift_remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn rating_of(&self, id: &str) -> Option<UserRating> {
        self.entries.get(id).map(|entry| entry.user_rating)
    }

    pub fn get_index(&self, index: usize) -> Option<&WatchedEntry> {
        self.entries.get_index(index).map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WatchedEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self, mode: AverageMode) -> WatchedSummary {
        WatchedSummary::compute(self.iter(), mode)
    }

    pub fn to_vec(&self) -> Vec<WatchedEntry> {
        self.entries.values().cloned().collect()
    }
}
