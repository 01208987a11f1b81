use contracts::domain::a001_filter::SelectedFilters;

use super::store::AppliedFilterStore;

/// Working copy of the filters while the modal is open.
///
/// The copy is taken with [`SelectedFilters::deep_copy`], so toggles never
/// reach the store until the gate commits them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterEditSession {
    temp_filters: SelectedFilters,
    is_open: bool,
}

impl FilterEditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, last_applied: &SelectedFilters) {
        self.temp_filters = last_applied.deep_copy();
        self.is_open = true;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn temp_filters(&self) -> &SelectedFilters {
        &self.temp_filters
    }

    pub fn toggle(&mut self, group_id: &str, option_id: &str) {
        if !self.is_open {
            log::debug!("toggle {}/{} ignored: session closed", group_id, option_id);
            return;
        }
        self.temp_filters.toggle(group_id, option_id);
    }

    /// Clears the working copy and wipes the store as well.
    /// Does not go through confirmation and keeps the session open.
    pub fn clear_all(&mut self, store: &mut AppliedFilterStore) {
        self.temp_filters.clear();
        store.reset();
    }

    pub fn close(&mut self) {
        self.temp_filters.clear();
        self.is_open = false;
    }

    /// Close the session handing its working copy to the caller.
    pub fn take(&mut self) -> SelectedFilters {
        self.is_open = false;
        std::mem::take(&mut self.temp_filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_filter::FilterSelection;

    fn applied_red() -> AppliedFilterStore {
        let mut store = AppliedFilterStore::new();
        store.commit(
            SelectedFilters::from(vec![FilterSelection::new("color", "red")]),
            true,
        );
        store
    }

    #[test]
    fn test_open_seeds_from_last_applied() {
        let store = applied_red();
        let mut session = FilterEditSession::new();
        session.open(store.last_applied_filters());
        assert!(session.is_open());
        assert_eq!(session.temp_filters(), store.last_applied_filters());
    }

    #[test]
    fn test_toggles_do_not_leak_into_store() {
        let store = applied_red();
        let mut session = FilterEditSession::new();
        session.open(store.last_applied_filters());

        session.toggle("color", "blue");
        session.toggle("color", "red");
        assert_eq!(
            session.temp_filters().find("color").unwrap().options_ids,
            vec!["blue"]
        );
        assert_eq!(
            store.last_applied_filters().find("color").unwrap().options_ids,
            vec!["red"]
        );
        assert_eq!(
            store.selected_filters().find("color").unwrap().options_ids,
            vec!["red"]
        );
    }

    #[test]
    fn test_toggle_ignored_when_closed() {
        let mut session = FilterEditSession::new();
        session.toggle("color", "red");
        assert!(session.temp_filters().is_empty());
    }

    #[test]
    fn test_close_discards_without_store_effect() {
        let store = applied_red();
        let before = store.clone();
        let mut session = FilterEditSession::new();
        session.open(store.last_applied_filters());
        session.toggle("size", "xl");
        session.close();
        assert!(!session.is_open());
        assert!(session.temp_filters().is_empty());
        assert_eq!(store, before);
    }

    #[test]
    fn test_clear_all_resets_store() {
        let mut store = applied_red();
        let mut session = FilterEditSession::new();
        session.open(store.last_applied_filters());
        session.clear_all(&mut store);
        assert!(session.is_open());
        assert!(session.temp_filters().is_empty());
        assert!(store.selected_filters().is_empty());
        assert!(store.last_applied_filters().is_empty());
    }

    #[test]
    fn test_take_closes_and_returns_copy() {
        let store = applied_red();
        let mut session = FilterEditSession::new();
        session.open(store.last_applied_filters());
        session.toggle("color", "blue");
        let taken = session.take();
        assert!(!session.is_open());
        assert!(session.temp_filters().is_empty());
        assert_eq!(taken.find("color").unwrap().options_ids, vec!["red", "blue"]);
    }
}
