use contracts::domain::a001_filter::SelectedFilters;

/// Which branch a [`AppliedFilterStore::commit`] call took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// New selection became both active and last applied.
    Applied,
    /// Candidate became active, last applied left as is.
    Restored,
    /// Empty "use old" commit, store untouched.
    Skipped,
}

/// Active filters plus the snapshot of the last confirmed commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedFilterStore {
    selected_filters: SelectedFilters,
    last_applied_filters: SelectedFilters,
}

impl AppliedFilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_filters(&self) -> &SelectedFilters {
        &self.selected_filters
    }

    pub fn last_applied_filters(&self) -> &SelectedFilters {
        &self.last_applied_filters
    }

    pub fn commit(&mut self, candidate: SelectedFilters, is_new: bool) -> CommitOutcome {
        let normalized = candidate.normalized();

        if !is_new && normalized.is_empty() {
            return CommitOutcome::Skipped;
        }

        if is_new {
            self.last_applied_filters = normalized.deep_copy();
            self.selected_filters = normalized;
            CommitOutcome::Applied
        } else {
            self.selected_filters = normalized;
            CommitOutcome::Restored
        }
    }

    pub fn reset(&mut self) {
        self.selected_filters.clear();
        self.last_applied_filters.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_filter::{FilterSelection, FilterType};

    fn selection(group: &str, options: &[&str]) -> FilterSelection {
        FilterSelection {
            id: group.to_string(),
            filter_type: FilterType::Option,
            options_ids: options.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn red() -> SelectedFilters {
        SelectedFilters::from(vec![selection("color", &["red"])])
    }

    #[test]
    fn test_starts_empty() {
        let store = AppliedFilterStore::new();
        assert!(store.selected_filters().is_empty());
        assert!(store.last_applied_filters().is_empty());
    }

    #[test]
    fn test_commit_new_strips_empty_groups() {
        let mut store = AppliedFilterStore::new();
        let candidate = SelectedFilters::from(vec![
            selection("size", &[]),
            selection("color", &["red"]),
        ]);
        assert_eq!(store.commit(candidate, true), CommitOutcome::Applied);
        assert_eq!(store.selected_filters(), &red());
        assert_eq!(store.last_applied_filters(), &red());
    }

    #[test]
    fn test_empty_old_commit_is_noop() {
        let mut store = AppliedFilterStore::new();
        store.commit(red(), true);
        assert_eq!(
            store.commit(SelectedFilters::new(), false),
            CommitOutcome::Skipped
        );
        assert_eq!(store.selected_filters(), &red());
        assert_eq!(store.last_applied_filters(), &red());

        // only-empty groups normalize to empty and are skipped too
        let blank = SelectedFilters::from(vec![selection("color", &[])]);
        assert_eq!(store.commit(blank, false), CommitOutcome::Skipped);
        assert_eq!(store.selected_filters(), &red());
    }

    #[test]
    fn test_old_commit_keeps_last_applied() {
        let mut store = AppliedFilterStore::new();
        store.commit(red(), true);
        let other = SelectedFilters::from(vec![selection("size", &["xl"])]);
        assert_eq!(store.commit(other.clone(), false), CommitOutcome::Restored);
        assert_eq!(store.selected_filters(), &other);
        assert_eq!(store.last_applied_filters(), &red());
    }

    #[test]
    fn test_empty_new_commit_clears_both() {
        let mut store = AppliedFilterStore::new();
        store.commit(red(), true);
        assert_eq!(
            store.commit(SelectedFilters::new(), true),
            CommitOutcome::Applied
        );
        assert!(store.selected_filters().is_empty());
        assert!(store.last_applied_filters().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut store = AppliedFilterStore::new();
        store.commit(red(), true);
        store.reset();
        assert_eq!(store, AppliedFilterStore::new());
    }
}
