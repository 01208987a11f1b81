use chrono::{DateTime, Duration, Utc};
use contracts::domain::a001_filter::FilterCatalog;

/// Loaded catalog is considered fresh for this long.
pub const CATALOG_STALE_AFTER_SECS: i64 = 5 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogState {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed(String),
}

/// Fetch-once cache for the filter catalog.
///
/// At most one fetch is in flight. A ready catalog is kept while a refetch
/// runs, so the modal and the summary never lose names once they have them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogCache {
    state: CatalogState,
    catalog: Option<FilterCatalog>,
    fetched_at: Option<DateTime<Utc>>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last successfully loaded catalog, if any.
    pub fn catalog(&self) -> Option<&FilterCatalog> {
        self.catalog.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, CatalogState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            CatalogState::Failed(e) => Some(e.as_str()),
            _ => None,
        }
    }

    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        match self.fetched_at {
            Some(at) => now - at >= Duration::seconds(CATALOG_STALE_AFTER_SECS),
            None => true,
        }
    }

    pub fn needs_fetch(&self, now: DateTime<Utc>) -> bool {
        match self.state {
            CatalogState::Loading => false,
            CatalogState::Idle | CatalogState::Failed(_) => true,
            CatalogState::Ready => self.is_stale(now),
        }
    }

    /// Marks a fetch as started. Returns `false` when no fetch is needed
    /// (one is already running or the data is still fresh).
    pub fn begin_fetch(&mut self, now: DateTime<Utc>) -> bool {
        if !self.needs_fetch(now) {
            return false;
        }
        self.state = CatalogState::Loading;
        true
    }

    pub fn finish_fetch(&mut self, result: Result<FilterCatalog, String>, now: DateTime<Utc>) {
        match result {
            Ok(catalog) => {
                self.catalog = Some(catalog);
                self.fetched_at = Some(now);
                self.state = CatalogState::Ready;
            }
            Err(e) => {
                self.state = CatalogState::Failed(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_filter::{FilterGroup, FilterOption};

    fn catalog() -> FilterCatalog {
        FilterCatalog::new(vec![FilterGroup {
            id: "color".into(),
            name: "Color".into(),
            options: vec![FilterOption {
                id: "red".into(),
                name: "Red".into(),
            }],
        }])
    }

    fn t0() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-03-15T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_single_fetch_in_flight() {
        let mut cache = CatalogCache::new();
        assert!(cache.begin_fetch(t0()));
        assert!(cache.is_loading());
        assert!(!cache.begin_fetch(t0()));
    }

    #[test]
    fn test_fresh_until_stale_window() {
        let mut cache = CatalogCache::new();
        cache.begin_fetch(t0());
        cache.finish_fetch(Ok(catalog()), t0());
        assert_eq!(cache.catalog(), Some(&catalog()));

        assert!(!cache.needs_fetch(t0() + Duration::seconds(299)));
        assert!(cache.needs_fetch(t0() + Duration::seconds(300)));
    }

    #[test]
    fn test_refetch_keeps_previous_catalog() {
        let mut cache = CatalogCache::new();
        cache.begin_fetch(t0());
        cache.finish_fetch(Ok(catalog()), t0());

        let later = t0() + Duration::minutes(10);
        assert!(cache.begin_fetch(later));
        assert_eq!(cache.catalog(), Some(&catalog()));
        cache.finish_fetch(Err("Failed to fetch filter data: 500".into()), later);
        assert_eq!(cache.error(), Some("Failed to fetch filter data: 500"));
        assert_eq!(cache.catalog(), Some(&catalog()));
    }

    #[test]
    fn test_failure_allows_retry() {
        let mut cache = CatalogCache::new();
        cache.begin_fetch(t0());
        cache.finish_fetch(Err("offline".into()), t0());
        assert!(cache.catalog().is_none());
        assert!(cache.needs_fetch(t0()));
        assert!(cache.begin_fetch(t0()));
    }
}
