use anyhow::Context;
use contracts::domain::a001_filter::FilterCatalog;
use once_cell::sync::OnceCell;
use std::path::Path;

use super::config::{get_catalog_path, Config};

static CATALOG: OnceCell<FilterCatalog> = OnceCell::new();

/// Read and validate the catalog file.
pub fn load_catalog_file(path: &Path) -> anyhow::Result<FilterCatalog> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read filter catalog {}", path.display()))?;
    FilterCatalog::from_json(&contents)
        .with_context(|| format!("invalid filter catalog {}", path.display()))
}

/// Load the catalog once at start-up. Later calls keep the first catalog.
pub fn initialize_catalog(config: &Config) -> anyhow::Result<()> {
    let path = get_catalog_path(config);
    let catalog = load_catalog_file(&path)?;
    tracing::info!(
        "Filter catalog loaded from {}: {} group(s), {} option(s)",
        path.display(),
        catalog.filter_items.len(),
        catalog.option_count()
    );
    if CATALOG.set(catalog).is_err() {
        tracing::warn!("Filter catalog already initialized, keeping the first one");
    }
    Ok(())
}

pub fn get_catalog() -> Option<&'static FilterCatalog> {
    CATALOG.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/filterData.json");
        let catalog = load_catalog_file(&path).unwrap();
        assert!(!catalog.filter_items.is_empty());
        assert!(catalog.filter_items.iter().all(|g| !g.options.is_empty()));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_catalog_file(Path::new("no/such/filters.json")).unwrap_err();
        assert!(err.to_string().contains("no/such/filters.json"));
    }
}
