use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ============================================================================
// Catalog items
// ============================================================================

/// Значение фильтра внутри группы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub id: String,
    pub name: String,
}

/// Группа фильтров (например, "Цвет") со списком значений
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub options: Vec<FilterOption>,
}

impl FilterGroup {
    pub fn find_option(&self, option_id: &str) -> Option<&FilterOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Read-only catalog of filter groups as served by `GET /api/filters`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCatalog {
    #[serde(rename = "filterItems")]
    pub filter_items: Vec<FilterGroup>,
}

impl FilterCatalog {
    pub fn new(filter_items: Vec<FilterGroup>) -> Self {
        Self { filter_items }
    }

    pub fn find_group(&self, group_id: &str) -> Option<&FilterGroup> {
        self.filter_items.iter().find(|g| g.id == group_id)
    }

    /// Display name of a group, or the raw id when the group is unknown
    /// or has no name.
    pub fn resolve_group_name<'a>(&'a self, group_id: &'a str) -> &'a str {
        self.find_group(group_id)
            .map(|g| g.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(group_id)
    }

    /// Display name of an option, or the raw option id when either the group
    /// or the option is unknown, or the option has no name.
    pub fn resolve_option_name<'a>(&'a self, group_id: &str, option_id: &'a str) -> &'a str {
        self.find_group(group_id)
            .and_then(|g| g.find_option(option_id))
            .map(|o| o.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(option_id)
    }

    /// Structural checks applied once when the catalog enters the system.
    pub fn validate(&self) -> anyhow::Result<()> {
        let mut group_ids = HashSet::new();
        for group in &self.filter_items {
            if group.id.trim().is_empty() {
                anyhow::bail!("filter group '{}' has an empty id", group.name);
            }
            if !group_ids.insert(group.id.as_str()) {
                anyhow::bail!("duplicate filter group id '{}'", group.id);
            }

            let mut option_ids = HashSet::new();
            for option in &group.options {
                if option.id.trim().is_empty() {
                    anyhow::bail!(
                        "option '{}' in group '{}' has an empty id",
                        option.name,
                        group.id
                    );
                }
                if !option_ids.insert(option.id.as_str()) {
                    anyhow::bail!(
                        "duplicate option id '{}' in group '{}'",
                        option.id,
                        group.id
                    );
                }
            }
        }
        Ok(())
    }

    /// Decode the wire JSON and validate it in one step.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let catalog: FilterCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn option_count(&self) -> usize {
        self.filter_items.iter().map(|g| g.options.len()).sum()
    }
}

/// Group name lookup that also works before the catalog has loaded.
pub fn group_name(catalog: Option<&FilterCatalog>, group_id: &str) -> String {
    match catalog {
        Some(c) => c.resolve_group_name(group_id).to_string(),
        None => group_id.to_string(),
    }
}

/// Option name lookup that also works before the catalog has loaded.
pub fn option_name(catalog: Option<&FilterCatalog>, group_id: &str, option_id: &str) -> String {
    match catalog {
        Some(c) => c.resolve_option_name(group_id, option_id).to_string(),
        None => option_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_JSON: &str = r#"{
        "filterItems": [
            {
                "id": "color",
                "name": "Цвет",
                "options": [
                    { "id": "red", "name": "Красный" },
                    { "id": "blue", "name": "Синий" }
                ]
            },
            {
                "id": "size",
                "name": "Размер",
                "options": [{ "id": "xl", "name": "XL" }]
            }
        ]
    }"#;

    fn catalog() -> FilterCatalog {
        FilterCatalog::from_json(CATALOG_JSON).unwrap()
    }

    #[test]
    fn test_decode_wire_format() {
        let c = catalog();
        assert_eq!(c.filter_items.len(), 2);
        assert_eq!(c.filter_items[0].options[1].id, "blue");
        assert_eq!(c.option_count(), 3);
    }

    #[test]
    fn test_resolve_known_names() {
        let c = catalog();
        assert_eq!(c.resolve_group_name("color"), "Цвет");
        assert_eq!(c.resolve_option_name("color", "red"), "Красный");
        assert_eq!(c.resolve_option_name("size", "xl"), "XL");
    }

    #[test]
    fn test_resolve_falls_back_to_ids() {
        let c = catalog();
        assert_eq!(c.resolve_group_name("material"), "material");
        assert_eq!(c.resolve_option_name("color", "green"), "green");
        assert_eq!(c.resolve_option_name("material", "red"), "red");
        // option ids are scoped to their group
        assert_eq!(c.resolve_option_name("size", "red"), "red");
    }

    #[test]
    fn test_empty_names_fall_back_to_ids() {
        let json = r#"{"filterItems":[
            {"id":"color","name":"","options":[{"id":"red","name":""},{"id":"blue","name":"Blue"}]}
        ]}"#;
        let c = FilterCatalog::from_json(json).unwrap();
        assert_eq!(c.resolve_group_name("color"), "color");
        assert_eq!(c.resolve_option_name("color", "red"), "red");
        assert_eq!(c.resolve_option_name("color", "blue"), "Blue");
        assert_eq!(group_name(Some(&c), "color"), "color");
        assert_eq!(option_name(Some(&c), "color", "red"), "red");
    }

    #[test]
    fn test_lookup_without_catalog() {
        assert_eq!(group_name(None, "color"), "color");
        assert_eq!(option_name(None, "color", "red"), "red");
        let c = catalog();
        assert_eq!(group_name(Some(&c), "color"), "Цвет");
        assert_eq!(option_name(Some(&c), "color", "blue"), "Синий");
    }

    #[test]
    fn test_validate_rejects_duplicate_group() {
        let json = r#"{"filterItems":[
            {"id":"color","name":"A","options":[]},
            {"id":"color","name":"B","options":[]}
        ]}"#;
        let err = FilterCatalog::from_json(json).unwrap_err();
        assert!(err.to_string().contains("duplicate filter group id"));
    }

    #[test]
    fn test_validate_rejects_duplicate_option_and_empty_id() {
        let dup = FilterCatalog::new(vec![FilterGroup {
            id: "color".into(),
            name: "Color".into(),
            options: vec![
                FilterOption { id: "red".into(), name: "Red".into() },
                FilterOption { id: "red".into(), name: "Red again".into() },
            ],
        }]);
        assert!(dup.validate().is_err());

        let empty = FilterCatalog::new(vec![FilterGroup {
            id: "  ".into(),
            name: "Blank".into(),
            options: vec![],
        }]);
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_same_option_id_in_different_groups_is_valid() {
        let json = r#"{"filterItems":[
            {"id":"a","name":"A","options":[{"id":"x","name":"X"}]},
            {"id":"b","name":"B","options":[{"id":"x","name":"X"}]}
        ]}"#;
        assert!(FilterCatalog::from_json(json).is_ok());
    }
}
