use serde::{Deserialize, Serialize};

/// Тип выбранного фильтра
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FilterType {
    /// Выбор одного или нескольких значений из списка
    #[default]
    #[serde(rename = "OPTION")]
    Option,
}

/// Chosen option ids of a single group.
///
/// `options_ids` keeps toggle order and never holds duplicates. A selection
/// with no options is never kept inside a [`SelectedFilters`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub id: String,
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    #[serde(rename = "optionsIds")]
    pub options_ids: Vec<String>,
}

impl FilterSelection {
    pub fn new(group_id: impl Into<String>, option_id: impl Into<String>) -> Self {
        Self {
            id: group_id.into(),
            filter_type: FilterType::Option,
            options_ids: vec![option_id.into()],
        }
    }

    pub fn contains(&self, option_id: &str) -> bool {
        self.options_ids.iter().any(|id| id == option_id)
    }
}

/// Ordered list of group selections, one entry per group with at least one
/// chosen option. Order follows the first toggle of each group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedFilters(Vec<FilterSelection>);

impl SelectedFilters {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Independent copy: every selection and every `options_ids` list is
    /// cloned, nothing is shared with `self`.
    pub fn deep_copy(&self) -> Self {
        Self(
            self.0
                .iter()
                .map(|f| FilterSelection {
                    id: f.id.clone(),
                    filter_type: f.filter_type,
                    options_ids: f.options_ids.to_vec(),
                })
                .collect(),
        )
    }

    /// Add `option_id` to the group, or remove it if already chosen.
    /// A group left without options is dropped from the list.
    pub fn toggle(&mut self, group_id: &str, option_id: &str) {
        let Some(index) = self.0.iter().position(|f| f.id == group_id) else {
            self.0.push(FilterSelection::new(group_id, option_id));
            return;
        };

        let target = &mut self.0[index];
        if target.contains(option_id) {
            target.options_ids.retain(|id| id != option_id);
            if target.options_ids.is_empty() {
                self.0.remove(index);
            }
        } else {
            target.options_ids.push(option_id.to_string());
        }
    }

    /// Drop every selection whose `options_ids` is empty.
    pub fn normalized(mut self) -> Self {
        self.0.retain(|f| !f.options_ids.is_empty());
        self
    }

    pub fn find(&self, group_id: &str) -> Option<&FilterSelection> {
        self.0.iter().find(|f| f.id == group_id)
    }

    pub fn is_checked(&self, group_id: &str, option_id: &str) -> bool {
        self.find(group_id)
            .map(|f| f.contains(option_id))
            .unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FilterSelection> {
        self.0.iter()
    }

    /// Number of chosen options across all groups.
    pub fn total_options(&self) -> usize {
        self.0.iter().map(|f| f.options_ids.len()).sum()
    }
}

impl From<Vec<FilterSelection>> for SelectedFilters {
    fn from(items: Vec<FilterSelection>) -> Self {
        Self(items)
    }
}

impl<'a> IntoIterator for &'a SelectedFilters {
    type Item = &'a FilterSelection;
    type IntoIter = std::slice::Iter<'a, FilterSelection>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
