//! a001_filter: каталог фильтров и выбранные пользователем значения

pub mod aggregate;
pub mod selection;

pub use aggregate::{group_name, option_name, FilterCatalog, FilterGroup, FilterOption};
pub use selection::{FilterSelection, FilterType, SelectedFilters};
