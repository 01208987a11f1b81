//! Строки интерфейса по локалям.
//!
//! Components only pass a [`TextKey`]; the table below owns the wording.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "ru" => Some(Locale::Ru),
            _ => None,
        }
    }

    pub fn all() -> Vec<Locale> {
        vec![Locale::En, Locale::Ru]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    Title,
    OpenFilters,
    ModalTitle,
    Apply,
    ClearAllParameters,
    ConfirmTitle,
    UseOldFilter,
    ApplyNewFilter,
    SelectedFilters,
    NoFiltersSelected,
    Error,
}

impl TextKey {
    /// Key name as used by the translation files.
    pub fn id(&self) -> &'static str {
        match self {
            TextKey::Title => "title",
            TextKey::OpenFilters => "openFilters",
            TextKey::ModalTitle => "modalTitle",
            TextKey::Apply => "apply",
            TextKey::ClearAllParameters => "clearAllParameters",
            TextKey::ConfirmTitle => "confirmTitle",
            TextKey::UseOldFilter => "useOldFilter",
            TextKey::ApplyNewFilter => "applyNewFilter",
            TextKey::SelectedFilters => "selectedFilters",
            TextKey::NoFiltersSelected => "noFiltersSelected",
            TextKey::Error => "error",
        }
    }

    pub fn all() -> Vec<TextKey> {
        vec![
            TextKey::Title,
            TextKey::OpenFilters,
            TextKey::ModalTitle,
            TextKey::Apply,
            TextKey::ClearAllParameters,
            TextKey::ConfirmTitle,
            TextKey::UseOldFilter,
            TextKey::ApplyNewFilter,
            TextKey::SelectedFilters,
            TextKey::NoFiltersSelected,
            TextKey::Error,
        ]
    }
}

pub fn text(locale: Locale, key: TextKey) -> &'static str {
    match locale {
        Locale::En => match key {
            TextKey::Title => "Filters",
            TextKey::OpenFilters => "Open filters",
            TextKey::ModalTitle => "Filter",
            TextKey::Apply => "Apply",
            TextKey::ClearAllParameters => "Clear all parameters",
            TextKey::ConfirmTitle => "Do you want to apply new filter",
            TextKey::UseOldFilter => "Use old filter",
            TextKey::ApplyNewFilter => "Apply new filter",
            TextKey::SelectedFilters => "Selected filters",
            TextKey::NoFiltersSelected => "No filters selected",
            TextKey::Error => "Error",
        },
        Locale::Ru => match key {
            TextKey::Title => "Фильтры",
            TextKey::OpenFilters => "Открыть фильтры",
            TextKey::ModalTitle => "Фильтр",
            TextKey::Apply => "Применить",
            TextKey::ClearAllParameters => "Сбросить все параметры",
            TextKey::ConfirmTitle => "Применить новый фильтр?",
            TextKey::UseOldFilter => "Оставить старый фильтр",
            TextKey::ApplyNewFilter => "Применить новый фильтр",
            TextKey::SelectedFilters => "Выбранные фильтры",
            TextKey::NoFiltersSelected => "Фильтры не выбраны",
            TextKey::Error => "Ошибка",
        },
    }
}
