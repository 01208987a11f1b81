pub mod api_utils;
pub mod i18n;
pub mod icons;
pub mod modal;
