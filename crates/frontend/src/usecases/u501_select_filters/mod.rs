//! u501: выбор фильтров через модальное окно с подтверждением применения

pub mod context;
pub mod gate;
pub mod session;
pub mod store;
pub mod ui;
pub mod view;

pub use context::{use_filters, FilterContext};
pub use view::FilterPage;
