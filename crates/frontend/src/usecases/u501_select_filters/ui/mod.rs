pub mod confirm_modal;
pub mod filter_list;
pub mod filter_modal;

pub use confirm_modal::ConfirmModal;
pub use filter_list::FilterList;
pub use filter_modal::FilterModal;
