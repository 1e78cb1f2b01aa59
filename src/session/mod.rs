pub mod edit_buffer;
pub mod form;
pub mod selector;

pub use edit_buffer::{DetailSession, EditState, ListHandoff};
pub use form::CreateListForm;
pub use selector::DeleteSelector;
