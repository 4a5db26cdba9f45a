pub mod page;
pub mod strings;

pub use page::{form_page, result_page, warning_page};
pub use strings::{UiStrings, ui_strings};
