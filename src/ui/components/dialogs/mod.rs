//! Dialog rendering helpers

pub mod common;
pub mod system_dialogs;
pub mod task_form_dialog;
