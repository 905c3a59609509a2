//! Reusable UI components

pub mod input;
pub mod pages;
pub mod status_bar;

// Component architecture
pub mod dialog_component;
pub mod dialogs;
pub mod nav_bar;
pub mod quick_add;
pub mod task_form;
pub mod task_list;

// Component exports
pub use dialog_component::DialogComponent;
pub use nav_bar::NavBarComponent;
pub use quick_add::QuickAddComponent;
pub use status_bar::{StatusBar, StatusInfo};
pub use task_form::{FormField, FormState, TaskFormComponent};
pub use task_list::TaskListComponent;
