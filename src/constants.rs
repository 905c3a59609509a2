//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Success Messages
pub const SUCCESS_TASK_CREATED: &str = "✅ Task created";
pub const SUCCESS_TASK_UPDATED: &str = "✅ Task updated";

// Error Messages
pub const ERROR_QUICK_ADD_FAILED: &str = "Quick add failed";
pub const ERROR_TASK_FORM_FAILED: &str = "Task form submission failed";
pub const ERROR_TASK_LIST_FAILED: &str = "❌ Failed to load tasks";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = " Logs - Esc, G or q to close ";
pub const DIALOG_TITLE_NEW_TASK: &str = " New Task ";
pub const DIALOG_TITLE_EDIT_TASK: &str = " Edit Task ";
pub const QUICK_ADD_PLACEHOLDER: &str = "Add a task and press Enter…";
pub const EMPTY_TASK_LIST: &str = "No tasks yet. Press 'a' to quick-add or 'n' for the full form.";

// Backend limits
/// Upper bound for the artificial submission latency, in milliseconds
pub const BACKEND_MAX_LATENCY_MS: u64 = 10_000;

// UI Layout Constants
/// Height of the navigation bar including its quick-add field
pub const NAV_BAR_HEIGHT: u16 = 3;
/// Width of the task form dialog as a percentage of the screen
pub const TASK_FORM_WIDTH_PERCENT: u16 = 70;
/// Height of the task form dialog in lines
pub const TASK_FORM_HEIGHT: u16 = 22;
