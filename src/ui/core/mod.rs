//! Core UI functionality for studyflow.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions, routes and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling
//! - [`task_manager`] - Background sink operations
//!
//! Components turn key events into [`Action`]s; the app component applies
//! them, spawning sink calls through the [`TaskManager`] whose results come
//! back as actions on the next tick.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType, FormInit, Route};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
