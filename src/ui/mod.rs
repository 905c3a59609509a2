//! UI module for studyflow
//!
//! This module handles all user interface components, rendering, and user interactions.

pub mod app;
pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;

pub use app::run_app;
pub use app_component::AppComponent;
pub use layout::LayoutManager;
