//! studyflow - a terminal task board for students
//!
//! Tasks are entered through an inline quick-add field or a modal form with
//! priority, category, estimated time, deadline and tags. Both surfaces hand
//! their result to a [`backend::TaskSink`] and report failures through a
//! caller-supplied handler.
//!
//! # Modules
//!
//! * [`backend`] - Task sink trait and the in-memory implementation
//! * [`config`] - Application configuration management
//! * [`model`] - Tasks, drafts and submission payloads
//! * [`submission`] - Submission results and error handlers
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Date/time helpers

/// Task sink abstraction and backends
pub mod backend;

/// Command line arguments
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup and the in-memory log buffer
pub mod logger;

/// Task, draft and payload types
pub mod model;

/// Submission errors and error handlers
pub mod submission;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;
