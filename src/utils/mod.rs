//! Utility modules for studyflow.
//!
//! - [`datetime`] - Deadline parsing and human-readable formatting

pub mod datetime;
