//! Task sink abstraction.
//!
//! The UI never stores tasks itself. Both the quick-add bar and the task form
//! hand their payloads to a [`TaskSink`], which owns the committed tasks.

use crate::model::{Task, TaskPayload};
use async_trait::async_trait;
use std::sync::Arc;

pub mod memory;

pub use memory::MemoryBackend;

/// Errors a sink can fail with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Backend error: {0}")]
    Other(String),
}

/// The external add/update operation.
///
/// `submit` must resolve with the committed task on success and fail with an
/// error otherwise. Payload shape depends on the caller; see [`TaskPayload`].
#[async_trait]
pub trait TaskSink: Send + Sync {
    /// Returns the sink type identifier (e.g., "memory").
    fn sink_type(&self) -> &str;

    /// Add or update a task.
    async fn submit(&self, payload: TaskPayload) -> Result<Task, BackendError>;

    /// All committed tasks, newest first.
    async fn list(&self) -> Result<Vec<Task>, BackendError>;
}

/// Shared handle passed to background operations.
pub type SharedSink = Arc<dyn TaskSink>;
