//! In-memory sink used by the binary and by tests.
//!
//! Tasks live only for the lifetime of the process.

use super::{BackendError, TaskSink};
use crate::model::{Task, TaskPayload};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Sink keeping tasks in a shared vector.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    tasks: Arc<RwLock<Vec<Task>>>,
    latency: Duration,
    fail_submissions: Arc<AtomicBool>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every submission by `latency`, so the busy state is visible.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Make every submission fail until switched back.
    pub fn set_fail_submissions(&self, fail: bool) {
        self.fail_submissions.store(fail, Ordering::SeqCst);
    }

    pub fn fails_submissions(&self) -> bool {
        self.fail_submissions.load(Ordering::SeqCst)
    }

    /// Number of committed tasks
    pub async fn len(&self) -> usize {
        self.tasks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }
}

#[async_trait]
impl TaskSink for MemoryBackend {
    fn sink_type(&self) -> &str {
        "memory"
    }

    async fn submit(&self, payload: TaskPayload) -> Result<Task, BackendError> {
        log::debug!("MemoryBackend: payload {}", serde_json::to_string(&payload).unwrap_or_default());
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if self.fails_submissions() {
            return Err(BackendError::Network(format!("submission rejected: {}", payload.describe())));
        }

        let mut tasks = self.tasks.write().await;
        match payload {
            TaskPayload::Quick { content } => {
                if content.trim().is_empty() {
                    return Err(BackendError::InvalidData("task content is empty".to_string()));
                }
                let task = Task::from_content(Uuid::new_v4(), &content);
                tasks.push(task.clone());
                Ok(task)
            }
            TaskPayload::Create { task } => {
                if task.content.trim().is_empty() {
                    return Err(BackendError::InvalidData("task content is empty".to_string()));
                }
                let task = Task::from_submission(Uuid::new_v4(), task);
                tasks.push(task.clone());
                Ok(task)
            }
            TaskPayload::Update { id, task } => {
                let existing = tasks
                    .iter_mut()
                    .find(|t| t.id == id)
                    .ok_or_else(|| BackendError::NotFound(format!("task {}", id)))?;
                let created_at = existing.created_at;
                *existing = Task {
                    created_at,
                    ..Task::from_submission(id, task)
                };
                Ok(existing.clone())
            }
        }
    }

    async fn list(&self) -> Result<Vec<Task>, BackendError> {
        let tasks = self.tasks.read().await;
        Ok(tasks.iter().rev().cloned().collect())
    }
}
