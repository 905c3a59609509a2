use async_trait::async_trait;
use std::sync::Arc;
use studyflow::backend::{BackendError, MemoryBackend, SharedSink, TaskSink};
use studyflow::model::{Task, TaskPayload};
use studyflow::submission::{SubmitError, SubmitOrigin};
use studyflow::ui::core::{Action, TaskManager};

/// Sink whose submissions panic, to exercise join failures
struct PanickingSink;

#[async_trait]
impl TaskSink for PanickingSink {
    fn sink_type(&self) -> &str {
        "panicking"
    }

    async fn submit(&self, _payload: TaskPayload) -> Result<Task, BackendError> {
        panic!("sink exploded");
    }

    async fn list(&self) -> Result<Vec<Task>, BackendError> {
        Err(BackendError::Other("listing unavailable".to_string()))
    }
}

fn quick(content: &str) -> TaskPayload {
    TaskPayload::Quick {
        content: content.to_string(),
    }
}

#[tokio::test]
async fn test_submission_reports_back() {
    let (mut manager, mut rx) = TaskManager::new();
    let sink: SharedSink = Arc::new(MemoryBackend::new());

    let origin = SubmitOrigin::TaskForm { session: 3 };
    manager.spawn_submission(sink.clone(), origin, quick("Buy milk"));
    assert_eq!(manager.task_count(), 1);

    match rx.recv().await {
        Some(Action::SubmissionFinished { origin: got, result }) => {
            assert_eq!(got, origin);
            assert_eq!(result.unwrap().content, "Buy milk");
        }
        other => panic!("unexpected action {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_submission_reports_backend_error() {
    let (mut manager, mut rx) = TaskManager::new();
    let backend = MemoryBackend::new();
    backend.set_fail_submissions(true);
    let sink: SharedSink = Arc::new(backend);

    manager.spawn_submission(sink, SubmitOrigin::QuickAdd, quick("Buy milk"));

    match rx.recv().await {
        Some(Action::SubmissionFinished { result, .. }) => {
            assert!(matches!(result, Err(SubmitError::Backend(BackendError::Network(_)))));
        }
        other => panic!("unexpected action {:?}", other),
    }
}

#[tokio::test]
async fn test_panicking_sink_still_finishes() {
    let (mut manager, mut rx) = TaskManager::new();
    let sink: SharedSink = Arc::new(PanickingSink);

    manager.spawn_submission(sink, SubmitOrigin::QuickAdd, quick("Buy milk"));

    match rx.recv().await {
        Some(Action::SubmissionFinished { result, .. }) => {
            assert!(matches!(result, Err(SubmitError::Join(_))));
        }
        other => panic!("unexpected action {:?}", other),
    }
}

#[tokio::test]
async fn test_task_load_actions() {
    let (mut manager, mut rx) = TaskManager::new();

    let backend = MemoryBackend::new();
    backend.submit(quick("One")).await.unwrap();
    manager.spawn_task_load(Arc::new(backend), 7);
    match rx.recv().await {
        Some(Action::TasksFetched { generation, tasks }) => {
            assert_eq!(generation, 7);
            assert_eq!(tasks.len(), 1);
        }
        other => panic!("unexpected action {:?}", other),
    }

    manager.spawn_task_load(Arc::new(PanickingSink), 8);
    match rx.recv().await {
        Some(Action::TasksLoadFailed(message)) => assert!(message.contains("listing unavailable")),
        other => panic!("unexpected action {:?}", other),
    }
}

#[tokio::test]
async fn test_cleanup_and_cancel() {
    let (mut manager, mut rx) = TaskManager::new();
    let sink: SharedSink = Arc::new(MemoryBackend::new());

    manager.spawn_task_load(sink.clone(), 1);
    let _ = rx.recv().await;
    // The sender fires just before the task ends
    tokio::task::yield_now().await;
    while manager.task_count() > 0 && manager.cleanup_finished_tasks().is_empty() {
        tokio::task::yield_now().await;
    }
    assert_eq!(manager.task_count(), 0);

    let slow: SharedSink = Arc::new(MemoryBackend::new().with_latency(std::time::Duration::from_secs(30)));
    manager.spawn_submission(slow, SubmitOrigin::QuickAdd, quick("Never"));
    assert_eq!(manager.task_count(), 1);
    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);
}
