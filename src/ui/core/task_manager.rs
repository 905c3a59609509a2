use super::actions::Action;
use crate::backend::SharedSink;
use crate::model::TaskPayload;
use crate::submission::{SubmitError, SubmitOrigin};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<()>,
    pub description: String,
}

/// Runs sink operations off the event loop and reports back through actions.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn register(&mut self, handle: JoinHandle<()>, description: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        self.tasks.insert(
            task_id,
            BackgroundTask {
                id: task_id,
                handle,
                description,
            },
        );
        task_id
    }

    /// Spawn a submission to the sink.
    ///
    /// Exactly one `SubmissionFinished` action is sent per call, even when the
    /// sink call panics.
    pub fn spawn_submission(&mut self, sink: SharedSink, origin: SubmitOrigin, payload: TaskPayload) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = payload.describe();

        let handle = tokio::spawn(async move {
            let operation = tokio::spawn(async move { sink.submit(payload).await });

            let result = match operation.await {
                Ok(Ok(task)) => Ok(task),
                Ok(Err(e)) => Err(SubmitError::Backend(e)),
                Err(join_err) => Err(SubmitError::Join(join_err.to_string())),
            };
            let _ = action_sender.send(Action::SubmissionFinished { origin, result });
        });

        self.register(handle, description)
    }

    /// Spawn a background load of all committed tasks.
    ///
    /// Loads can finish out of order; the result carries `generation` so the
    /// receiver can drop an older listing.
    pub fn spawn_task_load(&mut self, sink: SharedSink, generation: u64) -> TaskId {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            let action = match sink.list().await {
                Ok(tasks) => Action::TasksFetched { generation, tasks },
                Err(e) => Action::TasksLoadFailed(e.to_string()),
            };
            let _ = action_sender.send(action);
        });

        self.register(handle, format!("Load tasks #{}", generation))
    }

    /// Remove finished tasks, returning their descriptions
    pub fn cleanup_finished_tasks(&mut self) -> Vec<(TaskId, String)> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        finished
            .into_iter()
            .filter_map(|id| self.tasks.remove(&id).map(|task| (id, task.description)))
            .collect()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
