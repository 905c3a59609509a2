//! Submission results and error reporting shared by the quick-add bar and the
//! task form.
//!
//! Components never swallow failures: every submission ends in an explicit
//! `Result`, and failures are routed to an [`ErrorHandler`] supplied by the
//! owner of the component.

use crate::backend::BackendError;
use crate::model::{DraftError, Task};
use std::sync::Arc;
use thiserror::Error;

/// Why a submission did not produce a committed task.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The sink rejected the payload
    #[error("Submission failed: {0}")]
    Backend(#[from] BackendError),

    /// The draft could not be normalized; nothing was sent
    #[error("Invalid task: {0}")]
    Validation(#[from] DraftError),

    /// A submission from the same component is still in flight
    #[error("A submission is already in progress")]
    Busy,

    /// The task form is not open
    #[error("The task form is closed")]
    Closed,

    /// The background operation panicked or was aborted
    #[error("Submission did not complete: {0}")]
    Join(String),
}

pub type SubmitResult = Result<Task, SubmitError>;

/// Caller-supplied reaction to a failed submission.
pub type ErrorHandler = Arc<dyn Fn(&SubmitError) + Send + Sync>;

/// Handler that reports failures on the `log` channel under `source`.
pub fn log_error_handler(source: &'static str) -> ErrorHandler {
    Arc::new(move |err: &SubmitError| {
        log::error!("{}: {}", source, err);
    })
}

/// Where a submission came from; results are routed back to the same place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOrigin {
    QuickAdd,
    /// The task form, tagged with the session it was opened in
    TaskForm { session: u64 },
}
