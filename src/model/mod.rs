//! Task data model: committed tasks, submissions and drafts.

pub mod draft;
pub mod task;

pub use draft::{DraftError, DraftTask, TagSet};
pub use task::{Category, Priority, Task, TaskPayload, TaskSubmission};
