//! The in-progress task held by the task form.
//!
//! A [`DraftTask`] keeps every field in its editable form (text for the
//! estimate and deadline) and only becomes a [`TaskSubmission`] through
//! [`DraftTask::normalize`].

use super::task::{Category, Priority, Task, TaskSubmission};
use crate::utils::datetime;
use thiserror::Error;

/// Reasons a draft cannot be turned into a submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Task content cannot be empty")]
    EmptyContent,

    #[error("Estimated time must be a positive number of minutes, got '{0}'")]
    InvalidEstimatedTime(String),

    #[error("Deadline '{0}' is not a valid date-time (expected YYYY-MM-DDTHH:MM)")]
    InvalidDeadline(String),
}

/// Insertion-ordered set of tags. Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag after trimming it.
    ///
    /// Returns `false` when the trimmed tag is empty or already present.
    pub fn insert(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Remove a tag by exact match. Returns whether anything was removed.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn pop(&mut self) -> Option<String> {
        self.tags.pop()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.tags.clone()
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for tag in iter {
            set.insert(tag.as_ref());
        }
        set
    }
}

/// Uncommitted task data owned by an open task form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DraftTask {
    pub content: String,
    pub description: String,
    pub priority: Priority,
    pub category: Category,
    /// Raw estimate text, coerced to minutes on submit
    pub estimated_time: String,
    /// Raw local date-time text, parsed on submit
    pub deadline: String,
    pub tags: TagSet,
}

impl DraftTask {
    /// Draft pre-filled from a committed task, for edit mode.
    pub fn from_task(task: &Task) -> Self {
        Self {
            content: task.content.clone(),
            description: task.description.clone().unwrap_or_default(),
            priority: task.priority,
            category: task.category,
            estimated_time: task.estimated_time.map(|m| m.to_string()).unwrap_or_default(),
            deadline: task.deadline.map(datetime::format_deadline_input).unwrap_or_default(),
            tags: task.tags.iter().collect(),
        }
    }

    /// Draft whose only non-default field is the content.
    pub fn with_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
            ..Default::default()
        }
    }

    /// Whether the content alone allows submitting.
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }

    /// Validate the draft and coerce it into a submission.
    ///
    /// Blank estimate and deadline are omitted. A blank description becomes
    /// `None`. Content is trimmed.
    pub fn normalize(&self) -> Result<TaskSubmission, DraftError> {
        let content = self.content.trim();
        if content.is_empty() {
            return Err(DraftError::EmptyContent);
        }

        let estimated_time = match self.estimated_time.trim() {
            "" => None,
            raw => match raw.parse::<u32>() {
                Ok(minutes) if minutes > 0 => Some(minutes),
                _ => return Err(DraftError::InvalidEstimatedTime(raw.to_string())),
            },
        };

        let deadline = match self.deadline.trim() {
            "" => None,
            raw => Some(datetime::parse_deadline(raw).map_err(|_| DraftError::InvalidDeadline(raw.to_string()))?),
        };

        let description = match self.description.trim() {
            "" => None,
            _ => Some(self.description.clone()),
        };

        Ok(TaskSubmission {
            content: content.to_string(),
            description,
            priority: self.priority,
            category: self.category,
            estimated_time,
            deadline,
            tags: self.tags.to_vec(),
        })
    }
}
