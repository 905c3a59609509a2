//! Committed task records and the enums shared by drafts and tasks.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Task priority, ordered from least to most pressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 4] = [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    /// Next value in selector order, wrapping around.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous value in selector order, wrapping around.
    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            other => Err(format!("unknown priority '{}'", other)),
        }
    }
}

/// What kind of work a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Study,
    Assignment,
    Project,
    Personal,
    Work,
    #[default]
    General,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Study,
        Category::Assignment,
        Category::Project,
        Category::Personal,
        Category::Work,
        Category::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Study => "study",
            Category::Assignment => "assignment",
            Category::Project => "project",
            Category::Personal => "personal",
            Category::Work => "work",
            Category::General => "general",
        }
    }

    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| format!("unknown category '{}'", s.trim()))
    }
}

/// A task as committed by the sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub content: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub category: Category,
    /// Estimated effort in minutes
    pub estimated_time: Option<u32>,
    pub deadline: Option<NaiveDateTime>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Build a committed task from a normalized submission.
    pub fn from_submission(id: Uuid, submission: TaskSubmission) -> Self {
        Self {
            id,
            content: submission.content,
            description: submission.description,
            priority: submission.priority,
            category: submission.category,
            estimated_time: submission.estimated_time,
            deadline: submission.deadline,
            tags: submission.tags,
            created_at: Utc::now(),
        }
    }

    /// A quick-add task only carries its content; everything else is default.
    pub fn from_content(id: Uuid, content: &str) -> Self {
        Self::from_submission(id, TaskSubmission::from_content(content))
    }
}

/// Normalized draft handed to the sink.
///
/// Absent optional fields are left out of the serialized form entirely.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskSubmission {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDateTime>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TaskSubmission {
    pub fn from_content(content: &str) -> Self {
        Self {
            content: content.trim().to_string(),
            ..Default::default()
        }
    }
}

/// Everything that can reach the sink.
///
/// The quick-add bar sends bare content, the task form sends a full
/// submission, tagged with the id of the task being edited in edit mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskPayload {
    Quick { content: String },
    Create { task: TaskSubmission },
    Update { id: Uuid, task: TaskSubmission },
}

impl TaskPayload {
    /// Short human description used in logs and task manager descriptions.
    pub fn describe(&self) -> String {
        match self {
            TaskPayload::Quick { content } => format!("Quick add '{}'", content),
            TaskPayload::Create { task } => format!("Create task '{}'", task.content),
            TaskPayload::Update { id, task } => format!("Update task {} '{}'", id, task.content),
        }
    }
}
