//! Task models

use super::{Metadata, double_option};
use crate::auth::rbac::OwnedResource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Task priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskPriority::Low => write!(f, "low"),
            TaskPriority::Medium => write!(f, "medium"),
            TaskPriority::High => write!(f, "high"),
            TaskPriority::Urgent => write!(f, "urgent"),
        }
    }
}

impl FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(TaskPriority::Low),
            "medium" => Ok(TaskPriority::Medium),
            "high" => Ok(TaskPriority::High),
            "urgent" => Ok(TaskPriority::Urgent),
            _ => Err(format!("Invalid task priority: {}", s)),
        }
    }
}

/// Task status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
    Cancelled,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Todo => write!(f, "todo"),
            TaskStatus::InProgress => write!(f, "in_progress"),
            TaskStatus::Completed => write!(f, "completed"),
            TaskStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TaskStatus::Todo),
            "in_progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            "cancelled" => Ok(TaskStatus::Cancelled),
            _ => Err(format!("Invalid task status: {}", s)),
        }
    }
}

/// Task record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Task metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    pub title: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub due_date: Option<DateTime<Utc>>,
    /// Estimated duration in minutes
    pub estimated_duration: Option<u32>,
    /// Actual duration in minutes
    pub actual_duration: Option<u32>,
    pub tags: Vec<String>,
    /// Free-form text the task was created from
    pub natural_language_input: Option<String>,
    pub created_by: String,
    pub assigned_to: Option<String>,
    pub team_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub parent_task_id: Option<Uuid>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Build a task from creation input, applying defaults
    pub fn new(input: CreateTaskInput, created_by: impl Into<String>) -> Self {
        let metadata = Metadata::new();
        let status = input.status.unwrap_or_default();
        let completed_at = (status == TaskStatus::Completed).then_some(metadata.created_at);

        Self {
            metadata,
            title: input.title.trim().to_string(),
            description: input.description,
            priority: input.priority.unwrap_or_default(),
            status,
            due_date: input.due_date,
            estimated_duration: input.estimated_duration,
            actual_duration: None,
            tags: input.tags.unwrap_or_default(),
            natural_language_input: input.natural_language_input,
            created_by: created_by.into(),
            assigned_to: input.assigned_to,
            team_id: input.team_id,
            category_id: input.category_id,
            parent_task_id: input.parent_task_id,
            completed_at,
        }
    }

    /// Get task ID
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }

    /// Whether the user created or is assigned to the task
    pub fn involves(&self, user_id: &str) -> bool {
        self.created_by == user_id || self.assigned_to.as_deref() == Some(user_id)
    }

    /// Past its due date and not completed
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        matches!(self.due_date, Some(due) if due < now) && self.status != TaskStatus::Completed
    }

    /// Set status, stamping or clearing `completed_at`
    pub fn set_status(&mut self, status: TaskStatus, now: DateTime<Utc>) {
        self.status = status;
        self.completed_at = match status {
            TaskStatus::Completed => Some(now),
            TaskStatus::Todo | TaskStatus::InProgress | TaskStatus::Cancelled => None,
        };
    }

    /// Apply a partial update; fields left as `None` are untouched
    pub fn apply_update(&mut self, update: UpdateTaskInput, now: DateTime<Utc>) {
        if let Some(title) = update.title {
            self.title = title.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(status) = update.status {
            self.set_status(status, now);
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
        if let Some(estimated_duration) = update.estimated_duration {
            self.estimated_duration = estimated_duration;
        }
        if let Some(actual_duration) = update.actual_duration {
            self.actual_duration = actual_duration;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(assigned_to) = update.assigned_to {
            self.assigned_to = assigned_to;
        }
        if let Some(category_id) = update.category_id {
            self.category_id = category_id;
        }
        self.metadata.updated_at = now;
    }

    /// Creation input for a copy of this task
    pub fn duplicate_input(&self, suffix: &str) -> CreateTaskInput {
        CreateTaskInput {
            title: format!("{}{}", self.title, suffix),
            description: self.description.clone(),
            priority: Some(self.priority),
            status: Some(TaskStatus::Todo),
            estimated_duration: self.estimated_duration,
            tags: Some(self.tags.clone()),
            team_id: self.team_id,
            category_id: self.category_id,
            ..Default::default()
        }
    }

    fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}

/// Input for creating a task
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateTaskInput {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub estimated_duration: Option<u32>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub natural_language_input: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub team_id: Option<Uuid>,
    #[serde(default)]
    pub category_id: Option<Uuid>,
    #[serde(default)]
    pub parent_task_id: Option<Uuid>,
}

impl CreateTaskInput {
    /// Create input with only a title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Partial task update
///
/// Nullable fields use `Option<Option<T>>`: outer `None` leaves the field
/// alone, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateTaskInput {
    pub id: Uuid,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "double_option")]
    pub estimated_duration: Option<Option<u32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub actual_duration: Option<Option<u32>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub assigned_to: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub category_id: Option<Option<Uuid>>,
}

impl UpdateTaskInput {
    /// Empty update for a task
    pub fn for_task(id: Uuid) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Whether the update changes the assignee
    pub fn reassigns(&self) -> bool {
        self.assigned_to.is_some()
    }
}

/// Query filters for listing tasks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskFilters {
    pub status: Vec<TaskStatus>,
    pub priority: Vec<TaskPriority>,
    pub team_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub assigned_to: Option<String>,
    pub created_by: Option<String>,
    /// Case-insensitive match against title or description
    pub search: Option<String>,
    /// Inclusive upper bound on due date
    pub due_before: Option<DateTime<Utc>>,
    /// Inclusive lower bound on due date
    pub due_after: Option<DateTime<Utc>>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl TaskFilters {
    /// Whether a task passes every set filter (pagination excluded)
    pub fn matches(&self, task: &Task) -> bool {
        if !self.status.is_empty() && !self.status.contains(&task.status) {
            return false;
        }
        if !self.priority.is_empty() && !self.priority.contains(&task.priority) {
            return false;
        }
        if self.team_id.is_some() && task.team_id != self.team_id {
            return false;
        }
        if self.category_id.is_some() && task.category_id != self.category_id {
            return false;
        }
        if let Some(assignee) = &self.assigned_to {
            if task.assigned_to.as_ref() != Some(assignee) {
                return false;
            }
        }
        if let Some(creator) = &self.created_by {
            if &task.created_by != creator {
                return false;
            }
        }
        if let Some(before) = self.due_before {
            if !matches!(task.due_date, Some(due) if due <= before) {
                return false;
            }
        }
        if let Some(after) = self.due_after {
            if !matches!(task.due_date, Some(due) if due >= after) {
                return false;
            }
        }
        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => task.matches_search(needle),
            _ => true,
        }
    }
}

/// Per-user productivity counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub todo: usize,
    pub overdue: usize,
}

impl TaskStats {
    /// Count tasks as of `now`
    pub fn collect<'a>(tasks: impl IntoIterator<Item = &'a Task>, now: DateTime<Utc>) -> Self {
        tasks.into_iter().fold(Self::default(), |mut stats, task| {
            stats.total += 1;
            match task.status {
                TaskStatus::Completed => stats.completed += 1,
                TaskStatus::InProgress => stats.in_progress += 1,
                TaskStatus::Todo => stats.todo += 1,
                TaskStatus::Cancelled => {}
            }
            if task.is_overdue(now) {
                stats.overdue += 1;
            }
            stats
        })
    }
}

impl OwnedResource for Task {
    fn owner_id(&self) -> Option<&str> {
        Some(self.created_by.as_str())
    }
}
