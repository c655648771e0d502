//! Core data models for taskflow
//!
//! This module defines the records exchanged with the resource store:
//! tasks, teams, memberships, categories, comments and user profiles.

pub mod category;
pub mod comment;
pub mod profile;
pub mod task;
pub mod team;


// Re-export commonly used types
pub use category::{Category, CreateCategoryInput};
pub use comment::TaskComment;
pub use profile::{NotificationSettings, Profile, UpdateProfileInput};
pub use task::{
    CreateTaskInput, Task, TaskFilters, TaskPriority, TaskStats, TaskStatus, UpdateTaskInput,
};
pub use team::{Team, TeamMember, TeamRole};

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Common metadata for all models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Unique identifier
    pub id: Uuid,
    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Last update timestamp
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Default for Metadata {
    fn default() -> Self {
        let now = chrono::Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Metadata {
    /// Create new metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the timestamp
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`)
/// in partial update payloads.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
