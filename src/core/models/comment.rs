//! Task comment models

use super::Metadata;
use crate::auth::rbac::OwnedResource;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Comment left on a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskComment {
    #[serde(flatten)]
    pub metadata: Metadata,
    pub task_id: Uuid,
    pub user_id: String,
    pub content: String,
}

impl TaskComment {
    pub fn new(task_id: Uuid, user_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            metadata: Metadata::new(),
            task_id,
            user_id: user_id.into(),
            content: content.into(),
        }
    }
}

impl OwnedResource for TaskComment {
    fn owner_id(&self) -> Option<&str> {
        Some(self.user_id.as_str())
    }
}
