//! Task category models

use super::Metadata;
use crate::auth::rbac::OwnedResource;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default colour for new categories
pub const DEFAULT_CATEGORY_COLOR: &str = "#6b7280";

/// Task category, personal or team-scoped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(flatten)]
    pub metadata: Metadata,
    pub name: String,
    /// Hex colour used for display
    pub color: String,
    pub user_id: String,
    pub team_id: Option<Uuid>,
}

/// Input for creating a category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCategoryInput {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub team_id: Option<Uuid>,
}

impl Category {
    /// Create a new category owned by `user_id`
    pub fn new(input: CreateCategoryInput, user_id: impl Into<String>) -> Self {
        Self {
            metadata: Metadata::new(),
            name: input.name.trim().to_string(),
            color: input
                .color
                .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
            user_id: user_id.into(),
            team_id: input.team_id,
        }
    }

    /// Get category ID
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }
}

impl OwnedResource for Category {
    fn owner_id(&self) -> Option<&str> {
        Some(self.user_id.as_str())
    }
}
