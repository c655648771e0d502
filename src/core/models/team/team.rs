//! Team core model

use crate::core::models::Metadata;
use crate::auth::rbac::OwnedResource;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Team metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Team name
    pub name: String,
    /// Team description
    pub description: Option<String>,
    /// Creator identity
    pub created_by: String,
}

impl Team {
    /// Create a new team
    pub fn new(name: String, description: Option<String>, created_by: impl Into<String>) -> Self {
        Self {
            metadata: Metadata::new(),
            name,
            description,
            created_by: created_by.into(),
        }
    }

    /// Get team ID
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }

    /// Rename and/or redescribe the team
    pub fn apply_update(&mut self, name: Option<String>, description: Option<Option<String>>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        self.metadata.touch();
    }
}

impl OwnedResource for Team {
    fn owner_id(&self) -> Option<&str> {
        Some(self.created_by.as_str())
    }
}
