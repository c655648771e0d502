//! Team member models

use crate::core::models::Metadata;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Team member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    /// Member metadata
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Team ID
    pub team_id: Uuid,
    /// User ID
    pub user_id: String,
    /// Member role
    pub role: TeamRole,
    /// Joined at
    pub joined_at: chrono::DateTime<chrono::Utc>,
}

/// Team role
///
/// Roles are attached to a (user, team) pair; the same user can hold
/// different roles in different teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamRole {
    /// Team owner
    Owner,
    /// Team admin
    Admin,
    /// Team member
    Member,
}

impl TeamRole {
    /// Every role, highest first
    pub const ALL: [TeamRole; 3] = [TeamRole::Owner, TeamRole::Admin, TeamRole::Member];

    /// Role name as stored by the identity provider
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamRole::Owner => "owner",
            TeamRole::Admin => "admin",
            TeamRole::Member => "member",
        }
    }

    /// Owners and admins may act on resources created by other users
    pub fn is_elevated(&self) -> bool {
        matches!(self, TeamRole::Owner | TeamRole::Admin)
    }
}

impl fmt::Display for TeamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(TeamRole::Owner),
            "admin" => Ok(TeamRole::Admin),
            "member" => Ok(TeamRole::Member),
            _ => Err(format!("Invalid team role: {}", s)),
        }
    }
}

impl TeamMember {
    /// Create a new team member
    pub fn new(team_id: Uuid, user_id: impl Into<String>, role: TeamRole) -> Self {
        Self {
            metadata: Metadata::new(),
            team_id,
            user_id: user_id.into(),
            role,
            joined_at: chrono::Utc::now(),
        }
    }

    /// Get membership ID
    pub fn id(&self) -> Uuid {
        self.metadata.id
    }
}
