//! RBAC configuration
//!
//! The role to permission table is compiled in; configuration only covers
//! how roles are resolved for callers.

use crate::core::models::TeamRole;
use serde::{Deserialize, Serialize};

/// RBAC configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Role applied to personal (team-less) tasks
    #[serde(default = "default_personal_role")]
    pub personal_role: TeamRole,
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            personal_role: default_personal_role(),
        }
    }
}

impl RbacConfig {
    /// Merge RBAC configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.personal_role != default_personal_role() {
            self.personal_role = other.personal_role;
        }
        self
    }
}

fn default_personal_role() -> TeamRole {
    TeamRole::Member
}
