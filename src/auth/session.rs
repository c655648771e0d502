//! Authenticated identity and team-scoped role resolution

use crate::core::models::{TeamMember, TeamRole};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::rbac::{RbacService, RoleScope};

/// Identity resolved by the external identity provider, plus its memberships
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthContext {
    /// Authenticated user identity
    pub user_id: String,
    /// Team memberships of the user
    pub memberships: Vec<TeamMember>,
    /// Role used outside any team
    pub personal_role: TeamRole,
}

impl AuthContext {
    /// Create a context with no team memberships
    pub fn new(user_id: impl Into<String>, personal_role: TeamRole) -> Self {
        Self {
            user_id: user_id.into(),
            memberships: Vec::new(),
            personal_role,
        }
    }

    /// Attach memberships, ignoring rows that belong to another user
    pub fn with_memberships(mut self, memberships: impl IntoIterator<Item = TeamMember>) -> Self {
        let user_id = self.user_id.clone();
        self.memberships
            .extend(memberships.into_iter().filter(|m| m.user_id == user_id));
        self
    }

    /// Membership in a team, if any
    pub fn membership(&self, team_id: Uuid) -> Option<&TeamMember> {
        self.memberships.iter().find(|m| m.team_id == team_id)
    }

    pub fn is_member_of(&self, team_id: Uuid) -> bool {
        self.membership(team_id).is_some()
    }

    /// Effective role for a scope
    ///
    /// Without a team the personal role applies; a team the user does not
    /// belong to also falls back to it.
    pub fn current_role(&self, team_id: Option<Uuid>) -> TeamRole {
        team_id
            .and_then(|team_id| self.membership(team_id))
            .map_or(self.personal_role, |m| m.role)
    }

    /// RBAC checks bound to the effective role for a scope
    pub fn rbac(&self, team_id: Option<Uuid>) -> RoleScope {
        RbacService::for_role(self.current_role(team_id))
    }

    /// Teams where the user holds the given role
    pub fn teams_with_role(&self, role: TeamRole) -> impl Iterator<Item = Uuid> + '_ {
        self.memberships
            .iter()
            .filter(move |m| m.role == role)
            .map(|m| m.team_id)
    }
}
