//! Team service

use super::{require_actor, require_text, role_in};
use crate::auth::rbac::{Permission, RbacService};
use crate::auth::session::AuthContext;
use crate::config::RbacConfig;
use crate::core::models::{Category, CreateCategoryInput, Team, TeamMember, TeamRole};
use crate::storage::TeamStore;
use crate::utils::error::{Result, TaskflowError};
use crate::utils::logging::SecurityLogger;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Team, membership and category operations
#[derive(Clone)]
pub struct TeamService {
    teams: Arc<dyn TeamStore>,
    config: RbacConfig,
}

impl std::fmt::Debug for TeamService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeamService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TeamService {
    /// Create a new team service
    pub fn new(teams: Arc<dyn TeamStore>, config: RbacConfig) -> Self {
        info!(personal_role = %config.personal_role, "Team service initialized");
        Self { teams, config }
    }

    /// Create a team; the creator becomes its owner
    pub async fn create_team(
        &self,
        name: &str,
        description: Option<String>,
        actor: &str,
    ) -> Result<Team> {
        require_actor(actor)?;
        let name = require_text("Team name", name)?;

        let team = self
            .teams
            .insert_team(Team::new(name, description, actor))
            .await?;
        self.teams
            .insert_member(TeamMember::new(team.id(), actor, TeamRole::Owner))
            .await?;

        info!(team_id = %team.id(), owner = %actor, "Team created");
        Ok(team)
    }

    /// Fetch a team the actor belongs to
    pub async fn get_team(&self, team_id: Uuid, actor: &str) -> Result<Team> {
        self.actor_role(team_id, actor, Permission::TEAM_READ).await?;
        self.load(team_id).await
    }

    /// Teams the actor belongs to, sorted by name
    pub async fn list_teams(&self, actor: &str) -> Result<Vec<Team>> {
        require_actor(actor)?;

        let mut teams = Vec::new();
        for membership in self.teams.memberships_of(actor).await? {
            if let Some(team) = self.teams.get_team(membership.team_id).await? {
                teams.push(team);
            }
        }
        teams.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(teams)
    }

    /// Members of a team the actor belongs to
    pub async fn list_members(&self, team_id: Uuid, actor: &str) -> Result<Vec<TeamMember>> {
        self.actor_role(team_id, actor, Permission::TEAM_READ).await?;
        self.teams.members_of(team_id).await
    }

    /// Add a user to a team
    ///
    /// Only owners may grant the owner role.
    pub async fn add_member(
        &self,
        team_id: Uuid,
        actor: &str,
        user_id: &str,
        role: TeamRole,
    ) -> Result<TeamMember> {
        let actor_role = self
            .actor_role(team_id, actor, Permission::TEAM_INVITE)
            .await?;
        let user_id = require_text("User ID", user_id)?;

        if role == TeamRole::Owner && actor_role != TeamRole::Owner {
            return Err(self.deny(actor, team_id, "grant owner", "only owners can grant owner"));
        }

        let member = self
            .teams
            .insert_member(TeamMember::new(team_id, user_id, role))
            .await?;
        info!(team_id = %team_id, user_id = %member.user_id, role = %role, "Member added");
        Ok(member)
    }

    /// Remove a user from a team
    ///
    /// Admins cannot remove owners and a team always keeps one owner.
    pub async fn remove_member(&self, team_id: Uuid, actor: &str, user_id: &str) -> Result<()> {
        let actor_role = self
            .actor_role(team_id, actor, Permission::TEAM_REMOVE_MEMBER)
            .await?;

        let target = self
            .teams
            .get_member(team_id, user_id)
            .await?
            .ok_or_else(|| {
                TaskflowError::not_found(format!("Member {} of team {}", user_id, team_id))
            })?;

        if target.role == TeamRole::Owner && actor_role != TeamRole::Owner {
            return Err(self.deny(actor, team_id, "remove owner", "only owners can remove owners"));
        }

        // The store refuses to drop the last owner atomically.
        self.teams.remove_member(team_id, user_id).await?;
        info!(team_id = %team_id, user_id, removed_by = %actor, "Member removed");
        Ok(())
    }

    /// Rename or redescribe a team
    pub async fn update_team(
        &self,
        team_id: Uuid,
        actor: &str,
        name: Option<&str>,
        description: Option<Option<String>>,
    ) -> Result<Team> {
        self.actor_role(team_id, actor, Permission::TEAM_UPDATE)
            .await?;
        let name = name.map(|n| require_text("Team name", n)).transpose()?;

        let mut team = self.load(team_id).await?;
        team.apply_update(name, description);
        let team = self.teams.update_team(team).await?;
        debug!(team_id = %team_id, actor, "Team updated");
        Ok(team)
    }

    /// Delete a team and its memberships
    pub async fn delete_team(&self, team_id: Uuid, actor: &str) -> Result<()> {
        self.actor_role(team_id, actor, Permission::TEAM_DELETE)
            .await?;
        self.teams.delete_team(team_id).await?;
        info!(team_id = %team_id, actor, "Team deleted");
        Ok(())
    }

    /// Create a category, personal or within a team the actor belongs to
    pub async fn create_category(
        &self,
        mut input: CreateCategoryInput,
        actor: &str,
    ) -> Result<Category> {
        require_actor(actor)?;
        input.name = require_text("Category name", &input.name)?;

        if let Some(team_id) = input.team_id {
            self.actor_role(team_id, actor, Permission::TEAM_READ).await?;
        }

        let category = self
            .teams
            .insert_category(Category::new(input, actor))
            .await?;
        debug!(category_id = %category.id(), actor, "Category created");
        Ok(category)
    }

    /// The actor's categories in one scope, sorted by name
    pub async fn list_categories(
        &self,
        actor: &str,
        team_id: Option<Uuid>,
    ) -> Result<Vec<Category>> {
        require_actor(actor)?;
        let mut categories: Vec<Category> = self
            .teams
            .categories_of(actor)
            .await?
            .into_iter()
            .filter(|c| c.team_id == team_id)
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    /// Identity plus stored memberships
    pub async fn auth_context(&self, actor: &str) -> Result<AuthContext> {
        require_actor(actor)?;
        let memberships = self.teams.memberships_of(actor).await?;
        Ok(AuthContext::new(actor, self.config.personal_role).with_memberships(memberships))
    }

    async fn load(&self, team_id: Uuid) -> Result<Team> {
        self.teams
            .get_team(team_id)
            .await?
            .ok_or_else(|| TaskflowError::not_found(format!("Team {}", team_id)))
    }

    /// Actor's role in a team, requiring `permission`
    ///
    /// Non-members get NotFound so team existence is not revealed.
    async fn actor_role(
        &self,
        team_id: Uuid,
        actor: &str,
        permission: Permission,
    ) -> Result<TeamRole> {
        require_actor(actor)?;
        let role = role_in(self.teams.as_ref(), team_id, actor)
            .await?
            .ok_or_else(|| TaskflowError::not_found(format!("Team {}", team_id)))?;

        if !RbacService::has_permission(role, permission) {
            return Err(self.deny(actor, team_id, permission.as_str(), "role lacks permission"));
        }
        Ok(role)
    }

    fn deny(&self, actor: &str, team_id: Uuid, action: &str, reason: &str) -> TaskflowError {
        SecurityLogger::log_authz_event(
            actor,
            &format!("team:{}", team_id),
            action,
            false,
            Some(reason),
        );
        TaskflowError::forbidden(format!("Cannot {} in team {}", action, team_id))
    }
}
