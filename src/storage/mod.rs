//! Storage layer for taskflow
//!
//! Services talk to persistence through the [`TaskStore`], [`TeamStore`] and
//! [`ProfileStore`] traits. Access decisions never happen here; stores return whatever they
//! hold and the service layer filters.

pub mod memory;


pub use memory::MemoryStore;

use crate::core::models::{Category, Profile, Task, TaskComment, Team, TeamMember};
use crate::utils::error::Result;
use uuid::Uuid;

/// Task and comment persistence
#[async_trait::async_trait]
pub trait TaskStore: Send + Sync {
    /// Insert a new task
    async fn insert_task(&self, task: Task) -> Result<Task>;

    /// Get a task by ID
    async fn get_task(&self, id: Uuid) -> Result<Option<Task>>;

    /// Replace a stored task
    async fn update_task(&self, task: Task) -> Result<Task>;

    /// Delete a task and its comments; returns whether it existed
    async fn delete_task(&self, id: Uuid) -> Result<bool>;

    /// Tasks created by or assigned to a user
    async fn tasks_involving(&self, user_id: &str) -> Result<Vec<Task>>;

    /// Every task belonging to a team
    async fn tasks_for_team(&self, team_id: Uuid) -> Result<Vec<Task>>;

    /// Insert a comment
    async fn insert_comment(&self, comment: TaskComment) -> Result<TaskComment>;

    /// Comments on a task, oldest first
    async fn comments_for_task(&self, task_id: Uuid) -> Result<Vec<TaskComment>>;
}

/// Team, membership and category persistence
#[async_trait::async_trait]
pub trait TeamStore: Send + Sync {
    /// Insert a new team
    async fn insert_team(&self, team: Team) -> Result<Team>;

    /// Get a team by ID
    async fn get_team(&self, id: Uuid) -> Result<Option<Team>>;

    /// Replace a stored team
    async fn update_team(&self, team: Team) -> Result<Team>;

    /// Delete a team and its memberships; returns whether it existed
    async fn delete_team(&self, id: Uuid) -> Result<bool>;

    /// Insert a membership row
    async fn insert_member(&self, member: TeamMember) -> Result<TeamMember>;

    /// Membership of a user in a team
    async fn get_member(&self, team_id: Uuid, user_id: &str) -> Result<Option<TeamMember>>;

    /// Remove a membership; returns whether it existed
    ///
    /// Removing the team's only owner fails with `Conflict`. The owner count
    /// and the removal must be atomic with respect to other removals in the
    /// same team.
    async fn remove_member(&self, team_id: Uuid, user_id: &str) -> Result<bool>;

    /// Members of a team
    async fn members_of(&self, team_id: Uuid) -> Result<Vec<TeamMember>>;

    /// Memberships held by a user
    async fn memberships_of(&self, user_id: &str) -> Result<Vec<TeamMember>>;

    /// Insert a category
    async fn insert_category(&self, category: Category) -> Result<Category>;

    /// Categories created by a user
    async fn categories_of(&self, user_id: &str) -> Result<Vec<Category>>;
}

/// User profile persistence
#[async_trait::async_trait]
pub trait ProfileStore: Send + Sync {
    /// Get a profile by user ID
    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>>;

    /// Insert a new profile; `Conflict` if the user already has one
    async fn insert_profile(&self, profile: Profile) -> Result<Profile>;

    /// Replace a stored profile
    async fn update_profile(&self, profile: Profile) -> Result<Profile>;
}
