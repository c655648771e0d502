//! In-memory store backed by `DashMap`

use super::{ProfileStore, TaskStore, TeamStore};
use crate::core::models::{Category, Profile, Task, TaskComment, Team, TeamMember, TeamRole};
use crate::utils::error::{Result, TaskflowError};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parking_lot::Mutex;
use tracing::debug;
use uuid::Uuid;

/// Lock-sharded in-memory implementation of the store traits
#[derive(Debug, Default)]
pub struct MemoryStore {
    tasks: DashMap<Uuid, Task>,
    comments: DashMap<Uuid, TaskComment>,
    teams: DashMap<Uuid, Team>,
    /// Keyed by (team, user)
    members: DashMap<(Uuid, String), TeamMember>,
    categories: DashMap<Uuid, Category>,
    profiles: DashMap<String, Profile>,
    /// Serializes membership removals so the last-owner check holds
    removals: Mutex<()>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Number of stored teams
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }
}

#[async_trait::async_trait]
impl TaskStore for MemoryStore {
    async fn insert_task(&self, task: Task) -> Result<Task> {
        let id = task.id();
        match self.tasks.entry(id) {
            Entry::Occupied(_) => {
                return Err(TaskflowError::conflict(format!("Task {} already exists", id)));
            }
            Entry::Vacant(slot) => {
                slot.insert(task.clone());
            }
        }
        debug!(task_id = %id, "Task stored");
        Ok(task)
    }

    async fn get_task(&self, id: Uuid) -> Result<Option<Task>> {
        Ok(self.tasks.get(&id).map(|entry| entry.value().clone()))
    }

    async fn update_task(&self, task: Task) -> Result<Task> {
        match self.tasks.get_mut(&task.id()) {
            Some(mut entry) => {
                *entry = task.clone();
                Ok(task)
            }
            None => Err(TaskflowError::not_found(format!("Task {}", task.id()))),
        }
    }

    async fn delete_task(&self, id: Uuid) -> Result<bool> {
        let existed = self.tasks.remove(&id).is_some();
        if existed {
            self.comments.retain(|_, comment| comment.task_id != id);
        }
        Ok(existed)
    }

    async fn tasks_involving(&self, user_id: &str) -> Result<Vec<Task>> {
        Ok(self
            .tasks
            .iter()
            .filter(|entry| entry.involves(user_id))
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn tasks_for_team(&self, team_id: Uuid) -> Result<Vec<Task>> {
        Ok(self
            .tasks
            .iter()
            .filter(|entry| entry.team_id == Some(team_id))
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn insert_comment(&self, comment: TaskComment) -> Result<TaskComment> {
        if !self.tasks.contains_key(&comment.task_id) {
            return Err(TaskflowError::not_found(format!("Task {}", comment.task_id)));
        }
        self.comments.insert(comment.metadata.id, comment.clone());
        Ok(comment)
    }

    async fn comments_for_task(&self, task_id: Uuid) -> Result<Vec<TaskComment>> {
        let mut comments: Vec<TaskComment> = self
            .comments
            .iter()
            .filter(|entry| entry.task_id == task_id)
            .map(|entry| entry.value().clone())
            .collect();
        comments.sort_by_key(|c| c.metadata.created_at);
        Ok(comments)
    }
}

#[async_trait::async_trait]
impl TeamStore for MemoryStore {
    async fn insert_team(&self, team: Team) -> Result<Team> {
        let id = team.id();
        match self.teams.entry(id) {
            Entry::Occupied(_) => Err(TaskflowError::conflict(format!("Team {} already exists", id))),
            Entry::Vacant(slot) => {
                slot.insert(team.clone());
                Ok(team)
            }
        }
    }

    async fn get_team(&self, id: Uuid) -> Result<Option<Team>> {
        Ok(self.teams.get(&id).map(|entry| entry.value().clone()))
    }

    async fn update_team(&self, team: Team) -> Result<Team> {
        match self.teams.get_mut(&team.id()) {
            Some(mut entry) => {
                *entry = team.clone();
                Ok(team)
            }
            None => Err(TaskflowError::not_found(format!("Team {}", team.id()))),
        }
    }

    async fn delete_team(&self, id: Uuid) -> Result<bool> {
        let existed = self.teams.remove(&id).is_some();
        if existed {
            self.members.retain(|(team_id, _), _| *team_id != id);
        }
        Ok(existed)
    }

    async fn insert_member(&self, member: TeamMember) -> Result<TeamMember> {
        let key = (member.team_id, member.user_id.clone());
        match self.members.entry(key) {
            Entry::Occupied(_) => Err(TaskflowError::conflict(format!(
                "User {} is already a member of team {}",
                member.user_id, member.team_id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(member.clone());
                Ok(member)
            }
        }
    }

    async fn get_member(&self, team_id: Uuid, user_id: &str) -> Result<Option<TeamMember>> {
        Ok(self
            .members
            .get(&(team_id, user_id.to_string()))
            .map(|entry| entry.value().clone()))
    }

    async fn remove_member(&self, team_id: Uuid, user_id: &str) -> Result<bool> {
        let _guard = self.removals.lock();
        let key = (team_id, user_id.to_string());

        let is_owner = self
            .members
            .get(&key)
            .is_some_and(|entry| entry.role == TeamRole::Owner);
        if is_owner {
            let owners = self
                .members
                .iter()
                .filter(|entry| entry.team_id == team_id && entry.role == TeamRole::Owner)
                .count();
            if owners <= 1 {
                return Err(TaskflowError::conflict("Cannot remove the last owner of a team"));
            }
        }

        Ok(self.members.remove(&key).is_some())
    }

    async fn members_of(&self, team_id: Uuid) -> Result<Vec<TeamMember>> {
        let mut members: Vec<TeamMember> = self
            .members
            .iter()
            .filter(|entry| entry.team_id == team_id)
            .map(|entry| entry.value().clone())
            .collect();
        members.sort_by_key(|m| m.joined_at);
        Ok(members)
    }

    async fn memberships_of(&self, user_id: &str) -> Result<Vec<TeamMember>> {
        Ok(self
            .members
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn insert_category(&self, category: Category) -> Result<Category> {
        self.categories.insert(category.id(), category.clone());
        Ok(category)
    }

    async fn categories_of(&self, user_id: &str) -> Result<Vec<Category>> {
        Ok(self
            .categories
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect())
    }
}

#[async_trait::async_trait]
impl ProfileStore for MemoryStore {
    async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>> {
        Ok(self.profiles.get(user_id).map(|entry| entry.value().clone()))
    }

    async fn insert_profile(&self, profile: Profile) -> Result<Profile> {
        match self.profiles.entry(profile.id.clone()) {
            Entry::Occupied(_) => Err(TaskflowError::conflict(format!(
                "Profile {} already exists",
                profile.id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(profile.clone());
                Ok(profile)
            }
        }
    }

    async fn update_profile(&self, profile: Profile) -> Result<Profile> {
        match self.profiles.get_mut(&profile.id) {
            Some(mut entry) => {
                *entry = profile.clone();
                Ok(profile)
            }
            None => Err(TaskflowError::not_found(format!("Profile {}", profile.id))),
        }
    }
}
