//! Task service

use super::{Clock, require_actor, require_text, role_in, system_clock};
use crate::auth::rbac::{Permission, RbacService};
use crate::config::TaskConfig;
use crate::core::models::{
    CreateTaskInput, Task, TaskComment, TaskFilters, TaskStats, UpdateTaskInput,
};
use crate::storage::{TaskStore, TeamStore};
use crate::utils::error::{Result, TaskflowError};
use crate::utils::logging::SecurityLogger;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Task operations scoped to an acting user
#[derive(Clone)]
pub struct TaskService {
    tasks: Arc<dyn TaskStore>,
    teams: Arc<dyn TeamStore>,
    config: TaskConfig,
    clock: Clock,
}

impl std::fmt::Debug for TaskService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TaskService {
    /// Create a new task service
    pub fn new(tasks: Arc<dyn TaskStore>, teams: Arc<dyn TeamStore>, config: TaskConfig) -> Self {
        info!("Task service initialized");
        Self {
            tasks,
            teams,
            config,
            clock: system_clock(),
        }
    }

    /// Replace the clock used for timestamps and overdue checks
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Create a task owned by `actor`
    pub async fn create_task(&self, mut input: CreateTaskInput, actor: &str) -> Result<Task> {
        require_actor(actor)?;
        input.title = require_text("Title", &input.title)?;

        if let Some(team_id) = input.team_id {
            let role = role_in(self.teams.as_ref(), team_id, actor)
                .await?
                .ok_or_else(|| TaskflowError::not_found(format!("Team {}", team_id)))?;

            if !RbacService::has_permission(role, Permission::TASK_CREATE) {
                return Err(self.deny(actor, team_id, Permission::TASK_CREATE));
            }

            if let Some(assignee) = input.assigned_to.as_deref() {
                if !RbacService::has_permission(role, Permission::TASK_ASSIGN) {
                    return Err(self.deny(actor, team_id, Permission::TASK_ASSIGN));
                }
                self.require_team_member(team_id, assignee).await?;
            }
        }

        let mut task = Task::new(input, actor);
        let now = (self.clock)();
        task.metadata.created_at = now;
        task.metadata.updated_at = now;
        if task.completed_at.is_some() {
            task.completed_at = Some(now);
        }

        let task = self.tasks.insert_task(task).await?;
        info!(task_id = %task.id(), created_by = %actor, team_id = ?task.team_id, "Task created");
        Ok(task)
    }

    /// Fetch a task the actor can see
    pub async fn get_task(&self, id: Uuid, actor: &str) -> Result<Task> {
        require_actor(actor)?;
        let task = self.load(id).await?;
        if self.can_read(&task, actor).await? {
            Ok(task)
        } else {
            Err(TaskflowError::not_found(format!("Task {}", id)))
        }
    }

    /// Tasks the actor created or is assigned to, newest first
    pub async fn list_tasks(&self, actor: &str, filters: &TaskFilters) -> Result<Vec<Task>> {
        require_actor(actor)?;

        let mut tasks: Vec<Task> = self
            .tasks
            .tasks_involving(actor)
            .await?
            .into_iter()
            .filter(|task| filters.matches(task))
            .collect();
        sort_newest_first(&mut tasks);

        let limit = self.config.page_size(filters.limit);
        let page: Vec<Task> = tasks
            .into_iter()
            .skip(filters.offset.unwrap_or(0))
            .take(limit)
            .collect();

        debug!(actor, returned = page.len(), limit, "Listed tasks");
        Ok(page)
    }

    /// Team tasks visible to the actor under their team role
    ///
    /// Owners and admins see every team task, members only their own. A
    /// non-member gets an empty list.
    pub async fn list_team_tasks(&self, team_id: Uuid, actor: &str) -> Result<Vec<Task>> {
        require_actor(actor)?;

        let Some(role) = role_in(self.teams.as_ref(), team_id, actor).await? else {
            debug!(actor, team_id = %team_id, "Listing team tasks as non-member");
            return Ok(Vec::new());
        };

        let tasks = self.tasks.tasks_for_team(team_id).await?;
        let mut visible =
            RbacService::filter_by_permission(tasks, role, actor, Permission::TASK_READ);
        sort_newest_first(&mut visible);
        Ok(visible)
    }

    /// Apply a partial update
    pub async fn update_task(&self, input: UpdateTaskInput, actor: &str) -> Result<Task> {
        require_actor(actor)?;
        let mut task = self.load(input.id).await?;

        let allowed = match task.team_id {
            Some(team_id) => {
                let role = role_in(self.teams.as_ref(), team_id, actor).await?;

                if input.reassigns() {
                    let may_assign = role.is_some_and(|role| {
                        RbacService::has_permission(role, Permission::TASK_ASSIGN)
                    });
                    if !may_assign {
                        if !self.can_read(&task, actor).await? {
                            return Err(TaskflowError::not_found(format!("Task {}", task.id())));
                        }
                        return Err(self.deny(actor, team_id, Permission::TASK_ASSIGN));
                    }
                    if let Some(Some(assignee)) = input.assigned_to.as_ref() {
                        self.require_team_member(team_id, assignee).await?;
                    }
                }

                task.involves(actor)
                    || role.is_some_and(|role| {
                        RbacService::can_perform_action(
                            role,
                            Permission::TASK_UPDATE,
                            Some(task.created_by.as_str()),
                            Some(actor),
                        )
                    })
            }
            None => task.involves(actor),
        };

        if !allowed {
            return Err(self.refuse(&task, actor, Permission::TASK_UPDATE).await);
        }

        let mut input = input;
        if let Some(title) = input.title.take() {
            input.title = Some(require_text("Title", &title)?);
        }

        task.apply_update(input, (self.clock)());
        let task = self.tasks.update_task(task).await?;
        info!(task_id = %task.id(), actor, status = %task.status, "Task updated");
        Ok(task)
    }

    /// Delete a task
    ///
    /// Personal tasks can only be deleted by their creator; team tasks follow
    /// the team role of the actor.
    pub async fn delete_task(&self, id: Uuid, actor: &str) -> Result<()> {
        require_actor(actor)?;
        let task = self.load(id).await?;

        let allowed = match task.team_id {
            Some(team_id) => role_in(self.teams.as_ref(), team_id, actor)
                .await?
                .is_some_and(|role| {
                    RbacService::can_perform_action(
                        role,
                        Permission::TASK_DELETE,
                        Some(task.created_by.as_str()),
                        Some(actor),
                    )
                }),
            None => task.created_by == actor,
        };

        if !allowed {
            return Err(self.refuse(&task, actor, Permission::TASK_DELETE).await);
        }

        self.tasks.delete_task(id).await?;
        info!(task_id = %id, actor, "Task deleted");
        Ok(())
    }

    /// Copy a visible task into a fresh todo owned by the actor
    pub async fn duplicate_task(&self, id: Uuid, actor: &str) -> Result<Task> {
        let source = self.get_task(id, actor).await?;
        let copy = self
            .create_task(source.duplicate_input(&self.config.duplicate_suffix), actor)
            .await?;
        debug!(source = %id, copy = %copy.id(), "Task duplicated");
        Ok(copy)
    }

    /// Counters over the actor's tasks, optionally within one team
    pub async fn task_stats(&self, actor: &str, team_id: Option<Uuid>) -> Result<TaskStats> {
        require_actor(actor)?;
        let tasks = self.tasks.tasks_involving(actor).await?;
        let scoped = tasks
            .iter()
            .filter(|task| team_id.is_none() || task.team_id == team_id);
        Ok(TaskStats::collect(scoped, (self.clock)()))
    }

    /// Comment on a visible task
    pub async fn add_comment(
        &self,
        task_id: Uuid,
        actor: &str,
        content: &str,
    ) -> Result<TaskComment> {
        let task = self.get_task(task_id, actor).await?;
        let content = require_text("Comment", content)?;

        let mut comment = TaskComment::new(task.id(), actor, content);
        let now = (self.clock)();
        comment.metadata.created_at = now;
        comment.metadata.updated_at = now;

        let comment = self.tasks.insert_comment(comment).await?;
        debug!(task_id = %task_id, actor, "Comment added");
        Ok(comment)
    }

    /// Comments on a visible task, oldest first
    pub async fn list_comments(&self, task_id: Uuid, actor: &str) -> Result<Vec<TaskComment>> {
        let task = self.get_task(task_id, actor).await?;
        self.tasks.comments_for_task(task.id()).await
    }

    async fn load(&self, id: Uuid) -> Result<Task> {
        self.tasks
            .get_task(id)
            .await?
            .ok_or_else(|| TaskflowError::not_found(format!("Task {}", id)))
    }

    async fn can_read(&self, task: &Task, actor: &str) -> Result<bool> {
        if task.involves(actor) {
            return Ok(true);
        }
        let Some(team_id) = task.team_id else {
            return Ok(false);
        };
        Ok(role_in(self.teams.as_ref(), team_id, actor)
            .await?
            .is_some_and(|role| {
                RbacService::can_perform_action(
                    role,
                    Permission::TASK_READ,
                    Some(task.created_by.as_str()),
                    Some(actor),
                )
            }))
    }

    async fn require_team_member(&self, team_id: Uuid, user_id: &str) -> Result<()> {
        if role_in(self.teams.as_ref(), team_id, user_id).await?.is_none() {
            return Err(TaskflowError::validation(format!(
                "Assignee {} is not a member of team {}",
                user_id, team_id
            )));
        }
        Ok(())
    }

    /// Denial for a task: hidden tasks stay NotFound
    async fn refuse(&self, task: &Task, actor: &str, action: Permission) -> TaskflowError {
        match self.can_read(task, actor).await {
            Ok(true) => {
                SecurityLogger::log_authz_event(
                    actor,
                    &format!("task:{}", task.id()),
                    action.as_str(),
                    false,
                    None,
                );
                TaskflowError::forbidden(format!("Cannot {} task {}", action, task.id()))
            }
            Ok(false) => TaskflowError::not_found(format!("Task {}", task.id())),
            Err(e) => e,
        }
    }

    fn deny(&self, actor: &str, team_id: Uuid, action: Permission) -> TaskflowError {
        SecurityLogger::log_authz_event(
            actor,
            &format!("team:{}", team_id),
            action.as_str(),
            false,
            Some("role lacks permission"),
        );
        TaskflowError::forbidden(format!("Missing permission {}", action))
    }
}

fn sort_newest_first(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| b.metadata.created_at.cmp(&a.metadata.created_at));
}
