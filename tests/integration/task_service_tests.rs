//! Task service integration tests
//!
//! Runs the task service against the in-memory store with a seeded team.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::epoch;
    use crate::common::{ErrorAssertions, TaskFactory, TestEnv};
    use chrono::Duration;
    use taskflow::{CreateTaskInput, TaskFilters, TaskPriority, TaskStatus, UpdateTaskInput};

    // ==================== Creation and visibility ====================

    #[tokio::test]
    async fn test_team_task_lifecycle() {
        let env = TestEnv::with_team().await;

        let task = env
            .tasks
            .create_task(TaskFactory::for_team(env.team_id, "Quarterly plan"), env.member())
            .await
            .unwrap();
        assert_eq!(task.team_id, Some(env.team_id));
        assert_eq!(task.created_by, env.member());

        let mut update = UpdateTaskInput::for_task(task.id());
        update.status = Some(TaskStatus::Completed);
        let done = env.tasks.update_task(update, env.member()).await.unwrap();
        assert!(done.completed_at.is_some());

        env.tasks
            .delete_task(task.id(), env.member())
            .await
            .assert_forbidden();
        env.tasks.delete_task(task.id(), env.owner()).await.unwrap();
        env.tasks
            .get_task(task.id(), env.member())
            .await
            .assert_not_found();
        assert_eq!(env.store.task_count(), 0);
    }

    #[tokio::test]
    async fn test_peer_tasks_stay_hidden() {
        let env = TestEnv::with_team().await;
        let task = env
            .tasks
            .create_task(TaskFactory::for_team(env.team_id, "Private draft"), env.member())
            .await
            .unwrap();

        env.tasks
            .get_task(task.id(), env.other_member())
            .await
            .assert_not_found();
        env.tasks
            .delete_task(task.id(), env.other_member())
            .await
            .assert_not_found();
        assert!(env.tasks.get_task(task.id(), env.admin()).await.is_ok());
    }

    #[tokio::test]
    async fn test_admin_reassigns_team_task() {
        let env = TestEnv::with_team().await;
        let task = env
            .tasks
            .create_task(TaskFactory::for_team(env.team_id, "Review"), env.member())
            .await
            .unwrap();

        let mut update = UpdateTaskInput::for_task(task.id());
        update.assigned_to = Some(Some(env.other_member().to_string()));
        let reassigned = env.tasks.update_task(update, env.admin()).await.unwrap();
        assert_eq!(reassigned.assigned_to.as_deref(), Some(env.other_member()));

        // The new assignee can now see and update it.
        let mut update = UpdateTaskInput::for_task(task.id());
        update.status = Some(TaskStatus::InProgress);
        env.tasks
            .update_task(update, env.other_member())
            .await
            .unwrap();

        let mut update = UpdateTaskInput::for_task(task.id());
        update.assigned_to = Some(None);
        env.tasks
            .update_task(update, env.other_member())
            .await
            .assert_forbidden();
    }

    #[tokio::test]
    async fn test_blank_title_update_rejected() {
        let env = TestEnv::with_team().await;
        let task = env
            .tasks
            .create_task(TaskFactory::personal("Keep"), env.member())
            .await
            .unwrap();

        let mut update = UpdateTaskInput::for_task(task.id());
        update.title = Some("   ".to_string());
        env.tasks
            .update_task(update, env.member())
            .await
            .assert_invalid();
    }

    // ==================== Listing ====================

    #[tokio::test]
    async fn test_list_filters() {
        let env = TestEnv::with_team().await;
        let actor = env.member();

        env.tasks
            .create_task(TaskFactory::overdue("Pay invoice"), actor)
            .await
            .unwrap();
        env.tasks
            .create_task(
                CreateTaskInput {
                    description: Some("invoice follow-up".to_string()),
                    ..TaskFactory::for_team(env.team_id, "Call vendor")
                },
                actor,
            )
            .await
            .unwrap();
        env.tasks
            .create_task(TaskFactory::personal("Groceries"), actor)
            .await
            .unwrap();

        let search = TaskFilters {
            search: Some("INVOICE".to_string()),
            ..Default::default()
        };
        assert_eq!(env.tasks.list_tasks(actor, &search).await.unwrap().len(), 2);

        let team_only = TaskFilters {
            team_id: Some(env.team_id),
            ..Default::default()
        };
        let listed = env.tasks.list_tasks(actor, &team_only).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Call vendor");

        let high = TaskFilters {
            priority: vec![TaskPriority::High],
            ..Default::default()
        };
        assert_eq!(env.tasks.list_tasks(actor, &high).await.unwrap().len(), 1);

        let due_window = TaskFilters {
            due_after: Some(epoch() - Duration::days(2)),
            due_before: Some(epoch()),
            ..Default::default()
        };
        let due = env.tasks.list_tasks(actor, &due_window).await.unwrap();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].title, "Pay invoice");
    }

    #[tokio::test]
    async fn test_limit_bounds_page() {
        let env = TestEnv::with_team().await;
        for i in 0..5 {
            env.tasks
                .create_task(TaskFactory::personal(&format!("task {}", i)), env.member())
                .await
                .unwrap();
        }

        let filters = TaskFilters {
            limit: Some(2),
            ..Default::default()
        };
        let page = env.tasks.list_tasks(env.member(), &filters).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].title, "task 4");
    }

    #[tokio::test]
    async fn test_team_listing_depends_on_role() {
        let env = TestEnv::with_team().await;
        for actor in [env.owner(), env.admin(), env.member(), env.other_member()] {
            env.tasks
                .create_task(TaskFactory::for_team(env.team_id, actor), actor)
                .await
                .unwrap();
        }

        let for_admin = env.tasks.list_team_tasks(env.team_id, env.admin()).await.unwrap();
        assert_eq!(for_admin.len(), 4);
        assert_eq!(for_admin[0].created_by, env.other_member());

        let for_member = env.tasks.list_team_tasks(env.team_id, env.member()).await.unwrap();
        assert_eq!(for_member.len(), 1);
        assert!(for_member.iter().all(|t| t.created_by == env.member()));
    }

    // ==================== Stats, duplicates, comments ====================

    #[tokio::test]
    async fn test_stats_and_duplicate() {
        let env = TestEnv::with_team().await;
        let actor = env.member();

        let late = env
            .tasks
            .create_task(TaskFactory::overdue("Renew domain"), actor)
            .await
            .unwrap();
        env.tasks.duplicate_task(late.id(), actor).await.unwrap();

        let stats = env.tasks.task_stats(actor, None).await.unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.todo, 2);
        // The copy carries no due date, so only the original is overdue.
        assert_eq!(stats.overdue, 1);

        let mut update = UpdateTaskInput::for_task(late.id());
        update.status = Some(TaskStatus::Completed);
        env.tasks.update_task(update, actor).await.unwrap();

        let stats = env.tasks.task_stats(actor, None).await.unwrap();
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.overdue, 0);
    }

    #[tokio::test]
    async fn test_comment_thread() {
        let env = TestEnv::with_team().await;
        let task = env
            .tasks
            .create_task(TaskFactory::for_team(env.team_id, "Incident"), env.member())
            .await
            .unwrap();

        env.tasks
            .add_comment(task.id(), env.member(), "Investigating")
            .await
            .unwrap();
        env.tasks
            .add_comment(task.id(), env.admin(), "Escalated")
            .await
            .unwrap();

        let thread = env.tasks.list_comments(task.id(), env.owner()).await.unwrap();
        assert_eq!(thread.len(), 2);
        assert_eq!(thread[0].user_id, env.member());
        assert_eq!(thread[1].content, "Escalated");

        env.tasks
            .list_comments(task.id(), env.other_member())
            .await
            .assert_not_found();
    }
}
