//! Test fixtures and data factories
//!
//! All fixtures run against the real in-memory store, not mocks.

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use taskflow::config::{RbacConfig, TaskConfig};
use taskflow::services::Clock;
use taskflow::{CreateTaskInput, MemoryStore, TaskPriority, TaskService, TeamRole, TeamService};
use uuid::Uuid;

/// Instant every test clock starts from
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap()
}

/// Clock advancing one second per reading, so creation order is observable
pub fn ticking_clock() -> Clock {
    let ticks = Arc::new(AtomicI64::new(0));
    Arc::new(move || epoch() + Duration::seconds(ticks.fetch_add(1, Ordering::SeqCst)))
}

/// Services sharing one store, plus a seeded team
pub struct TestEnv {
    pub store: Arc<MemoryStore>,
    pub tasks: TaskService,
    pub teams: TeamService,
    pub team_id: Uuid,
}

impl TestEnv {
    /// Services without any team
    pub fn empty() -> (Arc<MemoryStore>, TaskService, TeamService) {
        let store = Arc::new(MemoryStore::new());
        let tasks = TaskService::new(store.clone(), store.clone(), TaskConfig::default())
            .with_clock(ticking_clock());
        let teams = TeamService::new(store.clone(), RbacConfig::default());
        (store, tasks, teams)
    }

    /// Team "Acme" with `owner`, `admin`, `alice` and `bob` (members)
    pub async fn with_team() -> Self {
        let (store, tasks, teams) = Self::empty();

        let team = teams
            .create_team("Acme", Some("test team".to_string()), "owner")
            .await
            .unwrap();
        let team_id = team.id();

        teams
            .add_member(team_id, "owner", "admin", TeamRole::Admin)
            .await
            .unwrap();
        for member in ["alice", "bob"] {
            teams
                .add_member(team_id, "owner", member, TeamRole::Member)
                .await
                .unwrap();
        }

        Self {
            store,
            tasks,
            teams,
            team_id,
        }
    }

    pub fn owner(&self) -> &'static str {
        "owner"
    }

    pub fn admin(&self) -> &'static str {
        "admin"
    }

    pub fn member(&self) -> &'static str {
        "alice"
    }

    pub fn other_member(&self) -> &'static str {
        "bob"
    }
}

/// Factory for task creation input
pub struct TaskFactory;

impl TaskFactory {
    /// Personal task
    pub fn personal(title: &str) -> CreateTaskInput {
        CreateTaskInput::titled(title)
    }

    /// Task inside a team
    pub fn for_team(team_id: Uuid, title: &str) -> CreateTaskInput {
        CreateTaskInput {
            team_id: Some(team_id),
            ..CreateTaskInput::titled(title)
        }
    }

    /// Personal task due a day before the test epoch
    pub fn overdue(title: &str) -> CreateTaskInput {
        CreateTaskInput {
            due_date: Some(epoch() - Duration::days(1)),
            priority: Some(TaskPriority::High),
            ..CreateTaskInput::titled(title)
        }
    }
}
