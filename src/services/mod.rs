//! Services module
//!
//! Business logic over the resource stores. Every operation takes the acting
//! identity explicitly and resolves that identity's team role before asking
//! the RBAC engine.

pub mod profiles;
pub mod tasks;
pub mod teams;


pub use profiles::ProfileService;
pub use tasks::TaskService;
pub use teams::TeamService;

use crate::core::models::TeamRole;
use crate::storage::TeamStore;
use crate::utils::error::{Result, TaskflowError};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

/// Source of "now" for timestamps and overdue checks
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Wall clock
pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}

/// Reject unauthenticated calls
pub(crate) fn require_actor(actor: &str) -> Result<()> {
    if actor.trim().is_empty() {
        return Err(TaskflowError::forbidden("Authentication required"));
    }
    Ok(())
}

/// Reject blank names and titles, returning the trimmed value
pub(crate) fn require_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TaskflowError::validation(format!("{} must not be empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Role of a user in a team, `None` for non-members
pub(crate) async fn role_in(
    teams: &dyn TeamStore,
    team_id: Uuid,
    user_id: &str,
) -> Result<Option<TeamRole>> {
    Ok(teams.get_member(team_id, user_id).await?.map(|m| m.role))
}
