//! # taskflow
//!
//! Core of a multi-tenant task manager: role-based access control with
//! resource ownership, plus task and team services built on it.
//!
//! ## Features
//!
//! - **Compiled-in role table**: owner, admin and member mapped to task, team
//!   and admin permissions
//! - **Ownership-aware checks**: members act on their own resources, owners
//!   and admins on anyone's
//! - **Collection filtering**: bulk visibility that agrees with per-item checks
//! - **Capability guards**: render content or an access-denied placeholder
//! - **Async services**: tasks, teams, memberships, categories, comments and
//!   profiles over pluggable stores
//!
//! ## Quick Start
//!
//! ```rust
//! use taskflow::{Permission, RbacService, TeamRole};
//!
//! assert!(RbacService::has_permission(TeamRole::Admin, Permission::TASK_DELETE));
//! assert!(!RbacService::can_perform_action(
//!     TeamRole::Member,
//!     Permission::TASK_UPDATE,
//!     Some("alice"),
//!     Some("bob"),
//! ));
//! ```
//!
//! ## Services
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use taskflow::{Config, CreateTaskInput, MemoryStore, TaskService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/taskflow.yaml").await?;
//!     let store = Arc::new(MemoryStore::new());
//!     let tasks = TaskService::new(store.clone(), store, config.tasks);
//!
//!     let task = tasks
//!         .create_task(CreateTaskInput::titled("Write report"), "alice")
//!         .await?;
//!     println!("created {}", task.id());
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod core;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::rbac::{
    AccessDenied, Decision, Guard, Guarded, OwnedResource, Permission, RbacService, RoleScope,
    WithRole, with_rbac,
};
pub use auth::session::AuthContext;
pub use config::Config;
pub use core::models::{
    Category, CreateCategoryInput, CreateTaskInput, NotificationSettings, Profile, Task,
    TaskComment, TaskFilters, TaskPriority, TaskStats, TaskStatus, Team, TeamMember, TeamRole,
    UpdateProfileInput, UpdateTaskInput,
};
pub use services::{ProfileService, TaskService, TeamService};
pub use storage::{MemoryStore, ProfileStore, TaskStore, TeamStore};
pub use utils::error::{Result, TaskflowError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Build information
#[derive(Debug, Clone, serde::Serialize)]
pub struct BuildInfo {
    /// Version
    pub version: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            git_hash: env!("GIT_HASH"),
        }
    }
}

/// Get build information
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
