//! RBAC type definitions

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Task-scoped permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaskPermission {
    Create,
    Read,
    Update,
    Delete,
    Assign,
}

/// Team-scoped permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TeamPermission {
    Create,
    Read,
    Update,
    Delete,
    Invite,
    RemoveMember,
}

/// Administrative permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AdminPermission {
    ManageUsers,
    ViewAnalytics,
    ConfigureSystem,
}

/// Permission category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionCategory {
    Task,
    Team,
    Admin,
}

/// Atomic capability, serialized as `resource:action`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Permission {
    Task(TaskPermission),
    Team(TeamPermission),
    Admin(AdminPermission),
}

impl Permission {
    pub const TASK_CREATE: Permission = Permission::Task(TaskPermission::Create);
    pub const TASK_READ: Permission = Permission::Task(TaskPermission::Read);
    pub const TASK_UPDATE: Permission = Permission::Task(TaskPermission::Update);
    pub const TASK_DELETE: Permission = Permission::Task(TaskPermission::Delete);
    pub const TASK_ASSIGN: Permission = Permission::Task(TaskPermission::Assign);

    pub const TEAM_CREATE: Permission = Permission::Team(TeamPermission::Create);
    pub const TEAM_READ: Permission = Permission::Team(TeamPermission::Read);
    pub const TEAM_UPDATE: Permission = Permission::Team(TeamPermission::Update);
    pub const TEAM_DELETE: Permission = Permission::Team(TeamPermission::Delete);
    pub const TEAM_INVITE: Permission = Permission::Team(TeamPermission::Invite);
    pub const TEAM_REMOVE_MEMBER: Permission = Permission::Team(TeamPermission::RemoveMember);

    pub const USER_MANAGE: Permission = Permission::Admin(AdminPermission::ManageUsers);
    pub const ANALYTICS_VIEW: Permission = Permission::Admin(AdminPermission::ViewAnalytics);
    pub const SYSTEM_CONFIG: Permission = Permission::Admin(AdminPermission::ConfigureSystem);

    /// Every permission, grouped by category
    pub const ALL: [Permission; 14] = [
        Permission::TASK_CREATE,
        Permission::TASK_READ,
        Permission::TASK_UPDATE,
        Permission::TASK_DELETE,
        Permission::TASK_ASSIGN,
        Permission::TEAM_CREATE,
        Permission::TEAM_READ,
        Permission::TEAM_UPDATE,
        Permission::TEAM_DELETE,
        Permission::TEAM_INVITE,
        Permission::TEAM_REMOVE_MEMBER,
        Permission::USER_MANAGE,
        Permission::ANALYTICS_VIEW,
        Permission::SYSTEM_CONFIG,
    ];

    /// Wire name, e.g. `task:create`
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Task(p) => match p {
                TaskPermission::Create => "task:create",
                TaskPermission::Read => "task:read",
                TaskPermission::Update => "task:update",
                TaskPermission::Delete => "task:delete",
                TaskPermission::Assign => "task:assign",
            },
            Permission::Team(p) => match p {
                TeamPermission::Create => "team:create",
                TeamPermission::Read => "team:read",
                TeamPermission::Update => "team:update",
                TeamPermission::Delete => "team:delete",
                TeamPermission::Invite => "team:invite",
                TeamPermission::RemoveMember => "team:remove_member",
            },
            Permission::Admin(p) => match p {
                AdminPermission::ManageUsers => "user:manage",
                AdminPermission::ViewAnalytics => "analytics:view",
                AdminPermission::ConfigureSystem => "system:config",
            },
        }
    }

    /// Category this permission belongs to
    pub fn category(&self) -> PermissionCategory {
        match self {
            Permission::Task(_) => PermissionCategory::Task,
            Permission::Team(_) => PermissionCategory::Team,
            Permission::Admin(_) => PermissionCategory::Admin,
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Permission::Task(p) => match p {
                TaskPermission::Create => "Create tasks",
                TaskPermission::Read => "Read tasks",
                TaskPermission::Update => "Update tasks",
                TaskPermission::Delete => "Delete tasks",
                TaskPermission::Assign => "Assign tasks to users",
            },
            Permission::Team(p) => match p {
                TeamPermission::Create => "Create teams",
                TeamPermission::Read => "Read team information",
                TeamPermission::Update => "Update team details",
                TeamPermission::Delete => "Delete teams",
                TeamPermission::Invite => "Invite users to a team",
                TeamPermission::RemoveMember => "Remove members from a team",
            },
            Permission::Admin(p) => match p {
                AdminPermission::ManageUsers => "Manage users",
                AdminPermission::ViewAnalytics => "View analytics and usage data",
                AdminPermission::ConfigureSystem => "Configure the system",
            },
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("Unknown permission: {}", s))
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Outcome of a resource-scoped authorization check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// The role does not hold the permission
    MissingPermission,
    /// No resource instance involved; the role check alone decided
    RoleGranted,
    /// The actor owns the resource
    OwnResource,
    /// Owner/admin acting on another user's resource
    ElevatedOverride,
    /// A member acting on another user's resource
    NotResourceOwner,
}

impl Decision {
    /// Whether the decision authorizes the action
    pub fn is_allowed(&self) -> bool {
        matches!(
            self,
            Decision::RoleGranted | Decision::OwnResource | Decision::ElevatedOverride
        )
    }

    /// Short explanation
    pub fn reason(&self) -> &'static str {
        match self {
            Decision::MissingPermission => "role lacks the required permission",
            Decision::RoleGranted => "granted by role",
            Decision::OwnResource => "actor owns the resource",
            Decision::ElevatedOverride => "elevated role may act on other users' resources",
            Decision::NotResourceOwner => "members may only act on their own resources",
        }
    }
}
