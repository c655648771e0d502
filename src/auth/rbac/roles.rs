//! Role to permission table

use crate::core::models::TeamRole;

use super::system::RbacService;
use super::types::Permission;

const OWNER_PERMISSIONS: &[Permission] = &[
    // Task permissions
    Permission::TASK_CREATE,
    Permission::TASK_READ,
    Permission::TASK_UPDATE,
    Permission::TASK_DELETE,
    Permission::TASK_ASSIGN,
    // Team permissions
    Permission::TEAM_CREATE,
    Permission::TEAM_READ,
    Permission::TEAM_UPDATE,
    Permission::TEAM_DELETE,
    Permission::TEAM_INVITE,
    Permission::TEAM_REMOVE_MEMBER,
    // Admin permissions
    Permission::USER_MANAGE,
    Permission::ANALYTICS_VIEW,
    Permission::SYSTEM_CONFIG,
];

const ADMIN_PERMISSIONS: &[Permission] = &[
    // Task permissions
    Permission::TASK_CREATE,
    Permission::TASK_READ,
    Permission::TASK_UPDATE,
    Permission::TASK_DELETE,
    Permission::TASK_ASSIGN,
    // Team permissions, without team creation or deletion
    Permission::TEAM_READ,
    Permission::TEAM_UPDATE,
    Permission::TEAM_INVITE,
    Permission::TEAM_REMOVE_MEMBER,
    // Limited admin permissions
    Permission::ANALYTICS_VIEW,
];

const MEMBER_PERMISSIONS: &[Permission] = &[
    Permission::TASK_CREATE,
    Permission::TASK_READ,
    Permission::TASK_UPDATE,
    Permission::TEAM_READ,
];

impl RbacService {
    /// Get all permissions granted to a role
    pub fn get_permissions(role: TeamRole) -> &'static [Permission] {
        match role {
            TeamRole::Owner => OWNER_PERMISSIONS,
            TeamRole::Admin => ADMIN_PERMISSIONS,
            TeamRole::Member => MEMBER_PERMISSIONS,
        }
    }

    /// Get permissions for a role name; unknown names resolve to an empty set
    pub fn get_permissions_by_name(role_name: &str) -> &'static [Permission] {
        match Self::parse_role(role_name) {
            Some(role) => Self::get_permissions(role),
            None => &[],
        }
    }

    /// Parse a role name coming from the identity provider
    pub fn parse_role(role_name: &str) -> Option<TeamRole> {
        role_name.parse().ok()
    }

    /// Parse a permission name; unknown names yield `None`
    pub fn parse_permission(permission_name: &str) -> Option<Permission> {
        permission_name.parse().ok()
    }
}
