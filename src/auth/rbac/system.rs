//! RBAC service entry points

use crate::core::models::TeamRole;
use serde::Serialize;

use super::permissions::OwnedResource;
use super::types::{Decision, Permission};

/// Stateless RBAC decision engine
///
/// All state lives in the compiled-in role table, so every method is an
/// associated function and the type is freely shareable across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct RbacService;

/// One row of the role × permission matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixRow {
    pub permission: Permission,
    pub description: &'static str,
    pub owner: bool,
    pub admin: bool,
    pub member: bool,
}

impl RbacService {
    /// Bind a role for repeated checks
    pub fn for_role(role: TeamRole) -> RoleScope {
        RoleScope { role }
    }

    /// Role × permission matrix in table order
    pub fn matrix() -> Vec<MatrixRow> {
        Permission::ALL
            .iter()
            .map(|permission| MatrixRow {
                permission: *permission,
                description: permission.description(),
                owner: Self::has_permission(TeamRole::Owner, *permission),
                admin: Self::has_permission(TeamRole::Admin, *permission),
                member: Self::has_permission(TeamRole::Member, *permission),
            })
            .collect()
    }

    /// String-keyed permission check; any unknown name denies
    pub fn has_permission_named(role_name: &str, permission_name: &str) -> bool {
        match (
            Self::parse_role(role_name),
            Self::parse_permission(permission_name),
        ) {
            (Some(role), Some(permission)) => Self::has_permission(role, permission),
            _ => false,
        }
    }

    /// String-keyed any-of check; unknown role or any unknown permission name denies
    pub fn has_any_permission_named(role_name: &str, permission_names: &[&str]) -> bool {
        match (
            Self::parse_role(role_name),
            Self::parse_permissions(permission_names),
        ) {
            (Some(role), Some(permissions)) => Self::has_any_permission(role, &permissions),
            _ => false,
        }
    }

    /// String-keyed all-of check; unknown role or any unknown permission name denies
    pub fn has_all_permissions_named(role_name: &str, permission_names: &[&str]) -> bool {
        match (
            Self::parse_role(role_name),
            Self::parse_permissions(permission_names),
        ) {
            (Some(role), Some(permissions)) => Self::has_all_permissions(role, &permissions),
            _ => false,
        }
    }

    /// String-keyed resource-scoped decision
    pub fn explain_action_named(
        role_name: &str,
        action_name: &str,
        resource_owner_id: Option<&str>,
        user_id: Option<&str>,
    ) -> Decision {
        match (
            Self::parse_role(role_name),
            Self::parse_permission(action_name),
        ) {
            (Some(role), Some(action)) => {
                Self::explain_action(role, action, resource_owner_id, user_id)
            }
            _ => Decision::MissingPermission,
        }
    }

    /// String-keyed resource-scoped check
    pub fn can_perform_action_named(
        role_name: &str,
        action_name: &str,
        resource_owner_id: Option<&str>,
        user_id: Option<&str>,
    ) -> bool {
        Self::explain_action_named(role_name, action_name, resource_owner_id, user_id).is_allowed()
    }

    /// String-keyed collection filter; unknown names yield an empty result
    pub fn filter_by_permission_named<I>(
        items: I,
        role_name: &str,
        user_id: &str,
        permission_name: &str,
    ) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: OwnedResource,
    {
        match (
            Self::parse_role(role_name),
            Self::parse_permission(permission_name),
        ) {
            (Some(role), Some(permission)) => {
                Self::filter_by_permission(items, role, user_id, permission)
            }
            _ => Vec::new(),
        }
    }

    fn parse_permissions(names: &[&str]) -> Option<Vec<Permission>> {
        names
            .iter()
            .map(|name| Self::parse_permission(name))
            .collect()
    }
}

/// RBAC queries with the role fixed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleScope {
    role: TeamRole,
}

impl RoleScope {
    /// The bound role
    pub fn role(&self) -> TeamRole {
        self.role
    }

    pub fn permissions(&self) -> &'static [Permission] {
        RbacService::get_permissions(self.role)
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        RbacService::has_permission(self.role, permission)
    }

    pub fn has_any_permission(&self, permissions: &[Permission]) -> bool {
        RbacService::has_any_permission(self.role, permissions)
    }

    pub fn has_all_permissions(&self, permissions: &[Permission]) -> bool {
        RbacService::has_all_permissions(self.role, permissions)
    }

    pub fn can_perform_action(
        &self,
        action: Permission,
        resource_owner_id: Option<&str>,
        user_id: Option<&str>,
    ) -> bool {
        RbacService::can_perform_action(self.role, action, resource_owner_id, user_id)
    }

    pub fn filter_by_permission<I>(
        &self,
        items: I,
        user_id: &str,
        permission: Permission,
    ) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: OwnedResource,
    {
        RbacService::filter_by_permission(items, self.role, user_id, permission)
    }
}
