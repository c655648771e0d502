//! Permission checking methods

use crate::core::models::TeamRole;

use super::system::RbacService;
use super::types::{Decision, Permission};

/// A resource carrying the identity that created it
pub trait OwnedResource {
    /// Creator identity, if recorded
    fn owner_id(&self) -> Option<&str>;
}

impl<T: OwnedResource + ?Sized> OwnedResource for &T {
    fn owner_id(&self) -> Option<&str> {
        (**self).owner_id()
    }
}

/// Empty identities count as absent
fn identity(id: Option<&str>) -> Option<&str> {
    id.filter(|id| !id.is_empty())
}

impl RbacService {
    /// Check if a role holds a specific permission
    pub fn has_permission(role: TeamRole, permission: Permission) -> bool {
        Self::get_permissions(role).contains(&permission)
    }

    /// Check if a role holds at least one of the permissions; false when empty
    pub fn has_any_permission(role: TeamRole, permissions: &[Permission]) -> bool {
        permissions
            .iter()
            .any(|permission| Self::has_permission(role, *permission))
    }

    /// Check if a role holds every permission; true when empty
    pub fn has_all_permissions(role: TeamRole, permissions: &[Permission]) -> bool {
        permissions
            .iter()
            .all(|permission| Self::has_permission(role, *permission))
    }

    /// Resource-scoped decision with the rule that produced it
    ///
    /// The role check always runs first. Ownership only matters when both the
    /// resource owner and the acting user are known.
    pub fn explain_action(
        role: TeamRole,
        action: Permission,
        resource_owner_id: Option<&str>,
        user_id: Option<&str>,
    ) -> Decision {
        if !Self::has_permission(role, action) {
            return Decision::MissingPermission;
        }

        match (identity(resource_owner_id), identity(user_id)) {
            (Some(owner), Some(actor)) if owner == actor => Decision::OwnResource,
            (Some(_), Some(_)) if role.is_elevated() => Decision::ElevatedOverride,
            (Some(_), Some(_)) => Decision::NotResourceOwner,
            _ => Decision::RoleGranted,
        }
    }

    /// Check if a role can perform an action, optionally on a specific resource
    pub fn can_perform_action(
        role: TeamRole,
        action: Permission,
        resource_owner_id: Option<&str>,
        user_id: Option<&str>,
    ) -> bool {
        Self::explain_action(role, action, resource_owner_id, user_id).is_allowed()
    }

    /// Filter items down to what the role may see under `permission`
    ///
    /// Owners and admins get the input back unchanged, members only the items
    /// they own (in original order), and a role lacking the permission gets
    /// nothing.
    pub fn filter_by_permission<I>(
        items: I,
        role: TeamRole,
        user_id: &str,
        permission: Permission,
    ) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: OwnedResource,
    {
        if !Self::has_permission(role, permission) {
            return Vec::new();
        }

        if role.is_elevated() {
            return items.into_iter().collect();
        }

        items
            .into_iter()
            .filter(|item| item.owner_id() == Some(user_id))
            .collect()
    }
}
