//! Role-Based Access Control (RBAC) system
//!
//! Resolves a team role to its compiled-in permission set and answers
//! authorization queries that combine role permissions with resource
//! ownership. Every function here is pure: no I/O, no shared mutable state,
//! and a denial is expressed as `false` rather than an error.

mod guard;
mod permissions;
mod roles;
mod system;
mod types;

// Re-export public types and structs
pub use guard::{
    ACCESS_DENIED_MESSAGE, ACCESS_DENIED_TITLE, AccessDenied, Guard, Guarded, WithRole, with_rbac,
};
pub use permissions::OwnedResource;
pub use system::{MatrixRow, RbacService, RoleScope};
pub use types::{
    AdminPermission, Decision, Permission, PermissionCategory, TaskPermission, TeamPermission,
};
