//! Authentication and authorization system
//!
//! Identity itself comes from an external provider; this module resolves an
//! identity's role per team and answers permission queries for it.

pub mod rbac;
pub mod session;

pub use rbac::{OwnedResource, Permission, RbacService, RoleScope};
pub use session::AuthContext;
