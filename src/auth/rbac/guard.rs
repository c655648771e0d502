//! Capability-gated rendering
//!
//! A [`Guard`] wraps a render function and only invokes it when the caller's
//! role holds every required permission. The role travels next to the props
//! in [`WithRole`] and is consumed by the guard.

use crate::core::models::TeamRole;
use serde::Serialize;
use std::fmt;

use super::system::RbacService;
use super::types::Permission;

pub const ACCESS_DENIED_TITLE: &str = "Access Denied";
pub const ACCESS_DENIED_MESSAGE: &str = "You don't have permission to access this resource.";

/// Placeholder produced by a negative guard decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessDenied {
    pub title: &'static str,
    pub message: &'static str,
}

impl Default for AccessDenied {
    fn default() -> Self {
        Self {
            title: ACCESS_DENIED_TITLE,
            message: ACCESS_DENIED_MESSAGE,
        }
    }
}

impl fmt::Display for AccessDenied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

impl std::error::Error for AccessDenied {}

/// Result of a guarded render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guarded<T> {
    Denied(AccessDenied),
    Allowed(T),
}

impl<T> Guarded<T> {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Guarded::Allowed(_))
    }

    pub fn into_result(self) -> Result<T, AccessDenied> {
        match self {
            Guarded::Allowed(value) => Ok(value),
            Guarded::Denied(denied) => Err(denied),
        }
    }
}

/// Props paired with the caller's role
///
/// `role` is `None` when the role name could not be recognised; such callers
/// are always denied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithRole<P> {
    pub role: Option<TeamRole>,
    pub props: P,
}

impl<P> WithRole<P> {
    pub fn new(role: TeamRole, props: P) -> Self {
        Self {
            role: Some(role),
            props,
        }
    }

    /// Build from a role name as supplied by the identity provider
    pub fn named(role_name: &str, props: P) -> Self {
        Self {
            role: RbacService::parse_role(role_name),
            props,
        }
    }
}

/// Render function gated on a fixed permission set
#[derive(Debug, Clone)]
pub struct Guard<F> {
    required: Vec<Permission>,
    render: F,
}

impl<F> Guard<F> {
    pub fn new(required: impl Into<Vec<Permission>>, render: F) -> Self {
        Self {
            required: required.into(),
            render,
        }
    }

    /// Permissions the caller must hold
    pub fn required(&self) -> &[Permission] {
        &self.required
    }

    /// Whether a role passes the guard
    pub fn allows(&self, role: Option<TeamRole>) -> bool {
        role.is_some_and(|role| RbacService::has_all_permissions(role, &self.required))
    }

    /// Render the wrapped unit, or deny
    pub fn render<P, T>(&self, input: WithRole<P>) -> Guarded<T>
    where
        F: Fn(P) -> T,
    {
        let WithRole { role, props } = input;
        if self.allows(role) {
            Guarded::Allowed((self.render)(props))
        } else {
            Guarded::Denied(AccessDenied::default())
        }
    }
}

/// Wrap `render` so it only runs for roles holding all of `required`
pub fn with_rbac<P, T, F>(render: F, required: &[Permission]) -> impl Fn(WithRole<P>) -> Guarded<T>
where
    F: Fn(P) -> T,
{
    let guard = Guard::new(required.to_vec(), render);
    move |input| guard.render(input)
}
