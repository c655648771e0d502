//! Error handling for taskflow
//!
//! This module defines all error types used by the services, storage and config layers.
//! The RBAC engine itself never returns errors: a denial is a plain `false`.

mod helpers;
mod types;

pub use types::{Result, TaskflowError};
