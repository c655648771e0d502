//! Team models for taskflow
//!
//! This module defines team-related data structures.

mod member;
mod team;


// Re-export all public types
pub use member::{TeamMember, TeamRole};
pub use team::Team;
