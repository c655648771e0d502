//! Configuration data models
//!
//! This module defines all configuration structures used by taskflow.

pub mod logging;
pub mod rbac;
pub mod tasks;

// Re-export all configuration types
pub use logging::*;
pub use rbac::*;
pub use tasks::*;

/// Default page size for task listings
pub fn default_page_size() -> usize {
    50
}

/// Default upper bound for task listing pages
pub fn default_max_page_size() -> usize {
    500
}

/// Default suffix appended to duplicated task titles
pub fn default_duplicate_suffix() -> String {
    " (Copy)".to_string()
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}
