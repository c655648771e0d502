//! Utility modules for taskflow
//!
//! - **error**: Error types and helpers
//! - **logging**: Subscriber setup and security audit logging

pub mod error;
pub mod logging;

pub use error::{Result, TaskflowError};
pub use logging::{SecurityLogger, init_logging};

/// Truncate string to at most `max_chars` characters, adding an ellipsis
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
