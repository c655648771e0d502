//! Security-aware logging utilities

use crate::utils::truncate_string;
use tracing::{info, warn};

/// Security-aware logging utilities
pub struct SecurityLogger;

impl SecurityLogger {
    /// Log authorization events
    pub fn log_authz_event(
        user_id: &str,
        resource: &str,
        action: &str,
        granted: bool,
        reason: Option<&str>,
    ) {
        // Identities come from outside; keep them bounded in the log.
        let user_id = truncate_string(user_id, 128);

        if granted {
            info!(
                target: "security",
                user_id = %user_id,
                resource,
                action,
                granted,
                reason = reason.unwrap_or(""),
                "Authorization granted"
            );
        } else {
            warn!(
                target: "security",
                user_id = %user_id,
                resource,
                action,
                granted,
                reason = reason.unwrap_or(""),
                "Authorization denied"
            );
        }
    }
}
