//! Configuration section validators

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;

impl Validate for TaskConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating task configuration");

        if self.default_page_size == 0 {
            return Err("default_page_size must be greater than 0".to_string());
        }

        if self.max_page_size < self.default_page_size {
            return Err(format!(
                "max_page_size ({}) must be at least default_page_size ({})",
                self.max_page_size, self.default_page_size
            ));
        }

        if self.duplicate_suffix.trim().is_empty() {
            return Err("duplicate_suffix cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating logging configuration");

        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }

        EnvFilter::try_new(&self.level)
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))?;

        Ok(())
    }
}

impl Validate for RbacConfig {
    fn validate(&self) -> Result<(), String> {
        // Any closed-set role is acceptable as the personal role.
        Ok(())
    }
}
