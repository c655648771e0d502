//! Logging utilities
//!
//! Subscriber initialisation driven by [`LoggingConfig`] and structured
//! security events emitted through `tracing`.

mod security_logger;

pub use security_logger::SecurityLogger;

use crate::config::LoggingConfig;
use crate::utils::error::{Result, TaskflowError};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| TaskflowError::Config(format!("Invalid log filter: {}", e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| TaskflowError::Config(format!("Failed to install logger: {}", e)))
}
