//! Configuration management for taskflow
//!
//! This module handles loading, validation, and management of configuration.
//! The RBAC role table is not configurable; only how roles are resolved is.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::core::models::TeamRole;
use crate::utils::error::{Result, TaskflowError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Prefix shared by all environment overrides
pub const ENV_PREFIX: &str = "TASKFLOW_";

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Task service configuration
    #[serde(default)]
    pub tasks: TaskConfig,
    /// RBAC configuration
    #[serde(default)]
    pub rbac: RbacConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load and validate configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::read_file(path).await?;
        config.validate()?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Read configuration from file without validating it
    ///
    /// Used when further overrides are layered on top before validation.
    pub async fn read_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| TaskflowError::Config(format!("Failed to read config file: {}", e)))?;

        Self::parse_yaml(&content)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config = Self::parse_yaml(content)?;
        config.validate()?;
        Ok(config)
    }

    fn parse_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| TaskflowError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration from environment variables (and a `.env` file if present)
    pub fn from_env() -> Result<Self> {
        let config = Self::default().with_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay the process environment (and a `.env` file if present) without validating
    pub fn with_env_overrides(self) -> Result<Self> {
        info!("Applying configuration from environment variables");

        // A missing .env file is not an error.
        let _ = dotenvy::dotenv();

        self.apply_env(|key| std::env::var(key).ok())
    }

    /// Build and validate configuration from defaults plus `TASKFLOW_*` overrides
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self::default().apply_env(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Overwrite every field whose `TASKFLOW_*` variable is set
    ///
    /// A variable set to the default value still replaces the current value.
    /// The result is not validated, so callers validate once all layers are
    /// applied.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(level) = var("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(json) = var("LOG_JSON") {
            self.logging.json = parse_env("LOG_JSON", &json)?;
        }
        if let Some(role) = var("PERSONAL_ROLE") {
            self.rbac.personal_role = parse_env::<TeamRole>("PERSONAL_ROLE", &role)?;
        }
        if let Some(size) = var("DEFAULT_PAGE_SIZE") {
            self.tasks.default_page_size = parse_env("DEFAULT_PAGE_SIZE", &size)?;
        }
        if let Some(size) = var("MAX_PAGE_SIZE") {
            self.tasks.max_page_size = parse_env("MAX_PAGE_SIZE", &size)?;
        }
        if let Some(suffix) = var("DUPLICATE_SUFFIX") {
            self.tasks.duplicate_suffix = suffix;
        }

        Ok(self)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.tasks
            .validate()
            .map_err(|e| TaskflowError::Config(format!("Task config error: {}", e)))?;

        self.rbac
            .validate()
            .map_err(|e| TaskflowError::Config(format!("RBAC config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| TaskflowError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.tasks = self.tasks.merge(other.tasks);
        self.rbac = self.rbac.merge(other.rbac);
        self.logging = self.logging.merge(other.logging);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TaskflowError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| TaskflowError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn parse_env<T>(name: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e| {
        TaskflowError::Config(format!("Invalid value for {}{}: {}", ENV_PREFIX, name, e))
    })
}
