//! Task service configuration

use super::{default_duplicate_suffix, default_max_page_size, default_page_size};
use serde::{Deserialize, Serialize};

/// Task service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskConfig {
    /// Page size used when a listing does not set a limit
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    /// Largest accepted listing limit
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
    /// Suffix appended to duplicated task titles
    #[serde(default = "default_duplicate_suffix")]
    pub duplicate_suffix: String,
}

impl Default for TaskConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            duplicate_suffix: default_duplicate_suffix(),
        }
    }
}

impl TaskConfig {
    /// Merge task configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.default_page_size != default_page_size() {
            self.default_page_size = other.default_page_size;
        }
        if other.max_page_size != default_max_page_size() {
            self.max_page_size = other.max_page_size;
        }
        if other.duplicate_suffix != default_duplicate_suffix() {
            self.duplicate_suffix = other.duplicate_suffix;
        }
        self
    }

    /// Effective page size for a requested limit
    pub fn page_size(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_page_size)
            .min(self.max_page_size)
    }
}
