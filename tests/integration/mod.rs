//! Integration tests for taskflow
//!
//! These tests verify the interaction between multiple components
//! and test real system behavior without mocking.

pub mod config_tests;
pub mod profile_service_tests;
pub mod rbac_tests;
pub mod task_service_tests;
