//! Custom test assertions
//!
//! Provides domain-specific assertions for service results.

use std::fmt::Debug;
use taskflow::{Result, TaskflowError};

/// Assertions on the error side of a service result
pub trait ErrorAssertions {
    /// Assert the call failed with NotFound
    fn assert_not_found(self);

    /// Assert the call failed with Forbidden
    fn assert_forbidden(self);

    /// Assert the call failed with Validation
    fn assert_invalid(self);

    /// Assert the call failed with Conflict
    fn assert_conflict(self);
}

impl<T: Debug> ErrorAssertions for Result<T> {
    fn assert_not_found(self) {
        match self {
            Err(TaskflowError::NotFound(_)) => {}
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    fn assert_forbidden(self) {
        match self {
            Err(TaskflowError::Forbidden(_)) => {}
            other => panic!("Expected Forbidden, got {:?}", other),
        }
    }

    fn assert_invalid(self) {
        match self {
            Err(TaskflowError::Validation(_)) => {}
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    fn assert_conflict(self) {
        match self {
            Err(TaskflowError::Conflict(_)) => {}
            other => panic!("Expected Conflict, got {:?}", other),
        }
    }
}
