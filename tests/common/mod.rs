//! Common test utilities for taskflow
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{TaskFactory, TestEnv};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let env = TestEnv::with_team().await;
//!     let input = TaskFactory::for_team(env.team_id, "Draft");
//!     let task = env.tasks.create_task(input, env.member()).await.unwrap();
//!     // ...
//! }
//! ```

pub mod assertions;
pub mod fixtures;

// Re-export commonly used items
pub use assertions::ErrorAssertions;
pub use fixtures::{TaskFactory, TestEnv, epoch, ticking_clock};
